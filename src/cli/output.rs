//! Shared CLI output helpers.

use anyhow::Result;
use serde::Serialize;

use crate::config::LinkfileConfig;

/// Serialize a value as JSON to stdout.
pub(super) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{formatted}");
    Ok(())
}

/// Print rendered tags, one per line or concatenated per config.
pub(super) fn print_tags(tags: &[String], config: &LinkfileConfig) {
    if tags.is_empty() {
        return;
    }
    if config.output.newline {
        for tag in tags {
            println!("{tag}");
        }
    } else {
        println!("{}", tags.concat());
    }
}
