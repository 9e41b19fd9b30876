//! Strip command implementation.

use std::borrow::Cow;
use std::fs;

use anyhow::{Context, Result};

use crate::cli::args::StripArgs;
use crate::cli::link::{parse_kind, resolve_host_kind};
use crate::config::LinkfileConfig;
use crate::debug;
use crate::linker;
use crate::log;
use crate::utils::path::absolute_slash_path;

pub fn run_strip(args: &StripArgs, config: &LinkfileConfig) -> Result<()> {
    let doc_path = absolute_slash_path(&args.doc);
    let host_kind = resolve_host_kind(args.doc_kind.as_deref(), &doc_path, config)?;

    let target_path = absolute_slash_path(&args.target);
    let target_kind = match args.target_kind.as_deref() {
        Some(name) => parse_kind(name)?,
        None => config.classify.kind_for_path(&target_path),
    };

    let doc_text = fs::read_to_string(&args.doc)
        .with_context(|| format!("failed to read {}", args.doc.display()))?;

    // References were inserted in relative form; strip that same form.
    let stripped = match linker::relative_path(&target_path, &doc_path) {
        Some(rel_path) => linker::strip_links(&doc_text, &rel_path, target_kind, host_kind),
        None => {
            debug!("strip"; "no relative path between target and document");
            Cow::Borrowed(doc_text.as_str())
        }
    };

    if args.write {
        if let Cow::Owned(new_text) = stripped {
            fs::write(&args.doc, new_text)
                .with_context(|| format!("failed to write {}", args.doc.display()))?;
            log!("strip"; "updated {}", args.doc.display());
        } else {
            log!("strip"; "no references to remove in {}", args.doc.display());
        }
    } else {
        print!("{stripped}");
    }

    Ok(())
}
