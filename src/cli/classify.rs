//! Classify command implementation.

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::ClassifyArgs;
use crate::cli::output::print_json;
use crate::config::LinkfileConfig;

/// Detected kind of one path for JSON output.
#[derive(Debug, Serialize)]
struct ClassifyResult {
    path: String,
    kind: &'static str,
}

pub fn run_classify(args: &ClassifyArgs, config: &LinkfileConfig) -> Result<()> {
    let results: Vec<ClassifyResult> = args
        .paths
        .iter()
        .map(|path| {
            // Classification only needs the extension; keep the path as
            // typed for display.
            let path = path.to_string_lossy().replace('\\', "/");
            let kind = config.classify.kind_for_path(&path);
            ClassifyResult {
                path,
                kind: kind.name(),
            }
        })
        .collect();

    if args.output.json {
        print_json(&results, args.output.pretty)
    } else {
        for result in &results {
            println!("{}\t{}", result.kind, result.path);
        }
        Ok(())
    }
}
