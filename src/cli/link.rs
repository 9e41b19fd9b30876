//! Link and url command implementations.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::args::{LinkArgs, UrlArgs};
use crate::cli::output::{print_json, print_tags};
use crate::config::LinkfileConfig;
use crate::content::ContentKind;
use crate::debug;
use crate::linker::{self, LinkRequest};
use crate::log;
use crate::utils::path::{absolute_slash_path, trim_url_suffix};

/// One link outcome for JSON output. `tag` is null when the pairing is
/// disallowed.
#[derive(Debug, Serialize)]
struct LinkResult {
    target: String,
    kind: &'static str,
    tag: Option<String>,
}

pub fn run_link(args: &LinkArgs, config: &LinkfileConfig) -> Result<()> {
    let doc_path = absolute_slash_path(&args.doc);
    let host_kind = resolve_host_kind(args.doc_kind.as_deref(), &doc_path, config)?;

    let requests: Vec<LinkRequest> = args
        .targets
        .iter()
        .map(|target| {
            let target_path = absolute_slash_path(target);
            let target_kind = config.classify.kind_for_path(&target_path);
            LinkRequest {
                target_path,
                target_kind,
            }
        })
        .collect();

    if args.output.json {
        let results: Vec<LinkResult> = requests
            .iter()
            .map(|req| {
                let tag = linker::relative_path(&req.target_path, &doc_path)
                    .and_then(|rel| linker::render_tag(&rel, req.target_kind, host_kind));
                LinkResult {
                    target: req.target_path.clone(),
                    kind: req.target_kind.name(),
                    tag,
                }
            })
            .collect();
        print_json(&results, args.output.pretty)
    } else {
        let tags = linker::synthesize_tags(&requests, &doc_path, host_kind);
        debug!("link"; "{} of {} targets produced tags", tags.len(), requests.len());
        print_tags(&tags, config);
        Ok(())
    }
}

pub fn run_url(args: &UrlArgs, config: &LinkfileConfig) -> Result<()> {
    let host_kind = match (args.doc_kind.as_deref(), args.doc.as_deref()) {
        (Some(name), _) => parse_kind(name)?,
        (None, Some(doc)) => {
            let doc_path = absolute_slash_path(doc);
            config.classify.kind_for_path(&doc_path)
        }
        (None, None) => bail!("either --doc or --doc-kind is required"),
    };
    let host_kind = warn_if_not_host(host_kind);

    if args.output.json {
        let results: Vec<LinkResult> = args
            .urls
            .iter()
            .map(|url| {
                let kind = ContentKind::from_path(trim_url_suffix(url));
                LinkResult {
                    target: url.clone(),
                    kind: kind.name(),
                    tag: linker::render_tag(url, kind, host_kind),
                }
            })
            .collect();
        print_json(&results, args.output.pretty)
    } else {
        let tags = linker::tags_from_urls(&args.urls, host_kind);
        debug!("url"; "{} of {} urls produced tags", tags.len(), args.urls.len());
        print_tags(&tags, config);
        Ok(())
    }
}

/// Resolve the host kind from an explicit override or the document path.
///
/// An unparseable override is a user error; a non-host document kind is
/// not - the engine simply produces no tags for it, so only warn.
pub(super) fn resolve_host_kind(
    kind_override: Option<&str>,
    doc_path: &str,
    config: &LinkfileConfig,
) -> Result<ContentKind> {
    let kind = match kind_override {
        Some(name) => parse_kind(name)?,
        None => config.classify.kind_for_path(doc_path),
    };
    Ok(warn_if_not_host(kind))
}

pub(super) fn parse_kind(name: &str) -> Result<ContentKind> {
    name.parse::<ContentKind>().map_err(anyhow::Error::msg)
}

fn warn_if_not_host(kind: ContentKind) -> ContentKind {
    if !kind.is_host() {
        log!("warning"; "`{}` documents cannot host link tags (expected html, php or css)", kind.name());
    }
    kind
}
