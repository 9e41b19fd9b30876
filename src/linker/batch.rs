//! Batch tag synthesis.
//!
//! A pure fold over [`relative_path`] and [`render_tag`]: disallowed
//! pairings are skipped, surviving tags keep input order.

use crate::content::ContentKind;
use crate::utils::path::trim_url_suffix;

use super::relative::relative_path;
use super::tag::render_tag;

/// One file to be linked into the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    /// Absolute slash-separated path of the target file.
    pub target_path: String,
    /// Content kind of the target.
    pub target_kind: ContentKind,
}

impl LinkRequest {
    /// Build a request by classifying the target path's extension.
    pub fn from_path(path: impl Into<String>) -> Self {
        let target_path = path.into();
        let target_kind = ContentKind::from_path(&target_path);
        Self {
            target_path,
            target_kind,
        }
    }
}

/// Render tags for a batch of requests against one host document.
pub fn synthesize_tags(
    requests: &[LinkRequest],
    host_doc_path: &str,
    host_kind: ContentKind,
) -> Vec<String> {
    requests
        .iter()
        .filter_map(|req| {
            let rel = relative_path(&req.target_path, host_doc_path)?;
            render_tag(&rel, req.target_kind, host_kind)
        })
        .collect()
}

/// Render tags for remote URLs.
///
/// The URL is used verbatim as the reference; its kind comes from the
/// URL's file extension, with query and fragment ignored.
pub fn tags_from_urls(urls: &[String], host_kind: ContentKind) -> Vec<String> {
    urls.iter()
        .filter_map(|url| {
            let kind = ContentKind::from_path(trim_url_suffix(url));
            render_tag(url, kind, host_kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(path: &str) -> LinkRequest {
        LinkRequest::from_path(path)
    }

    #[test]
    fn test_from_path_classifies() {
        let r = req("/p/js/app.js");
        assert_eq!(r.target_kind, ContentKind::Javascript);
        assert_eq!(r.target_path, "/p/js/app.js");
    }

    #[test]
    fn test_batch_order_and_length() {
        let requests = vec![
            req("/p/js/app.js"),
            req("/p/css/style.css"),
            req("/p/img/logo.png"),
        ];
        let tags = synthesize_tags(&requests, "/p/index.html", ContentKind::Html);

        assert_eq!(tags.len(), 3);
        assert!(tags[0].contains("js/app.js"));
        assert!(tags[1].contains("css/style.css"));
        assert!(tags[2].contains("img/logo.png"));
    }

    #[test]
    fn test_batch_skips_disallowed() {
        let requests = vec![
            req("/p/js/app.js"),
            req("/p/inc/db.php"),
            req("/p/css/style.css"),
        ];
        let tags = synthesize_tags(&requests, "/p/index.html", ContentKind::Html);

        // php is not linkable from an html host; order of the rest holds.
        assert_eq!(tags.len(), 2);
        assert!(tags[0].contains("js/app.js"));
        assert!(tags[1].contains("css/style.css"));
    }

    #[test]
    fn test_batch_skips_self_reference() {
        let requests = vec![req("/p/index.html"), req("/p/js/app.js")];
        let tags = synthesize_tags(&requests, "/p/index.html", ContentKind::Html);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_batch_empty_for_unsupported_host() {
        let requests = vec![req("/p/js/app.js"), req("/p/css/style.css")];
        let tags = synthesize_tags(&requests, "/p/notes.txt", ContentKind::Unknown);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_absent_results_do_not_affect_order() {
        // Reordering two inputs whose tags are both absent changes nothing.
        let a = vec![req("/p/a.php"), req("/p/b.xyz"), req("/p/js/app.js")];
        let b = vec![req("/p/b.xyz"), req("/p/a.php"), req("/p/js/app.js")];
        assert_eq!(
            synthesize_tags(&a, "/p/index.html", ContentKind::Html),
            synthesize_tags(&b, "/p/index.html", ContentKind::Html)
        );
    }

    #[test]
    fn test_tags_from_urls() {
        let urls = vec![
            "https://cdn.example/lib/jquery.min.js".to_string(),
            "https://cdn.example/lib/theme.css".to_string(),
        ];
        let tags = tags_from_urls(&urls, ContentKind::Html);

        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags[0],
            r#"<script type="text/javascript" src="https://cdn.example/lib/jquery.min.js"></script>"#
        );
        assert_eq!(
            tags[1],
            r#"<link type="text/css" href="https://cdn.example/lib/theme.css" rel="stylesheet">"#
        );
    }

    #[test]
    fn test_tags_from_urls_with_query() {
        let urls = vec!["https://cdn.example/lib.js?v=2".to_string()];
        let tags = tags_from_urls(&urls, ContentKind::Html);
        // Classified as javascript despite the query; href keeps it.
        assert_eq!(tags.len(), 1);
        assert!(tags[0].contains("lib.js?v=2"));
    }

    #[test]
    fn test_tags_from_urls_skips_unknown() {
        let urls = vec!["https://cdn.example/readme".to_string()];
        assert!(tags_from_urls(&urls, ContentKind::Html).is_empty());
    }
}
