//! Link construct removal.
//!
//! When a linked file disappears from the project its reference tags go
//! stale; this strips every construct of the target's kind that still
//! mentions the file's relative path. The inverse of
//! [`render_tag`](super::render_tag): patterns match whole constructs
//! (`<script>…</script>`, `<link …>`, `url(…)`, …), and only matches
//! containing the relative path are removed.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::content::ContentKind;
use crate::utils::path::file_extension;

use super::tag::video_subtype;

// =============================================================================
// Construct Patterns
// =============================================================================

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script\b[^>]*>.*?</script>").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<link\b[^>]*>").unwrap());

static IMG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img\b[^>]*>").unwrap());

static CSS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\s*\([^)]*\)[^;\n]*;?").unwrap());

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:include|include_once|require|require_once)\s*\([^)]*\)\s*;?").unwrap()
});

static AUDIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<audio\b[^>]*>.*?</audio>").unwrap());

static VIDEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<video\b[^>]*>.*?</video>").unwrap());

/// Construct pattern for a target kind, or `None` when the kind has no
/// removable construct.
///
/// Image references look different per host: `<img>` in markup hosts,
/// `url(…)` declarations in stylesheets.
fn pattern_for(kind: ContentKind, host_kind: ContentKind) -> Option<&'static Regex> {
    match kind {
        ContentKind::Javascript => Some(&SCRIPT_RE),
        ContentKind::Css => Some(&LINK_RE),
        ContentKind::Image => match host_kind {
            ContentKind::Html => Some(&IMG_RE),
            _ => Some(&CSS_URL_RE),
        },
        ContentKind::Php => Some(&INCLUDE_RE),
        ContentKind::Audio => Some(&AUDIO_RE),
        ContentKind::Video => Some(&VIDEO_RE),
        _ => None,
    }
}

// =============================================================================
// Stripping
// =============================================================================

/// Narrow reclassification used on removal: unknown/binary targets with
/// a video container extension strip as video, SVG strips as image.
fn reclassify(kind: ContentKind, rel_path: &str) -> ContentKind {
    let kind = match kind {
        ContentKind::Unknown | ContentKind::Binary => match file_extension(rel_path) {
            Some(ext) if video_subtype(&ext).is_some() => ContentKind::Video,
            _ => kind,
        },
        other => other,
    };

    if kind == ContentKind::Svg {
        ContentKind::Image
    } else {
        kind
    }
}

/// Remove every link construct of `target_kind` that references
/// `rel_path` from `doc_text`.
///
/// Borrows the input unchanged when nothing matches.
pub fn strip_links<'a>(
    doc_text: &'a str,
    rel_path: &str,
    target_kind: ContentKind,
    host_kind: ContentKind,
) -> Cow<'a, str> {
    if rel_path.is_empty() {
        return Cow::Borrowed(doc_text);
    }

    let kind = reclassify(target_kind, rel_path);
    let Some(re) = pattern_for(kind, host_kind) else {
        return Cow::Borrowed(doc_text);
    };

    let mut removed = false;
    let mut out = String::with_capacity(doc_text.len());
    let mut last = 0;
    for m in re.find_iter(doc_text) {
        if m.as_str().contains(rel_path) {
            out.push_str(&doc_text[last..m.start()]);
            last = m.end();
            removed = true;
        }
    }

    if !removed {
        return Cow::Borrowed(doc_text);
    }
    out.push_str(&doc_text[last..]);
    Cow::Owned(out)
}
