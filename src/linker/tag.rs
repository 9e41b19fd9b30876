//! Reference tag synthesis.
//!
//! Decides whether a target file may be linked from a host document and
//! renders the matching snippet:
//!
//! | target     | html host                  | css host        | php host     |
//! |------------|----------------------------|-----------------|--------------|
//! | javascript | `<script>`                 | -               | -            |
//! | css        | `<link rel="stylesheet">`  | `@import url()` | -            |
//! | php        | -                          | -               | `include()`  |
//! | image      | `<img>`                    | `url()`         | -            |
//! | audio      | `<audio>`                  | -               | -            |
//! | video      | `<video>`                  | -               | -            |
//! | font       | -                          | `url() format()`| -            |
//!
//! Every disallowed pairing yields `None`: absence is a skip, never an
//! error.

use crate::content::ContentKind;
use crate::utils::path::file_extension;

// =============================================================================
// Media Extension Tables
// =============================================================================

/// MIME subtype token for a video container extension.
pub(crate) fn video_subtype(ext: &str) -> Option<&'static str> {
    match ext {
        "mp4" => Some("mp4"),
        "ogg" | "ogv" => Some("ogg"),
        "webm" => Some("webm"),
        _ => None,
    }
}

/// MIME subtype token for an audio extension.
fn audio_subtype(ext: &str) -> Option<&'static str> {
    match ext {
        "ogg" => Some("ogg"),
        "mp3" => Some("mpeg"),
        "wav" => Some("wav"),
        _ => None,
    }
}

/// CSS `format()` hint for a font extension.
///
/// OpenType fonts carry no hint; unknown extensions yield `None` and the
/// caller renders an empty hint.
fn font_format_hint(ext: &str) -> Option<&'static str> {
    match ext {
        "eot" => Some(r#" format("embedded-opentype")"#),
        "otf" => Some(""),
        "woff" => Some(r#" format("woff")"#),
        "woff2" => Some(r#" format("woff2")"#),
        "ttf" => Some(r#" format("truetype")"#),
        _ => None,
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Media-aware reclassification before the compatibility check.
///
/// Audio, unknown and binary targets are re-examined by extension: video
/// containers link as `<video>`, font files as `url()` with a format
/// hint. SVG always links as an image reference, never as inline markup.
pub(crate) fn reclassify(kind: ContentKind, rel_path: &str) -> ContentKind {
    let kind = match kind {
        ContentKind::Audio | ContentKind::Unknown | ContentKind::Binary => {
            match file_extension(rel_path) {
                Some(ext) if video_subtype(&ext).is_some() => ContentKind::Video,
                Some(ext) if font_format_hint(&ext).is_some() => ContentKind::Font,
                _ => kind,
            }
        }
        other => other,
    };

    if kind == ContentKind::Svg {
        ContentKind::Image
    } else {
        kind
    }
}

/// Target kinds a host document accepts.
fn accepted_targets(host: ContentKind) -> &'static [ContentKind] {
    match host {
        ContentKind::Html => &[
            ContentKind::Javascript,
            ContentKind::Css,
            ContentKind::Image,
            ContentKind::Audio,
            ContentKind::Video,
        ],
        ContentKind::Php => &[ContentKind::Php],
        ContentKind::Css => &[ContentKind::Image, ContentKind::Font, ContentKind::Css],
        _ => &[],
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render the snippet that links `rel_path` into a host document.
///
/// `rel_path` is a relative path as produced by
/// [`relative_path`](super::relative_path), or a URL used verbatim.
/// Returns `None` for empty paths, unsupported host kinds, disallowed
/// pairings, and audio/video extensions with no MIME subtype mapping.
pub fn render_tag(
    rel_path: &str,
    target_kind: ContentKind,
    host_kind: ContentKind,
) -> Option<String> {
    if rel_path.is_empty() {
        return None;
    }

    let target = reclassify(target_kind, rel_path);
    if !accepted_targets(host_kind).contains(&target) {
        return None;
    }

    let ext = file_extension(rel_path).unwrap_or_default();
    let tag = match target {
        ContentKind::Javascript => {
            format!(r#"<script type="text/javascript" src="{rel_path}"></script>"#)
        }
        ContentKind::Css => match host_kind {
            ContentKind::Html => {
                format!(r#"<link type="text/css" href="{rel_path}" rel="stylesheet">"#)
            }
            _ => format!(r#"@import url("{rel_path}");"#),
        },
        ContentKind::Php => format!("include('{rel_path}');"),
        ContentKind::Image => match host_kind {
            ContentKind::Html => {
                format!(r#"<img src="{rel_path}" alt="" height="" width="">"#)
            }
            _ => format!(r#"url("{rel_path}")"#),
        },
        ContentKind::Audio => {
            let subtype = audio_subtype(&ext)?;
            format!(r#"<audio controls src="{rel_path}" type="audio/{subtype}"></audio>"#)
        }
        ContentKind::Video => {
            let subtype = video_subtype(&ext)?;
            format!(
                r#"<video controls width="" height="" src="{rel_path}" type="video/{subtype}"></video>"#
            )
        }
        ContentKind::Font => {
            let hint = font_format_hint(&ext).unwrap_or("");
            format!(r#"url("{rel_path}"){hint}"#)
        }
        _ => return None,
    };

    Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind::*;

    // =========================================================================
    // Compatibility Tests
    // =========================================================================

    #[test]
    fn test_empty_rel_path() {
        assert_eq!(render_tag("", Javascript, Html), None);
    }

    #[test]
    fn test_javascript_rejected_by_php_host() {
        assert_eq!(render_tag("lib.js", Javascript, Php), None);
    }

    #[test]
    fn test_php_rejected_by_html_host() {
        assert_eq!(render_tag("inc.php", Php, Html), None);
    }

    #[test]
    fn test_javascript_rejected_by_css_host() {
        assert_eq!(render_tag("lib.js", Javascript, Css), None);
    }

    #[test]
    fn test_unsupported_host() {
        assert_eq!(render_tag("lib.js", Javascript, Javascript), None);
        assert_eq!(render_tag("lib.js", Javascript, Image), None);
        assert_eq!(render_tag("a.png", Image, Unknown), None);
    }

    #[test]
    fn test_unknown_target_rejected_everywhere() {
        assert_eq!(render_tag("data.csv", Unknown, Html), None);
        assert_eq!(render_tag("data.csv", Unknown, Css), None);
        assert_eq!(render_tag("data.csv", Unknown, Php), None);
    }

    // =========================================================================
    // Template Tests
    // =========================================================================

    #[test]
    fn test_script_tag() {
        assert_eq!(
            render_tag("js/app.js", Javascript, Html).unwrap(),
            r#"<script type="text/javascript" src="js/app.js"></script>"#
        );
    }

    #[test]
    fn test_stylesheet_link() {
        assert_eq!(
            render_tag("x/y/lib.css", Css, Html).unwrap(),
            r#"<link type="text/css" href="x/y/lib.css" rel="stylesheet">"#
        );
    }

    #[test]
    fn test_css_import() {
        assert_eq!(
            render_tag("a.css", Css, Css).unwrap(),
            r#"@import url("a.css");"#
        );
    }

    #[test]
    fn test_php_include() {
        assert_eq!(
            render_tag("../inc/db.php", Php, Php).unwrap(),
            "include('../inc/db.php');"
        );
    }

    #[test]
    fn test_img_tag() {
        assert_eq!(
            render_tag("img/logo.png", Image, Html).unwrap(),
            r#"<img src="img/logo.png" alt="" height="" width="">"#
        );
    }

    #[test]
    fn test_image_url_in_css() {
        assert_eq!(
            render_tag("../img/bg.jpg", Image, Css).unwrap(),
            r#"url("../img/bg.jpg")"#
        );
    }

    #[test]
    fn test_audio_tag_subtypes() {
        assert_eq!(
            render_tag("snd.mp3", Audio, Html).unwrap(),
            r#"<audio controls src="snd.mp3" type="audio/mpeg"></audio>"#
        );
        assert_eq!(
            render_tag("snd.wav", Audio, Html).unwrap(),
            r#"<audio controls src="snd.wav" type="audio/wav"></audio>"#
        );
    }

    #[test]
    fn test_video_tag_subtypes() {
        assert_eq!(
            render_tag("clip.mp4", Video, Html).unwrap(),
            r#"<video controls width="" height="" src="clip.mp4" type="video/mp4"></video>"#
        );
        // .ogv maps to the ogg subtype.
        assert_eq!(
            render_tag("clip.ogv", Video, Html).unwrap(),
            r#"<video controls width="" height="" src="clip.ogv" type="video/ogg"></video>"#
        );
    }

    #[test]
    fn test_unmapped_media_subtype_is_absent() {
        // Accepted kind, but no MIME subtype for the extension.
        assert_eq!(render_tag("snd.flac", Audio, Html), None);
        assert_eq!(render_tag("clip.mov", Video, Html), None);
    }

    #[test]
    fn test_font_format_hints() {
        assert_eq!(
            render_tag("fonts/a.woff2", Font, Css).unwrap(),
            r#"url("fonts/a.woff2") format("woff2")"#
        );
        assert_eq!(
            render_tag("fonts/a.eot", Font, Css).unwrap(),
            r#"url("fonts/a.eot") format("embedded-opentype")"#
        );
        assert_eq!(
            render_tag("fonts/a.ttf", Font, Css).unwrap(),
            r#"url("fonts/a.ttf") format("truetype")"#
        );
        // OpenType and unrecognized extensions carry no hint.
        assert_eq!(
            render_tag("fonts/a.otf", Font, Css).unwrap(),
            r#"url("fonts/a.otf")"#
        );
        assert_eq!(
            render_tag("fonts/a.pfb", Font, Css).unwrap(),
            r#"url("fonts/a.pfb")"#
        );
    }

    #[test]
    fn test_font_rejected_by_html_host() {
        assert_eq!(render_tag("fonts/a.woff", Font, Html), None);
    }

    // =========================================================================
    // Reclassification Tests
    // =========================================================================

    #[test]
    fn test_svg_links_as_image() {
        assert_eq!(
            render_tag("icon.svg", Svg, Html),
            render_tag("icon.svg", Image, Html)
        );
        assert_eq!(
            render_tag("icon.svg", Svg, Css),
            render_tag("icon.svg", Image, Css)
        );
    }

    #[test]
    fn test_ogg_audio_becomes_video() {
        // .ogg is in the video container table, so an audio-classified
        // .ogg file links as <video>.
        assert_eq!(
            render_tag("snd.ogg", Audio, Html).unwrap(),
            r#"<video controls width="" height="" src="snd.ogg" type="video/ogg"></video>"#
        );
    }

    #[test]
    fn test_unknown_with_video_extension() {
        assert_eq!(
            render_tag("clip.webm", Unknown, Html).unwrap(),
            r#"<video controls width="" height="" src="clip.webm" type="video/webm"></video>"#
        );
    }

    #[test]
    fn test_binary_with_font_extension() {
        assert_eq!(
            render_tag("fonts/a.woff", Binary, Css).unwrap(),
            r#"url("fonts/a.woff") format("woff")"#
        );
    }

    #[test]
    fn test_unknown_without_media_extension_stays_unknown() {
        assert_eq!(render_tag("data.bin", Unknown, Html), None);
    }

    #[test]
    fn test_native_video_kind_gets_subtype_from_extension() {
        // The extension is derived from the path even when the kind was
        // video from the start, not only on the reclassification path.
        assert_eq!(
            render_tag("clip.webm", Video, Html).unwrap(),
            r#"<video controls width="" height="" src="clip.webm" type="video/webm"></video>"#
        );
    }
}
