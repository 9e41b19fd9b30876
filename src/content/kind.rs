//! Content kind definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::path::file_extension;

/// Role of a file for linking purposes, distinct from its raw MIME type.
///
/// Determines which reference snippet (if any) links the file into a
/// host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Javascript,
    Css,
    Php,
    Image,
    Audio,
    Video,
    Font,
    Html,
    Svg,
    /// Recognized opaque format (archives, executables, documents).
    Binary,
    /// Anything the extension tables don't cover.
    Unknown,
}

impl ContentKind {
    /// Detect content kind from a file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Self::Javascript,
            "css" => Self::Css,
            "php" | "phtml" => Self::Php,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "avif" | "ico" | "bmp" | "tif"
            | "tiff" => Self::Image,
            "svg" => Self::Svg,
            "mp3" | "wav" | "ogg" | "oga" | "flac" | "aac" | "m4a" => Self::Audio,
            "mp4" | "m4v" | "webm" | "ogv" | "mov" | "avi" => Self::Video,
            "eot" | "otf" | "woff" | "woff2" | "ttf" => Self::Font,
            "html" | "htm" => Self::Html,
            "wasm" | "zip" | "gz" | "tar" | "pdf" | "exe" | "bin" => Self::Binary,
            _ => Self::Unknown,
        }
    }

    /// Detect content kind from a slash-separated path or URL.
    ///
    /// Total: paths without a recognizable extension map to [`Self::Unknown`].
    pub fn from_path(path: &str) -> Self {
        file_extension(path).map_or(Self::Unknown, |ext| Self::from_extension(&ext))
    }

    /// Display name for this content kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Css => "css",
            Self::Php => "php",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Font => "font",
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Binary => "binary",
            Self::Unknown => "unknown",
        }
    }

    /// Check if documents of this kind can host link tags.
    #[inline]
    pub fn is_host(self) -> bool {
        matches!(self, Self::Html | Self::Php | Self::Css)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Self::Javascript,
            "css" => Self::Css,
            "php" => Self::Php,
            "image" => Self::Image,
            "audio" => Self::Audio,
            "video" => Self::Video,
            "font" => Self::Font,
            "html" => Self::Html,
            "svg" => Self::Svg,
            "binary" => Self::Binary,
            "unknown" => Self::Unknown,
            other => return Err(format!("unknown content kind `{other}`")),
        })
    }
}
