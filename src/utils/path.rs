//! Path string utilities.
//!
//! The link engine works on forward-slash absolute path *strings*
//! (editor style), not on `std::path::Path`. These helpers extract
//! extensions from such strings and convert OS paths into that form.

use std::path::Path;

/// Extract the lowercased extension of a path's trailing segment.
///
/// The extension is everything after the last `.` of the file name.
/// Returns `None` when the file name has no dot.
///
/// # Example
/// ```ignore
/// assert_eq!(file_extension("/a/b/app.min.JS"), Some("js".to_string()));
/// assert_eq!(file_extension("Makefile"), None);
/// ```
#[inline]
pub fn file_extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Cut the query and fragment parts off a URL.
///
/// Used before extension-based classification of remote URLs, so that
/// `lib.js?v=2` still classifies as javascript.
#[inline]
pub fn trim_url_suffix(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Convert an OS path to the absolute slash-separated string form the
/// link engine expects.
///
/// Relative paths are joined to the current directory; no symlink or
/// `..` resolution is performed (the target may not exist on disk, e.g.
/// when stripping references to a deleted file).
pub fn absolute_slash_path(path: &Path) -> String {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    abs.to_string_lossy().replace('\\', "/")
}
