//! Relative path computation.

/// Compute the minimal relative path from the directory of
/// `from_doc_path` to `target_path`.
///
/// Both inputs are absolute, forward-slash-separated and pre-normalized
/// (no `.`/`..` segments). Returns `None` when either path is empty or
/// when the target is the document itself - a document never links to
/// itself.
///
/// # Example
/// ```ignore
/// assert_eq!(
///     relative_path("/a/b/c/file.js", "/a/x/index.html"),
///     Some("../b/c/file.js".to_string())
/// );
/// ```
pub fn relative_path(target_path: &str, from_doc_path: &str) -> Option<String> {
    if target_path.is_empty() || from_doc_path.is_empty() {
        return None;
    }
    if target_path == from_doc_path {
        return None;
    }

    let mut file_segs: Vec<&str> = target_path.split('/').collect();
    let mut doc_segs: Vec<&str> = from_doc_path.split('/').collect();

    // Keep the file name, drop it from the segment chain.
    let file_name = file_segs.pop().unwrap_or_default();

    // Drop the root marker produced by the leading separator, and the
    // document's own file name, leaving only directory chains.
    if !file_segs.is_empty() {
        file_segs.remove(0);
    }
    if !doc_segs.is_empty() {
        doc_segs.remove(0);
    }
    doc_segs.pop();

    // Deepest shared ancestor: last index where the chains still agree.
    let mut last_common = None;
    for (i, (file_seg, doc_seg)) in file_segs.iter().zip(doc_segs.iter()).enumerate() {
        if file_seg != doc_seg {
            break;
        }
        last_common = Some(i);
    }
    if let Some(idx) = last_common {
        file_segs.drain(..=idx);
        doc_segs.drain(..=idx);
    }

    // One "../" per remaining document directory, then the remaining
    // target directories, then the file name.
    let mut rel = String::with_capacity(target_path.len());
    for _ in &doc_segs {
        rel.push_str("../");
    }
    for seg in &file_segs {
        rel.push_str(seg);
        rel.push('/');
    }
    rel.push_str(file_name);

    Some(rel)
}
