//! Stable topic identifiers derived from content file paths.

/// Derive the topic id for a content file.
///
/// The path is normalized to forward slashes first, then reduced to its
/// bare filename, and the category's known extension is stripped. An
/// unknown extension passes through unstripped; callers that feed this
/// non-content files get the full filename back rather than an error.
/// Idempotent and free of I/O.
pub fn topic_id_from_path(path: &str, content_ext: &str) -> String {
    let normalized = path.replace('\\', "/");
    let name = normalized.rsplit('/').next().unwrap_or(normalized.as_str());
    let suffix = format!(".{content_ext}");
    match name.strip_suffix(suffix.as_str()) {
        Some(stem) => stem.to_string(),
        None => name.to_string(),
    }
}
