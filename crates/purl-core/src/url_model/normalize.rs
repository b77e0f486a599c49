//! RFC 3986 §5.2.4 dot-segment removal.

/// Removes `.` and `..` segments from `path`.
///
/// A leading `/` is kept when anything remains; a trailing `/` is kept, and added
/// when the last input segment was `.` or `..`. `..` at the top is dropped.
pub fn normalize_path(path: &str) -> String {
    // No dot at all means no dot segments.
    if !path.contains('.') {
        return path.to_string();
    }

    let rooted = path.starts_with('/');
    let body = if rooted { &path[1..] } else { path };
    let segments: Vec<&str> = body.split('/').collect();

    let mut kept: Vec<&str> = Vec::with_capacity(segments.len());
    for segment in &segments {
        match *segment {
            "." => {}
            ".." => {
                kept.pop();
            }
            other => kept.push(other),
        }
    }

    let mut normalized = kept.join("/");
    if rooted && !normalized.is_empty() {
        normalized.insert(0, '/');
    }

    let ends_in_dot_segment = matches!(segments.last(), Some(&".") | Some(&".."));
    if !normalized.ends_with('/') && (path.ends_with('/') || ends_in_dot_segment) {
        normalized.push('/');
    }
    normalized
}
