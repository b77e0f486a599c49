//! Conversions between raw file-system paths, encoded path strings and `file://` URLs.

use url::Url;

use super::percent::percent_decode;
use crate::error::UrlModelError;

/// Characters a file path may contain that would otherwise change URL structure.
/// Encoding is a single pass, so `%` in the output is never re-encoded.
const SPECIAL_CHARACTERS: [(char, &str); 5] = [
    ('%', "%25"),
    (';', "%3B"),
    ('#', "%23"),
    ('?', "%3F"),
    (' ', "%20"),
];

const FILE_ROOT: &str = "file:///";
const FILE_SCHEME_PREFIX: &str = "file://";

/// Percent-encodes `%`, `;`, `#`, `?` and space; everything else is left alone.
pub fn pre_encode_special_characters(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match SPECIAL_CHARACTERS.iter().find(|(special, _)| *special == c) {
            Some((_, encoded)) => out.push_str(encoded),
            None => out.push(c),
        }
    }
    out
}

fn construct(input: &str, base: Option<&Url>) -> Result<Url, UrlModelError> {
    let result = match base {
        Some(base) => base.join(input),
        None => Url::parse(input),
    };
    result.map_err(|source| UrlModelError::invalid_url(input, source))
}

fn file_root() -> Result<Url, UrlModelError> {
    construct(FILE_ROOT, None)
}

/// Encodes a raw path the way a `file:///` URL would carry it.
/// Relative paths stay relative.
pub fn raw_path_to_encoded_path_string(path: &str) -> Result<String, UrlModelError> {
    let partially_encoded = pre_encode_special_characters(path);
    let root = file_root()?;
    if path.starts_with('/') {
        return Ok(construct(&partially_encoded, Some(&root))?.path().to_string());
    }
    let resolved = construct(&format!("/{partially_encoded}"), Some(&root))?;
    let encoded = resolved.path();
    Ok(encoded.strip_prefix('/').unwrap_or(encoded).to_string())
}

pub fn encoded_path_to_raw_path_string(encoded_path: &str) -> String {
    percent_decode(encoded_path)
}

/// `parent/name` with `name` pre-encoded. `name` must not already be encoded.
pub fn encoded_from_parent_path_and_name(parent_path: &str, name: &str) -> String {
    format!("{parent_path}/{}", pre_encode_special_characters(name))
}

/// `parent/name` with `name` pre-encoded. `name` must not already be encoded.
pub fn url_from_parent_url_and_name(parent_url: &str, name: &str) -> String {
    format!("{parent_url}/{}", pre_encode_special_characters(name))
}

/// Converts a file-system path (POSIX or Windows) to a canonical `file://` URL.
pub fn raw_path_to_url_string(file_system_path: &str) -> Result<String, UrlModelError> {
    let mut pre_encoded = pre_encode_special_characters(&file_system_path.replace('\\', "/"));
    if !pre_encoded.starts_with(FILE_SCHEME_PREFIX) {
        pre_encoded = if pre_encoded.starts_with('/') {
            format!("{FILE_SCHEME_PREFIX}{pre_encoded}")
        } else {
            format!("{FILE_ROOT}{pre_encoded}")
        };
    }
    // The url crate folds `file:////x` into `file:///x`; keep a path's leading `//`.
    if let Some(rest) = pre_encoded
        .strip_prefix(FILE_ROOT)
        .filter(|rest| rest.starts_with('/'))
    {
        let canonical = construct(&format!("{FILE_SCHEME_PREFIX}{rest}"), None)?.to_string();
        let path = canonical.get(FILE_SCHEME_PREFIX.len()..).unwrap_or_default();
        return Ok(format!("{FILE_SCHEME_PREFIX}/{path}"));
    }
    Ok(construct(&pre_encoded, None)?.to_string())
}

/// Resolves a relative file path against `base_url`.
pub fn relative_path_to_url_string(
    relative_path: &str,
    base_url: &str,
) -> Result<String, UrlModelError> {
    let pre_encoded = pre_encode_special_characters(&relative_path.replace('\\', "/"));
    let base = construct(base_url, None)?;
    Ok(construct(&pre_encoded, Some(&base))?.to_string())
}

/// Converts a `file://` URL back to a raw path. Windows paths drop the extra `/`
/// before the drive letter and use `\` separators.
pub fn url_to_raw_path_string(file_url: &str, is_windows: bool) -> String {
    if !file_url.starts_with(FILE_SCHEME_PREFIX) {
        tracing::warn!(file_url, "expected a file:// URL");
    }
    let decoded = percent_decode(file_url);
    if is_windows {
        return decoded
            .get(FILE_ROOT.len()..)
            .unwrap_or_default()
            .replace('/', "\\");
    }
    decoded
        .get(FILE_SCHEME_PREFIX.len()..)
        .unwrap_or_default()
        .to_string()
}
