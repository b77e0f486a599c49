//! String-level helpers that pull one piece out of a URL.

use super::parsed::ParsedUrl;

/// Path of a valid URL, or empty.
pub fn extract_path(url: &str) -> String {
    ParsedUrl::from_string(url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_default()
}

/// Security origin of a valid URL, or empty.
pub fn extract_origin(url: &str) -> String {
    ParsedUrl::from_string(url)
        .map(|parsed| parsed.security_origin())
        .unwrap_or_default()
}

/// File extension of the last path segment, ignoring query and fragment and
/// stopping at the first `%`.
pub fn extract_extension(url: &str) -> &str {
    let mut rest = url_without_hash(url);
    if let Some(i) = rest.find('?') {
        rest = &rest[..i];
    }
    if let Some(i) = rest.rfind('/') {
        rest = &rest[i + 1..];
    }
    let Some(dot) = rest.rfind('.') else {
        return "";
    };
    let extension = &rest[dot + 1..];
    match extension.find('%') {
        Some(i) => &extension[..i],
        None => extension,
    }
}

/// Last path segment up to the query. The fragment is kept.
pub fn extract_name(url: &str) -> &str {
    let path_and_query = match url.rfind('/') {
        Some(i) => &url[i + 1..],
        None => url,
    };
    match path_and_query.find('?') {
        Some(i) => &path_and_query[..i],
        None => path_and_query,
    }
}

pub fn url_without_hash(url: &str) -> &str {
    match url.find('#') {
        Some(i) => &url[..i],
        None => url,
    }
}

/// True if `url` is a valid WHATWG URL with the given scheme.
/// `scheme` may include its trailing `:`.
pub fn scheme_is(url: &str, scheme: &str) -> bool {
    let scheme = scheme.strip_suffix(':').unwrap_or(scheme);
    url::Url::parse(url).is_ok_and(|parsed| parsed.scheme() == scheme)
}
