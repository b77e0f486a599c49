//! The composed URL pattern and small prefix predicates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Capture groups of [`URL_PATTERN`].
pub(crate) mod group {
    /// Scheme, user info, host and port as one block.
    pub const AUTHORITY_BLOCK: usize = 1;
    pub const SCHEME: usize = 2;
    pub const USER: usize = 3;
    pub const HOST: usize = 4;
    pub const PORT: usize = 5;
    pub const PATH: usize = 6;
    pub const QUERY: usize = 7;
    pub const FRAGMENT: usize = 8;
}

/// `scheme://[user@]host[:port][/path][?query][#fragment]`, anchored at both ends.
pub(crate) static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let scheme = r"([A-Za-z][A-Za-z0-9+.-]*)://";
    let user = r"(?:([A-Za-z0-9\-._~%!$&'()*+,;=:]*)@)?";
    let host = r"((?:\[::[0-9]?\])|(?:[^\s/:]*))";
    let port = r"(?::([0-9]+))?";
    let path = r"(/[^#?]*)?";
    let query = r"(?:\?([^#]*))?";
    let fragment = r"(?:#([^\n\r\x{2028}\x{2029}]*))?";
    Regex::new(&format!(
        "^({scheme}{user}{host}{port}){path}{query}{fragment}$"
    ))
    .expect("URL pattern is valid")
});

/// `data:[type/subtype][;base64],`
pub(crate) static DATA_URL_MIME_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:((?P<type>[A-Za-z0-9_]+)/(?P<subtype>[A-Za-z0-9_]+))?(;base64)?,")
        .expect("data URL mime type pattern is valid")
});

/// True if `url` starts with `scheme:` using the RFC 3986 scheme grammar.
pub fn begins_with_scheme(url: &str) -> bool {
    let mut chars = url.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') => {}
            _ => return false,
        }
    }
    false
}

/// True if `url` starts like `C:`.
pub fn begins_with_windows_drive_letter(url: &str) -> bool {
    let bytes = url.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// A URL is relative when it has no scheme; a Windows drive letter looks like a
/// one-letter scheme but still counts as relative.
pub fn is_relative_url(url: &str) -> bool {
    !begins_with_scheme(url) || begins_with_windows_drive_letter(url)
}
