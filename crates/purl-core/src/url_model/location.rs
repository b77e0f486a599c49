//! `url:line:column` suffix extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::grammar::{group, URL_PATTERN};

static LINE_COLUMN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?::([0-9]+))?(?::([0-9]+))?$").expect("line/column pattern is valid")
});

static WASM_CODE_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"wasm-function\[[0-9]+\]:0x([a-z0-9]+)$").expect("wasm offset pattern is valid")
});

static WASM_FUNCTION_INFO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":wasm-function\[[0-9]+\]").expect("wasm function pattern is valid")
});

/// A URL with an optional 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub url: String,
    pub line_number: Option<i64>,
    pub column_number: Option<i64>,
}

/// Splits a trailing `:line[:column]` (1-based) off `text`, returning 0-based numbers.
///
/// Only the part after the authority is searched, so a port is never taken for a
/// line. Without a line suffix, a `wasm-function[N]:0xOFFSET` marker is removed and
/// the hex offset becomes the column.
pub fn split_line_and_column(text: &str) -> SourceLocation {
    let before_path = URL_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(group::AUTHORITY_BLOCK))
        .map_or("", |m| m.as_str());
    let path_and_after = &text[before_path.len()..];

    let Some(caps) = LINE_COLUMN.captures(path_and_after) else {
        return SourceLocation {
            url: text.to_string(),
            line_number: None,
            column_number: None,
        };
    };

    let one_based = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .map(|n| n - 1)
    };
    let line_number = one_based(1);
    let mut column_number = one_based(2);

    let suffix_start = caps.get(0).map_or(path_and_after.len(), |m| m.start());
    let mut url = format!("{before_path}{}", &path_and_after[..suffix_start]);

    if caps.get(1).is_none() && caps.get(2).is_none() {
        if let Some(offset) = WASM_CODE_OFFSET
            .captures(path_and_after)
            .and_then(|wasm| wasm.get(1))
        {
            url = remove_wasm_function_info_from_url(&url).to_string();
            column_number = parse_hex_prefix(offset.as_str());
        }
    }

    SourceLocation {
        url,
        line_number,
        column_number,
    }
}

/// Cuts `url` at its `:wasm-function[N]` marker, if any.
pub fn remove_wasm_function_info_from_url(url: &str) -> &str {
    match WASM_FUNCTION_INFO.find(url) {
        Some(m) => &url[..m.start()],
        None => url,
    }
}

/// Leading hex digits of `digits`; `None` if there are none or they overflow.
fn parse_hex_prefix(digits: &str) -> Option<i64> {
    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    i64::from_str_radix(&digits[..end], 16).ok()
}
