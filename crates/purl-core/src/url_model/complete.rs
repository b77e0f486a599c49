//! Resolution of an href against a base URL.

use super::normalize::normalize_path;
use super::parsed::ParsedUrl;

/// hrefs with these prefixes are never resolved against a base.
const PASS_THROUGH_PREFIXES: [&str; 4] = ["data:", "blob:", "javascript:", "mailto:"];

/// Resolves `href` against `base_url`.
///
/// Absolute hrefs win over the base and come back with a normalized path. A `data:`
/// base passes `href` through untouched. Returns `None` when the href needs the base
/// and the base does not parse.
pub fn complete_url(base_url: &str, href: &str) -> Option<String> {
    if PASS_THROUGH_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return Some(href.to_string());
    }

    if let Some(parsed_href) =
        ParsedUrl::from_string(href.trim()).filter(|p| !p.scheme().is_empty())
    {
        return Some(format!(
            "{}{}{}{}",
            parsed_href.security_origin(),
            normalize_path(parsed_href.path()),
            prefixed('?', parsed_href.query_params()),
            prefixed('#', parsed_href.fragment()),
        ));
    }

    let base = ParsedUrl::parse(base_url);
    if base.is_data_url() {
        return Some(href.to_string());
    }
    if !base.is_valid() {
        tracing::debug!(base_url, href, "cannot complete href: base URL does not parse");
        return None;
    }

    if href.len() > 1 && href.starts_with("//") {
        return Some(format!("{}:{}", base.scheme(), href));
    }

    let origin = base.security_origin();
    let path = base.path();
    let query = prefixed('?', base.query_params());

    if href.is_empty() {
        return Some(format!("{origin}{path}{query}"));
    }
    if href.starts_with('#') {
        return Some(format!("{origin}{path}{query}{href}"));
    }
    if href.starts_with('?') {
        return Some(format!("{origin}{path}{href}"));
    }

    let path_end = href.find(|c: char| c == '#' || c == '?').unwrap_or(href.len());
    let (href_path, href_suffix) = href.split_at(path_end);
    let href_path = if href_path.starts_with('/') {
        href_path.to_string()
    } else {
        format!("{}/{}", base.folder_path_components(), href_path)
    };
    Some(format!("{origin}{}{href_suffix}", normalize_path(&href_path)))
}

fn prefixed(marker: char, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{marker}{text}")
    }
}
