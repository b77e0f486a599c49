//! The parsed URL value and its derived accessors.

use once_cell::sync::OnceCell;
use serde::Serialize;

use super::grammar::{group, DATA_URL_MIME_TYPE, URL_PATTERN};

const BLOB_PREFIX: &str = "blob:";
const DATA_PREFIX: &str = "data:";
const ABOUT_BLANK: &str = "about:blank";

/// Longest data URL display name, in characters, including the ellipsis.
const DATA_URL_DISPLAY_MAX_CHARS: usize = 20;

/// A URL-like string decomposed into scheme, authority, path, query and fragment.
///
/// Built once by [`ParsedUrl::parse`] and never mutated afterwards; the two display
/// names are computed on first use and cached for the lifetime of the value.
///
/// Input that does not match the `scheme://authority` grammar still produces a value:
/// `data:`, `blob:` and `about:blank` only get their scheme set, and anything else is
/// kept whole as the path with `is_valid() == false`.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedUrl {
    is_valid: bool,
    url: String,
    scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    blob_inner_scheme: Option<String>,
    user: String,
    host: String,
    port: String,
    path: String,
    query_params: String,
    fragment: String,
    folder_path_components: String,
    last_path_component: String,
    #[serde(skip)]
    display_name: OnceCell<String>,
    #[serde(skip)]
    data_url_display_name: OnceCell<String>,
}

/// MIME type pieces of a `data:` URL header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataUrlMimeType {
    pub mime_type: Option<String>,
    pub subtype: Option<String>,
}

impl ParsedUrl {
    /// Parses `url`. Never fails; check [`ParsedUrl::is_valid`] before trusting
    /// the authority fields.
    pub fn parse(url: &str) -> Self {
        let mut parsed = Self::unparsed(url);

        let is_blob = url.starts_with(BLOB_PREFIX);
        let url_to_match = if is_blob { &url[BLOB_PREFIX.len()..] } else { url };

        match URL_PATTERN.captures(url_to_match) {
            Some(caps) => {
                let group_str = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
                let scheme = caps
                    .get(group::SCHEME)
                    .map_or(String::new(), |m| m.as_str().to_ascii_lowercase());

                parsed.is_valid = true;
                if is_blob {
                    parsed.blob_inner_scheme = Some(scheme);
                    parsed.scheme = "blob".to_string();
                } else {
                    parsed.scheme = scheme;
                }
                parsed.user = group_str(group::USER).unwrap_or_default();
                parsed.host = group_str(group::HOST).unwrap_or_default();
                parsed.port = group_str(group::PORT).unwrap_or_default();
                parsed.path = group_str(group::PATH).unwrap_or_else(|| "/".to_string());
                parsed.query_params = group_str(group::QUERY).unwrap_or_default();
                parsed.fragment = group_str(group::FRAGMENT).unwrap_or_default();
            }
            None => {
                if url.starts_with(DATA_PREFIX) {
                    parsed.scheme = "data".to_string();
                    return parsed;
                }
                if is_blob {
                    parsed.scheme = "blob".to_string();
                    return parsed;
                }
                if url == ABOUT_BLANK {
                    parsed.scheme = "about".to_string();
                    return parsed;
                }
                parsed.path = url.to_string();
            }
        }

        parsed.last_path_component = last_path_component(&parsed.path).to_string();
        parsed.folder_path_components = parsed
            .path
            .rfind('/')
            .map_or(String::new(), |i| parsed.path[..i].to_string());
        parsed
    }

    /// Parses `url` and keeps it only if it matched the URL grammar.
    pub fn from_string(url: &str) -> Option<Self> {
        Some(Self::parse(url)).filter(ParsedUrl::is_valid)
    }

    fn unparsed(url: &str) -> Self {
        Self {
            is_valid: false,
            url: url.to_string(),
            scheme: String::new(),
            blob_inner_scheme: None,
            user: String::new(),
            host: String::new(),
            port: String::new(),
            path: String::new(),
            query_params: String::new(),
            fragment: String::new(),
            folder_path_components: String::new(),
            last_path_component: String::new(),
            display_name: OnceCell::new(),
            data_url_display_name: OnceCell::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The original input, unmodified.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Lower-cased scheme; `"blob"` for blob URLs, `"data"` and `"about"` for the
    /// special cases.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Scheme following `blob:`, for blob URLs that matched the grammar.
    pub fn blob_inner_scheme(&self) -> Option<&str> {
        self.blob_inner_scheme.as_deref()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query text after `?`, still encoded.
    pub fn query_params(&self) -> &str {
        &self.query_params
    }

    /// Raw fragment text after `#`, still encoded.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Path before its last `/`.
    pub fn folder_path_components(&self) -> &str {
        &self.folder_path_components
    }

    /// Path after its last `/`, ignoring one trailing slash.
    pub fn last_path_component(&self) -> &str {
        &self.last_path_component
    }

    pub fn last_path_component_with_fragment(&self) -> String {
        if self.fragment.is_empty() {
            self.last_path_component.clone()
        } else {
            format!("{}#{}", self.last_path_component, self.fragment)
        }
    }

    pub fn is_data_url(&self) -> bool {
        self.scheme == "data"
    }

    pub fn is_blob_url(&self) -> bool {
        self.url.starts_with(BLOB_PREFIX)
    }

    pub fn is_about_blank(&self) -> bool {
        self.url == ABOUT_BLANK
    }

    /// `host[:port]`, or `data:` for data URLs.
    pub fn domain(&self) -> String {
        if self.is_data_url() {
            return DATA_PREFIX.to_string();
        }
        if self.port.is_empty() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// `scheme://host[:port]`. Blob URLs report the origin that created them.
    pub fn security_origin(&self) -> String {
        if self.is_data_url() {
            return DATA_PREFIX.to_string();
        }
        let scheme = if self.is_blob_url() {
            self.blob_inner_scheme.as_deref().unwrap_or_default()
        } else {
            self.scheme.as_str()
        };
        format!("{}://{}", scheme, self.domain())
    }

    /// The raw URL with its leading `scheme://` removed, if it has one.
    pub fn url_without_scheme(&self) -> &str {
        if self.scheme.is_empty() {
            return &self.url;
        }
        self.url
            .strip_prefix(self.scheme.as_str())
            .and_then(|rest| rest.strip_prefix("://"))
            .unwrap_or(&self.url)
    }

    /// Short user-facing name: the last path component, falling back to `host/`
    /// and then to the whole URL.
    pub fn display_name(&self) -> &str {
        if self.is_data_url() {
            return self.data_url_display_name();
        }
        if self.is_blob_url() || self.is_about_blank() {
            return &self.url;
        }
        self.display_name.get_or_init(|| {
            let name = if self.last_path_component.is_empty() {
                format!("{}/", self.host)
            } else {
                self.last_path_component.clone()
            };
            if name == "/" {
                self.url.clone()
            } else {
                name
            }
        })
    }

    /// Data URL shortened for display; empty for anything else.
    pub fn data_url_display_name(&self) -> &str {
        if !self.is_data_url() {
            return "";
        }
        self.data_url_display_name
            .get_or_init(|| trim_end_with_max_length(&self.url, DATA_URL_DISPLAY_MAX_CHARS))
    }

    pub fn extract_data_url_mime_type(&self) -> DataUrlMimeType {
        match DATA_URL_MIME_TYPE.captures(&self.url) {
            Some(caps) => DataUrlMimeType {
                mime_type: caps.name("type").map(|m| m.as_str().to_string()),
                subtype: caps.name("subtype").map(|m| m.as_str().to_string()),
            },
            None => DataUrlMimeType::default(),
        }
    }
}

/// True if `url` matches the URL grammar.
pub fn is_valid_url_string(url: &str) -> bool {
    ParsedUrl::parse(url).is_valid()
}

/// Text after the last `/` that is not the final character.
fn last_path_component(path: &str) -> &str {
    // Search everything but the last character; a one-character path is searched whole.
    let search_end = match path.char_indices().last() {
        Some((i, _)) if i > 0 => i,
        _ => path.len(),
    };
    match path[..search_end].rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

fn trim_end_with_max_length(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_url() {
        let p = ParsedUrl::parse("https://user@host:8080/path?q=1#frag");
        assert!(p.is_valid());
        assert_eq!(p.scheme(), "https");
        assert_eq!(p.user(), "user");
        assert_eq!(p.host(), "host");
        assert_eq!(p.port(), "8080");
        assert_eq!(p.path(), "/path");
        assert_eq!(p.query_params(), "q=1");
        assert_eq!(p.fragment(), "frag");
        assert_eq!(p.domain(), "host:8080");
        assert_eq!(p.security_origin(), "https://host:8080");
    }

    #[test]
    fn scheme_is_lowercased() {
        let p = ParsedUrl::parse("HTTP://Example.com/A");
        assert_eq!(p.scheme(), "http");
        assert_eq!(p.host(), "Example.com");
        assert_eq!(p.path(), "/A");
    }

    #[test]
    fn missing_path_defaults_to_root() {
        let p = ParsedUrl::parse("https://example.com");
        assert!(p.is_valid());
        assert_eq!(p.path(), "/");
        assert_eq!(p.last_path_component(), "");
        assert_eq!(p.folder_path_components(), "");
        assert_eq!(p.display_name(), "example.com/");
    }

    #[test]
    fn blob_url_uses_inner_scheme_for_origin() {
        let p = ParsedUrl::parse("blob:https://example.com/uuid");
        assert!(p.is_valid());
        assert_eq!(p.scheme(), "blob");
        assert_eq!(p.blob_inner_scheme(), Some("https"));
        assert_eq!(p.host(), "example.com");
        assert_eq!(p.security_origin(), "https://example.com");
        assert!(p.is_blob_url());
        assert_eq!(p.display_name(), "blob:https://example.com/uuid");
        assert_eq!(p.url_without_scheme(), "blob:https://example.com/uuid");
    }

    #[test]
    fn opaque_blob_url() {
        let p = ParsedUrl::parse("blob:null/1234");
        assert!(!p.is_valid());
        assert_eq!(p.scheme(), "blob");
        assert_eq!(p.blob_inner_scheme(), None);
        assert_eq!(p.path(), "");
    }

    #[test]
    fn data_url() {
        let p = ParsedUrl::parse("data:text/plain;base64,aGVsbG8gd29ybGQgZnJvbSBkYXRh");
        assert!(!p.is_valid());
        assert!(p.is_data_url());
        assert_eq!(p.scheme(), "data");
        assert_eq!(p.path(), "");
        assert_eq!(p.domain(), "data:");
        assert_eq!(p.security_origin(), "data:");
        assert_eq!(p.display_name(), "data:text/plain;bas\u{2026}");
        assert_eq!(p.display_name().chars().count(), 20);
        assert_eq!(
            p.extract_data_url_mime_type(),
            DataUrlMimeType {
                mime_type: Some("text".to_string()),
                subtype: Some("plain".to_string()),
            }
        );
    }

    #[test]
    fn short_data_url_display_name_is_untrimmed() {
        let p = ParsedUrl::parse("data:,hi");
        assert_eq!(p.display_name(), "data:,hi");
        assert_eq!(p.extract_data_url_mime_type(), DataUrlMimeType::default());
    }

    #[test]
    fn non_data_url_has_empty_data_display_name() {
        let p = ParsedUrl::parse("https://example.com/a.js");
        assert_eq!(p.data_url_display_name(), "");
    }

    #[test]
    fn about_blank() {
        let p = ParsedUrl::parse("about:blank");
        assert!(!p.is_valid());
        assert!(p.is_about_blank());
        assert_eq!(p.scheme(), "about");
        assert_eq!(p.display_name(), "about:blank");
    }

    #[test]
    fn path_only_fallback() {
        let p = ParsedUrl::parse("not a url");
        assert!(!p.is_valid());
        assert_eq!(p.scheme(), "");
        assert_eq!(p.path(), "not a url");
        assert_eq!(p.last_path_component(), "not a url");
        assert!(ParsedUrl::from_string("not a url").is_none());
        assert!(!is_valid_url_string("not a url"));
    }

    #[test]
    fn carriage_return_in_fragment_falls_back_to_path() {
        let p = ParsedUrl::parse("http://a.com/p#x\ry");
        assert!(!p.is_valid());
        assert_eq!(p.path(), "http://a.com/p#x\ry");
    }

    #[test]
    fn bare_file_path() {
        let p = ParsedUrl::parse("/usr/local/lib/app.js");
        assert!(!p.is_valid());
        assert_eq!(p.path(), "/usr/local/lib/app.js");
        assert_eq!(p.last_path_component(), "app.js");
        assert_eq!(p.folder_path_components(), "/usr/local/lib");
        assert_eq!(p.display_name(), "app.js");
    }

    #[test]
    fn trailing_slash_is_ignored_for_last_component() {
        let p = ParsedUrl::parse("https://example.com/a/b/");
        assert_eq!(p.last_path_component(), "b/");
        assert_eq!(p.folder_path_components(), "/a/b");
        assert_eq!(p.display_name(), "b/");
    }

    #[test]
    fn root_path_components() {
        assert_eq!(last_path_component("/"), "");
        assert_eq!(last_path_component(""), "");
        assert_eq!(last_path_component("a"), "a");
        assert_eq!(last_path_component("/x"), "x");
    }

    #[test]
    fn display_name_falls_back_to_url_without_host() {
        let p = ParsedUrl::parse("file:///");
        assert!(p.is_valid());
        assert_eq!(p.host(), "");
        assert_eq!(p.display_name(), "file:///");
    }

    #[test]
    fn display_name_is_cached() {
        let p = ParsedUrl::parse("https://example.com/dir/script.js");
        let first = p.display_name() as *const str;
        let second = p.display_name() as *const str;
        assert_eq!(first, second);
        assert_eq!(p.display_name(), "script.js");
    }

    #[test]
    fn last_component_with_fragment() {
        let p = ParsedUrl::parse("https://example.com/page.html#section");
        assert_eq!(p.last_path_component_with_fragment(), "page.html#section");
        let p = ParsedUrl::parse("https://example.com/page.html");
        assert_eq!(p.last_path_component_with_fragment(), "page.html");
    }

    #[test]
    fn url_without_scheme() {
        let p = ParsedUrl::parse("https://example.com/a");
        assert_eq!(p.url_without_scheme(), "example.com/a");
        let p = ParsedUrl::parse("relative/path");
        assert_eq!(p.url_without_scheme(), "relative/path");
    }

    #[test]
    fn serializes_structured_fields() {
        let p = ParsedUrl::parse("https://example.com:1/x?y#z");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["scheme"], "https");
        assert_eq!(json["port"], "1");
        assert_eq!(json["query_params"], "y");
        assert!(json.get("blob_inner_scheme").is_none());
        assert!(json.get("display_name").is_none());
    }
}
