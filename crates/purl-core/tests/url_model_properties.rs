//! End-to-end behavior of the URL model through the public API.

use purl_core::url_model::{
    complete_url, encoded_path_to_raw_path_string, normalize_path, raw_path_to_encoded_path_string,
    raw_path_to_url_string, split_line_and_column, url_to_raw_path_string, SourceLocation,
};
use purl_core::ParsedUrl;

const PATHS: &[&str] = &[
    "",
    "/",
    ".",
    "..",
    "/a/b/c",
    "a/b/",
    "/a/./b/../c",
    "/a/b/../../c",
    "/../..",
    "a/../../b/./",
    "//x/./y/..",
    "/dir.name/file.ext",
    "./",
    "/a/b/.",
];

#[test]
fn normalize_is_idempotent() {
    for path in PATHS {
        let once = normalize_path(path);
        assert_eq!(normalize_path(&once), once, "input {path:?}");
    }
}

#[test]
fn normalize_leaves_dot_free_paths_alone() {
    for path in ["/a/b/c", "a//b", "/", "", "x/y/"] {
        assert_eq!(normalize_path(path), path);
    }
}

#[test]
fn normalize_examples() {
    assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
    assert_eq!(normalize_path("/a/b/../../c"), "/c");
    assert_eq!(normalize_path("a/b/"), "a/b/");
}

#[test]
fn parse_examples() {
    let p = ParsedUrl::parse("https://user@host:8080/path?q=1#frag");
    assert!(p.is_valid());
    assert_eq!(
        (p.scheme(), p.user(), p.host(), p.port(), p.path(), p.query_params(), p.fragment()),
        ("https", "user", "host", "8080", "/path", "q=1", "frag")
    );

    let blob = ParsedUrl::parse("blob:https://example.com/uuid");
    assert!(blob.is_valid());
    assert_eq!(blob.scheme(), "blob");
    assert_eq!(blob.blob_inner_scheme(), Some("https"));
    assert_eq!(blob.security_origin(), "https://example.com");

    let invalid = ParsedUrl::parse("not a url");
    assert!(!invalid.is_valid());
    assert_eq!(invalid.path(), "not a url");
}

#[test]
fn complete_examples() {
    assert_eq!(
        complete_url("https://a.com/dir/page.html", "../x.js").as_deref(),
        Some("https://a.com/x.js")
    );
    assert_eq!(
        complete_url("https://a.com/dir/", "?q=2").as_deref(),
        Some("https://a.com/dir/?q=2")
    );
    assert_eq!(
        complete_url("data:text/plain,hi", "whatever").as_deref(),
        Some("whatever")
    );
    assert_eq!(complete_url("::bad::", "x.js"), None);
}

#[test]
fn split_location_example() {
    assert_eq!(
        split_line_and_column("app.js:10:5"),
        SourceLocation {
            url: "app.js".to_string(),
            line_number: Some(9),
            column_number: Some(4),
        }
    );
}

#[test]
fn file_path_url_round_trip() {
    for path in [
        "/a/b c.txt",
        "/tmp/semi;colon#hash?q%.js",
        "/plain/file",
        "//host/share/x",
    ] {
        let url = raw_path_to_url_string(path).unwrap();
        assert!(url.starts_with("file:///"), "{url}");
        assert_eq!(url_to_raw_path_string(&url, false), path);
    }
    let url = raw_path_to_url_string("D:\\work\\a b.ts").unwrap();
    assert_eq!(url_to_raw_path_string(&url, true), "D:\\work\\a b.ts");

    // A UNC path keeps its empty-host form; the Windows conversion drops one separator.
    let url = raw_path_to_url_string("\\\\server\\share\\f.txt").unwrap();
    assert_eq!(url, "file:////server/share/f.txt");
    assert_eq!(url_to_raw_path_string(&url, true), "\\server\\share\\f.txt");
}

#[test]
fn encoded_path_round_trip() {
    for path in ["/a/b c.txt", "rel/100%.txt", "/x;y#z?w"] {
        let encoded = raw_path_to_encoded_path_string(path).unwrap();
        assert_eq!(encoded_path_to_raw_path_string(&encoded), path);
    }
}
