//! URL modeling for developer tooling.
//!
//! Decomposes URL-like strings (including bare file paths, `data:`, `blob:` and
//! `about:blank`), normalizes paths per RFC 3986 §5.2.4, resolves hrefs against a
//! base URL, converts between raw file-system paths and `file://` URLs, and splits
//! `file.js:line:column` location suffixes.

mod complete;
mod extract;
mod file_path;
mod grammar;
mod location;
mod normalize;
mod parsed;
mod percent;

pub use complete::complete_url;
pub use extract::{
    extract_extension, extract_name, extract_origin, extract_path, scheme_is, url_without_hash,
};
pub use file_path::{
    encoded_from_parent_path_and_name, encoded_path_to_raw_path_string,
    pre_encode_special_characters, raw_path_to_encoded_path_string, raw_path_to_url_string,
    relative_path_to_url_string, url_from_parent_url_and_name, url_to_raw_path_string,
};
pub use grammar::{begins_with_scheme, begins_with_windows_drive_letter, is_relative_url};
pub use location::{remove_wasm_function_info_from_url, split_line_and_column, SourceLocation};
pub use normalize::normalize_path;
pub use parsed::{is_valid_url_string, DataUrlMimeType, ParsedUrl};
