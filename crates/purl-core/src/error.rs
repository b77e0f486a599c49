//! Error type for URL model operations that go through a WHATWG URL constructor.

use thiserror::Error;

/// Errors surfaced by file-path and URL conversions.
///
/// Parsing into a [`crate::ParsedUrl`] never fails; only the helpers that build a
/// canonical URL string can.
#[derive(Debug, Error)]
pub enum UrlModelError {
    /// The URL constructor rejected the (pre-encoded) input.
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

impl UrlModelError {
    pub(crate) fn invalid_url(input: impl Into<String>, source: url::ParseError) -> Self {
        UrlModelError::InvalidUrl {
            input: input.into(),
            source,
        }
    }
}
