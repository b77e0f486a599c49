pub mod config;
pub mod error;
pub mod logging;
pub mod url_model;

pub use error::UrlModelError;
pub use url_model::ParsedUrl;
