//! CLI command handlers, grouped by the part of the URL model they drive.

mod complete;
mod extract;
mod file_path;
mod location;
mod normalize;
mod parse;

pub use complete::run_complete;
pub use extract::{run_extension, run_name, run_origin};
pub use file_path::{run_decode_path, run_encode_path, run_to_path, run_to_url};
pub use location::run_split_location;
pub use normalize::run_normalize;
pub use parse::run_parse;
