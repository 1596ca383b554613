pub mod url;

pub use url::{UNKNOWN_SOURCE, source_name};
