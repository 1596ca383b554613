pub mod database;
pub mod sauce;
pub mod search_result;

pub use database::Database;
pub use sauce::{RawMatch, SauceResponse};
pub use search_result::{ResolvedMatch, SearchResult};
