use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The endpoint could not be reached or the body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    // A body that is not even structurally usable (not JSON, not UTF-8 HTML)
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
