pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod engines;
pub mod error;
pub mod http;
pub mod models;
pub mod resolvers;
pub mod transformers;

pub use crate::core::Sauce;
pub use config::Config;
pub use error::SearchError;
pub use models::SearchResult;
