use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A match whose database strategy produced a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMatch {
    pub database_index: i64,
    pub similarity: f64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimum similarity SauceNAO considered valid for this search
    pub similarity_floor: f64,
    /// Searches left in the short (30s) window
    pub short_remaining: i64,
    /// Searches left in the long (24h) window
    pub long_remaining: i64,
    /// Canonical source name to the best URL for it
    pub sources: HashMap<String, String>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sources sorted by name.
    pub fn sorted_sources(&self) -> Vec<(&str, &str)> {
        let mut sources: Vec<(&str, &str)> = self
            .sources
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
            .collect();
        sources.sort();
        sources
    }
}
