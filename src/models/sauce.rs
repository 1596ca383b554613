use serde::{Deserialize, Serialize};

/// One entry of the SauceNAO `results` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    /// SauceNAO `index_id` of the database this match comes from
    pub database_index: i64,
    /// Similarity score, 0 to 100
    pub similarity: f64,
    /// Candidate source URLs in provider order
    pub ext_urls: Vec<String>,
    pub eng_name: String,
    pub jp_name: String,
}

impl RawMatch {
    /// Title used for gallery lookups, English first.
    pub fn title(&self) -> Option<&str> {
        [self.eng_name.as_str(), self.jp_name.as_str()]
            .into_iter()
            .find(|name| !name.is_empty())
    }

    pub fn first_url(&self) -> Option<&str> {
        self.ext_urls.first().map(String::as_str)
    }
}

/// Decoded SauceNAO response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SauceResponse {
    /// `header.status`: 0 is fine, anything else is a provider side complaint
    pub status: i64,
    pub message: Option<String>,
    pub similarity_floor: f64,
    pub short_remaining: i64,
    pub long_remaining: i64,
    pub matches: Vec<RawMatch>,
}
