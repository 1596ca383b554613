use std::sync::Arc;

use serde_json::Value;

use crate::config;
use crate::error::{Result, SearchError};
use crate::http::Fetcher;
use crate::models::{Database, RawMatch, SauceResponse};

/// JSON output, `output_type=2`
const OUTPUT_JSON: u8 = 2;

#[derive(Clone)]
pub struct SauceNao {
    fetcher: Arc<dyn Fetcher>,
    token: String,
    url: String,
}

impl SauceNao {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &config::SauceNao) -> Self {
        Self {
            fetcher,
            token: config.token.clone(),
            url: config.url.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        "saucenao"
    }

    pub(crate) fn query_url(&self, image_url: &str) -> String {
        format!(
            "{}?api_key={}&db={}&output_type={}&url={}",
            self.url,
            urlencoding::encode(&self.token),
            Database::ALL,
            OUTPUT_JSON,
            urlencoding::encode(image_url)
        )
    }

    /// Single GET against the search endpoint. A non-success status is only
    /// logged, SauceNAO puts a usable error header in those bodies too.
    pub async fn query(&self, image_url: &str) -> Result<Vec<u8>> {
        log::info!("Searching {} for {}", self.name(), image_url);
        let url = self.query_url(image_url);

        let page = match self.fetcher.get(&url).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Saucenao error: {}", e);
                return Err(e);
            }
        };

        if !page.is_success() {
            let err = SearchError::UnexpectedStatus {
                status: page.status,
                url: self.url.clone(),
            };
            log::error!("{}", err);
        }

        Ok(page.body)
    }

    pub async fn search(&self, image_url: &str) -> Result<SauceResponse> {
        let body = self.query(image_url).await?;
        let response = parse_response(&body)?;

        if response.status != 0 {
            log::warn!(
                "Saucenao header status {}: {}",
                response.status,
                response.message.as_deref().unwrap_or("no message")
            );
        }

        log::info!(
            "Saucenao returned {} matches, minimum similarity {}, remaining {}/{}",
            response.matches.len(),
            response.similarity_floor,
            response.short_remaining,
            response.long_remaining
        );

        Ok(response)
    }
}

/// `nan` and `inf` parse as floats but are malformed here, like any other junk.
fn float(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f: &f64| f.is_finite()).unwrap_or(0.0)
}

fn int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn parse_match(item: &Value) -> RawMatch {
    let header = item.get("header");
    let data = item.get("data");
    let field = |name: &str| data.and_then(|d| d.get(name));

    let ext_urls = match field("ext_urls") {
        Some(Value::Array(urls)) => urls
            .iter()
            .filter_map(|u| u.as_str())
            .map(str::to_string)
            .collect(),
        Some(Value::String(url)) => vec![url.clone()],
        _ => Vec::new(),
    };

    RawMatch {
        database_index: int(header.and_then(|h| h.get("index_id"))),
        similarity: float(header.and_then(|h| h.get("similarity"))),
        ext_urls,
        eng_name: string(field("eng_name")),
        jp_name: string(field("jp_name")),
    }
}

/// Decode a SauceNAO body. Only a body that is not JSON at all is an error,
/// missing or mistyped fields fall back to zero values.
pub fn parse_response(body: &[u8]) -> Result<SauceResponse> {
    let root: Value =
        serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    let header = root.get("header");
    let header_field = |name: &str| header.and_then(|h| h.get(name));

    let matches = match root.get("results") {
        Some(Value::Array(results)) => results.iter().map(parse_match).collect(),
        _ => Vec::new(),
    };

    Ok(SauceResponse {
        status: int(header_field("status")),
        message: header_field("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        similarity_floor: float(header_field("minimum_similarity")),
        short_remaining: int(header_field("short_remaining")),
        long_remaining: int(header_field("long_remaining")),
        matches,
    })
}
