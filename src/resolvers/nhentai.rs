use std::sync::Arc;

use async_trait::async_trait;
use scraper::Html;

use crate::config;
use crate::error::Result;
use crate::http::Fetcher;
use crate::models::RawMatch;
use crate::resolvers::{Generic, Resolver, fetch_html, search_url};

#[derive(Clone)]
pub struct NHentai {
    fetcher: Arc<dyn Fetcher>,
    url: String,
    search_url: String,
}

impl NHentai {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &config::NHentai) -> Self {
        Self {
            fetcher,
            url: config.url.trim_end_matches('/').to_string(),
            search_url: config.search_url.clone(),
        }
    }

    pub(crate) fn search_url(&self, title: &str) -> String {
        search_url(&self.search_url, title)
    }

    async fn find_gallery(&self, title: &str) -> Result<Option<String>> {
        let url = self.search_url(title);
        log::info!("Searching nhentai for {}", title);
        let html = fetch_html(self.fetcher.as_ref(), &url).await?;
        Ok(parse_gallery(&html).map(|path| format!("{}{}", self.url, path)))
    }
}

/// `href` of the first gallery on a search page, relative to the site.
fn parse_gallery(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(sel!(".gallery a"))
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string)
}

#[async_trait]
impl Resolver for NHentai {
    fn name(&self) -> &'static str {
        "nhentai"
    }

    async fn resolve(&self, hit: &RawMatch) -> Option<String> {
        let Some(title) = hit.title() else {
            log::debug!("No title for nhentai match, using ext_urls");
            return Generic::first_url(hit);
        };

        match self.find_gallery(title).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                log::info!("No nhentai gallery found for {}", title);
                None
            }
            Err(e) => {
                log::error!("nhentai lookup for {} failed: {}", title, e);
                None
            }
        }
    }
}
