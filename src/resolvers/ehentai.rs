use std::sync::Arc;

use async_trait::async_trait;
use scraper::Html;

use crate::config;
use crate::error::Result;
use crate::http::Fetcher;
use crate::models::RawMatch;
use crate::resolvers::{Generic, Resolver, fetch_html, search_url};

/// Looks the gallery up by title on e-hentai, SauceNAO only knows its
/// internal id.
#[derive(Clone)]
pub struct EHentai {
    fetcher: Arc<dyn Fetcher>,
    search_url: String,
}

impl EHentai {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &config::EHentai) -> Self {
        Self {
            fetcher,
            search_url: config.search_url.clone(),
        }
    }

    pub(crate) fn search_url(&self, title: &str) -> String {
        search_url(&self.search_url, title)
    }

    async fn find_gallery(&self, title: &str) -> Result<Option<String>> {
        let url = self.search_url(title);
        log::info!("Searching e-hentai for {}", title);
        let html = fetch_html(self.fetcher.as_ref(), &url).await?;
        Ok(parse_gallery(&html, title))
    }
}

/// `href` of the first `.glname a` whose `.glink` label equals `title`.
fn parse_gallery(html: &str, title: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(sel!(".glname a"))
        .find(|link| {
            link.select(sel!(".glink"))
                .next()
                .is_some_and(|label| label.text().collect::<String>() == title)
        })
        .and_then(|link| link.value().attr("href"))
        .map(str::to_string)
}

#[async_trait]
impl Resolver for EHentai {
    fn name(&self) -> &'static str {
        "e-hentai"
    }

    async fn resolve(&self, hit: &RawMatch) -> Option<String> {
        let Some(title) = hit.title() else {
            log::debug!("No title for e-hentai match, using ext_urls");
            return Generic::first_url(hit);
        };

        match self.find_gallery(title).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                log::info!("No e-hentai gallery labelled {}", title);
                None
            }
            Err(e) => {
                log::error!("e-hentai lookup for {} failed: {}", title, e);
                None
            }
        }
    }
}
