use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::{
    config::Config,
    error::{Result, SearchError},
    http::Fetcher,
    models::{Database, RawMatch, ResolvedMatch},
};

macro_rules! sel {
    ($sel:literal) => {
        &scraper::Selector::parse($sel).expect("invalid selector")
    };
}

pub mod ehentai;
pub mod generic;
pub mod nhentai;
pub mod pixiv;

pub use ehentai::EHentai;
pub use generic::Generic;
pub use nhentai::NHentai;
pub use pixiv::Pixiv;

/// Turns a match into the URL of the page it came from.
#[async_trait]
pub trait Resolver: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` means the match has no recoverable link and is dropped.
    async fn resolve(&self, hit: &RawMatch) -> Option<String>;
}

pub(crate) type BoxedResolver = Box<dyn Resolver + Send + Sync>;

/// Per database strategies, everything else goes through [`Generic`].
pub struct Resolvers {
    strategies: HashMap<i64, BoxedResolver>,
    fallback: Generic,
}

impl Resolvers {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        let mut strategies: HashMap<i64, BoxedResolver> = HashMap::new();
        strategies.insert(Database::Pixiv.index(), Box::new(Pixiv::new()));
        strategies.insert(
            Database::EHentai.index(),
            Box::new(EHentai::new(Arc::clone(&fetcher), &config.ehentai)),
        );
        strategies.insert(
            Database::NHentai.index(),
            Box::new(NHentai::new(Arc::clone(&fetcher), &config.nhentai)),
        );

        Self {
            strategies,
            fallback: Generic::new(),
        }
    }

    pub fn for_index(&self, database_index: i64) -> &dyn Resolver {
        match self.strategies.get(&database_index) {
            Some(strategy) => &**strategy,
            None => &self.fallback,
        }
    }

    pub async fn resolve(&self, hit: &RawMatch) -> Option<ResolvedMatch> {
        let resolver = self.for_index(hit.database_index);
        log::debug!(
            "Resolving {} match ({}%) with {}",
            Database::describe(hit.database_index),
            hit.similarity,
            resolver.name()
        );

        let url = resolver.resolve(hit).await?;
        if url.is_empty() {
            return None;
        }

        log::debug!("Resolved to {}", url);
        Some(ResolvedMatch {
            database_index: hit.database_index,
            similarity: hit.similarity,
            url,
        })
    }
}

/// Put the percent-encoded `query` into a `{query}` search URL template.
pub(crate) fn search_url(template: &str, query: &str) -> String {
    template.replace("{query}", &urlencoding::encode(query))
}

/// Fetch a gallery search page as text. Non-success and non-UTF-8 bodies
/// are errors here, the strategies turn every error into a miss.
pub(crate) async fn fetch_html(fetcher: &dyn Fetcher, url: &str) -> Result<String> {
    let page = fetcher.get(url).await?;
    if !page.is_success() {
        return Err(SearchError::UnexpectedStatus {
            status: page.status,
            url: url.to_string(),
        });
    }
    String::from_utf8(page.body).map_err(|e| SearchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::stub::StubFetcher;

    fn resolvers() -> Resolvers {
        Resolvers::new(Arc::new(StubFetcher::new()), &Config::default())
    }

    #[test]
    fn test_strategy_selection() {
        let resolvers = resolvers();
        assert_eq!(resolvers.for_index(5).name(), "pixiv");
        assert_eq!(resolvers.for_index(38).name(), "e-hentai");
        assert_eq!(resolvers.for_index(18).name(), "nhentai");
        assert_eq!(resolvers.for_index(6).name(), "generic");
        assert_eq!(resolvers.for_index(9).name(), "generic");
        assert_eq!(resolvers.for_index(-1).name(), "generic");
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("https://nhentai.net/search/?q={query}", "a title/1"),
            "https://nhentai.net/search/?q=a%20title%2F1"
        );
    }

    #[tokio::test]
    async fn test_resolve_keeps_match_data() {
        let hit = RawMatch {
            database_index: 9,
            similarity: 88.5,
            ext_urls: vec!["https://danbooru.donmai.us/post/show/1".to_string()],
            ..Default::default()
        };
        let resolved = resolvers().resolve(&hit).await.unwrap();
        assert_eq!(
            resolved,
            ResolvedMatch {
                database_index: 9,
                similarity: 88.5,
                url: "https://danbooru.donmai.us/post/show/1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_drops_unresolvable() {
        let hit = RawMatch {
            database_index: 9,
            similarity: 80.0,
            ..Default::default()
        };
        assert_eq!(resolvers().resolve(&hit).await, None);
    }

    #[tokio::test]
    async fn test_resolve_drops_empty_url() {
        let hit = RawMatch {
            database_index: 9,
            similarity: 80.0,
            ext_urls: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(resolvers().resolve(&hit).await, None);
    }

    #[tokio::test]
    async fn test_fetch_html_status() {
        let fetcher = StubFetcher::new().page("https://gallery.test/", 503, "busy");
        let err = fetch_html(&fetcher, "https://gallery.test/").await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::UnexpectedStatus { status: 503, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_html_not_utf8() {
        let fetcher = StubFetcher::new().raw_page("https://gallery.test/", 200, vec![0xff, 0xfe]);
        let err = fetch_html(&fetcher, "https://gallery.test/").await.unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
