use std::sync::Arc;

use futures::future::join_all;

use crate::{
    config::Config,
    core::aggregate::aggregate,
    engines::{SauceNao, filter_by_similarity},
    error::Result,
    http::Fetcher,
    models::{ResolvedMatch, SearchResult},
    resolvers::Resolvers,
};

/// The whole search: query SauceNAO, drop weak matches, resolve every match
/// to a page and keep the best page per source.
pub struct Sauce {
    engine: SauceNao,
    resolvers: Resolvers,
}

impl Sauce {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self {
            engine: SauceNao::new(Arc::clone(&fetcher), &config.saucenao),
            resolvers: Resolvers::new(fetcher, config),
        }
    }

    pub async fn reverse_search(&self, image_url: &str) -> Result<SearchResult> {
        log::info!("Reverse search for {}", image_url);
        let response = self.engine.search(image_url).await?;

        let hits = filter_by_similarity(response.matches, response.similarity_floor);

        // Resolved in parallel, join_all keeps the input order for aggregation.
        let resolved: Vec<ResolvedMatch> =
            join_all(hits.iter().map(|hit| self.resolvers.resolve(hit)))
                .await
                .into_iter()
                .flatten()
                .collect();

        log::info!("{} of {} hits resolved", resolved.len(), hits.len());

        let sources = aggregate(&resolved);
        log::info!("Found {} sources", sources.len());

        Ok(SearchResult {
            similarity_floor: response.similarity_floor,
            short_remaining: response.short_remaining,
            long_remaining: response.long_remaining,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::http::stub::StubFetcher;

    const IMAGE: &str = "https://cdn.example.com/image.jpg";

    fn query_url() -> String {
        format!(
            "https://saucenao.com/search.php?api_key=&db=999&output_type=2&url={}",
            urlencoding::encode(IMAGE)
        )
    }

    fn sauce(fetcher: StubFetcher) -> Sauce {
        Sauce::new(Arc::new(fetcher), &Config::default())
    }

    #[tokio::test]
    async fn test_pixiv_pages_collapse() {
        let body = r#"{
            "header": {"minimum_similarity": 60, "short_remaining": 4, "long_remaining": 99},
            "results": [
                {"header": {"similarity": "90.0", "index_id": 5},
                 "data": {"ext_urls": ["https://i.pximg.net/img-original/img/2020/01/01/00/00/00/12345_p0.jpg"]}},
                {"header": {"similarity": "95.0", "index_id": 5},
                 "data": {"ext_urls": ["https://i.pximg.net/img-original/img/2020/01/01/00/00/00/12345_p1.jpg"]}}
            ]
        }"#;
        let sauce = sauce(StubFetcher::new().page(&query_url(), 200, body));

        let result = sauce.reverse_search(IMAGE).await.unwrap();
        assert_eq!(result.similarity_floor, 60.0);
        assert_eq!(result.short_remaining, 4);
        assert_eq!(result.long_remaining, 99);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources["Pixiv"], "https://www.pixiv.net/artworks/12345");
    }

    #[tokio::test]
    async fn test_unresolvable_match_is_dropped() {
        let body = r#"{
            "header": {"minimum_similarity": 60},
            "results": [
                {"header": {"similarity": "80.0", "index_id": 41}, "data": {"ext_urls": []}},
                {"header": {"similarity": "70.0", "index_id": 9},
                 "data": {"ext_urls": ["https://danbooru.donmai.us/post/show/1"]}}
            ]
        }"#;
        let sauce = sauce(StubFetcher::new().page(&query_url(), 200, body));

        let result = sauce.reverse_search(IMAGE).await.unwrap();
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources["Danbooru"], "https://danbooru.donmai.us/post/show/1");
    }

    #[tokio::test]
    async fn test_below_floor_never_surfaces() {
        let body = r#"{
            "header": {"minimum_similarity": 60},
            "results": [
                {"header": {"similarity": "59.9", "index_id": 9},
                 "data": {"ext_urls": ["https://danbooru.donmai.us/post/show/1"]}},
                {"header": {"similarity": "60.0", "index_id": 12},
                 "data": {"ext_urls": ["https://yande.re/post/show/2"]}},
                {"header": {"similarity": "12.0", "index_id": 38},
                 "data": {"eng_name": "Never Looked Up"}}
            ]
        }"#;
        let fetcher = Arc::new(StubFetcher::new().page(&query_url(), 200, body));
        let sauce = Sauce::new(fetcher.clone(), &Config::default());

        let result = sauce.reverse_search(IMAGE).await.unwrap();
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources["Yandere"], "https://yande.re/post/show/2");
        assert_eq!(fetcher.calls(), vec![query_url()]);
    }

    #[tokio::test]
    async fn test_failed_gallery_lookup_is_local() {
        let body = r#"{
            "header": {"minimum_similarity": 50},
            "results": [
                {"header": {"similarity": "88.0", "index_id": 38},
                 "data": {"eng_name": "Some Gallery"}},
                {"header": {"similarity": "77.0", "index_id": 18},
                 "data": {"jp_name": "作品"}},
                {"header": {"similarity": "66.0", "index_id": 9},
                 "data": {"ext_urls": ["https://danbooru.donmai.us/post/show/1"]}}
            ]
        }"#;
        let config = Config::default();
        let ehentai_url = crate::resolvers::search_url(&config.ehentai.search_url, "Some Gallery");
        let nhentai_url = crate::resolvers::search_url(&config.nhentai.search_url, "作品");
        let fetcher = StubFetcher::new()
            .page(&query_url(), 200, body)
            .page(&ehentai_url, 503, "Service Unavailable")
            .page(
                &nhentai_url,
                200,
                r#"<div class="gallery"><a href="/g/42/">作品</a></div>"#,
            );
        let sauce = Sauce::new(Arc::new(fetcher), &config);

        let result = sauce.reverse_search(IMAGE).await.unwrap();
        assert_eq!(result.sources.len(), 2);
        assert!(!result.sources.contains_key("e-hentai"));
        assert_eq!(result.sources["nhentai"], "https://nhentai.net/g/42/");
        assert_eq!(result.sources["Danbooru"], "https://danbooru.donmai.us/post/show/1");
    }

    #[tokio::test]
    async fn test_tie_keeps_provider_order() {
        let body = r#"{
            "header": {"minimum_similarity": 50},
            "results": [
                {"header": {"similarity": "80.0", "index_id": 9},
                 "data": {"ext_urls": ["https://danbooru.donmai.us/post/show/1"]}},
                {"header": {"similarity": "80.0", "index_id": 9},
                 "data": {"ext_urls": ["https://danbooru.donmai.us/post/show/2"]}}
            ]
        }"#;
        let sauce = sauce(StubFetcher::new().page(&query_url(), 200, body));

        let result = sauce.reverse_search(IMAGE).await.unwrap();
        assert_eq!(result.sources["Danbooru"], "https://danbooru.donmai.us/post/show/1");
    }

    #[tokio::test]
    async fn test_transport_error_aborts() {
        let sauce = sauce(StubFetcher::new().fail(&query_url(), "connection reset"));
        let err = sauce.reverse_search(IMAGE).await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unparsable_body_aborts() {
        let sauce = sauce(StubFetcher::new().page(&query_url(), 502, "<html>Bad Gateway</html>"));
        let err = sauce.reverse_search(IMAGE).await.unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }
}
