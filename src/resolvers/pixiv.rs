use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RawMatch;
use crate::resolvers::{Generic, Resolver};
use crate::transformers::url::re_find;

const ARTWORK_URL: &str = "https://www.pixiv.net/artworks/";

static IMAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)_p\d+").expect("invalid pixiv image regex"));
static MEMBER_ILLUST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"www\.pixiv\.net/member_illust\.php\?mode=medium&illust_id=(\d+)")
        .expect("invalid pixiv member_illust regex")
});

/// Rewrites pixiv image and legacy page URLs to the artwork page. No network.
#[derive(Clone, Default)]
pub struct Pixiv;

impl Pixiv {
    pub fn new() -> Self {
        Self
    }

    /// `i.pximg.net/.../<id>_p<N>.<ext>` and `member_illust.php?...&illust_id=<id>`
    /// both become `www.pixiv.net/artworks/<id>`. Anything else is returned as is.
    pub fn artwork_url(url: &str) -> String {
        if url.contains("i.pximg.net") {
            let file_name = url
                .split(['?', '#'])
                .next()
                .and_then(|path| path.rsplit('/').next())
                .unwrap_or_default();
            if let Some(id) = re_find(&IMAGE_ID, file_name) {
                return format!("{ARTWORK_URL}{id}");
            }
        }

        MEMBER_ILLUST
            .replace_all(url, "www.pixiv.net/artworks/${1}")
            .into_owned()
    }
}

#[async_trait]
impl Resolver for Pixiv {
    fn name(&self) -> &'static str {
        "pixiv"
    }

    async fn resolve(&self, hit: &RawMatch) -> Option<String> {
        Generic::first_url(hit).map(|url| Pixiv::artwork_url(&url))
    }
}
