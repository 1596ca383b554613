use regex::Regex;

/// Ordered `(host fragment, source name)` pairs, the first fragment contained
/// in a URL decides its source. Order is significant.
const SOURCES: &[(&str, &str)] = &[
    ("pixiv.net", "Pixiv"),
    ("danbooru.donmai.us", "Danbooru"),
    ("gelbooru.com", "Gelbooru"),
    ("chan.sankakucomplex.com", "Sankaku"),
    ("anime-pictures.net", "Anime Pictures"),
    ("i.redd.it", "Reddit"),
    ("yande.re", "Yandere"),
    ("imdb.com", "IMDB"),
    ("deviantart.com", "Deviantart"),
    ("twitter.com", "Twitter"),
    ("nijie.info", "Nijie"),
    ("pawoo.net", "Pawoo"),
    ("seiga.nicovideo.jp", "Seiga Nicovideo"),
    ("tumblr.com", "Tumblr"),
    ("anidb.net", "Anidb"),
    ("mangadex.org", "MangaDex"),
    ("mangaupdates.com", "MangaUpdates"),
    ("myanimelist.net", "MyAnimeList"),
    ("furaffinity.net", "FurAffinity"),
    ("artstation.com", "ArtStation"),
    ("bcy.net", "BCY"),
    ("konachan.com", "Konachan"),
    ("fanbox.cc", "Pixiv Fanbox"),
    ("e621.net", "e621"),
    ("exhentai.org", "exhentai"),
    ("e-hentai.org", "e-hentai"),
    ("nhentai.net", "nhentai"),
    ("fantia.jp", "Fantia"),
];

pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Canonical source name of `url`.
pub fn source_name(url: &str) -> &'static str {
    SOURCES
        .iter()
        .find(|(fragment, _)| url.contains(fragment))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_SOURCE)
}

pub(crate) fn re_find(re: &Regex, input: &str) -> Option<String> {
    re.captures(input)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}
