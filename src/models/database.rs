/// SauceNAO source databases, keyed by their `index_id`.
///
/// See <https://saucenao.com/tools/examples/api/index_details.txt>
#[derive(strum_macros::Display, strum_macros::FromRepr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum Database {
    #[strum(to_string = "h-mags")]
    HMags = 0,
    #[strum(to_string = "h-anime")]
    HAnimeLegacy = 1,
    #[strum(to_string = "hcg")]
    Hcg = 2,
    #[strum(to_string = "ddb-objects")]
    DdbObjects = 3,
    #[strum(to_string = "ddb-samples")]
    DdbSamples = 4,
    Pixiv = 5,
    PixivHistorical = 6,
    #[strum(to_string = "anime")]
    AnimeLegacy = 7,
    #[strum(to_string = "NicoNico Seiga")]
    NicoNicoSeiga = 8,
    Danbooru = 9,
    #[strum(to_string = "drawr")]
    Drawr = 10,
    Nijie = 11,
    #[strum(to_string = "yande.re")]
    YandeRe = 12,
    #[strum(to_string = "animeop")]
    AnimeOp = 13,
    #[strum(to_string = "IMDb")]
    Imdb = 14,
    Shutterstock = 15,
    #[strum(to_string = "FAKKU")]
    Fakku = 16,
    #[strum(to_string = "nhentai")]
    NHentai = 18,
    #[strum(to_string = "2d_market")]
    TwoDMarket = 19,
    #[strum(to_string = "medibang")]
    Medibang = 20,
    Anime = 21,
    #[strum(to_string = "H-Anime")]
    HAnime = 22,
    Movies = 23,
    Shows = 24,
    #[strum(to_string = "gelbooru")]
    Gelbooru = 25,
    #[strum(to_string = "konachan")]
    Konachan = 26,
    #[strum(to_string = "sankaku")]
    Sankaku = 27,
    #[strum(to_string = "anime-pictures")]
    AnimePictures = 28,
    #[strum(to_string = "e621")]
    E621 = 29,
    #[strum(to_string = "idol complex")]
    IdolComplex = 30,
    #[strum(to_string = "bcy illust")]
    BcyIllust = 31,
    #[strum(to_string = "bcy cosplay")]
    BcyCosplay = 32,
    #[strum(to_string = "portalgraphics")]
    PortalGraphics = 33,
    #[strum(to_string = "dA")]
    DeviantArt = 34,
    #[strum(to_string = "pawoo")]
    Pawoo = 35,
    #[strum(to_string = "madokami")]
    Madokami = 36,
    #[strum(to_string = "mangadex")]
    MangaDex = 37,
    #[strum(to_string = "ehentai")]
    EHentai = 38,
    ArtStation = 39,
    FurAffinity = 40,
    Twitter = 41,
    #[strum(to_string = "Furry Network")]
    FurryNetwork = 42,
}

impl Database {
    /// Sentinel for "search every database" in the `db` query parameter.
    pub const ALL: i64 = 999;

    pub fn from_index(index: i64) -> Option<Database> {
        Database::from_repr(index)
    }

    pub fn index(&self) -> i64 {
        *self as i64
    }

    /// Human readable label for an index, including ones we don't know.
    pub fn describe(index: i64) -> String {
        match Database::from_index(index) {
            Some(database) => format!("{} ({})", database, index),
            None => format!("unknown ({})", index),
        }
    }
}
