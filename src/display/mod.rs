use crate::models::SearchResult;

/// Plain text reply for a finished search.
pub fn format(result: &SearchResult, warning_level: f64) -> String {
    let mut ret = String::new();

    if result.is_empty() {
        ret.push_str("No source found for this image.\n");
    } else {
        for (source, url) in result.sorted_sources() {
            ret.push_str(&format!("{}: {}\n", source, url));
        }
    }

    if result.similarity_floor < warning_level {
        ret.push_str(&format!(
            "Warning: low minimum similarity ({}%), results may be wrong.\n",
            result.similarity_floor
        ));
    }

    ret.push_str(&format!(
        "Remaining searches: {} (30s), {} (24h)\n",
        result.short_remaining, result.long_remaining
    ));

    ret
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn result(floor: f64, sources: &[(&str, &str)]) -> SearchResult {
        SearchResult {
            similarity_floor: floor,
            short_remaining: 5,
            long_remaining: 150,
            sources: sources
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_sources_sorted() {
        let text = format(
            &result(
                70.0,
                &[
                    ("Pixiv", "https://www.pixiv.net/artworks/1"),
                    ("Danbooru", "https://danbooru.donmai.us/posts/2"),
                ],
            ),
            60.0,
        );
        assert_eq!(
            text,
            "Danbooru: https://danbooru.donmai.us/posts/2\n\
             Pixiv: https://www.pixiv.net/artworks/1\n\
             Remaining searches: 5 (30s), 150 (24h)\n"
        );
    }

    #[test]
    fn test_low_similarity_warning() {
        let text = format(&result(45.5, &[("Unknown", "https://example.com")]), 60.0);
        assert!(text.contains("Warning: low minimum similarity (45.5%)"));
    }

    #[test]
    fn test_empty() {
        let text = format(&result(80.0, &[]), 60.0);
        assert!(text.starts_with("No source found"));
        assert!(!text.contains("Warning"));
    }
}
