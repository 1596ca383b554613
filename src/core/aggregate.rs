use std::collections::HashMap;

use crate::models::ResolvedMatch;
use crate::transformers::source_name;

/// One URL per source name, the most similar match wins. On equal similarity
/// the earlier match is kept, so `resolved` must be in provider order.
pub fn aggregate(resolved: &[ResolvedMatch]) -> HashMap<String, String> {
    let mut best: HashMap<&'static str, &ResolvedMatch> = HashMap::new();

    for hit in resolved {
        let source = source_name(&hit.url);
        best.entry(source)
            .and_modify(|current| {
                if hit.similarity > current.similarity {
                    log::debug!(
                        "{} replaces {} for {} ({} > {})",
                        hit.url,
                        current.url,
                        source,
                        hit.similarity,
                        current.similarity
                    );
                    *current = hit;
                }
            })
            .or_insert(hit);
    }

    best.into_iter()
        .map(|(source, hit)| (source.to_string(), hit.url.clone()))
        .collect()
}
