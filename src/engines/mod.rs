use crate::models::RawMatch;

pub mod saucenao;

pub use saucenao::SauceNao;

/// Keep the matches at or above `floor`, in their original order.
pub fn filter_by_similarity(hits: Vec<RawMatch>, floor: f64) -> Vec<RawMatch> {
    log::info!("Filtering {} hits with threshold {}", hits.len(), floor);

    log::debug!(
        "Similarities: {}",
        hits.iter()
            .map(|hit| hit.similarity.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    );

    let total = hits.len();
    let hits: Vec<RawMatch> = hits
        .into_iter()
        .filter(|hit| hit.similarity >= floor)
        .collect();

    log::info!("{} hits left from {} hits", hits.len(), total);

    hits
}
