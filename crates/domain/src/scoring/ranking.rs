//! Ranking of scored items

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub identity: String,
    pub score: f64,
}

/// Order scored items by ascending score, lowest first.
///
/// The sort is stable: items with equal scores keep their input order.
pub fn rank(scores: impl IntoIterator<Item = (String, f64)>) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = scores
        .into_iter()
        .map(|(identity, score)| RankedItem { identity, score })
        .collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

/// Highest score first. Ties keep their input order here too.
pub fn best_first(mut ranked: Vec<RankedItem>) -> Vec<RankedItem> {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
