use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the per-repository star ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRank {
    pub name: String,
    pub stars: u64,
}

/// Summary metrics derived from a repository collection.
///
/// `languages` is unordered by construction; display consumers should use
/// [`StatsSummary::languages_by_count`]. `stars_per_repo` is sorted
/// descending by stars with input order preserved on ties, so
/// `total_stars` always equals the sum over the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,
    pub languages: HashMap<String, u64>,
    pub stars_per_repo: Vec<StarRank>,
}

impl StatsSummary {
    /// Language histogram sorted descending by repository count.
    /// Ties are broken by language name so the ordering is deterministic.
    pub fn languages_by_count(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .languages
            .iter()
            .map(|(lang, count)| (lang.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
