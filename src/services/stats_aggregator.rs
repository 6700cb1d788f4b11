//! Stats Aggregator — reduces a repository collection into summary metrics.
//!
//! Pure transformation: no storage, no I/O. Re-running on the same snapshot
//! yields an equal value.

use std::collections::HashMap;

use crate::types::github::Repository;
use crate::types::stats::{StarRank, StatsSummary};

/// Aggregates a repository collection into a [`StatsSummary`].
///
/// Iterates once, accumulating star/fork/watcher totals and the language
/// histogram (one vote per repository; repositories without a primary
/// language contribute to no bucket). The star ranking includes every
/// repository, zero-star ones too, sorted descending with input order
/// preserved on ties.
///
/// An empty collection yields all-zero sums, an empty histogram and an
/// empty ranking.
pub fn aggregate(repositories: &[Repository]) -> StatsSummary {
    let mut total_stars = 0u64;
    let mut total_forks = 0u64;
    let mut total_watchers = 0u64;
    let mut languages: HashMap<String, u64> = HashMap::new();
    let mut stars_per_repo: Vec<StarRank> = Vec::with_capacity(repositories.len());

    for repo in repositories {
        total_stars += repo.stars;
        total_forks += repo.forks;
        total_watchers += repo.watchers;

        if let Some(language) = &repo.language {
            *languages.entry(language.clone()).or_insert(0) += 1;
        }

        stars_per_repo.push(StarRank {
            name: repo.name.clone(),
            stars: repo.stars,
        });
    }

    // Vec::sort_by is stable, so equal star counts keep input order.
    stars_per_repo.sort_by(|a, b| b.stars.cmp(&a.stars));

    StatsSummary {
        total_stars,
        total_forks,
        total_watchers,
        languages,
        stars_per_repo,
    }
}
