//! Project Query Engine — filterable, sortable, bookmarkable view over a
//! repository collection.
//!
//! Pure transformation: the caller owns the collection, the filter state
//! and the bookmark set, and re-invokes the query whenever any of them
//! changes. Bookmark toggling itself lives in the bookmark manager.

use std::cmp::Ordering;

use crate::types::github::Repository;
use crate::types::query::{Category, LanguageFilter, ProjectFilter, SortDirection, SortKey};

/// Applies the filter pipeline and sort to a repository collection,
/// producing an owned ordered view.
///
/// Stages run in a fixed order, each narrowing the previous stage's
/// output: text search, category tab, language filter, then the sort.
/// Short-circuiting to an empty result at any stage is valid.
pub fn run(
    repositories: &[Repository],
    filter: &ProjectFilter,
    bookmarks: &[u64],
) -> Vec<Repository> {
    let query = filter.search.to_lowercase();

    let mut result: Vec<Repository> = repositories
        .iter()
        .filter(|repo| matches_search(repo, &query))
        .filter(|repo| matches_category(repo, filter.category, bookmarks))
        .filter(|repo| matches_language(repo, &filter.language))
        .cloned()
        .collect();

    // Vec::sort_by is stable: equal keys keep the upstream order.
    result.sort_by(|a, b| {
        let ordering = match filter.sort_key {
            SortKey::Updated => a.updated_at.cmp(&b.updated_at),
            SortKey::Stars => a.stars.cmp(&b.stars),
            SortKey::Name => compare_names(&a.name, &b.name),
        };
        match filter.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    result
}

/// The language choices for the filter menu: the literal `all` entry
/// followed by every distinct non-empty primary language across the
/// unfiltered collection, in first-encountered order.
pub fn language_options(repositories: &[Repository]) -> Vec<String> {
    let mut options = vec!["all".to_string()];
    for repo in repositories {
        if let Some(language) = &repo.language {
            if !language.is_empty() && !options[1..].iter().any(|l| l == language) {
                options.push(language.clone());
            }
        }
    }
    options
}

/// Case-insensitive substring match against name or description. A missing
/// description never matches a non-empty query; an empty query passes
/// everything through.
fn matches_search(repo: &Repository, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if repo.name.to_lowercase().contains(query) {
        return true;
    }
    repo.description
        .as_deref()
        .map(|d| d.to_lowercase().contains(query))
        .unwrap_or(false)
}

fn matches_category(repo: &Repository, category: Category, bookmarks: &[u64]) -> bool {
    match category {
        Category::All => true,
        Category::Bookmarked => bookmarks.contains(&repo.id),
        Category::Forked => repo.is_fork,
        Category::Source => !repo.is_fork,
    }
}

/// Exact language match. Repositories without a primary language are
/// excluded by any specific filter.
fn matches_language(repo: &Repository, language: &LanguageFilter) -> bool {
    match language {
        LanguageFilter::All => true,
        LanguageFilter::Only(wanted) => repo.language.as_deref() == Some(wanted.as_str()),
    }
}

/// Case-insensitive lexicographic name comparison. Names equal under
/// folding compare equal so the stable sort preserves their prior order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
