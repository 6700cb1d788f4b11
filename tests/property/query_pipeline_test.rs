//! Property-based tests for the project query engine.
//!
//! The pipeline must be deterministic, its output a subset of the input
//! satisfying every stage's predicate, and the final ordering consistent
//! with the selected comparator.

use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use gitfolio::services::project_query;
use gitfolio::types::github::Repository;
use gitfolio::types::query::{
    Category, LanguageFilter, ProjectFilter, SortDirection, SortKey,
};
use proptest::prelude::*;

fn arb_repos() -> impl Strategy<Value = Vec<Repository>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::option::of("[a-z ]{0,16}"),
            prop::option::of(prop_oneof![Just("Go".to_string()), Just("Rust".to_string())]),
            0u64..10,
            any::<bool>(),
            0i64..1000,
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(
                |(i, (name, description, language, stars, is_fork, updated))| Repository {
                    id: i as u64,
                    name,
                    description,
                    language,
                    stars,
                    forks: 0,
                    watchers: 0,
                    is_fork,
                    archived: false,
                    homepage: None,
                    updated_at: Utc.timestamp_opt(1_600_000_000 + updated, 0).unwrap(),
                    visibility: "public".to_string(),
                    html_url: String::new(),
                },
            )
            .collect()
    })
}

fn arb_filter() -> impl Strategy<Value = ProjectFilter> {
    (
        "[a-zA-Z]{0,3}",
        prop_oneof![
            Just(Category::All),
            Just(Category::Bookmarked),
            Just(Category::Source),
            Just(Category::Forked),
        ],
        prop_oneof![
            Just(LanguageFilter::All),
            Just(LanguageFilter::Only("Go".to_string())),
            Just(LanguageFilter::Only("Rust".to_string())),
            Just(LanguageFilter::Only("COBOL".to_string())),
        ],
        prop_oneof![Just(SortKey::Updated), Just(SortKey::Stars), Just(SortKey::Name)],
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
    )
        .prop_map(|(search, category, language, sort_key, direction)| ProjectFilter {
            search,
            category,
            language,
            sort_key,
            direction,
        })
}

fn arb_bookmarks() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..30, 0..8)
}

/// The stage predicates restated independently of the engine.
fn passes(repo: &Repository, filter: &ProjectFilter, bookmarks: &[u64]) -> bool {
    let query = filter.search.to_lowercase();
    let search_ok = query.is_empty()
        || repo.name.to_lowercase().contains(&query)
        || repo
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false);
    let category_ok = match filter.category {
        Category::All => true,
        Category::Bookmarked => bookmarks.contains(&repo.id),
        Category::Forked => repo.is_fork,
        Category::Source => !repo.is_fork,
    };
    let language_ok = match &filter.language {
        LanguageFilter::All => true,
        LanguageFilter::Only(wanted) => repo.language.as_deref() == Some(wanted.as_str()),
    };
    search_ok && category_ok && language_ok
}

fn comparator(filter: &ProjectFilter, a: &Repository, b: &Repository) -> Ordering {
    let ordering = match filter.sort_key {
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        SortKey::Stars => a.stars.cmp(&b.stars),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    };
    match filter.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_exactly_the_passing_subset(
        repos in arb_repos(),
        filter in arb_filter(),
        bookmarks in arb_bookmarks(),
    ) {
        let visible = project_query::run(&repos, &filter, &bookmarks);

        // No inventions and no duplicates: ids map back into the input.
        let mut seen = std::collections::HashSet::new();
        for repo in &visible {
            prop_assert!(repos.iter().any(|r| r.id == repo.id));
            prop_assert!(seen.insert(repo.id));
            prop_assert!(passes(repo, &filter, &bookmarks));
        }

        // Nothing that passes every stage goes missing.
        let expected = repos.iter().filter(|r| passes(r, &filter, &bookmarks)).count();
        prop_assert_eq!(visible.len(), expected);
    }

    #[test]
    fn output_is_ordered_by_the_selected_comparator(
        repos in arb_repos(),
        filter in arb_filter(),
        bookmarks in arb_bookmarks(),
    ) {
        let visible = project_query::run(&repos, &filter, &bookmarks);
        for pair in visible.windows(2) {
            prop_assert_ne!(comparator(&filter, &pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn query_is_deterministic(
        repos in arb_repos(),
        filter in arb_filter(),
        bookmarks in arb_bookmarks(),
    ) {
        prop_assert_eq!(
            project_query::run(&repos, &filter, &bookmarks),
            project_query::run(&repos, &filter, &bookmarks)
        );
    }

    #[test]
    fn search_ignores_query_case(
        repos in arb_repos(),
        query in "[a-zA-Z]{1,3}",
    ) {
        let lower = ProjectFilter { search: query.to_lowercase(), ..ProjectFilter::default() };
        let upper = ProjectFilter { search: query.to_uppercase(), ..ProjectFilter::default() };
        prop_assert_eq!(
            project_query::run(&repos, &lower, &[]),
            project_query::run(&repos, &upper, &[])
        );
    }
}
