//! Property-based tests for bookmark persistence.
//!
//! For any toggle sequence, in-memory membership equals the odd-count
//! rule, and the persisted representation tracks the set exactly.

use std::sync::Arc;

use gitfolio::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait, BOOKMARKS_KEY};
use gitfolio::services::local_store::{LocalStore, LocalStoreTrait};
use proptest::prelude::*;

/// Strategy for a toggle sequence over a small id space, so repeated
/// toggles of the same id are common.
fn arb_toggles() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=6, 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn membership_follows_odd_toggle_counts(toggles in arb_toggles()) {
        let store = Arc::new(LocalStore::open_in_memory());
        let mut manager = BookmarkManager::new(store);

        for id in &toggles {
            manager.toggle(*id).unwrap();
        }

        for id in 1u64..=6 {
            let odd = toggles.iter().filter(|t| **t == id).count() % 2 == 1;
            prop_assert_eq!(
                manager.is_bookmarked(id),
                odd,
                "id {} toggled {} times",
                id,
                toggles.iter().filter(|t| **t == id).count()
            );
        }
    }

    #[test]
    fn persisted_representation_matches_after_every_toggle(toggles in arb_toggles()) {
        let store = Arc::new(LocalStore::open_in_memory());
        let mut manager = BookmarkManager::new(store.clone());

        for id in &toggles {
            manager.toggle(*id).unwrap();
            let raw = store.get(BOOKMARKS_KEY).unwrap();
            let persisted: Vec<u64> = serde_json::from_str(&raw).unwrap();
            prop_assert_eq!(persisted.as_slice(), manager.ids());
        }
    }

    #[test]
    fn reloading_restores_the_same_set(toggles in arb_toggles()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json").to_string_lossy().to_string();

        {
            let store = Arc::new(LocalStore::open(Some(path.clone())));
            let mut manager = BookmarkManager::new(store);
            for id in &toggles {
                manager.toggle(*id).unwrap();
            }
        }

        let store = Arc::new(LocalStore::open(Some(path)));
        let reloaded = BookmarkManager::new(store);
        for id in 1u64..=6 {
            let odd = toggles.iter().filter(|t| **t == id).count() % 2 == 1;
            prop_assert_eq!(reloaded.is_bookmarked(id), odd);
        }
    }
}
