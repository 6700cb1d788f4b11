//! Bookmark Manager for Gitfolio.
//!
//! Owns the set of bookmarked project ids. The set lives client-side only:
//! it is loaded from the persisted store at startup, mutated by explicit
//! user toggles, and written back synchronously on every mutation.

use std::sync::Arc;

use tracing::warn;

use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::types::errors::StoreError;

/// Store key holding the JSON-encoded array of bookmarked project ids.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Trait defining bookmark set operations.
pub trait BookmarkManagerTrait {
    /// Flips membership for the given id and persists before returning.
    /// Returns `true` when the id is bookmarked after the toggle.
    fn toggle(&mut self, repo_id: u64) -> Result<bool, StoreError>;
    fn is_bookmarked(&self, repo_id: u64) -> bool;
    /// Bookmarked ids in toggle order.
    fn ids(&self) -> &[u64];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Bookmark set backed by the persisted key-value store.
///
/// Ids are keyed by repository identifier, not by live repository
/// presence: an id whose repository is no longer fetched is retained until
/// the user toggles it off.
pub struct BookmarkManager {
    store: Arc<LocalStore>,
    ids: Vec<u64>,
}

impl BookmarkManager {
    /// Loads the bookmark set from the store. Absent or malformed
    /// persisted data yields an empty set, never an error.
    pub fn new(store: Arc<LocalStore>) -> Self {
        let ids = match store.get(BOOKMARKS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ids) => ids,
                Err(err) => {
                    warn!(error = %err, "persisted bookmarks malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { store, ids }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.ids)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.store.set(BOOKMARKS_KEY, &json)
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn toggle(&mut self, repo_id: u64) -> Result<bool, StoreError> {
        let was_bookmarked = self.is_bookmarked(repo_id);
        if was_bookmarked {
            self.ids.retain(|id| *id != repo_id);
        } else {
            self.ids.push(repo_id);
        }
        self.persist()?;
        Ok(!was_bookmarked)
    }

    fn is_bookmarked(&self, repo_id: u64) -> bool {
        self.ids.contains(&repo_id)
    }

    fn ids(&self) -> &[u64] {
        &self.ids
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
