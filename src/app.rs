//! App Core for Gitfolio.
//!
//! Central struct wiring the persisted store, the fetch service and the
//! view session together.

use std::sync::Arc;

use crate::managers::session_manager::SessionManager;
use crate::services::github_service::GitHubService;
use crate::services::local_store::LocalStore;

/// Central application struct.
///
/// The store is shared between the session and anything else that needs
/// persisted state; the session owns the fetch service.
pub struct PortfolioApp {
    pub store: Arc<LocalStore>,
    pub session: SessionManager<GitHubService>,
}

impl PortfolioApp {
    /// Creates a new app: opens the store (at the platform config path
    /// unless overridden) and a GitHub client, then builds the session
    /// from them. The persisted identity and bookmarks load here.
    pub fn new(store_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let store = Arc::new(LocalStore::open(store_path));
        let service =
            GitHubService::new().map_err(|e| format!("GitHub client init failed: {}", e))?;
        let session = SessionManager::new(service, store.clone());
        Ok(Self { store, session })
    }
}
