//! View session manager for Gitfolio.
//!
//! One `SessionManager` drives one dashboard view: it owns the identity,
//! the transient filter state, the bookmark set, and the
//! `Idle → Loading → {Ready | Failed}` state machine. The pure engines do
//! the actual derivation; this manager only decides when they run and what
//! snapshot they see.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::activity_bucketizer;
use crate::services::github_service::GitHubServiceTrait;
use crate::services::local_store::{LocalStore, LocalStoreTrait};
use crate::services::project_query;
use crate::services::stats_aggregator;
use crate::types::activity::ActivitySeries;
use crate::types::errors::{FetchError, StoreError};
use crate::types::github::{Event, Profile, Repository};
use crate::types::query::{Category, LanguageFilter, ProjectFilter, SortDirection, SortKey};
use crate::types::stats::StatsSummary;

/// Store key holding the chosen account identifier.
pub const IDENTITY_KEY: &str = "identity";

/// The raw snapshot one load produces: all three fetches, all-or-nothing.
pub type Snapshot = (Profile, Vec<Repository>, Vec<Event>);

/// Everything a `Ready` view holds: the fetched collections plus the
/// derived view models, re-derivable at any time without re-fetching.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioData {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub events: Vec<Event>,
    pub stats: StatsSummary,
    pub activity: ActivitySeries,
}

/// State machine of one view session.
///
/// `Ready` with empty collections is a valid "no data" state, distinct
/// from `Failed` and from not-yet-loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready(PortfolioData),
    Failed(String),
}

/// Capture of the identity at request time.
///
/// [`SessionManager::apply_result`] compares the ticket against the
/// current identity, so a late response for a previous account can never
/// overwrite current state.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    login: String,
}

impl LoadTicket {
    pub fn login(&self) -> &str {
        &self.login
    }
}

/// Per-view session over an injected fetch service and persisted store.
pub struct SessionManager<S> {
    service: S,
    store: Arc<LocalStore>,
    bookmarks: BookmarkManager,
    identity: Option<String>,
    filter: ProjectFilter,
    state: ViewState,
}

impl<S: GitHubServiceTrait> SessionManager<S> {
    /// Creates a session, reading the persisted identity and bookmark set.
    pub fn new(service: S, store: Arc<LocalStore>) -> Self {
        let identity = store.get(IDENTITY_KEY);
        let bookmarks = BookmarkManager::new(store.clone());
        Self {
            service,
            store,
            bookmarks,
            identity,
            filter: ProjectFilter::default(),
            state: ViewState::Idle,
        }
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn bookmarks(&self) -> &BookmarkManager {
        &self.bookmarks
    }

    /// Chooses the account the view is about. Persists the identity,
    /// resets the view to `Idle` and the filter to its defaults; any
    /// outstanding fetch for the previous identity becomes stale.
    pub fn set_identity(&mut self, login: &str) -> Result<(), StoreError> {
        let login = login.trim();
        self.store.set(IDENTITY_KEY, login)?;
        self.identity = Some(login.to_string());
        self.filter = ProjectFilter::default();
        self.state = ViewState::Idle;
        Ok(())
    }

    /// Explicit reset: clears the persisted identity and returns to `Idle`.
    pub fn clear_identity(&mut self) -> Result<(), StoreError> {
        self.store.remove(IDENTITY_KEY)?;
        self.identity = None;
        self.filter = ProjectFilter::default();
        self.state = ViewState::Idle;
        Ok(())
    }

    /// Enters `Loading` and captures the identity into a ticket.
    /// Returns `None` (staying put) when no identity is chosen.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let login = self.identity.clone()?;
        self.state = ViewState::Loading;
        Some(LoadTicket { login })
    }

    /// Fetches the three collections for the ticket concurrently.
    /// All-or-nothing: the first failure fails the whole snapshot.
    pub async fn fetch_snapshot(&self, ticket: &LoadTicket) -> Result<Snapshot, FetchError> {
        let login = ticket.login();
        tokio::try_join!(
            self.service.fetch_profile(login),
            self.service.fetch_repositories(login),
            self.service.fetch_events(login),
        )
    }

    /// Applies a completed fetch to the view.
    ///
    /// A result whose ticket no longer matches the current identity is
    /// discarded. Success derives the stats and activity view models from
    /// the full snapshot and enters `Ready`; failure enters `Failed`
    /// (retry is another `begin_load`, never automatic).
    pub fn apply_result(&mut self, ticket: LoadTicket, result: Result<Snapshot, FetchError>) {
        if self.identity.as_deref() != Some(ticket.login()) {
            warn!(stale = ticket.login(), "discarding fetch result for a previous identity");
            return;
        }

        match result {
            Ok((profile, repositories, events)) => {
                let stats = stats_aggregator::aggregate(&repositories);
                let activity =
                    activity_bucketizer::bucketize(&events, Local::now().date_naive());
                info!(
                    login = ticket.login(),
                    repositories = repositories.len(),
                    events = events.len(),
                    "view ready"
                );
                self.state = ViewState::Ready(PortfolioData {
                    profile,
                    repositories,
                    events,
                    stats,
                    activity,
                });
            }
            Err(err) => {
                warn!(login = ticket.login(), error = %err, "view failed");
                self.state = ViewState::Failed(err.to_string());
            }
        }
    }

    /// The straight-line load path: begin, fetch, apply.
    pub async fn load(&mut self) {
        let ticket = match self.begin_load() {
            Some(ticket) => ticket,
            None => return,
        };
        let result = self.fetch_snapshot(&ticket).await;
        self.apply_result(ticket, result);
    }

    // Filter and sort actions. These are only meaningful in `Ready` and
    // never trigger a refetch; the view re-runs the query on demand.

    pub fn set_search(&mut self, query: &str) {
        self.filter.search = query.to_string();
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.category = category;
    }

    pub fn set_language(&mut self, language: LanguageFilter) {
        self.filter.language = language;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.filter.sort_key = key;
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.filter.direction = direction;
    }

    /// Flips a bookmark and persists it before returning. The visible
    /// project list is not recomputed here; the caller re-queries.
    pub fn toggle_bookmark(&mut self, repo_id: u64) -> Result<bool, StoreError> {
        self.bookmarks.toggle(repo_id)
    }

    /// Runs the query pipeline over the held snapshot with the current
    /// filter and bookmark set. Empty unless the view is `Ready`.
    pub fn visible_projects(&self) -> Vec<Repository> {
        match &self.state {
            ViewState::Ready(data) => {
                project_query::run(&data.repositories, &self.filter, self.bookmarks.ids())
            }
            _ => Vec::new(),
        }
    }

    /// Language choices for the filter menu, derived from the unfiltered
    /// collection. Just the universal option until the view is `Ready`.
    pub fn language_options(&self) -> Vec<String> {
        match &self.state {
            ViewState::Ready(data) => project_query::language_options(&data.repositories),
            _ => vec!["all".to_string()],
        }
    }
}
