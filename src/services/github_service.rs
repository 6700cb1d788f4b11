//! GitHub fetch service for Gitfolio.
//!
//! Read-only, unauthenticated access to the GitHub REST API: user profile,
//! repository list and event list. Raw JSON is normalized into the strict
//! domain shapes at this boundary, before any aggregation runs, so the
//! aggregators never see missing-field ambiguity.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::types::errors::FetchError;
use crate::types::github::{Event, Profile, Repository};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("gitfolio/", env!("CARGO_PKG_VERSION"));
const PAGE_SIZE: u32 = 100;

/// Trait defining the remote data source operations.
///
/// The session manager is generic over this trait so tests can substitute
/// a scripted fake without touching the network.
#[allow(async_fn_in_trait)]
pub trait GitHubServiceTrait {
    async fn fetch_profile(&self, login: &str) -> Result<Profile, FetchError>;
    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>, FetchError>;
    async fn fetch_events(&self, login: &str) -> Result<Vec<Event>, FetchError>;
}

/// GitHub REST client backed by `reqwest`.
pub struct GitHubService {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubService {
    /// Creates a client against the public GitHub API.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternative base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        login: &str,
    ) -> Result<T, FetchError> {
        debug!(url, "fetching");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(login.to_string()));
        }
        // GitHub signals an exhausted unauthenticated quota with 403; 429
        // shows up behind some proxies.
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl GitHubServiceTrait for GitHubService {
    async fn fetch_profile(&self, login: &str) -> Result<Profile, FetchError> {
        let url = format!("{}/users/{}", self.base_url, login);
        let dto: ProfileDto = self.get_json(&url, login).await?;
        Ok(normalize_profile(dto))
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>, FetchError> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated&direction=desc",
            self.base_url, login, PAGE_SIZE
        );
        let dtos: Vec<RepositoryDto> = self.get_json(&url, login).await?;
        Ok(dtos.into_iter().map(normalize_repository).collect())
    }

    async fn fetch_events(&self, login: &str) -> Result<Vec<Event>, FetchError> {
        let url = format!(
            "{}/users/{}/events?per_page={}",
            self.base_url, login, PAGE_SIZE
        );
        let dtos: Vec<EventDto> = self.get_json(&url, login).await?;
        Ok(dtos.into_iter().map(normalize_event).collect())
    }
}

// === Wire DTOs ===
//
// The upstream JSON has optional fields and occasionally omits counters;
// `#[serde(default)]` keeps decoding total so a sparse repository never
// fails the whole page.

#[derive(Debug, Deserialize)]
struct RepositoryDto {
    id: u64,
    name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    watchers_count: u64,
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    archived: bool,
    homepage: Option<String>,
    updated_at: Option<String>,
    visibility: Option<String>,
    #[serde(default)]
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct EventDto {
    #[serde(rename = "type")]
    kind: String,
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileDto {
    login: String,
    name: Option<String>,
    #[serde(default)]
    avatar_url: String,
    #[serde(default)]
    html_url: String,
    bio: Option<String>,
    location: Option<String>,
    #[serde(default)]
    public_repos: u64,
    #[serde(default)]
    followers: u64,
    #[serde(default)]
    following: u64,
}

fn normalize_repository(dto: RepositoryDto) -> Repository {
    Repository {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        language: dto.language,
        stars: dto.stargazers_count,
        forks: dto.forks_count,
        watchers: dto.watchers_count,
        is_fork: dto.fork,
        archived: dto.archived,
        homepage: dto.homepage.filter(|h| !h.is_empty()),
        updated_at: parse_timestamp(dto.updated_at.as_deref()),
        visibility: dto.visibility.unwrap_or_else(|| "public".to_string()),
        html_url: dto.html_url,
    }
}

fn normalize_event(dto: EventDto) -> Event {
    Event {
        kind: dto.kind,
        occurred_on: dto.created_at.as_deref().and_then(truncate_to_date),
    }
}

fn normalize_profile(dto: ProfileDto) -> Profile {
    Profile {
        login: dto.login,
        name: dto.name,
        avatar_url: dto.avatar_url,
        html_url: dto.html_url,
        bio: dto.bio,
        location: dto.location,
        public_repos: dto.public_repos,
        followers: dto.followers,
        following: dto.following,
    }
}

/// Parses an RFC 3339 timestamp, normalizing anything unparseable to the
/// epoch so repository ordering never errors on bad upstream data.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.timestamp_opt(0, 0).unwrap())
}

/// Simple date truncation: the `YYYY-MM-DD` prefix of the timestamp, with
/// no time-zone adjustment.
fn truncate_to_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10).and_then(|day| day.parse().ok())
}
