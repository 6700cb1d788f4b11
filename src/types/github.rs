use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A repository snapshot, normalized at the fetch boundary.
///
/// Missing numeric fields in the upstream JSON are decoded as zero and a
/// malformed `updated_at` normalizes to the epoch, so consumers never have
/// to defend against absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub is_fork: bool,
    pub archived: bool,
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub visibility: String,
    pub html_url: String,
}

/// A single account activity event.
///
/// `occurred_on` is the date component of the upstream creation timestamp,
/// obtained by simple truncation. It is `None` when the timestamp could not
/// be parsed; such events still count toward the type-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub occurred_on: Option<NaiveDate>,
}

/// Account metadata for the profile view. Passthrough, no derived logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}
