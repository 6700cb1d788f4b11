use serde::{Deserialize, Serialize};

/// Category tab of the project view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Bookmarked,
    Source,
    Forked,
}

/// Sort key of the project view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Updated,
    Stars,
    Name,
}

/// Sort direction. `Desc` reverses the comparator's natural ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Language filter: everything, or exactly one primary language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFilter {
    All,
    Only(String),
}

/// Transient filter/sort state of one project view session. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub search: String,
    pub category: Category,
    pub language: LanguageFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for ProjectFilter {
    /// The state a fresh view opens with: everything visible, most
    /// recently updated first.
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Category::All,
            language: LanguageFilter::All,
            sort_key: SortKey::Updated,
            direction: SortDirection::Desc,
        }
    }
}
