use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::QueryError;

/// A saved article reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(alias = "isRead")]
    pub is_read: bool,
    pub tags: Vec<String>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Explicit "shared with me" relation.
    #[serde(default)]
    pub shared: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Bookmark {
    /// Hostname of the bookmark URL, used for display.
    ///
    /// Fails with `QueryError::InvalidUrl` scoped to this record when the URL
    /// does not parse or carries no host.
    pub fn hostname(&self) -> Result<String, QueryError> {
        hostname_of(&self.id, &self.url)
    }

    /// Whether any tag is present.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// Extracts the hostname of `url`, attributing failures to the record `id`.
pub fn hostname_of(id: &str, url: &str) -> Result<String, QueryError> {
    let invalid = || QueryError::InvalidUrl {
        id: id.to_string(),
        url: url.to_string(),
    };
    let parsed = Url::parse(url).map_err(|_| invalid())?;
    parsed.host_str().map(str::to_string).ok_or_else(invalid)
}

/// Fields supplied by the user when adding a bookmark.
///
/// The manager assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Number of bookmarks matching each filter, shown next to the sidebar entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub unread: usize,
    pub read: usize,
    pub tags: usize,
    pub shared: usize,
}
