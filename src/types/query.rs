use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;
use super::errors::QueryError;

/// Number of bookmarks shown per dashboard page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Coarse category selecting a subset of bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Unread,
    Read,
    Tags,
    Shared,
}

impl Filter {
    /// Every filter, in sidebar order.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Unread,
        Filter::Read,
        Filter::Tags,
        Filter::Shared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Unread => "unread",
            Filter::Read => "read",
            Filter::Tags => "tags",
            Filter::Shared => "shared",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "unread" => Ok(Filter::Unread),
            "read" => Ok(Filter::Read),
            "tags" => Ok(Filter::Tags),
            "shared" => Ok(Filter::Shared),
            other => Err(QueryError::InvalidDescriptor(format!(
                "unknown filter '{}'",
                other
            ))),
        }
    }
}

/// Ordering applied to the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "alphabetical" => Ok(SortKey::Alphabetical),
            other => Err(QueryError::InvalidDescriptor(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}

/// How the `shared` filter selects records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedPolicy {
    /// The first `floor(0.3 * N)` records of the list, in original order.
    #[default]
    LeadingFraction,
    /// Records whose `shared` flag is set.
    Flagged,
}

/// Everything that drives one query: filter, search, sort and page position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDescriptor {
    pub filter: Filter,
    pub search_text: String,
    pub sort_key: SortKey,
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
    pub shared_policy: SharedPolicy,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            search_text: String::new(),
            sort_key: SortKey::Newest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            shared_policy: SharedPolicy::LeadingFraction,
        }
    }
}

impl QueryDescriptor {
    /// Builds a descriptor from the raw strings a presentation layer holds.
    ///
    /// Unknown filter or sort values are reported as `InvalidDescriptor`
    /// instead of falling back to a default.
    pub fn from_parts(
        filter: &str,
        search_text: &str,
        sort_key: &str,
        page: usize,
    ) -> Result<Self, QueryError> {
        let descriptor = Self {
            filter: filter.parse()?,
            search_text: search_text.to_string(),
            sort_key: sort_key.parse()?,
            page,
            ..Self::default()
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_shared_policy(mut self, policy: SharedPolicy) -> Self {
        self.shared_policy = policy;
        self
    }

    /// Rejects descriptors no page can be computed for.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page == 0 {
            return Err(QueryError::InvalidDescriptor(
                "page is 1-based, got 0".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(QueryError::InvalidDescriptor(
                "page size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of the filtered, searched and sorted bookmark set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub items: Vec<Bookmark>,
    /// Matching records before pagination.
    pub total_count: usize,
    pub page_count: usize,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
