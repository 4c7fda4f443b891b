use serde::{Deserialize, Serialize};

/// Presentation model of one bookmark on a dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkCard {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub url: String,
    /// `None` when the URL could not be parsed; see `hostname_error`.
    pub hostname: Option<String>,
    pub hostname_error: Option<String>,
    pub visible_tags: Vec<String>,
    /// Tags cut by truncation, rendered as `+N`.
    pub hidden_tag_count: usize,
    /// `YYYY-MM-DD` of the creation instant.
    pub date_label: String,
    pub is_read: bool,
    pub status_label: String,
    pub mark_read_label: String,
}

/// One entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// State of the pagination bar below the card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    /// Hidden entirely for zero or one page.
    pub visible: bool,
    pub buttons: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Message shown when a page has no cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    pub offer_clear_search: bool,
}

/// Everything the dashboard body renders for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub header_title: String,
    pub count_label: String,
    pub cards: Vec<BookmarkCard>,
    pub pagination: PaginationControls,
    pub empty_state: Option<EmptyState>,
}
