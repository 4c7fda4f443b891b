//! Dashboard application state.
//!
//! One value holds every UI flag the dashboard needs; each user action is a
//! pure transition `AppState -> AppState`. Layout and panel flags live beside
//! the query inputs but never feed into them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::query::{Filter, QueryDescriptor, SharedPolicy, SortKey, DEFAULT_PAGE_SIZE};

/// Viewports narrower than this are phones.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Inclusive width range treated as a tablet.
pub const TABLET_MIN_WIDTH: u32 = 700;
pub const TABLET_MAX_WIDTH: u32 = 1024;
/// How long a snoozed notification stays hidden.
pub const SNOOZE_SECONDS: i64 = 30;

/// Card arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Reader { bookmark_id: String },
}

/// Breakpoint flags derived from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub is_mobile: bool,
    pub is_tablet: bool,
}

impl Layout {
    pub fn from_viewport(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            is_mobile: width < MOBILE_MAX_WIDTH,
            is_tablet: (TABLET_MIN_WIDTH..=TABLET_MAX_WIDTH).contains(&width),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_viewport(1280, 800)
    }
}

/// Where the collaboration panel is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPlacement {
    Hidden,
    Docked,
    Modal,
}

/// Lifecycle of the "new article" popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationStatus {
    Visible,
    Snoozed { until: DateTime<Utc> },
    Dismissed,
}

/// The popup and the article it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub article_id: Option<String>,
    pub status: NotificationStatus,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            article_id: None,
            status: NotificationStatus::Visible,
        }
    }
}

/// A user action on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetFilter { filter: Filter },
    SetSearch { text: String },
    ClearSearch,
    SetSort { sort_key: SortKey },
    GoToPage { page: usize },
    NextPage,
    PreviousPage,
    SetViewMode { mode: ViewMode },
    OpenReader { bookmark_id: String },
    CloseReader,
    ToggleDarkMode,
    SetDarkMode { enabled: bool },
    Resize { width: u32, height: u32 },
    OpenSummaryEditor { bookmark_id: String },
    CloseSummaryEditor,
    ToggleCollaboration,
    CloseCollaboration,
    OpenSettings,
    CloseSettings,
    NotificationReadNow,
    NotificationSnooze { now: DateTime<Utc> },
    NotificationDismiss,
    Tick { now: DateTime<Utc> },
}

/// Complete dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub filter: Filter,
    pub search_text: String,
    pub sort_key: SortKey,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub shared_policy: SharedPolicy,
    pub view_mode: ViewMode,
    pub view: View,
    pub layout: Layout,
    pub dark_mode: bool,
    pub notification: Notification,
    pub summary_editor_for: Option<String>,
    pub collaboration_open: bool,
    pub settings_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            search_text: String::new(),
            sort_key: SortKey::Newest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            shared_policy: SharedPolicy::LeadingFraction,
            view_mode: ViewMode::Grid,
            view: View::Dashboard,
            layout: Layout::default(),
            dark_mode: false,
            notification: Notification::default(),
            summary_editor_for: None,
            collaboration_open: false,
            settings_open: false,
        }
    }
}

impl AppState {
    /// Applies `action` and returns the next state.
    ///
    /// Changing the filter, search text or sort order returns to page 1.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetFilter { filter } => Self {
                filter,
                page: 1,
                ..self
            },
            Action::SetSearch { text } => Self {
                search_text: text,
                page: 1,
                ..self
            },
            Action::ClearSearch => Self {
                search_text: String::new(),
                page: 1,
                ..self
            },
            Action::SetSort { sort_key } => Self {
                sort_key,
                page: 1,
                ..self
            },
            Action::GoToPage { page } => Self {
                page: page.max(1),
                ..self
            },
            Action::NextPage => Self {
                page: self.page.saturating_add(1),
                ..self
            },
            Action::PreviousPage => Self {
                page: self.page.saturating_sub(1).max(1),
                ..self
            },
            Action::SetViewMode { mode } => Self {
                view_mode: mode,
                ..self
            },
            Action::OpenReader { bookmark_id } => Self {
                view: View::Reader { bookmark_id },
                ..self
            },
            Action::CloseReader => Self {
                view: View::Dashboard,
                ..self
            },
            Action::ToggleDarkMode => Self {
                dark_mode: !self.dark_mode,
                ..self
            },
            Action::SetDarkMode { enabled } => Self {
                dark_mode: enabled,
                ..self
            },
            Action::Resize { width, height } => Self {
                layout: Layout::from_viewport(width, height),
                ..self
            },
            Action::OpenSummaryEditor { bookmark_id } => Self {
                summary_editor_for: Some(bookmark_id),
                ..self
            },
            Action::CloseSummaryEditor => Self {
                summary_editor_for: None,
                ..self
            },
            Action::ToggleCollaboration => Self {
                collaboration_open: !self.collaboration_open,
                ..self
            },
            Action::CloseCollaboration => Self {
                collaboration_open: false,
                ..self
            },
            Action::OpenSettings => Self {
                settings_open: true,
                ..self
            },
            Action::CloseSettings => Self {
                settings_open: false,
                ..self
            },
            Action::NotificationReadNow => {
                let view = match &self.notification.article_id {
                    Some(id) => View::Reader {
                        bookmark_id: id.clone(),
                    },
                    None => self.view.clone(),
                };
                Self {
                    view,
                    notification: Notification {
                        status: NotificationStatus::Dismissed,
                        ..self.notification
                    },
                    ..self
                }
            }
            Action::NotificationSnooze { now } => Self {
                notification: Notification {
                    status: NotificationStatus::Snoozed {
                        until: now + Duration::seconds(SNOOZE_SECONDS),
                    },
                    ..self.notification
                },
                ..self
            },
            Action::NotificationDismiss => Self {
                notification: Notification {
                    status: NotificationStatus::Dismissed,
                    ..self.notification
                },
                ..self
            },
            Action::Tick { now } => {
                let status = self.notification.status;
                match status {
                    NotificationStatus::Snoozed { until } if now >= until => Self {
                        notification: Notification {
                            status: NotificationStatus::Visible,
                            ..self.notification
                        },
                        ..self
                    },
                    _ => self,
                }
            }
        }
    }

    /// Query inputs derived from the state.
    pub fn descriptor(&self) -> QueryDescriptor {
        QueryDescriptor {
            filter: self.filter,
            search_text: self.search_text.clone(),
            sort_key: self.sort_key,
            page: self.page,
            page_size: self.page_size,
            shared_policy: self.shared_policy,
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        !self.layout.is_mobile
    }

    pub fn filter_chips_visible(&self) -> bool {
        self.layout.is_mobile
    }

    /// Phones always get the grid.
    pub fn effective_view_mode(&self) -> ViewMode {
        if self.layout.is_mobile {
            ViewMode::Grid
        } else {
            self.view_mode
        }
    }

    pub fn collaboration_placement(&self) -> PanelPlacement {
        if !self.collaboration_open {
            PanelPlacement::Hidden
        } else if self.layout.is_mobile || self.layout.is_tablet {
            PanelPlacement::Modal
        } else {
            PanelPlacement::Docked
        }
    }

    pub fn notification_visible(&self) -> bool {
        self.notification.status == NotificationStatus::Visible
    }
}
