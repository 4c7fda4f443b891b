use serde::{Deserialize, Serialize};

use super::query::{SortKey, DEFAULT_PAGE_SIZE};

/// Largest page size a user may configure.
pub const MAX_PAGE_SIZE: usize = 100;

/// Top-level dashboard settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    pub sync: SyncSettings,
    pub notifications: NotificationSettings,
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub reading: ReadingSettings,
}

impl DashboardSettings {
    /// Checks range constraints serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        let n = &self.notifications;
        if n.quiet_hours_start > 23 || n.quiet_hours_end > 23 {
            return Err("quiet hours must be between 0 and 23".to_string());
        }
        if self.reading.page_size == 0 || self.reading.page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }
        Ok(())
    }
}

/// Bookmark synchronization preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncSettings {
    pub auto_sync: bool,
    pub sync_tags: bool,
    pub frequency: SyncFrequency,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            auto_sync: true,
            sync_tags: true,
            frequency: SyncFrequency::Realtime,
        }
    }
}

/// How often bookmarks are synchronized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SyncFrequency {
    Realtime,
    Hourly,
    Daily,
    Manual,
}

/// Which events raise a notification, and when notifications stay quiet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSettings {
    pub new_articles: bool,
    pub summaries: bool,
    pub comments: bool,
    pub weekly_digest: bool,
    /// Hour of day, 0..=23.
    pub quiet_hours_start: u8,
    pub quiet_hours_end: u8,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            new_articles: true,
            summaries: true,
            comments: true,
            weekly_digest: false,
            quiet_hours_start: 22,
            quiet_hours_end: 8,
        }
    }
}

impl NotificationSettings {
    /// Whether `hour` falls inside the quiet window, which may wrap midnight.
    pub fn is_quiet_hour(&self, hour: u8) -> bool {
        let (start, end) = (self.quiet_hours_start, self.quiet_hours_end);
        if start == end {
            false
        } else if start < end {
            hour >= start && hour < end
        } else {
            hour >= start || hour < end
        }
    }
}

/// Appearance and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub default_view: DefaultView,
    #[serde(default = "default_true")]
    pub show_snippets: bool,
    #[serde(default)]
    pub compact_mode: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            default_view: DefaultView::Grid,
            show_snippets: true,
            compact_mode: false,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

/// Layout the dashboard opens in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    Grid,
    List,
    Compact,
}

/// Defaults for the bookmark list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingSettings {
    pub default_sort: SortKey,
    pub page_size: usize,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Newest,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
