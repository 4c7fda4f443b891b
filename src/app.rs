//! App Core for Readshelf.
//!
//! Central struct holding the bookmark collection, the dashboard state and
//! the services that hang off it. All user actions go through
//! [`App::dispatch`]; rendering code only reads.

use chrono::{DateTime, Utc};

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::card_view::cards_for_page;
use crate::services::pagination::{count_label, empty_state, header_title, pagination_controls};
use crate::services::query_engine;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::summary_editor::{SummaryEditor, SummaryEditorTrait, SummaryGenerator};
use crate::types::app_state::{Action, AppState, ViewMode};
use crate::types::bookmark::Bookmark;
use crate::types::dashboard::DashboardPage;
use crate::types::errors::{BookmarkError, QueryError, SettingsError, SummaryError};
use crate::types::query::{Filter, QueryResult, SharedPolicy, SortKey};
use crate::types::reader::Article;
use crate::types::settings::{DefaultView, ThemeMode};

/// Central application struct.
pub struct App {
    pub bookmarks: BookmarkManager,
    pub settings_engine: SettingsEngine,
    pub summary_editor: SummaryEditor,
    state: AppState,
}

impl App {
    /// Creates an App over `bookmarks`, seeding the dashboard state from the
    /// loaded settings.
    pub fn new(bookmarks: BookmarkManager, settings_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let mut state = AppState {
            sort_key: settings.reading.default_sort,
            page_size: settings.reading.page_size,
            dark_mode: settings.appearance.theme == ThemeMode::Dark,
            view_mode: match settings.appearance.default_view {
                DefaultView::List => ViewMode::List,
                DefaultView::Grid | DefaultView::Compact => ViewMode::Grid,
            },
            ..AppState::default()
        };
        state.notification.article_id = newest_unread(bookmarks.list()).map(|b| b.id.clone());

        Ok(Self {
            bookmarks,
            settings_engine,
            summary_editor: SummaryEditor::new(),
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies a user action, then keeps the page inside the result range.
    pub fn dispatch(&mut self, action: Action) -> Result<&AppState, QueryError> {
        tracing::debug!(?action, "dispatch");
        self.refresh_notification();
        let next = self.state.clone().apply(action);
        self.state = next;

        let last_page = self.current_page()?.page_count.max(1);
        if self.state.page > last_page {
            self.state.page = last_page;
        }
        Ok(&self.state)
    }

    /// Points the notification at an unread bookmark that still exists.
    ///
    /// The current target is kept while it is present and unread; otherwise
    /// the newest unread bookmark takes its place.
    pub fn refresh_notification(&mut self) {
        let current = self.state.notification.article_id.as_deref();
        let still_valid = current
            .and_then(|id| self.bookmarks.get(id).ok())
            .is_some_and(|b| !b.is_read);
        if still_valid {
            return;
        }
        let target = newest_unread(self.bookmarks.list()).map(|b| b.id.clone());
        if target != self.state.notification.article_id {
            tracing::debug!(from = ?self.state.notification.article_id, to = ?target, "notification retargeted");
            self.state.notification.article_id = target;
        }
    }

    /// Runs the query engine for the current state.
    pub fn current_page(&self) -> Result<QueryResult, QueryError> {
        self.bookmarks.query(&self.state.descriptor())
    }

    /// The dashboard body for the current state.
    pub fn dashboard_page(&self) -> Result<DashboardPage, QueryError> {
        let result = self.current_page()?;
        let cards = cards_for_page(&result, self.state.layout.is_mobile);
        let empty = if cards.is_empty() {
            Some(empty_state(&self.state.search_text))
        } else {
            None
        };
        Ok(DashboardPage {
            header_title: header_title(self.state.filter),
            count_label: count_label(result.total_count),
            cards,
            pagination: pagination_controls(self.state.page, result.page_count),
            empty_state: empty,
        })
    }

    /// Article for the reader, built from a bookmark in the collection.
    pub fn article(&self, bookmark_id: &str) -> Result<Article, BookmarkError> {
        let bookmark = self.bookmarks.get(bookmark_id)?;
        Ok(Article {
            id: bookmark.id.clone(),
            title: bookmark.title.clone(),
            content: bookmark.snippet.clone(),
            url: bookmark.url.clone(),
            is_bookmarked: true,
        })
    }

    /// Opens the summary editor for a bookmark.
    pub fn open_summary(&mut self, bookmark_id: &str) -> Result<(), BookmarkError> {
        let title = self.bookmarks.get(bookmark_id)?.title.clone();
        self.summary_editor.open(bookmark_id, &title, None);
        self.state = self.state.clone().apply(Action::OpenSummaryEditor {
            bookmark_id: bookmark_id.to_string(),
        });
        Ok(())
    }

    /// Generates a summary for the bookmark the editor is open on.
    pub fn generate_summary(
        &mut self,
        generator: &dyn SummaryGenerator,
        now: DateTime<Utc>,
    ) -> Result<String, SummaryError> {
        let version = self.summary_editor.generate(generator, now)?;
        Ok(version.content.clone())
    }

    /// Saves the summary draft and closes the editor.
    pub fn save_summary(&mut self, now: DateTime<Utc>) -> String {
        let saved = self.summary_editor.save(now);
        self.state = self.state.clone().apply(Action::CloseSummaryEditor);
        saved
    }

    /// Re-reads the settings a running dashboard depends on.
    ///
    /// A page size change returns to page 1.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        if self.state.page_size != settings.reading.page_size {
            self.state.page_size = settings.reading.page_size;
            self.state.page = 1;
        }
        self.state.dark_mode = settings.appearance.theme == ThemeMode::Dark;
    }

    /// Shutdown sequence: persist settings.
    pub fn shutdown(&mut self) -> Result<(), SettingsError> {
        self.settings_engine.save()
    }
}

/// Target of the "new article" notification.
fn newest_unread(bookmarks: &[Bookmark]) -> Option<&Bookmark> {
    let unread = query_engine::apply_filter(bookmarks, Filter::Unread, SharedPolicy::default());
    query_engine::apply_sort(unread, SortKey::Newest)
        .into_iter()
        .next()
}
