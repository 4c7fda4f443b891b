//! Bookmark Manager for Readshelf.
//!
//! Implements `BookmarkManagerTrait`: owns the in-memory bookmark collection
//! the dashboard queries, and applies the per-card actions (mark read,
//! delete, archive, not interested, read next).

use std::collections::HashSet;

use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::services::query_engine;
use crate::types::bookmark::{Bookmark, BookmarkDraft, FilterCounts};
use crate::types::errors::{BookmarkError, QueryError};
use crate::types::query::{QueryDescriptor, QueryResult, SharedPolicy};

/// The six bookmarks the dashboard ships with.
const SAMPLE_BOOKMARKS: &str = include_str!("../../data/sample_bookmarks.json");

/// Trait defining bookmark collection operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<String, BookmarkError>;
    fn insert(&mut self, bookmark: Bookmark) -> Result<(), BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<Bookmark, BookmarkError>;
    fn toggle_read(&mut self, id: &str) -> Result<bool, BookmarkError>;
    fn set_read(&mut self, id: &str, is_read: bool) -> Result<(), BookmarkError>;
    fn archive(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn mark_not_interested(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn mark_next(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn get(&self, id: &str) -> Result<&Bookmark, BookmarkError>;
    fn list(&self) -> &[Bookmark];
    fn query(&self, descriptor: &QueryDescriptor) -> Result<QueryResult, QueryError>;
    fn filter_counts(&self, policy: SharedPolicy) -> FilterCounts;
}

/// In-memory bookmark collection, kept in display order.
#[derive(Debug, Default, Clone)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
    archived: HashSet<String>,
    dismissed: HashSet<String>,
}

impl BookmarkManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager from an existing collection, rejecting duplicate ids.
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Result<Self, BookmarkError> {
        let mut manager = Self::new();
        for bookmark in bookmarks {
            manager.insert(bookmark)?;
        }
        Ok(manager)
    }

    /// Parses a JSON array of bookmarks.
    pub fn load_from_json(json: &str) -> Result<Self, BookmarkError> {
        let bookmarks: Vec<Bookmark> =
            serde_json::from_str(json).map_err(|e| BookmarkError::ParseError(e.to_string()))?;
        Self::from_bookmarks(bookmarks)
    }

    /// The built-in sample collection.
    pub fn sample() -> Result<Self, BookmarkError> {
        Self::load_from_json(SAMPLE_BOOKMARKS)
    }

    /// Ids removed with [`BookmarkManagerTrait::archive`].
    pub fn archived_ids(&self) -> &HashSet<String> {
        &self.archived
    }

    /// Ids removed with [`BookmarkManagerTrait::mark_not_interested`].
    pub fn dismissed_ids(&self) -> &HashSet<String> {
        &self.dismissed
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, BookmarkError> {
        self.bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Bookmark, BookmarkError> {
        self.bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Adds a new bookmark at the end of the collection. Returns the generated ID.
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<String, BookmarkError> {
        let parsed = Url::parse(&draft.url)
            .map_err(|_| BookmarkError::InvalidUrl(draft.url.clone()))?;
        if parsed.host_str().is_none() {
            return Err(BookmarkError::InvalidUrl(draft.url));
        }
        if self.bookmarks.iter().any(|b| b.url == draft.url) {
            return Err(BookmarkError::DuplicateUrl(draft.url));
        }

        let id = Uuid::new_v4().to_string();
        self.bookmarks.push(Bookmark {
            id: id.clone(),
            title: draft.title,
            url: draft.url,
            snippet: draft.snippet,
            is_read: false,
            tags: draft.tags,
            created_at: Utc::now(),
            shared: false,
            favicon: None,
        });
        tracing::info!(id = %id, "bookmark added");
        Ok(id)
    }

    fn insert(&mut self, bookmark: Bookmark) -> Result<(), BookmarkError> {
        if self.bookmarks.iter().any(|b| b.id == bookmark.id) {
            return Err(BookmarkError::DuplicateId(bookmark.id));
        }
        self.bookmarks.push(bookmark);
        Ok(())
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<Bookmark, BookmarkError> {
        let index = self.position(id)?;
        tracing::info!(id, "bookmark removed");
        Ok(self.bookmarks.remove(index))
    }

    /// Flips the read flag and returns the new value.
    fn toggle_read(&mut self, id: &str) -> Result<bool, BookmarkError> {
        let bookmark = self.get_mut(id)?;
        bookmark.is_read = !bookmark.is_read;
        Ok(bookmark.is_read)
    }

    fn set_read(&mut self, id: &str, is_read: bool) -> Result<(), BookmarkError> {
        self.get_mut(id)?.is_read = is_read;
        Ok(())
    }

    fn archive(&mut self, id: &str) -> Result<(), BookmarkError> {
        let removed = self.remove_bookmark(id)?;
        self.archived.insert(removed.id);
        Ok(())
    }

    fn mark_not_interested(&mut self, id: &str) -> Result<(), BookmarkError> {
        let removed = self.remove_bookmark(id)?;
        self.dismissed.insert(removed.id);
        Ok(())
    }

    /// Moves the bookmark to the front of the collection.
    fn mark_next(&mut self, id: &str) -> Result<(), BookmarkError> {
        let index = self.position(id)?;
        let bookmark = self.bookmarks.remove(index);
        self.bookmarks.insert(0, bookmark);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<&Bookmark, BookmarkError> {
        self.bookmarks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }

    fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn query(&self, descriptor: &QueryDescriptor) -> Result<QueryResult, QueryError> {
        query_engine::query(&self.bookmarks, descriptor)
    }

    fn filter_counts(&self, policy: SharedPolicy) -> FilterCounts {
        query_engine::filter_counts(&self.bookmarks, policy)
    }
}
