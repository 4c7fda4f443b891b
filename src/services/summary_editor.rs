//! Summary Editor for Readshelf.
//!
//! Keeps a draft summary for the open article. Version history is kept per
//! article id, so reopening the editor on another bookmark starts from that
//! bookmark's own history.
//! Generation goes through [`SummaryGenerator`] so a real provider can be
//! plugged in; the crate ships a canned [`StubSummaryGenerator`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::errors::SummaryError;
use crate::types::summary::{SummaryKind, SummaryVersion};

/// Produces a summary for an article.
pub trait SummaryGenerator {
    fn generate(&self, article_title: &str) -> Result<String, SummaryError>;
}

/// Generator returning a fixed summary that names the article.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubSummaryGenerator;

impl SummaryGenerator for StubSummaryGenerator {
    fn generate(&self, article_title: &str) -> Result<String, SummaryError> {
        let title = article_title.trim();
        if title.is_empty() {
            return Err(SummaryError::EmptyArticle);
        }
        Ok(format!(
            "AI-generated summary: \"{}\" covers its topic's key ideas, the practices the author recommends, and the main takeaways for readers.",
            title
        ))
    }
}

/// Trait defining summary editor operations.
pub trait SummaryEditorTrait {
    fn open(&mut self, article_id: &str, article_title: &str, summary: Option<&str>);
    fn close(&mut self);
    fn is_open(&self) -> bool;
    fn draft(&self) -> &str;
    fn edit(&mut self, text: &str);
    fn generate(
        &mut self,
        generator: &dyn SummaryGenerator,
        now: DateTime<Utc>,
    ) -> Result<&SummaryVersion, SummaryError>;
    fn restore(&mut self, version_id: u32) -> Result<(), SummaryError>;
    fn save(&mut self, now: DateTime<Utc>) -> String;
    fn versions(&self) -> &[SummaryVersion];
}

/// In-memory summary editor state.
#[derive(Debug, Default, Clone)]
pub struct SummaryEditor {
    article_id: String,
    article_title: String,
    draft: String,
    histories: HashMap<String, Vec<SummaryVersion>>,
    open: bool,
}

impl SummaryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    fn push_version(&mut self, content: String, kind: SummaryKind, now: DateTime<Utc>) {
        let versions = self.histories.entry(self.article_id.clone()).or_default();
        let id = versions.len() as u32 + 1;
        versions.push(SummaryVersion {
            id,
            content,
            created_at: now,
            kind,
        });
    }
}

impl SummaryEditorTrait for SummaryEditor {
    fn open(&mut self, article_id: &str, article_title: &str, summary: Option<&str>) {
        self.article_id = article_id.to_string();
        self.article_title = article_title.to_string();
        self.draft = summary.unwrap_or_default().to_string();
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn draft(&self) -> &str {
        &self.draft
    }

    fn edit(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Replaces the draft with a generated summary and records it as a version.
    fn generate(
        &mut self,
        generator: &dyn SummaryGenerator,
        now: DateTime<Utc>,
    ) -> Result<&SummaryVersion, SummaryError> {
        let summary = generator.generate(&self.article_title)?;
        self.draft = summary.clone();
        self.push_version(summary, SummaryKind::AiGenerated, now);
        tracing::info!(
            id = %self.article_id,
            title = %self.article_title,
            versions = self.versions().len(),
            "summary generated"
        );
        self.versions()
            .last()
            .ok_or_else(|| SummaryError::GenerationFailed("no version recorded".to_string()))
    }

    fn restore(&mut self, version_id: u32) -> Result<(), SummaryError> {
        let content = self
            .versions()
            .iter()
            .find(|v| v.id == version_id)
            .map(|v| v.content.clone())
            .ok_or(SummaryError::VersionNotFound(version_id))?;
        self.draft = content;
        Ok(())
    }

    /// Returns the saved draft and closes the editor.
    ///
    /// A draft that differs from the latest version is recorded as a manual edit.
    fn save(&mut self, now: DateTime<Utc>) -> String {
        let changed = self
            .versions()
            .last()
            .map_or(!self.draft.is_empty(), |latest| latest.content != self.draft);
        if changed {
            self.push_version(self.draft.clone(), SummaryKind::ManualEdit, now);
        }
        self.open = false;
        self.draft.clone()
    }

    /// History of the article the editor was last opened on.
    fn versions(&self) -> &[SummaryVersion] {
        self.histories
            .get(&self.article_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
