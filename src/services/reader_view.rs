//! Reader view for Readshelf.
//!
//! Holds the article being read plus the reader's own controls: font size,
//! scroll progress and the bookmark toggle.

use crate::types::bookmark::hostname_of;
use crate::types::errors::QueryError;
use crate::types::reader::{Article, FontScale};

/// Words read per minute when estimating reading time.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Trait defining reader view operations.
pub trait ReaderViewTrait {
    fn article(&self) -> &Article;
    fn source_hostname(&self) -> Result<String, QueryError>;
    fn font_size(&self) -> u32;
    fn increase_font(&mut self) -> u32;
    fn decrease_font(&mut self) -> u32;
    fn update_progress(&mut self, scroll_top: f64, doc_height: f64) -> f64;
    fn progress(&self) -> f64;
    fn estimated_read_time_minutes(&self) -> u32;
    fn paragraphs(&self) -> Vec<&str>;
    fn toggle_bookmark(&mut self) -> bool;
}

/// Reader state for a single open article.
pub struct ReaderView {
    article: Article,
    scale: FontScale,
    font_size: u32,
    progress: f64,
}

impl ReaderView {
    pub fn new(article: Article) -> Self {
        Self::with_scale(article, FontScale::default())
    }

    pub fn with_scale(article: Article, scale: FontScale) -> Self {
        Self {
            article,
            font_size: scale.default,
            scale,
            progress: 0.0,
        }
    }
}

impl ReaderViewTrait for ReaderView {
    fn article(&self) -> &Article {
        &self.article
    }

    fn source_hostname(&self) -> Result<String, QueryError> {
        hostname_of(&self.article.id, &self.article.url)
    }

    fn font_size(&self) -> u32 {
        self.font_size
    }

    fn increase_font(&mut self) -> u32 {
        self.font_size = (self.font_size + self.scale.step).min(self.scale.max);
        self.font_size
    }

    fn decrease_font(&mut self) -> u32 {
        self.font_size = self
            .font_size
            .saturating_sub(self.scale.step)
            .max(self.scale.min);
        self.font_size
    }

    /// Records the scroll position as a percentage of the scrollable height.
    ///
    /// A document that does not scroll counts as fully read.
    fn update_progress(&mut self, scroll_top: f64, doc_height: f64) -> f64 {
        self.progress = if doc_height <= 0.0 {
            100.0
        } else {
            (scroll_top / doc_height * 100.0).clamp(0.0, 100.0)
        };
        self.progress
    }

    fn progress(&self) -> f64 {
        self.progress
    }

    fn estimated_read_time_minutes(&self) -> u32 {
        let word_count = self.article.content.split_whitespace().count();
        ((word_count as f64) / WORDS_PER_MINUTE).ceil().max(1.0) as u32
    }

    fn paragraphs(&self) -> Vec<&str> {
        self.article
            .content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn toggle_bookmark(&mut self) -> bool {
        self.article.is_bookmarked = !self.article.is_bookmarked;
        self.article.is_bookmarked
    }
}
