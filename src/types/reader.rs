use serde::{Deserialize, Serialize};

/// Full article content opened in the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Plain text, paragraphs separated by blank lines.
    pub content: String,
    pub url: String,
    pub is_bookmarked: bool,
}

/// Font size bounds for the reader, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontScale {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: 14,
            max: 24,
            step: 2,
            default: 16,
        }
    }
}
