use std::fmt;

// === QueryError ===

/// Errors raised by the bookmark query pipeline and hostname extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query descriptor holds a value no page can be computed for.
    InvalidDescriptor(String),
    /// A single record's URL could not be parsed into a hostname.
    InvalidUrl { id: String, url: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidDescriptor(msg) => write!(f, "Invalid query descriptor: {}", msg),
            QueryError::InvalidUrl { id, url } => {
                write!(f, "Invalid URL for bookmark {}: {}", id, url)
            }
        }
    }
}

impl std::error::Error for QueryError {}

// === BookmarkError ===

/// Errors related to bookmark collection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// A bookmark with the same URL already exists.
    DuplicateUrl(String),
    /// A bookmark with the same ID already exists.
    DuplicateId(String),
    /// The provided URL does not parse.
    InvalidUrl(String),
    /// The bookmark fixture could not be parsed.
    ParseError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::DuplicateUrl(url) => write!(f, "Duplicate bookmark URL: {}", url),
            BookmarkError::DuplicateId(id) => write!(f, "Duplicate bookmark ID: {}", id),
            BookmarkError::InvalidUrl(url) => write!(f, "Invalid bookmark URL: {}", url),
            BookmarkError::ParseError(msg) => write!(f, "Bookmark parse error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === SummaryError ===

/// Errors related to the summary editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// The article has no title to summarize.
    EmptyArticle,
    /// No summary version with the given ID exists.
    VersionNotFound(u32),
    /// The summary generator failed.
    GenerationFailed(String),
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::EmptyArticle => write!(f, "Article has no title to summarize"),
            SummaryError::VersionNotFound(id) => write!(f, "Summary version not found: {}", id),
            SummaryError::GenerationFailed(msg) => {
                write!(f, "Summary generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for SummaryError {}
