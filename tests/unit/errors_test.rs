use readshelf::types::errors::*;

// === QueryError Tests ===

#[test]
fn query_error_invalid_descriptor_display() {
    let err = QueryError::InvalidDescriptor("page is 1-based, got 0".to_string());
    assert_eq!(err.to_string(), "Invalid query descriptor: page is 1-based, got 0");
}

#[test]
fn query_error_invalid_url_names_the_record() {
    let err = QueryError::InvalidUrl {
        id: "7".to_string(),
        url: "not a url".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid URL for bookmark 7: not a url");
}

#[test]
fn query_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(QueryError::InvalidDescriptor("x".to_string()));
    assert!(err.source().is_none());
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::NotFound("bm-1".to_string()).to_string(),
        "Bookmark not found: bm-1"
    );
    assert_eq!(
        BookmarkError::DuplicateUrl("https://example.com".to_string()).to_string(),
        "Duplicate bookmark URL: https://example.com"
    );
    assert_eq!(
        BookmarkError::DuplicateId("3".to_string()).to_string(),
        "Duplicate bookmark ID: 3"
    );
    assert_eq!(
        BookmarkError::InvalidUrl("ftp//".to_string()).to_string(),
        "Invalid bookmark URL: ftp//"
    );
    assert_eq!(
        BookmarkError::ParseError("expected array".to_string()).to_string(),
        "Bookmark parse error: expected array"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("trailing comma".to_string()).to_string(),
        "Settings serialization error: trailing comma"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("page size".to_string()).to_string(),
        "Invalid settings value: page size"
    );
}

// === SummaryError Tests ===

#[test]
fn summary_error_display_variants() {
    assert_eq!(
        SummaryError::EmptyArticle.to_string(),
        "Article has no title to summarize"
    );
    assert_eq!(
        SummaryError::VersionNotFound(4).to_string(),
        "Summary version not found: 4"
    );
    assert_eq!(
        SummaryError::GenerationFailed("timeout".to_string()).to_string(),
        "Summary generation failed: timeout"
    );
}

#[test]
fn summary_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SummaryError::EmptyArticle);
    assert!(err.source().is_none());
}
