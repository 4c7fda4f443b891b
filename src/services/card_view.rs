//! Card view model: what one bookmark card shows.

use crate::types::bookmark::Bookmark;
use crate::types::dashboard::BookmarkCard;
use crate::types::query::QueryResult;

/// Tags shown on a card before the `+N` overflow badge.
pub const DESKTOP_VISIBLE_TAGS: usize = 3;
pub const MOBILE_VISIBLE_TAGS: usize = 2;

/// Builds the card for `bookmark`.
///
/// A malformed URL only affects this card: the hostname is left empty and
/// the error is carried alongside it.
pub fn card_view(bookmark: &Bookmark, is_mobile: bool) -> BookmarkCard {
    let (hostname, hostname_error) = match bookmark.hostname() {
        Ok(host) => (Some(host), None),
        Err(e) => {
            tracing::warn!(id = %bookmark.id, url = %bookmark.url, "bookmark URL has no hostname");
            (None, Some(e.to_string()))
        }
    };

    let limit = if is_mobile {
        MOBILE_VISIBLE_TAGS
    } else {
        DESKTOP_VISIBLE_TAGS
    };
    let visible_tags: Vec<String> = bookmark.tags.iter().take(limit).cloned().collect();
    let hidden_tag_count = bookmark.tags.len().saturating_sub(limit);

    BookmarkCard {
        id: bookmark.id.clone(),
        title: bookmark.title.clone(),
        snippet: bookmark.snippet.clone(),
        url: bookmark.url.clone(),
        hostname,
        hostname_error,
        visible_tags,
        hidden_tag_count,
        date_label: bookmark.created_at.format("%Y-%m-%d").to_string(),
        is_read: bookmark.is_read,
        status_label: if bookmark.is_read { "Read" } else { "Unread" }.to_string(),
        mark_read_label: if bookmark.is_read {
            "Mark Unread"
        } else {
            "Mark Read"
        }
        .to_string(),
    }
}

/// Cards for every record on a result page, in page order.
pub fn cards_for_page(result: &QueryResult, is_mobile: bool) -> Vec<BookmarkCard> {
    result
        .items
        .iter()
        .map(|b| card_view(b, is_mobile))
        .collect()
}
