//! Pagination bar and dashboard header labels.

use crate::types::dashboard::{EmptyState, PageButton, PaginationControls};
use crate::types::query::Filter;

/// Leading page buttons shown before the ellipsis.
pub const MAX_LEADING_PAGE_BUTTONS: usize = 5;

/// Builds the pagination bar for `current_page` out of `page_count`.
///
/// Pages `1..=min(5, page_count)` get buttons; with more than five pages an
/// ellipsis and a button for the last page follow.
pub fn pagination_controls(current_page: usize, page_count: usize) -> PaginationControls {
    let leading = page_count.min(MAX_LEADING_PAGE_BUTTONS);
    let mut buttons: Vec<PageButton> = (1..=leading)
        .map(|number| PageButton::Page {
            number,
            active: number == current_page,
        })
        .collect();

    if page_count > MAX_LEADING_PAGE_BUTTONS {
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page {
            number: page_count,
            active: current_page == page_count,
        });
    }

    PaginationControls {
        visible: page_count > 1,
        buttons,
        previous_enabled: current_page > 1,
        next_enabled: current_page < page_count,
    }
}

/// Heading above the card grid.
pub fn header_title(filter: Filter) -> String {
    match filter {
        Filter::All => "All Bookmarks".to_string(),
        other => {
            let name = other.as_str();
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// "1 bookmark" / "N bookmarks".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 bookmark".to_string()
    } else {
        format!("{} bookmarks", count)
    }
}

/// Message for a page without cards.
pub fn empty_state(search_text: &str) -> EmptyState {
    let message = if search_text.is_empty() {
        "No bookmarks in this category".to_string()
    } else {
        format!("No bookmarks match \"{}\"", search_text)
    };
    EmptyState {
        title: "No bookmarks found".to_string(),
        message,
        offer_clear_search: !search_text.is_empty(),
    }
}
