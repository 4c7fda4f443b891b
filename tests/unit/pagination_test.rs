//! Unit tests for the pagination bar and dashboard header labels.

use rstest::rstest;

use readshelf::services::pagination::{count_label, empty_state, header_title, pagination_controls};
use readshelf::types::dashboard::PageButton;
use readshelf::types::query::Filter;

fn page(number: usize, active: bool) -> PageButton {
    PageButton::Page { number, active }
}

#[test]
fn test_single_page_hides_bar() {
    let controls = pagination_controls(1, 1);
    assert!(!controls.visible);
    assert!(!controls.previous_enabled);
    assert!(!controls.next_enabled);
}

#[test]
fn test_no_pages_hides_bar() {
    let controls = pagination_controls(1, 0);
    assert!(!controls.visible);
    assert!(controls.buttons.is_empty());
}

#[test]
fn test_three_pages_show_every_button() {
    let controls = pagination_controls(2, 3);
    assert!(controls.visible);
    assert_eq!(controls.buttons, vec![page(1, false), page(2, true), page(3, false)]);
    assert!(controls.previous_enabled);
    assert!(controls.next_enabled);
}

/// More than five pages: five leading buttons, an ellipsis, then the last page.
#[test]
fn test_many_pages_collapse_with_ellipsis() {
    let controls = pagination_controls(1, 9);
    assert_eq!(
        controls.buttons,
        vec![
            page(1, true),
            page(2, false),
            page(3, false),
            page(4, false),
            page(5, false),
            PageButton::Ellipsis,
            page(9, false),
        ]
    );
    assert!(!controls.previous_enabled);
    assert!(controls.next_enabled);
}

#[test]
fn test_last_page_disables_next() {
    let controls = pagination_controls(9, 9);
    assert_eq!(controls.buttons.last(), Some(&page(9, true)));
    assert!(controls.previous_enabled);
    assert!(!controls.next_enabled);
}

#[rstest]
#[case(Filter::All, "All Bookmarks")]
#[case(Filter::Unread, "Unread")]
#[case(Filter::Read, "Read")]
#[case(Filter::Tags, "Tags")]
#[case(Filter::Shared, "Shared")]
fn test_header_title(#[case] filter: Filter, #[case] expected: &str) {
    assert_eq!(header_title(filter), expected);
}

#[rstest]
#[case(0, "0 bookmarks")]
#[case(1, "1 bookmark")]
#[case(2, "2 bookmarks")]
#[case(13, "13 bookmarks")]
fn test_count_label(#[case] count: usize, #[case] expected: &str) {
    assert_eq!(count_label(count), expected);
}

#[test]
fn test_empty_state_with_search() {
    let state = empty_state("quantum");
    assert_eq!(state.title, "No bookmarks found");
    assert!(state.message.contains("\"quantum\""));
    assert!(state.offer_clear_search);
}

#[test]
fn test_empty_state_without_search() {
    let state = empty_state("");
    assert_eq!(state.message, "No bookmarks in this category");
    assert!(!state.offer_clear_search);
}
