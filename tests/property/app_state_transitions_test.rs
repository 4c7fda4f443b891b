//! Property-based tests for dashboard state transitions.
//!
//! These tests drive `AppState` and `App` with arbitrary action sequences and
//! check the invariants the dashboard relies on.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;

use readshelf::app::App;
use readshelf::managers::bookmark_manager::BookmarkManager;
use readshelf::types::app_state::{Action, AppState, Layout, ViewMode, MOBILE_MAX_WIDTH};
use readshelf::types::query::{Filter, SortKey};

fn arb_query_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop_oneof![
            Just(Filter::All),
            Just(Filter::Unread),
            Just(Filter::Read),
            Just(Filter::Tags),
            Just(Filter::Shared),
        ]
        .prop_map(|filter| Action::SetFilter { filter }),
        "[a-z]{0,4}".prop_map(|text| Action::SetSearch { text }),
        Just(Action::ClearSearch),
        prop_oneof![
            Just(SortKey::Newest),
            Just(SortKey::Oldest),
            Just(SortKey::Alphabetical),
        ]
        .prop_map(|sort_key| Action::SetSort { sort_key }),
        (0usize..10).prop_map(|page| Action::GoToPage { page }),
        Just(Action::NextPage),
        Just(Action::PreviousPage),
    ]
}

fn arb_ui_action() -> impl Strategy<Value = Action> {
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    prop_oneof![
        prop_oneof![Just(ViewMode::Grid), Just(ViewMode::List)]
            .prop_map(|mode| Action::SetViewMode { mode }),
        (200u32..2000, 300u32..1200).prop_map(|(width, height)| Action::Resize { width, height }),
        Just(Action::ToggleDarkMode),
        Just(Action::ToggleCollaboration),
        (0i64..120).prop_map(move |s| Action::NotificationSnooze { now: base + Duration::seconds(s) }),
        (0i64..200).prop_map(move |s| Action::Tick { now: base + Duration::seconds(s) }),
        Just(Action::NotificationDismiss),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![arb_query_action(), arb_ui_action()]
}

// **Property 10: Page stays 1-based**
//
// *For any* sequence of actions, the pure transition never produces page 0.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn page_never_zero(actions in prop::collection::vec(arb_action(), 0..30)) {
        let mut state = AppState::default();
        for action in actions {
            state = state.apply(action);
            prop_assert!(state.page >= 1);
        }
    }
}

// **Property 11: Query changes return to page 1**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn query_change_resets_page(page in 1usize..50, text in "[a-z]{0,6}") {
        let start = AppState { page, ..AppState::default() };
        prop_assert_eq!(start.clone().apply(Action::SetSearch { text }).page, 1);
        prop_assert_eq!(start.clone().apply(Action::SetFilter { filter: Filter::Tags }).page, 1);
        prop_assert_eq!(start.apply(Action::SetSort { sort_key: SortKey::Oldest }).page, 1);
    }
}

// **Property 12: Layout flags follow the viewport**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn layout_flags_follow_width(width in 0u32..3000, height in 0u32..3000) {
        let layout = Layout::from_viewport(width, height);
        prop_assert_eq!(layout.is_mobile, width < MOBILE_MAX_WIDTH);
        prop_assert_eq!(layout.is_tablet, (700..=1024).contains(&width));

        let state = AppState::default().apply(Action::Resize { width, height });
        prop_assert_eq!(state.sidebar_visible(), !state.filter_chips_visible());
        if state.layout.is_mobile {
            prop_assert_eq!(state.effective_view_mode(), ViewMode::Grid);
        }
    }
}

// **Property 13: Dispatch keeps the page within the result range**
//
// *For any* action sequence on a running App, the current page is either 1 or
// no greater than the page count of the current query.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn dispatch_keeps_page_in_range(actions in prop::collection::vec(arb_action(), 0..20)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();
        let mut app = App::new(BookmarkManager::sample().unwrap(), Some(path)).unwrap();

        for action in actions {
            app.dispatch(action).unwrap();
            let page_count = app.current_page().unwrap().page_count;
            let page = app.state().page;
            prop_assert!(page == 1 || page <= page_count, "page {} of {}", page, page_count);
        }
    }
}
