//! Unit tests for the RPC handler, covering the JSON-RPC methods dispatched by
//! `handle_method`.
//!
//! These tests exercise every method through the same code path used by the
//! `readshelf-rpc` binary, with settings stored in a temporary directory.

use std::sync::Mutex;
use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;

use readshelf::app::App;
use readshelf::managers::bookmark_manager::BookmarkManager;
use readshelf::rpc_handler::handle_method;

/// Create a fresh App over the sample collection.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let app = App::new(BookmarkManager::sample().unwrap(), Some(path)).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

// ─── Unknown method ───

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Bookmarks ───

#[test]
fn test_bookmark_query_defaults() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.query", &json!({})).unwrap();
    assert_eq!(res["total_count"], 6);
    assert_eq!(res["page_count"], 1);
    assert_eq!(res["items"][0]["id"], "1");
}

#[test]
fn test_bookmark_query_unread_alphabetical() {
    let (app, _tmp) = setup();
    let res = handle_method(
        &app,
        "bookmark.query",
        &json!({"filter": "unread", "sort": "alphabetical"}),
    )
    .unwrap();
    let titles: Vec<&str> = res["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "CSS Grid vs Flexbox: When to Use Which",
            "Machine Learning for Frontend Developers",
            "The Future of Web Development: Trends to Watch in 2024",
            "UX Research Methods: A Comprehensive Guide",
        ]
    );
}

#[test]
fn test_bookmark_query_rejects_bad_descriptor() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "bookmark.query", &json!({"filter": "starred"})).is_err());
    assert!(handle_method(&app, "bookmark.query", &json!({"page": 0})).is_err());
}

/// A field that is present but of the wrong type is an error, never a default.
#[rstest]
#[case(json!({"filter": 5}))]
#[case(json!({"filter": null}))]
#[case(json!({"sort": ["newest"]}))]
#[case(json!({"search": 42}))]
#[case(json!({"page": -3}))]
#[case(json!({"page": "2"}))]
#[case(json!({"page": 1.5}))]
fn test_bookmark_query_rejects_wrong_typed_fields(#[case] params: Value) {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "bookmark.query", &params).unwrap_err();
    assert!(err.contains("Invalid query descriptor"), "{params}: {err}");
    assert!(handle_method(&app, "bookmark.cards", &params).is_err());
}

#[test]
fn test_bookmark_query_explicit_fields() {
    let (app, _tmp) = setup();
    let res = handle_method(
        &app,
        "bookmark.query",
        &json!({"filter": "read", "search": "", "sort": "oldest", "page": 1}),
    )
    .unwrap();
    assert_eq!(res["total_count"], 2);
    assert_eq!(res["items"][0]["id"], "4");
}

#[test]
fn test_bookmark_cards_mobile_truncates_tags() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.cards", &json!({"mobile": true})).unwrap();
    let first = &res[0];
    assert_eq!(first["hostname"], "techblog.example.com");
    assert_eq!(first["visible_tags"].as_array().unwrap().len(), 2);
    assert_eq!(first["hidden_tag_count"], 2);
}

#[test]
fn test_bookmark_counts() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.counts", &json!({})).unwrap();
    assert_eq!(res, json!({"all": 6, "unread": 4, "read": 2, "tags": 6, "shared": 1}));
}

#[test]
fn test_bookmark_add_and_list() {
    let (app, _tmp) = setup();

    let res = handle_method(&app, "bookmark.add", &json!({
        "title": "The Rust Book",
        "url": "https://doc.rust-lang.org/book/",
        "tags": ["rust"]
    }))
    .unwrap();
    let id = res["id"].as_str().unwrap().to_string();

    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 7);
    assert_eq!(list[6]["id"], id.as_str());
    assert_eq!(list[6]["is_read"], false);
}

#[test]
fn test_bookmark_add_missing_title_fails() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.add", &json!({"url": "https://x.dev"}));
    assert!(res.unwrap_err().contains("invalid bookmark"));
}

#[test]
fn test_bookmark_toggle_read() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "bookmark.toggle_read", &json!({"id": "1"})).unwrap();
    assert_eq!(res, json!({"id": "1", "is_read": true}));
}

#[test]
fn test_bookmark_card_actions() {
    let (app, _tmp) = setup();
    handle_method(&app, "bookmark.delete", &json!({"id": "2"})).unwrap();
    handle_method(&app, "bookmark.archive", &json!({"id": "3"})).unwrap();
    handle_method(&app, "bookmark.not_interested", &json!({"id": "4"})).unwrap();
    handle_method(&app, "bookmark.mark_next", &json!({"id": "6"})).unwrap();

    let list = handle_method(&app, "bookmark.list", &json!({})).unwrap();
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["6", "1", "5"]);
}

#[test]
fn test_bookmark_action_missing_id() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "bookmark.delete", &json!({})).unwrap_err().contains("missing id"));
    assert!(handle_method(&app, "bookmark.delete", &json!({"id": "99"})).unwrap_err().contains("not found"));
}

// ─── Dashboard state ───

#[test]
fn test_app_filter_resets_page_and_updates_header() {
    let (app, _tmp) = setup();
    let state = handle_method(&app, "app.filter", &json!({"filter": "read"})).unwrap();
    assert_eq!(state["filter"], "read");
    assert_eq!(state["page"], 1);

    let page = handle_method(&app, "app.page", &json!({})).unwrap();
    assert_eq!(page["header_title"], "Read");
    assert_eq!(page["count_label"], "2 bookmarks");
}

#[test]
fn test_app_search_and_sort() {
    let (app, _tmp) = setup();
    handle_method(&app, "app.search", &json!({"text": "javascript"})).unwrap();
    let state = handle_method(&app, "app.sort", &json!({"sort": "oldest"})).unwrap();
    assert_eq!(state["search_text"], "javascript");
    assert_eq!(state["sort_key"], "oldest");

    let page = handle_method(&app, "app.page", &json!({})).unwrap();
    assert_eq!(page["count_label"], "3 bookmarks");
    assert_eq!(page["cards"][0]["id"], "6");
}

#[test]
fn test_app_filter_unknown_name() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "app.filter", &json!({"filter": "bogus"})).is_err());
}

#[test]
fn test_app_resize_and_dark_mode() {
    let (app, _tmp) = setup();
    let state = handle_method(&app, "app.resize", &json!({"width": 375, "height": 812})).unwrap();
    assert_eq!(state["layout"]["is_mobile"], true);

    let state = handle_method(&app, "app.dark_mode", &json!({"enabled": true})).unwrap();
    assert_eq!(state["dark_mode"], true);
}

#[test]
fn test_app_resize_rejects_out_of_range_width() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "app.resize", &json!({"width": 5_000_000_000u64, "height": 800}))
        .unwrap_err();
    assert!(err.contains("width out of range"));
    assert!(handle_method(&app, "app.resize", &json!({"width": -1, "height": 800})).is_err());

    let state = handle_method(&app, "app.state", &json!({})).unwrap();
    assert_eq!(state["layout"]["is_mobile"], false);
}

/// Bookmark actions move the notification off a target that is read or gone.
#[test]
fn test_notification_follows_bookmark_actions() {
    let (app, _tmp) = setup();
    let state = handle_method(&app, "app.state", &json!({})).unwrap();
    assert_eq!(state["notification"]["article_id"], "1");

    handle_method(&app, "bookmark.toggle_read", &json!({"id": "1"})).unwrap();
    let state = handle_method(&app, "app.state", &json!({})).unwrap();
    assert_eq!(state["notification"]["article_id"], "3");

    handle_method(&app, "bookmark.archive", &json!({"id": "3"})).unwrap();
    let state = handle_method(&app, "app.dispatch", &json!({"type": "notification_read_now"})).unwrap();
    assert_eq!(state["view"], json!({"screen": "reader", "bookmark_id": "5"}));
}

#[test]
fn test_app_dispatch_action_json() {
    let (app, _tmp) = setup();
    let state = handle_method(
        &app,
        "app.dispatch",
        &json!({"type": "open_reader", "bookmark_id": "5"}),
    )
    .unwrap();
    assert_eq!(state["view"], json!({"screen": "reader", "bookmark_id": "5"}));

    assert!(handle_method(&app, "app.dispatch", &json!({"type": "fly"})).is_err());
}

#[test]
fn test_app_goto_page_is_clamped() {
    let (app, _tmp) = setup();
    let state = handle_method(&app, "app.goto_page", &json!({"page": 4})).unwrap();
    assert_eq!(state["page"], 1);
}

// ─── Settings ───

#[test]
fn test_settings_get_set_reset() {
    let (app, _tmp) = setup();

    let settings = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(settings["reading"]["page_size"], 12);

    handle_method(&app, "settings.set", &json!({"key": "reading.page_size", "value": 2})).unwrap();
    let page = handle_method(&app, "app.page", &json!({})).unwrap();
    assert_eq!(page["cards"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["visible"], true);

    handle_method(&app, "settings.set", &json!({"key": "appearance.theme", "value": "dark"})).unwrap();
    let state = handle_method(&app, "app.state", &json!({})).unwrap();
    assert_eq!(state["dark_mode"], true);

    handle_method(&app, "settings.reset", &json!({})).unwrap();
    let state = handle_method(&app, "app.state", &json!({})).unwrap();
    assert_eq!(state["page_size"], 12);
    assert_eq!(state["dark_mode"], false);
}

#[test]
fn test_settings_set_invalid_key() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "settings.set", &json!({"key": "nope.nothing", "value": 1}));
    assert!(res.unwrap_err().contains("Invalid settings key"));
}
