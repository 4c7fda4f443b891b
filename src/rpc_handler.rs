//! RPC method handler for the Readshelf JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdin.
//! `handle_method` dispatches a method name plus JSON params to the `App`.

use std::sync::Mutex;

use chrono::Utc;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::card_view::cards_for_page;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::app_state::{Action, AppState};
use crate::types::bookmark::BookmarkDraft;
use crate::types::errors::QueryError;
use crate::types::query::{Filter, QueryDescriptor, SortKey};

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn usize_param(params: &Value, key: &str) -> Result<usize, String> {
    let n = params
        .get(key)
        .and_then(|v| v.as_u64())
        .ok_or_else(|| format!("missing {}", key))?;
    usize::try_from(n).map_err(|_| format!("{} out of range: {}", key, n))
}

fn u32_param(params: &Value, key: &str) -> Result<u32, String> {
    let n = usize_param(params, key)?;
    u32::try_from(n).map_err(|_| format!("{} out of range: {}", key, n))
}

fn invalid_descriptor(msg: String) -> String {
    QueryError::InvalidDescriptor(msg).to_string()
}

/// A string field that falls back to `default` only when the key is absent.
fn optional_str<'a>(params: &'a Value, key: &str, default: &'a str) -> Result<&'a str, String> {
    match params.get(key) {
        None => Ok(default),
        Some(v) => v
            .as_str()
            .ok_or_else(|| invalid_descriptor(format!("{} must be a string, got {}", key, v))),
    }
}

/// Reads a query descriptor from params. Absent fields take their defaults;
/// present fields of the wrong type, unknown filter or sort names and pages
/// that are not positive integers are rejected.
fn descriptor_param(params: &Value) -> Result<QueryDescriptor, String> {
    let filter = optional_str(params, "filter", "all")?;
    let search = optional_str(params, "search", "")?;
    let sort = optional_str(params, "sort", "newest")?;
    let page = match params.get("page") {
        None => 1,
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n >= 1)
            .ok_or_else(|| invalid_descriptor(format!("page must be a positive integer, got {}", v)))?,
    };
    QueryDescriptor::from_parts(filter, search, sort, page).map_err(|e| e.to_string())
}

fn state_json(state: &AppState) -> Result<Value, String> {
    serde_json::to_value(state).map_err(|e| e.to_string())
}

fn dispatch(app: &Mutex<App>, action: Action) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;
    let state = a.dispatch(action).map_err(|e| e.to_string())?;
    state_json(state)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.query" => {
            let descriptor = descriptor_param(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let result = a.bookmarks.query(&descriptor).map_err(|e| e.to_string())?;
            serde_json::to_value(result).map_err(|e| e.to_string())
        }
        "bookmark.cards" => {
            let descriptor = descriptor_param(params)?;
            let is_mobile = params.get("mobile").and_then(|v| v.as_bool()).unwrap_or(false);
            let a = app.lock().map_err(|e| e.to_string())?;
            let result = a.bookmarks.query(&descriptor).map_err(|e| e.to_string())?;
            serde_json::to_value(cards_for_page(&result, is_mobile)).map_err(|e| e.to_string())
        }
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.bookmarks.list()).map_err(|e| e.to_string())
        }
        "bookmark.counts" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let counts = a.bookmarks.filter_counts(a.state().shared_policy);
            serde_json::to_value(counts).map_err(|e| e.to_string())
        }
        "bookmark.add" => {
            let draft: BookmarkDraft =
                serde_json::from_value(params.clone()).map_err(|e| format!("invalid bookmark: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.bookmarks.add_bookmark(draft).map_err(|e| e.to_string())?;
            a.refresh_notification();
            Ok(json!({"id": id}))
        }
        "bookmark.delete" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bookmarks.remove_bookmark(id).map_err(|e| e.to_string())?;
            a.refresh_notification();
            Ok(json!({"ok": true}))
        }
        "bookmark.toggle_read" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let is_read = a.bookmarks.toggle_read(id).map_err(|e| e.to_string())?;
            a.refresh_notification();
            Ok(json!({"id": id, "is_read": is_read}))
        }
        "bookmark.archive" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bookmarks.archive(id).map_err(|e| e.to_string())?;
            a.refresh_notification();
            Ok(json!({"ok": true}))
        }
        "bookmark.not_interested" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bookmarks.mark_not_interested(id).map_err(|e| e.to_string())?;
            a.refresh_notification();
            Ok(json!({"ok": true}))
        }
        "bookmark.mark_next" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bookmarks.mark_next(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Dashboard state ───
        "app.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            state_json(a.state())
        }
        "app.page" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let page = a.dashboard_page().map_err(|e| e.to_string())?;
            serde_json::to_value(page).map_err(|e| e.to_string())
        }
        "app.filter" => {
            let filter: Filter = str_param(params, "filter")?.parse().map_err(|e: QueryError| e.to_string())?;
            dispatch(app, Action::SetFilter { filter })
        }
        "app.search" => {
            let text = str_param(params, "text")?.to_string();
            dispatch(app, Action::SetSearch { text })
        }
        "app.sort" => {
            let sort_key: SortKey = str_param(params, "sort")?.parse().map_err(|e: QueryError| e.to_string())?;
            dispatch(app, Action::SetSort { sort_key })
        }
        "app.goto_page" => {
            let page = usize_param(params, "page")?;
            dispatch(app, Action::GoToPage { page })
        }
        "app.resize" => {
            let width = u32_param(params, "width")?;
            let height = u32_param(params, "height")?;
            dispatch(app, Action::Resize { width, height })
        }
        "app.dark_mode" => {
            let enabled = params
                .get("enabled")
                .and_then(|v| v.as_bool())
                .ok_or("missing enabled")?;
            dispatch(app, Action::SetDarkMode { enabled })
        }
        "app.dispatch" => {
            let action: Action =
                serde_json::from_value(params.clone()).map_err(|e| format!("invalid action: {}", e))?;
            dispatch(app, action)
        }
        "app.tick" => dispatch(app, Action::Tick { now: Utc::now() }),

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
