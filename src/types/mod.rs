// Readshelf shared type definitions
// Each submodule defines types used across the dashboard.

pub mod app_state;
pub mod bookmark;
pub mod dashboard;
pub mod errors;
pub mod query;
pub mod reader;
pub mod settings;
pub mod summary;
