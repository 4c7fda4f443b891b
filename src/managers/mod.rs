// Readshelf state managers
// Managers own stateful collections: the bookmark list the dashboard queries.

pub mod bookmark_manager;
