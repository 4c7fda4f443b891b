// Readshelf services
// Services provide the dashboard pipeline: querying, card and pagination views, reader, summaries, settings.

pub mod card_view;
pub mod pagination;
pub mod query_engine;
pub mod reader_view;
pub mod settings_engine;
pub mod summary_editor;
