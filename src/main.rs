//! Readshelf: a bookmark dashboard for a reading list.
//!
//! Console demo: loads the sample collection and walks the dashboard through
//! a few user actions, printing what each screen would show.

use chrono::Utc;

use readshelf::app::App;
use readshelf::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use readshelf::services::reader_view::{ReaderView, ReaderViewTrait};
use readshelf::services::summary_editor::{StubSummaryGenerator, SummaryEditorTrait};
use readshelf::types::app_state::Action;
use readshelf::types::dashboard::{DashboardPage, PageButton};
use readshelf::types::query::{Filter, SortKey};

use tracing_subscriber::EnvFilter;

type DemoResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> DemoResult {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    println!();
    println!("Readshelf v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new(BookmarkManager::sample()?, None)?;

    demo_sidebar(&app);
    demo_dashboard(&mut app)?;
    demo_reader(&mut app)?;
    demo_summary(&mut app)?;
    demo_notification(&mut app)?;
    Ok(())
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_page(page: &DashboardPage) {
    println!("  {} ({})", page.header_title, page.count_label);
    for card in &page.cards {
        let host = card.hostname.as_deref().unwrap_or("?");
        let mut tags = card.visible_tags.join(", ");
        if card.hidden_tag_count > 0 {
            tags.push_str(&format!(" +{}", card.hidden_tag_count));
        }
        println!(
            "   [{}] {} · {} ({}) [{}]",
            card.status_label, card.title, host, card.date_label, tags
        );
    }
    if let Some(empty) = &page.empty_state {
        println!("   {}: {}", empty.title, empty.message);
    }
    if page.pagination.visible {
        let buttons: Vec<String> = page
            .pagination
            .buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, active: true } => format!("[{}]", number),
                PageButton::Page { number, .. } => number.to_string(),
                PageButton::Ellipsis => "…".to_string(),
            })
            .collect();
        println!("   pages: {}", buttons.join(" "));
    }
}

fn demo_sidebar(app: &App) {
    section("Sidebar");
    let counts = app.bookmarks.filter_counts(app.state().shared_policy);
    println!("  all={} unread={} read={} tags={} shared={}",
        counts.all, counts.unread, counts.read, counts.tags, counts.shared);
    println!();
}

fn demo_dashboard(app: &mut App) -> DemoResult {
    section("Dashboard");
    print_page(&app.dashboard_page()?);

    app.dispatch(Action::SetFilter { filter: Filter::Unread })?;
    app.dispatch(Action::SetSort { sort_key: SortKey::Alphabetical })?;
    print_page(&app.dashboard_page()?);

    app.dispatch(Action::SetSearch { text: "no such thing".to_string() })?;
    print_page(&app.dashboard_page()?);

    app.dispatch(Action::ClearSearch)?;
    app.dispatch(Action::SetFilter { filter: Filter::All })?;
    println!();
    Ok(())
}

fn demo_reader(app: &mut App) -> DemoResult {
    section("Reader");
    let id = match app.current_page()?.items.first() {
        Some(b) => b.id.clone(),
        None => return Ok(()),
    };
    app.dispatch(Action::OpenReader { bookmark_id: id.clone() })?;

    let mut reader = ReaderView::new(app.article(&id)?);
    println!("  {} ({})", reader.article().title, reader.source_hostname()?);
    println!("  ~{} min read, font {}px", reader.estimated_read_time_minutes(), reader.font_size());
    println!("  font +: {}px", reader.increase_font());
    println!("  progress at half scroll: {:.0}%", reader.update_progress(500.0, 1000.0));

    app.dispatch(Action::CloseReader)?;
    println!();
    Ok(())
}

fn demo_summary(app: &mut App) -> DemoResult {
    section("Summary Editor");
    let id = match app.bookmarks.list().first() {
        Some(b) => b.id.clone(),
        None => return Ok(()),
    };
    app.open_summary(&id)?;
    let generated = app.generate_summary(&StubSummaryGenerator, Utc::now())?;
    println!("  {}", generated);
    let saved = app.save_summary(Utc::now());
    println!("  saved {} chars, {} version(s)", saved.len(), app.summary_editor.versions().len());
    println!();
    Ok(())
}

fn demo_notification(app: &mut App) -> DemoResult {
    section("Notification");
    let now = Utc::now();
    println!("  article: {:?}, visible: {}",
        app.state().notification.article_id, app.state().notification_visible());
    app.dispatch(Action::NotificationSnooze { now })?;
    println!("  snoozed, visible: {}", app.state().notification_visible());
    app.dispatch(Action::Tick { now: now + chrono::Duration::seconds(31) })?;
    println!("  after 31s, visible: {}", app.state().notification_visible());
    println!();
    Ok(())
}
