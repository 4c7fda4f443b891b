//! Bookmark Query Engine for Readshelf.
//!
//! Turns a bookmark collection plus a [`QueryDescriptor`] into one page of
//! results: filter, then search, then sort, then paginate. Every stage works
//! on borrowed records and builds fresh vectors, so the caller's collection is
//! never reordered or mutated.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::bookmark::{Bookmark, FilterCounts};
use crate::types::errors::QueryError;
use crate::types::query::{Filter, QueryDescriptor, QueryResult, SharedPolicy, SortKey};

/// Runs the full pipeline and returns the requested page.
///
/// A page past the end yields empty `items`; an empty collection yields a
/// zero count and zero pages. Only a descriptor with `page == 0` or
/// `page_size == 0` is rejected.
pub fn query(bookmarks: &[Bookmark], descriptor: &QueryDescriptor) -> Result<QueryResult, QueryError> {
    descriptor.validate()?;

    let sorted = matching(bookmarks, descriptor);
    let (items, page_count) = paginate(&sorted, descriptor.page, descriptor.page_size);

    tracing::debug!(
        filter = %descriptor.filter,
        sort = %descriptor.sort_key,
        search = %descriptor.search_text,
        page = descriptor.page,
        total = sorted.len(),
        returned = items.len(),
        "bookmark query"
    );

    Ok(QueryResult {
        items,
        total_count: sorted.len(),
        page_count,
    })
}

/// The complete filtered, searched and sorted set, before pagination.
pub fn matching<'a>(bookmarks: &'a [Bookmark], descriptor: &QueryDescriptor) -> Vec<&'a Bookmark> {
    let filtered = apply_filter(bookmarks, descriptor.filter, descriptor.shared_policy);
    let searched = apply_search(filtered, &descriptor.search_text);
    apply_sort(searched, descriptor.sort_key)
}

/// Selects the records belonging to `filter`, preserving input order.
pub fn apply_filter(bookmarks: &[Bookmark], filter: Filter, policy: SharedPolicy) -> Vec<&Bookmark> {
    match filter {
        Filter::All => bookmarks.iter().collect(),
        Filter::Unread => bookmarks.iter().filter(|b| !b.is_read).collect(),
        Filter::Read => bookmarks.iter().filter(|b| b.is_read).collect(),
        Filter::Tags => bookmarks.iter().filter(|b| b.has_tags()).collect(),
        Filter::Shared => match policy {
            SharedPolicy::LeadingFraction => {
                bookmarks.iter().take(shared_prefix_len(bookmarks.len())).collect()
            }
            SharedPolicy::Flagged => bookmarks.iter().filter(|b| b.shared).collect(),
        },
    }
}

/// `floor(0.3 * n)`, computed without floating point.
pub fn shared_prefix_len(n: usize) -> usize {
    n * 3 / 10
}

/// Keeps records whose title, snippet or any tag contains `search_text`,
/// ignoring case. An empty search keeps everything.
pub fn apply_search<'a>(records: Vec<&'a Bookmark>, search_text: &str) -> Vec<&'a Bookmark> {
    if search_text.is_empty() {
        return records;
    }
    let needle = search_text.to_lowercase();
    records
        .into_iter()
        .filter(|b| matches_search(b, &needle))
        .collect()
}

/// Whether `bookmark` matches an already-lowercased needle.
pub fn matches_search(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.title.to_lowercase().contains(needle)
        || bookmark.snippet.to_lowercase().contains(needle)
        || bookmark
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Orders records by `sort_key`. The sort is stable: ties keep their
/// incoming relative order.
pub fn apply_sort(mut records: Vec<&Bookmark>, sort_key: SortKey) -> Vec<&Bookmark> {
    match sort_key {
        SortKey::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Alphabetical => records.sort_by(|a, b| locale_compare(&a.title, &b.title)),
    }
    records
}

/// Clones the records of the 1-based `page` and returns them with the page count.
pub fn paginate(records: &[&Bookmark], page: usize, page_size: usize) -> (Vec<Bookmark>, usize) {
    if page_size == 0 {
        return (Vec::new(), 0);
    }
    let page_count = records.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page == 0 || start >= records.len() {
        return (Vec::new(), page_count);
    }
    let end = start.saturating_add(page_size).min(records.len());
    let items = records[start..end].iter().map(|b| (*b).clone()).collect();
    (items, page_count)
}

/// Counts how many records each sidebar filter would select.
pub fn filter_counts(bookmarks: &[Bookmark], policy: SharedPolicy) -> FilterCounts {
    FilterCounts {
        all: bookmarks.len(),
        unread: apply_filter(bookmarks, Filter::Unread, policy).len(),
        read: apply_filter(bookmarks, Filter::Read, policy).len(),
        tags: apply_filter(bookmarks, Filter::Tags, policy).len(),
        shared: apply_filter(bookmarks, Filter::Shared, policy).len(),
    }
}

/// Compares two titles the way a reader expects a sorted list to look.
///
/// Titles are decomposed (NFD) first, so a precomposed `é` and `e` followed
/// by a combining acute compare equal. Three passes decide the order:
///
/// 1. base letters without accents, case-insensitively, with whitespace
///    ranked before punctuation, punctuation before digits and digits
///    before letters;
/// 2. accents, unaccented first;
/// 3. case, lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| accent_keys(a).cmp(&accent_keys(b)))
        .then_with(|| case_keys(a).cmp(case_keys(b)))
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn primary_keys(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    base_chars(s)
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// The combining marks attached to each base character, in order.
fn accent_keys(s: &str) -> Vec<Vec<char>> {
    let mut keys: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(marks) = keys.last_mut() {
                marks.push(c);
            }
        } else {
            keys.push(Vec::new());
        }
    }
    keys
}

fn case_keys(s: &str) -> impl Iterator<Item = bool> + '_ {
    base_chars(s).map(char::is_uppercase)
}
