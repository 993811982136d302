//! Filter engine over the loaded catalog.
//!
//! Matching is a case-insensitive substring test against an item's name,
//! category, description and keywords. Results keep catalog order; there is
//! no ranking and no cap on how many matches a non-empty query returns.
//! An empty query is not a search: it yields the bounded default view.

use crate::catalog::Item;

/// Size of the bounded default view shown before any query is entered.
pub const DEFAULT_VIEW_SIZE: usize = 9;

/// How a query was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Blank query: the first items of the catalog, in order.
    DefaultView,
    /// Substring filter over every item.
    Filter,
}

impl SearchMode {
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            Self::DefaultView
        } else {
            Self::Filter
        }
    }
}

/// Filter `items` with the standard default view size.
#[must_use]
pub fn search<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    search_with_view_size(items, query, DEFAULT_VIEW_SIZE)
}

/// Filter `items`, returning the first `view_size` items for a blank query.
#[must_use]
pub fn search_with_view_size<'a>(items: &'a [Item], query: &str, view_size: usize) -> Vec<&'a Item> {
    match SearchMode::for_query(query) {
        SearchMode::DefaultView => items.iter().take(view_size).collect(),
        SearchMode::Filter => {
            let needle = query.to_lowercase();
            items.iter().filter(|item| matches(item, &needle)).collect()
        }
    }
}

/// Whether `item` contains `needle`, which must already be lower-cased.
#[must_use]
pub fn matches(item: &Item, needle: &str) -> bool {
    contains_folded(&item.name, needle)
        || contains_folded(&item.category, needle)
        || contains_folded(&item.description, needle)
        || item.keywords.iter().any(|kw| contains_folded(kw, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
