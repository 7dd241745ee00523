//! Library filtering.
//!
//! A pure, synchronous pass over the local book list. Three criteria
//! compose conjunctively, applied in a fixed order: genre tab, then the
//! single active tag, then the free-text search. O(n) over the
//! collection; no indexing or memoization at this scale.

use serde::{Deserialize, Serialize};

use crate::models::Book;

/// Top-level genre tab. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenreTab {
    #[default]
    All,
    Fiction,
    NonFiction,
    Custom,
}

impl GenreTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreTab::All => "all",
            GenreTab::Fiction => "fiction",
            GenreTab::NonFiction => "non-fiction",
            GenreTab::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenreTab::All => "All Books",
            GenreTab::Fiction => "Fiction",
            GenreTab::NonFiction => "Non-Fiction",
            GenreTab::Custom => "Custom Categories",
        }
    }

    pub fn all_tabs() -> &'static [GenreTab] {
        &[
            GenreTab::All,
            GenreTab::Fiction,
            GenreTab::NonFiction,
            GenreTab::Custom,
        ]
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fiction" => GenreTab::Fiction,
            "non-fiction" => GenreTab::NonFiction,
            "custom" => GenreTab::Custom,
            _ => GenreTab::All,
        }
    }
}

/// Transient per-view filter state. Reset on navigation, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub tab: GenreTab,
    pub tag_filter: Option<String>,
    pub search_query: String,
}

impl FilterState {
    pub fn for_tab(tab: GenreTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Toggle the single active tag: re-selecting the active tag clears
    /// it, selecting another replaces it.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.tag_filter = toggle_tag(self.tag_filter.take(), tag);
    }
}

/// At most one tag filter is active: toggling the active tag clears it,
/// any other tag replaces it.
pub fn toggle_tag(current: Option<String>, tag: &str) -> Option<String> {
    if current.as_deref() == Some(tag) {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Filter a book collection against the current state.
///
/// Pass order matters only for readability - all three criteria are
/// conjunctive. Genre comparison is case-insensitive; the `custom` tab
/// keeps books carrying a non-empty custom category; search matches a
/// lowercased substring of title or author.
pub fn filter(books: &[Book], state: &FilterState) -> Vec<Book> {
    let mut result: Vec<Book> = books.to_vec();

    match state.tab {
        GenreTab::All => {}
        GenreTab::Fiction | GenreTab::NonFiction => {
            let wanted = state.tab.as_str();
            result.retain(|book| book.genre.to_lowercase() == wanted);
        }
        GenreTab::Custom => {
            result.retain(|book| {
                book.custom_category
                    .as_deref()
                    .is_some_and(|c| !c.is_empty())
            });
        }
    }

    if let Some(tag) = state.tag_filter.as_deref() {
        result.retain(|book| book.has_tag(tag));
    }

    if !state.search_query.is_empty() {
        let query = state.search_query.to_lowercase();
        result.retain(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
        });
    }

    result
}

/// The fixed tag vocabulary offered by the library view.
pub const AVAILABLE_TAGS: &[&str] = &[
    "purchased",
    "non-purchased",
    "reading",
    "completed",
    "botm",
    "wishlist",
];
