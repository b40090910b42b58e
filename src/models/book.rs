//! Book (catalog entry) model and query parameters

use serde::{Deserialize, Serialize};

use super::enums::{GenreFilter, SortKey};

/// A catalog entry.
///
/// `available` and `borrow_count` only change through a successful borrow;
/// every other field is fixed once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub publisher: String,
    pub available: bool,
    #[serde(default)]
    pub borrow_count: u32,
}

impl Book {
    /// Case-insensitive substring match on title or author. An empty needle
    /// matches every book.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.author.to_lowercase().contains(&needle)
    }
}

/// Catalog query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookQuery {
    pub genre: GenreFilter,
    pub search: String,
    pub sort: SortKey,
}

impl BookQuery {
    pub fn new(genre: impl Into<GenreFilter>, search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            genre: genre.into(),
            search: search.into(),
            sort,
        }
    }
}
