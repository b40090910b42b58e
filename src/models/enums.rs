//! Shared catalog enums used by the query engine

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Ordering applied to a catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "authorAsc")]
    AuthorAsc,
    #[serde(rename = "authorDesc")]
    AuthorDesc,
    #[serde(rename = "titleAsc")]
    TitleAsc,
    #[serde(rename = "titleDesc")]
    TitleDesc,
    #[serde(rename = "popularityDesc")]
    PopularityDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::AuthorAsc,
        SortKey::AuthorDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::PopularityDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::AuthorAsc => "authorAsc",
            SortKey::AuthorDesc => "authorDesc",
            SortKey::TitleAsc => "titleAsc",
            SortKey::TitleDesc => "titleDesc",
            SortKey::PopularityDesc => "popularityDesc",
        }
    }

    /// Flip the author sort direction. Any other key falls back to `AuthorAsc`.
    pub fn toggled(self) -> Self {
        match self {
            SortKey::AuthorAsc => SortKey::AuthorDesc,
            _ => SortKey::AuthorAsc,
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown sort key: {}", s)))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GenreFilter
// ---------------------------------------------------------------------------

/// Literal that selects every genre
pub const ALL_GENRES: &str = "all";

/// Genre restriction applied to a catalog query.
///
/// `Genre` is an exact, case-sensitive match against `Book::genre`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(wanted) => wanted == genre,
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(s: &str) -> Self {
        if s == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Genre(s.to_string())
        }
    }
}

impl From<String> for GenreFilter {
    fn from(s: String) -> Self {
        if s == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Genre(s)
        }
    }
}

impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        match filter {
            GenreFilter::All => ALL_GENRES.to_string(),
            GenreFilter::Genre(genre) => genre,
        }
    }
}

impl std::fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenreFilter::All => write!(f, "{}", ALL_GENRES),
            GenreFilter::Genre(genre) => write!(f, "{}", genre),
        }
    }
}
