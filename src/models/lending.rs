//! Lending (borrow) records and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::Book;

/// One borrow event. Immutable once appended to the lending log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingRecord {
    pub book_id: i32,
    pub borrower: String,
    pub date: NaiveDate,
}

/// Borrow request; `borrower` is stored already trimmed
#[derive(Debug, Clone, Validate)]
pub struct BorrowRequest {
    pub book_id: i32,
    #[validate(length(min = 1, message = "Borrower name must not be empty"))]
    pub borrower: String,
}

impl BorrowRequest {
    pub fn new(book_id: i32, borrower: &str) -> Self {
        Self {
            book_id,
            borrower: borrower.trim().to_string(),
        }
    }
}

/// Result of a successful borrow transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowReceipt {
    /// The book after the update
    pub book: Book,
    pub record: LendingRecord,
}

/// A lending record joined with the title of the book it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub book_id: i32,
    pub title: Option<String>,
    pub borrower: String,
    pub date: NaiveDate,
}
