//! Data models for the library catalog

pub mod book;
pub mod enums;
pub mod lending;

// Re-export commonly used types
pub use book::{Book, BookQuery};
pub use enums::{GenreFilter, SortKey};
pub use lending::{BorrowReceipt, BorrowRequest, HistoryEntry, LendingRecord};
