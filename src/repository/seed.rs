//! Seed data loaded once when the catalog starts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Book, LendingRecord},
};

/// Initial catalog contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub books: Vec<Book>,
    #[serde(default)]
    pub lending_records: Vec<LendingRecord>,
}

impl SeedData {
    /// Parse a JSON seed document
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON seed file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        tracing::info!("Loading catalog seed from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Seed file when a path is configured, otherwise the built-in set
    pub fn load(seed_path: Option<&str>) -> AppResult<Self> {
        match seed_path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// The demo catalog: five books and their borrowing history
    pub fn builtin() -> AppResult<Self> {
        let books = vec![
            book(101, "The Silent Woods", "Priya Sharma", "Mystery", true, 7, "978-0-9876543-2-1", "Crimson Quill"),
            book(102, "Echoes of the Past", "Vikram Singh", "Historical Fiction", false, 12, "978-1-2345678-9-0", "Chronicle Books"),
            book(103, "Starlight Sonata", "Aanya Patel", "Science Fiction", true, 5, "978-3-1415926-5-3", "Nova Press"),
            book(104, "The Hidden Garden", "Rajesh Verma", "Fantasy", true, 9, "978-7-6543210-9-8", "Veridian Books"),
            book(105, "City of Shadows", "Meera Gupta", "Thriller", false, 15, "978-2-4681357-9-0", "Shadow Publishing"),
        ];

        let lending_records = vec![
            record(101, "Aryan Singh", 2025, 3, 15)?,
            record(101, "Siya Sharma", 2025, 3, 22)?,
            record(102, "Rohan Patel", 2025, 3, 18)?,
            record(102, "Priya Verma", 2025, 3, 28)?,
            record(102, "Aditya Gupta", 2025, 3, 5)?,
            record(103, "Ananya Singh", 2025, 3, 24)?,
            record(104, "Vikram Sharma", 2025, 3, 19)?,
            record(104, "Ishita Patel", 2025, 3, 26)?,
            record(105, "Arjun Verma", 2025, 3, 10)?,
            record(105, "Diya Gupta", 2025, 3, 17)?,
            record(105, "Karan Singh", 2025, 3, 1)?,
        ];

        Ok(Self {
            books,
            lending_records,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: i32,
    title: &str,
    author: &str,
    genre: &str,
    available: bool,
    borrow_count: u32,
    isbn: &str,
    publisher: &str,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        isbn: isbn.to_string(),
        publisher: publisher.to_string(),
        available,
        borrow_count,
    }
}

fn record(book_id: i32, borrower: &str, year: i32, month: u32, day: u32) -> AppResult<LendingRecord> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::Seed(format!("invalid date {}-{}-{} for book {}", year, month, day, book_id))
    })?;
    Ok(LendingRecord {
        book_id,
        borrower: borrower.to_string(),
        date,
    })
}
