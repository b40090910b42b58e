//! In-memory catalog store: the single owner of books and lending records

use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::seed::SeedData;
use crate::{
    error::{AppError, AppResult, BorrowError},
    models::{Book, BorrowReceipt, LendingRecord},
};

#[derive(Debug, Default)]
struct CatalogState {
    /// Keyed by id, iterated in insertion order
    books: IndexMap<i32, Book>,
    records: Vec<LendingRecord>,
    /// Borrows counted in the seed's `borrowCount` with no record in the log
    historical_borrows: HashMap<i32, u32>,
}

/// Shared handle to the catalog. Clones point at the same collections.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    state: Arc<RwLock<CatalogState>>,
}

impl CatalogStore {
    /// Build a store from seed data, rejecting seeds that break the
    /// catalog invariants
    pub fn from_seed(seed: SeedData) -> AppResult<Self> {
        let mut books = IndexMap::with_capacity(seed.books.len());
        for book in seed.books {
            let id = book.id;
            if books.insert(id, book).is_some() {
                return Err(AppError::Seed(format!("duplicate book id {} in seed", id)));
            }
        }

        let mut logged: HashMap<i32, u32> = HashMap::new();
        for record in &seed.lending_records {
            if !books.contains_key(&record.book_id) {
                return Err(AppError::Seed(format!(
                    "lending record references unknown book {}",
                    record.book_id
                )));
            }
            if record.borrower.trim().is_empty() {
                return Err(AppError::Seed(format!(
                    "lending record for book {} has an empty borrower",
                    record.book_id
                )));
            }
            *logged.entry(record.book_id).or_default() += 1;
        }

        let mut historical_borrows = HashMap::with_capacity(books.len());
        for book in books.values() {
            if book.available && book.borrow_count == u32::MAX {
                return Err(AppError::Seed(format!(
                    "available book {} has no room left in its borrowCount",
                    book.id
                )));
            }
            let in_log = logged.get(&book.id).copied().unwrap_or(0);
            let historical = book.borrow_count.checked_sub(in_log).ok_or_else(|| {
                AppError::Seed(format!(
                    "book {} has borrowCount {} but {} lending records",
                    book.id, book.borrow_count, in_log
                ))
            })?;
            historical_borrows.insert(book.id, historical);
        }

        tracing::info!(
            "Catalog loaded: {} books, {} lending records",
            books.len(),
            seed.lending_records.len()
        );

        Ok(Self {
            state: Arc::new(RwLock::new(CatalogState {
                books,
                records: seed.lending_records,
                historical_borrows,
            })),
        })
    }

    // apply_borrow does every fallible step before its first write, so a
    // poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every book, in insertion order
    pub fn get_books(&self) -> Vec<Book> {
        self.read().books.values().cloned().collect()
    }

    /// Snapshot of the lending log, oldest first
    pub fn get_lending_records(&self) -> Vec<LendingRecord> {
        self.read().records.clone()
    }

    pub fn get_book_by_id(&self, id: i32) -> Option<Book> {
        self.read().books.get(&id).cloned()
    }

    /// Lending records for one book, oldest first
    pub fn records_for_book(&self, id: i32) -> Vec<LendingRecord> {
        self.read()
            .records
            .iter()
            .filter(|r| r.book_id == id)
            .cloned()
            .collect()
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().books.is_empty()
    }

    /// Apply a borrow transaction.
    ///
    /// The checks and all three writes (availability, borrow count, log
    /// entry) happen under one write lock, so concurrent callers can never
    /// borrow the same book twice and a rejected call leaves no trace.
    pub fn apply_borrow(
        &self,
        book_id: i32,
        borrower: &str,
        date: NaiveDate,
    ) -> Result<BorrowReceipt, BorrowError> {
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(BorrowError::EmptyBorrowerName);
        }

        let mut state = self.write();
        let book = state
            .books
            .get_mut(&book_id)
            .ok_or(BorrowError::BookNotFound(book_id))?;
        if !book.available {
            return Err(BorrowError::BookUnavailable(book_id));
        }
        // A count that cannot grow means the book cannot be lent again
        let borrow_count = book
            .borrow_count
            .checked_add(1)
            .ok_or(BorrowError::BookUnavailable(book_id))?;
        let record = LendingRecord {
            book_id,
            borrower: borrower.to_string(),
            date,
        };

        book.available = false;
        book.borrow_count = borrow_count;
        let book = book.clone();
        state.records.push(record.clone());

        Ok(BorrowReceipt { book, record })
    }

    /// Check that every record references a known book and that each
    /// book's borrow count matches its history
    pub fn verify_consistency(&self) -> AppResult<()> {
        let state = self.read();

        let mut logged: HashMap<i32, u32> = HashMap::new();
        for record in &state.records {
            if !state.books.contains_key(&record.book_id) {
                tracing::warn!("Lending record references unknown book {}", record.book_id);
                return Err(AppError::Internal(format!(
                    "lending record references unknown book {}",
                    record.book_id
                )));
            }
            *logged.entry(record.book_id).or_default() += 1;
        }

        for book in state.books.values() {
            let expected = u64::from(state.historical_borrows.get(&book.id).copied().unwrap_or(0))
                + u64::from(logged.get(&book.id).copied().unwrap_or(0));
            if u64::from(book.borrow_count) != expected {
                tracing::warn!(
                    "Book {} borrow count {} does not match history ({})",
                    book.id,
                    book.borrow_count,
                    expected
                );
                return Err(AppError::Internal(format!(
                    "book {} borrow count {} does not match history ({})",
                    book.id, book.borrow_count, expected
                )));
            }
        }

        Ok(())
    }
}
