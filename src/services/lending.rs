//! Lending service: validates borrow requests and applies them to the catalog

use chrono::{Local, NaiveDate, Utc};
use std::sync::Arc;
use validator::Validate;

use crate::{
    config::ClockMode,
    error::BorrowError,
    models::{BorrowReceipt, BorrowRequest},
    repository::Repository,
};

/// Source of the date stamped on new lending records
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, reading either the local or the UTC calendar day
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    pub mode: ClockMode,
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.mode {
            ClockMode::Local => Local::now().date_naive(),
            ClockMode::Utc => Utc::now().date_naive(),
        }
    }
}

/// Clock pinned to one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl LendingService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Borrow a book.
    ///
    /// Checks run in a fixed order and the first failure is reported: a
    /// blank borrower name, then a missing book, then an unavailable book.
    pub fn borrow_book(&self, book_id: i32, borrower_name: &str) -> Result<BorrowReceipt, BorrowError> {
        let request = BorrowRequest::new(book_id, borrower_name);
        let result = self.check(&request).and_then(|()| {
            self.repository
                .catalog
                .apply_borrow(request.book_id, &request.borrower, self.clock.today())
        });

        match &result {
            Ok(receipt) => tracing::info!(
                "Book {} borrowed by {} on {} (borrow count {})",
                receipt.book.id,
                receipt.record.borrower,
                receipt.record.date,
                receipt.book.borrow_count
            ),
            Err(e) => tracing::debug!("Borrow of book {} rejected: {}", book_id, e),
        }

        result
    }

    fn check(&self, request: &BorrowRequest) -> Result<(), BorrowError> {
        if request.validate().is_err() {
            return Err(BorrowError::EmptyBorrowerName);
        }

        let book = self
            .repository
            .catalog
            .get_book_by_id(request.book_id)
            .ok_or(BorrowError::BookNotFound(request.book_id))?;
        if !book.available {
            return Err(BorrowError::BookUnavailable(request.book_id));
        }

        Ok(())
    }
}
