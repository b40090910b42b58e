//! Catalog query service

use indexmap::IndexSet;

use super::collation::locale_cmp;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery, GenreFilter, HistoryEntry, LendingRecord, SortKey},
    repository::Repository,
};

/// Filter and sort a list of books.
///
/// The genre filter is applied first, then the text search, then the sort.
/// `books` is never modified and equal sort keys keep their input order.
pub fn query(
    books: &[Book],
    genre_filter: &GenreFilter,
    search_text: &str,
    sort_key: SortKey,
) -> Vec<Book> {
    let mut results: Vec<Book> = books
        .iter()
        .filter(|b| genre_filter.matches(&b.genre))
        .filter(|b| b.matches_text(search_text))
        .cloned()
        .collect();

    // slice::sort_by is stable
    match sort_key {
        SortKey::AuthorAsc => results.sort_by(|a, b| locale_cmp(&a.author, &b.author)),
        SortKey::AuthorDesc => results.sort_by(|a, b| locale_cmp(&b.author, &a.author)),
        SortKey::TitleAsc => results.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortKey::TitleDesc => results.sort_by(|a, b| locale_cmp(&b.title, &a.title)),
        SortKey::PopularityDesc => results.sort_by(|a, b| b.borrow_count.cmp(&a.borrow_count)),
    }

    results
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books in catalog order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.catalog.get_books()
    }

    /// Get a book by ID
    pub fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository
            .catalog
            .get_book_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Search books with filters
    pub fn search(&self, params: &BookQuery) -> Vec<Book> {
        let books = self.repository.catalog.get_books();
        let results = query(&books, &params.genre, &params.search, params.sort);
        tracing::debug!(
            "Catalog query genre={} search={:?} sort={}: {}/{} books",
            params.genre,
            params.search,
            params.sort,
            results.len(),
            books.len()
        );
        results
    }

    /// Distinct genres in the order they first appear in the catalog
    pub fn genres(&self) -> Vec<String> {
        self.repository
            .catalog
            .get_books()
            .into_iter()
            .map(|b| b.genre)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Borrowing history of one book, oldest first
    pub fn book_history(&self, id: i32) -> AppResult<Vec<LendingRecord>> {
        // Verify book exists
        self.get_book(id)?;
        Ok(self.repository.catalog.records_for_book(id))
    }

    /// The whole lending log with book titles attached
    pub fn history(&self) -> Vec<HistoryEntry> {
        let books = self.repository.catalog.get_books();
        self.repository
            .catalog
            .get_lending_records()
            .into_iter()
            .map(|record| HistoryEntry {
                title: books
                    .iter()
                    .find(|b| b.id == record.book_id)
                    .map(|b| b.title.clone()),
                book_id: record.book_id,
                borrower: record.borrower,
                date: record.date,
            })
            .collect()
    }
}
