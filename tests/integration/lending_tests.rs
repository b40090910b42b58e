//! Borrow workflow tests

use std::collections::HashMap;

use chrono::Utc;

use library_catalog::{
    config::{AppConfig, ClockMode, LendingConfig},
    AppState, BorrowError,
};

use super::{seeded_state, today};

/// Borrow counts minus lending records, per book
fn offsets(state: &AppState) -> HashMap<i32, i64> {
    let records = state.repository.catalog.get_lending_records();
    state
        .repository
        .catalog
        .get_books()
        .into_iter()
        .map(|b| {
            let logged = records.iter().filter(|r| r.book_id == b.id).count() as i64;
            (b.id, b.borrow_count as i64 - logged)
        })
        .collect()
}

#[test]
fn test_borrow_silent_woods_twice() {
    let state = seeded_state();

    let receipt = state.services.lending.borrow_book(101, "Alex").unwrap();
    assert!(!receipt.book.available);
    assert_eq!(receipt.book.borrow_count, 8);
    assert_eq!(receipt.record.book_id, 101);
    assert_eq!(receipt.record.borrower, "Alex");
    assert_eq!(receipt.record.date, today());

    let books = state.repository.catalog.get_books();
    let records = state.repository.catalog.get_lending_records();

    assert_eq!(
        state.services.lending.borrow_book(101, "Sam"),
        Err(BorrowError::BookUnavailable(101))
    );
    assert_eq!(state.repository.catalog.get_books(), books);
    assert_eq!(state.repository.catalog.get_lending_records(), records);
}

#[test]
fn test_borrow_counts_track_records() {
    let state = seeded_state();
    let before = offsets(&state);

    let attempts = [
        (101, "Alex"),
        (102, "Sam"),
        (103, "  "),
        (103, "Kim"),
        (104, "Lee"),
        (104, "Ana"),
        (999, "Bo"),
    ];
    for (id, name) in attempts {
        let _ = state.services.lending.borrow_book(id, name);
    }

    assert_eq!(offsets(&state), before);
    assert!(state.repository.catalog.verify_consistency().is_ok());
    assert_eq!(state.repository.catalog.get_lending_records().len(), 14);
}

#[test]
fn test_blank_name_never_reaches_availability_check() {
    let state = seeded_state();
    for id in [101, 102, 999] {
        assert_eq!(
            state.services.lending.borrow_book(id, " \t "),
            Err(BorrowError::EmptyBorrowerName)
        );
    }
    assert_eq!(state.repository.catalog.get_lending_records().len(), 11);
}

#[test]
fn test_book_history_after_borrow() {
    let state = seeded_state();
    state.services.lending.borrow_book(104, " Ishaan ").unwrap();

    let history = state.services.catalog.book_history(104).unwrap();
    let borrowers: Vec<&str> = history.iter().map(|r| r.borrower.as_str()).collect();
    assert_eq!(borrowers, vec!["Vikram Sharma", "Ishita Patel", "Ishaan"]);

    let all = state.services.catalog.history();
    let last = all.last().unwrap();
    assert_eq!(last.title.as_deref(), Some("The Hidden Garden"));
    assert_eq!(last.date, today());
}

#[test]
fn test_state_uses_configured_clock() {
    let config = AppConfig {
        lending: LendingConfig {
            clock: ClockMode::Utc,
        },
        ..AppConfig::default()
    };
    let state = AppState::new(config).unwrap();
    assert_eq!(state.config.lending.clock, ClockMode::Utc);

    let before = Utc::now().date_naive();
    let receipt = state.services.lending.borrow_book(101, "Alex").unwrap();
    let after = Utc::now().date_naive();
    assert!(receipt.record.date == before || receipt.record.date == after);
    assert_eq!(state.repository.catalog.get_book_by_id(101), Some(receipt.book));
}
