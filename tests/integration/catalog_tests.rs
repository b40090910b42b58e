//! Catalog query and seed loading tests

use library_catalog::{
    config::{AppConfig, CatalogConfig},
    models::{BookQuery, GenreFilter, SortKey},
    services::catalog::query,
    AppError, AppState,
};

use super::seeded_state;

fn write_seed(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "library-catalog-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("failed to write seed file");
    path.to_string_lossy().into_owned()
}

fn config_with_seed(path: String) -> AppConfig {
    AppConfig {
        catalog: CatalogConfig {
            seed_path: Some(path),
        },
        ..AppConfig::default()
    }
}

#[test]
fn test_query_all_by_author() {
    let state = seeded_state();
    let result = state
        .services
        .catalog
        .search(&BookQuery::new("all", "", SortKey::AuthorAsc));

    let authors: Vec<&str> = result.iter().map(|b| b.author.as_str()).collect();
    assert_eq!(
        authors,
        vec![
            "Aanya Patel",
            "Meera Gupta",
            "Priya Sharma",
            "Rajesh Verma",
            "Vikram Singh"
        ]
    );
}

#[test]
fn test_query_mystery_only() {
    let state = seeded_state();
    for sort in SortKey::ALL {
        let result = state
            .services
            .catalog
            .search(&BookQuery::new("Mystery", "", sort));
        assert!(!result.is_empty());
        assert!(result.iter().all(|b| b.genre == "Mystery"));
    }
}

#[test]
fn test_query_silent_returns_book_101() {
    let state = seeded_state();
    let books = state.repository.catalog.get_books();
    let result = query(&books, &GenreFilter::All, "silent", SortKey::AuthorAsc);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 101);
}

#[test]
fn test_query_reflects_borrows() {
    let state = seeded_state();
    state.services.lending.borrow_book(103, "Alex").unwrap();

    let result = state
        .services
        .catalog
        .search(&BookQuery::new("Science Fiction", "", SortKey::AuthorAsc));
    assert_eq!(result.len(), 1);
    assert!(!result[0].available);
    assert_eq!(result[0].borrow_count, 6);
}

#[test]
fn test_state_loads_seed_file() {
    let path = write_seed(
        "valid",
        r#"{
            "books": [
                {"id": 1, "title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction",
                 "isbn": "978-0441013593", "publisher": "Ace", "available": true, "borrowCount": 1},
                {"id": 2, "title": "Emma", "author": "Jane Austen", "genre": "Classic",
                 "isbn": "978-0141439587", "publisher": "Penguin", "available": true, "borrowCount": 0}
            ],
            "lendingRecords": [
                {"bookId": 1, "borrower": "Kim", "date": "2024-11-05"}
            ]
        }"#,
    );

    let state = AppState::new(config_with_seed(path.clone())).unwrap();
    assert_eq!(state.repository.catalog.len(), 2);
    assert_eq!(state.services.catalog.genres(), vec!["Science Fiction", "Classic"]);
    assert_eq!(state.services.catalog.history()[0].title.as_deref(), Some("Dune"));
    assert!(state.repository.catalog.verify_consistency().is_ok());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_state_rejects_duplicate_ids() {
    let path = write_seed(
        "duplicate",
        r#"{
            "books": [
                {"id": 1, "title": "A", "author": "B", "genre": "G",
                 "isbn": "", "publisher": "", "available": true, "borrowCount": 0},
                {"id": 1, "title": "C", "author": "D", "genre": "G",
                 "isbn": "", "publisher": "", "available": true, "borrowCount": 0}
            ]
        }"#,
    );

    let result = AppState::new(config_with_seed(path.clone()));
    assert!(matches!(result, Err(AppError::Seed(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_state_rejects_missing_seed_file() {
    let config = config_with_seed("no/such/seed.json".to_string());
    assert!(matches!(AppState::new(config), Err(AppError::Io(_))));
}
