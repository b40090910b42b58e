//! End-to-end tests over the public catalog API

mod catalog_tests;
mod lending_tests;

use chrono::NaiveDate;
use std::sync::Arc;

use library_catalog::{services::lending::FixedClock, AppConfig, AppState};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
}

/// Application state over the built-in seed with a pinned clock
pub fn seeded_state() -> AppState {
    AppState::with_clock(AppConfig::default(), Arc::new(FixedClock(today())))
        .expect("built-in seed should load")
}
