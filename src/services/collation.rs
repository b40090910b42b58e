//! Locale-aware string ordering for catalog sorting.
//!
//! Strings are compared in three passes, the way a collator does for the
//! root locale:
//! 1. base letters only (accents stripped, case folded),
//! 2. accents (decomposed, case folded),
//! 3. case, with lowercase ordered before uppercase.
//!
//! Two strings compare `Equal` only when they are identical, so a stable sort
//! keeps input order for equal keys.

use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn with_accents(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// Compare two strings for display ordering
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| a.nfd().map(swap_case).cmp(b.nfd().map(swap_case)))
}
