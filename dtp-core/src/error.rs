//! Error types for the date picker core

use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Grid generation and navigation never fail; these only come from
/// turning caller-supplied strings and numbers into core types.
#[derive(Error, Debug, PartialEq)]
pub enum PickerError {
    /// Locale tag outside the supported set
    #[error("Unsupported locale: {0} (expected \"en\" or \"fr\")")]
    UnsupportedLocale(String),

    /// Year/month/day triple that is not a calendar date
    #[error("Invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date string not in YYYY-MM-DD format
    #[error("Failed to parse date: {0:?} (expected YYYY-MM-DD)")]
    DateParse(String),
}
