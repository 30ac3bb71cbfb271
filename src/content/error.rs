//! Content model error types
//!
//! Errors raised while drawing comics, quotes or memes.

use chrono::NaiveDate;
use thiserror::Error;

/// Message shown to visitors when a comic cannot be produced
pub const COMIC_FAILURE_MESSAGE: &str = "Failed to fetch comic. Try again!";

/// Errors that can occur in the content model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No meme carries the requested identifier
    #[error("Meme not found: {0}")]
    MemeNotFound(u64),

    /// Requested comic date lies outside the archive
    #[error("Date {date} is outside the archive ({first} to {last})")]
    DateOutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    /// The clock reports a day before the first strip was published
    #[error("Today ({today}) is before the first strip ({first})")]
    ClockBeforeArchive { today: NaiveDate, first: NaiveDate },

    /// A date string could not be parsed as YYYY-MM-DD
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A uniform draw was requested from an empty collection
    #[error("Cannot draw from an empty collection")]
    EmptyPool,

    /// Theme preference could not be read or written
    #[error("Preference error: {0}")]
    Preference(String),
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::MemeNotFound(42);
        assert_eq!(err.to_string(), "Meme not found: 42");

        let err = ContentError::EmptyPool;
        assert_eq!(err.to_string(), "Cannot draw from an empty collection");
    }

    #[test]
    fn test_range_error_mentions_bounds() {
        let err = ContentError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            first: NaiveDate::from_ymd_opt(1978, 6, 19).unwrap(),
            last: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1970-01-01"));
        assert!(msg.contains("1978-06-19"));
    }
}
