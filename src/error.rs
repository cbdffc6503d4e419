// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Lotto Lapping contributors

//! Error taxonomy for the search engine.
//!
//! Three outcomes are distinguished at the API boundary:
//!
//! - [`ValidationError`] — the entered pattern cannot be searched. Raised
//!   before any repository fetch or window scan; no partial results exist.
//! - [`RepositoryError`] — the external draw fetch failed. Propagated
//!   untouched; the engine never retries (retry policy belongs to the
//!   repository collaborator).
//! - An empty result list is **not** an error. Zero matching windows is a
//!   normal, successfully computed outcome and callers must treat it as such.

use thiserror::Error;

/// The entered pattern cannot be searched as requested.
///
/// Row and position fields are 1-based, matching the on-screen numbering of
/// the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A text slot holds something that is not an integer.
    #[error("row {row}, position {position}: '{token}' is not a number")]
    InvalidNumber {
        /// 1-based row of the offending slot.
        row: usize,
        /// 1-based position of the offending slot.
        position: usize,
        /// The raw (trimmed) input text.
        token: String,
    },

    /// A parsed number falls outside the game's declared number range.
    #[error("row {row}, position {position}: {value} is outside the game range {min}..={max}")]
    OutOfRange {
        /// 1-based row of the offending slot.
        row: usize,
        /// 1-based position of the offending slot.
        position: usize,
        /// The parsed value.
        value: i32,
        /// Lower bound of the declared range (inclusive).
        min: i32,
        /// Upper bound of the declared range (inclusive).
        max: i32,
    },

    /// No position carries a value in every row, so there is nothing to
    /// match. Every search rejects this up front rather than scanning
    /// windows that can never match.
    #[error("pattern is empty: no position has a value in every row")]
    EmptyPattern,

    /// A row carries fewer usable entries than the selected match logic
    /// needs.
    #[error("row {row} has {entered} usable entries, selected match logic needs at least {required}")]
    InsufficientPattern {
        /// 1-based row with the fewest entered values.
        row: usize,
        /// Entries usable for matching (positions filled in every row).
        entered: usize,
        /// Minimum required by the selected match logic.
        required: usize,
    },
}

/// The external draw fetch failed.
///
/// Carries an optional source error from the storage/network layer. The
/// engine surfaces these verbatim; user-facing layers typically render a
/// generic retry suggestion.
#[derive(Debug, Error)]
#[error("draw fetch failed: {message}")]
pub struct RepositoryError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Underlying cause, when the storage layer provided one.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RepositoryError {
    /// Creates a repository error from a bare message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a repository error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Top-level error returned by the search entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The query failed validation before any fetch or scan.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The draw snapshot could not be fetched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_names_row_and_position() {
        let err = ValidationError::InvalidNumber {
            row: 2,
            position: 4,
            token: "4x".to_string(),
        };
        assert_eq!(err.to_string(), "row 2, position 4: '4x' is not a number");
    }

    #[test]
    fn test_out_of_range_display_names_bounds() {
        let err = ValidationError::OutOfRange {
            row: 1,
            position: 1,
            value: 99,
            min: 1,
            max: 48,
        };
        assert!(err.to_string().contains("99"));
        assert!(err.to_string().contains("1..=48"));
    }

    #[test]
    fn test_insufficient_pattern_display() {
        let err = ValidationError::InsufficientPattern {
            row: 1,
            entered: 1,
            required: 2,
        };
        assert!(err.to_string().contains("row 1"));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_repository_error_without_source() {
        let err = RepositoryError::new("connection refused");
        assert_eq!(err.to_string(), "draw fetch failed: connection refused");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_repository_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = RepositoryError::with_source("storage unavailable", io);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_search_error_from_validation() {
        let err = SearchError::from(ValidationError::EmptyPattern);
        assert!(matches!(err, SearchError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "pattern is empty: no position has a value in every row"
        );
    }

    #[test]
    fn test_search_error_from_repository() {
        let err = SearchError::from(RepositoryError::new("down"));
        assert!(matches!(err, SearchError::Repository(_)));
    }
}
