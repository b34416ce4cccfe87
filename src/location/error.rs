//! Form draft errors
//!
//! Reasons a submitted form is rejected. These never reach the user: the page
//! silently ignores an invalid submission, but the reason is logged.

use thiserror::Error;

/// Why a [`LocationDraft`](super::LocationDraft) could not become a location
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    /// Title is empty or whitespace
    #[error("Title is empty")]
    EmptyTitle,

    /// A coordinate field was left blank
    #[error("Missing coordinate: {field}")]
    MissingCoordinate { field: &'static str },

    /// A coordinate field is not a finite number
    #[error("Invalid coordinate {field}: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
}

/// Result type alias for draft parsing
pub type DraftResult<T> = Result<T, DraftError>;
