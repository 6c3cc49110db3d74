//! Database error type.

use derive_more::{Display, Error};

/// Database error with the failure site captured for logs.
#[derive(Debug, Clone, Display, Error)]
#[display("database error: {message} ({file}:{line})")]
pub struct DbError {
    /// What went wrong.
    pub message: String,
    /// Source file of the failure site.
    pub file: &'static str,
    /// Line of the failure site.
    pub line: u32,
}

impl DbError {
    /// Creates an error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("query failed: {err}"))
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("connection failed: {err}"))
    }
}
