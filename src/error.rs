use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced by the fee engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeeError {
    /// The exit time is not strictly after the entry time
    #[error("leave time {leave} must be after enter time {enter}")]
    InvalidInterval {
        enter: NaiveDateTime,
        leave: NaiveDateTime,
    },
}

/// Result type for fee calculations
pub type FeeResult<T> = Result<T, FeeError>;
