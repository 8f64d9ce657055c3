//! Error types for slot-engine operations.
//!
//! Every variant is detected at the pipeline boundary. Once a request has been
//! validated the pipeline itself cannot fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// `start > end`, or a bound outside `[0, 1440]`.
    #[error("Invalid interval [{start}, {end}): bounds must satisfy 0 <= start <= end <= 1440")]
    InvalidInterval { start: i64, end: i64 },

    #[error("Mismatched person count: {busy} busy lists but {active} active windows")]
    MismatchedPersonCount { busy: usize, active: usize },

    #[error("Invalid active window for person {person}: [{start}, {end}) starts after it ends")]
    InvalidActiveWindow { person: usize, start: i64, end: i64 },

    #[error("Negative meeting duration: {0} minutes")]
    NegativeDuration(i64),

    /// A clock string that is not `H:MM`/`HH:MM` within `00:00..=24:00`.
    #[error("Invalid clock time: '{0}'")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
