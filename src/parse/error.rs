use thiserror::Error;

use crate::prototype::Day;

/// Failure of a single prototype record during materialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Invalid start of day {token:?} for {day} interval {label:?}: expected HHMM 24-hour time"
    )]
    StartOfDay {
        day: Day,
        label: String,
        token: String,
    },

    #[error("Invalid duration {token:?} for {day} interval {label:?}: {source}")]
    Duration {
        day: Day,
        label: String,
        token: String,
        source: DurationError,
    },
}

/// Errors produced by [`parse_duration`](super::parse_duration).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,

    #[error("expected a decimal number")]
    InvalidNumber,

    #[error("missing unit after number")]
    MissingUnit,

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("duration is out of range")]
    Overflow,

    #[error("interval must last at least one second")]
    TooShort,
}
