use chrono::NaiveDate;
use thiserror::Error;

use crate::parse::ParseError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Definition text is not JSON of the expected shape
    #[error("Failed to decode schedule definition: {0}")]
    Decode(String),

    /// A start or duration token is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The prototype declares no intervals on any day
    #[error("Schedule definition declares no intervals")]
    EmptySchedule,

    /// Civil midnight of this Monday cannot be resolved in the schedule's time zone
    #[error("Midnight of {0} does not exist in the schedule's time zone")]
    NonexistentMidnight(NaiveDate),

    /// The requested week lies outside the representable calendar range
    #[error("Week is outside the representable date range")]
    OutOfRange,

    /// A previous refresh failed; the cached intervals must not be used
    #[error("Schedule must be reconstructed after a failed materialization")]
    NeedsReconstruction,
}
