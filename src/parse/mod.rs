//! Parsing primitives for prototype tokens.
//!
//! - [`parse_start_of_day`] reads a four-digit 24-hour clock (`"0830"`) as an
//!   offset from civil midnight.
//! - [`parse_duration`] reads textual elapsed time (`"8h"`, `"1h30m"`, `"1.5h"`).

mod duration;
mod error;
mod start_of_day;

pub use duration::{parse_duration, parse_interval_length, DurationUnit};
pub use error::{DurationError, ParseError};
pub use start_of_day::{parse_start_of_day, MILITARY_TIME_FORMAT};
