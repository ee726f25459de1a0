//! protoschedule - recurring weekly schedules projected onto calendar weeks
//!
//! A schedule is declared once as named intervals per day of the week and
//! answers "is this instant covered, and by which intervals?" for any point in
//! time, materializing the week that contains the query on demand.

pub mod materialize;
pub mod parse;
pub mod prototype;
pub mod schedule;

pub use materialize::{MaterializedInterval, MaterializedWeek};
pub use prototype::{Day, Definition, IntervalRecord, Prototype};
pub use schedule::{Schedule, ScheduleConfig, ScheduleError};
