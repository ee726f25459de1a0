//! Schedule materialization: projecting a [`Prototype`](crate::prototype::Prototype)
//! onto one concrete calendar week.
//!
//! The week is anchored at civil midnight of the Monday on or before the
//! reference instant. Each day's records are offset from that day's anchor,
//! and the anchor advances by exactly 24 elapsed hours per day, so a week that
//! crosses a daylight-saving change shifts the later days by the change.

mod interval;
pub mod ordering;
mod week;

pub use interval::MaterializedInterval;
pub use week::{materialize, week_anchor, MaterializedWeek};
