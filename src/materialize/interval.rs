//! Absolute, labeled interval of a materialized week.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, TimeZone};

/// Closed range `[start, end]` at second precision.
///
/// `end` is `start + duration - 1s`, so back-to-back intervals on the same
/// day do not share a boundary second.
#[derive(Debug, Clone)]
pub struct MaterializedInterval<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    label: String,
}

impl<Tz: TimeZone> MaterializedInterval<Tz> {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `start > end`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>, label: impl Into<String>) -> Self {
        debug_assert!(start <= end, "Interval start must be <= end");
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declared length of the interval (`end - start + 1s`).
    pub fn duration(&self) -> TimeDelta {
        self.end.clone() - self.start.clone() + TimeDelta::seconds(1)
    }

    /// True if `t` is after `start` or falls in the same second.
    pub fn starts_at_or_before<Q: TimeZone>(&self, t: &DateTime<Q>) -> bool {
        *t > self.start || t.timestamp() == self.start.timestamp()
    }

    /// True if `t` is before `end` or falls in the same second.
    pub fn ends_at_or_after<Q: TimeZone>(&self, t: &DateTime<Q>) -> bool {
        *t < self.end || t.timestamp() == self.end.timestamp()
    }

    /// Returns true if `t` ∈ `[start, end]`, ignoring sub-second components.
    pub fn contains<Q: TimeZone>(&self, t: &DateTime<Q>) -> bool {
        self.starts_at_or_before(t) && self.ends_at_or_after(t)
    }

    /// Checks if this interval shares at least one instant with `other`.
    pub fn overlaps<Q: TimeZone>(&self, other: &MaterializedInterval<Q>) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl<Tz: TimeZone, Q: TimeZone> PartialEq<MaterializedInterval<Q>> for MaterializedInterval<Tz> {
    fn eq(&self, other: &MaterializedInterval<Q>) -> bool {
        self.start == other.start && self.end == other.end && self.label == other.label
    }
}

impl<Tz: TimeZone> Eq for MaterializedInterval<Tz> {}

impl<Tz: TimeZone> Display for MaterializedInterval<Tz>
where
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ---> {}", self.label, self.start, self.end)
    }
}
