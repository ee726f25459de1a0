//! Schedule prototype: the decoded, day-keyed weekly definition.
//!
//! A [`Definition`] is the structured form of the wire document:
//!
//! ```json
//! {
//!   "description": "Plant floor",
//!   "schedule": {
//!     "mon": [{ "start": "0800", "duration": "8h", "label": "day-shift" }],
//!     "sat": []
//!   }
//! }
//! ```
//!
//! Day keys may be omitted or `null`; both decode as an empty day. Start and
//! duration tokens are kept verbatim here and validated during
//! materialization.

mod day;

pub use day::Day;

use serde::{Deserialize, Deserializer, Serialize};

use crate::schedule::ScheduleError;

/// One declared interval of a prototype day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Four-digit 24-hour start of day, e.g. `"0830"`.
    pub start: String,
    /// Textual elapsed time, e.g. `"8h"` or `"1h30m"`.
    pub duration: String,
    #[serde(default)]
    pub label: String,
}

impl IntervalRecord {
    pub fn new(
        start: impl Into<String>,
        duration: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            duration: duration.into(),
            label: label.into(),
        }
    }
}

/// Interval records for each day of the week, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mon: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tue: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wed: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thu: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fri: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sat: Vec<IntervalRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sun: Vec<IntervalRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<IntervalRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<IntervalRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Prototype {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records declared for `day`.
    pub fn day(&self, day: Day) -> &[IntervalRecord] {
        match day {
            Day::Mon => &self.mon,
            Day::Tue => &self.tue,
            Day::Wed => &self.wed,
            Day::Thu => &self.thu,
            Day::Fri => &self.fri,
            Day::Sat => &self.sat,
            Day::Sun => &self.sun,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut Vec<IntervalRecord> {
        match day {
            Day::Mon => &mut self.mon,
            Day::Tue => &mut self.tue,
            Day::Wed => &mut self.wed,
            Day::Thu => &mut self.thu,
            Day::Fri => &mut self.fri,
            Day::Sat => &mut self.sat,
            Day::Sun => &mut self.sun,
        }
    }

    /// Appends a record to `day`, returning `self` for chaining.
    pub fn with(mut self, day: Day, record: IntervalRecord) -> Self {
        self.day_mut(day).push(record);
        self
    }

    /// Iterates over `(day, records)` Monday through Sunday.
    pub fn days(&self) -> impl Iterator<Item = (Day, &[IntervalRecord])> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Total number of declared intervals across the week.
    pub fn len(&self) -> usize {
        self.days().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The decoded definition document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: Prototype,
}

impl Definition {
    /// Decodes a JSON definition.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Decode`] if `text` is not JSON of the expected shape.
    pub fn from_json(text: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(text).map_err(|e| ScheduleError::Decode(e.to_string()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
