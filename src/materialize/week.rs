//! One materialized calendar week and the algorithm that builds it.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};
use log::debug;

use super::interval::MaterializedInterval;
use super::ordering::{is_sorted_by_start, sort_by_start};
use crate::parse::{parse_interval_length, parse_start_of_day, ParseError};
use crate::prototype::{Day, IntervalRecord, Prototype};
use crate::schedule::ScheduleError;

/// Absolute intervals of one calendar week, sorted by start.
///
/// # Invariants
///
/// - `intervals` is non-empty and sorted ascending by start (stable)
/// - `span_start` is the minimum start and `span_end` the maximum end
#[derive(Debug, Clone)]
pub struct MaterializedWeek<Tz: TimeZone> {
    anchor: DateTime<Tz>,
    intervals: Vec<MaterializedInterval<Tz>>,
    span_start: DateTime<Tz>,
    span_end: DateTime<Tz>,
}

impl<Tz: TimeZone> MaterializedWeek<Tz> {
    /// Sorts `intervals` and records the covered span.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptySchedule`] if `intervals` is empty.
    pub fn from_unsorted(
        anchor: DateTime<Tz>,
        mut intervals: Vec<MaterializedInterval<Tz>>,
    ) -> Result<Self, ScheduleError> {
        sort_by_start(&mut intervals);
        debug_assert!(is_sorted_by_start(&intervals));
        let span_start = intervals
            .first()
            .map(|iv| iv.start().clone())
            .ok_or(ScheduleError::EmptySchedule)?;
        // An early interval may outlast every later-starting one.
        let span_end = intervals
            .iter()
            .map(|iv| iv.end())
            .max()
            .cloned()
            .ok_or(ScheduleError::EmptySchedule)?;

        Ok(Self {
            anchor,
            intervals,
            span_start,
            span_end,
        })
    }

    /// Civil midnight of the week's Monday.
    pub fn anchor(&self) -> &DateTime<Tz> {
        &self.anchor
    }

    pub fn intervals(&self) -> &[MaterializedInterval<Tz>] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn span_start(&self) -> &DateTime<Tz> {
        &self.span_start
    }

    pub fn span_end(&self) -> &DateTime<Tz> {
        &self.span_end
    }

    /// Returns true unless `t` is strictly before the span or strictly after it.
    pub fn covers<Q: TimeZone>(&self, t: &DateTime<Q>) -> bool {
        !(*t > self.span_end || *t < self.span_start)
    }

    /// Iterates over the intervals containing `t`, in start order.
    ///
    /// Starts are sorted, so the scan stops at the first interval starting
    /// after `t`.
    pub fn matches(&self, t: DateTime<Tz>) -> impl Iterator<Item = &MaterializedInterval<Tz>> + '_ {
        let end_probe = t.clone();
        self.intervals
            .iter()
            .take_while(move |iv| iv.starts_at_or_before(&t))
            .filter(move |iv| iv.ends_at_or_after(&end_probe))
    }

    /// Returns true if any interval contains `t`.
    pub fn contains(&self, t: &DateTime<Tz>) -> bool {
        self.matches(t.clone()).next().is_some()
    }
}

/// Civil midnight of the Monday on or before `reference`'s local date.
///
/// # Errors
///
/// Returns [`ScheduleError::OutOfRange`] if the Monday is not representable.
pub fn week_anchor<Tz: TimeZone>(reference: &DateTime<Tz>) -> Result<DateTime<Tz>, ScheduleError> {
    let date = reference.date_naive();
    let back = Day::from_chrono(date.weekday()).offset_from_monday();
    let monday = date
        .checked_sub_days(Days::new(u64::from(back)))
        .ok_or(ScheduleError::OutOfRange)?;
    local_midnight(&reference.timezone(), monday)
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>, ScheduleError> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(t) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(t);
    }

    // Midnight skipped by a clock change: read it with the previous day's offset.
    let previous = midnight
        .checked_sub_signed(TimeDelta::days(1))
        .ok_or(ScheduleError::OutOfRange)?;
    let offset = tz
        .offset_from_local_datetime(&previous)
        .earliest()
        .ok_or(ScheduleError::NonexistentMidnight(date))?;
    let utc = midnight
        .checked_sub_signed(TimeDelta::seconds(i64::from(
            offset.fix().local_minus_utc(),
        )))
        .ok_or(ScheduleError::OutOfRange)?;
    Ok(tz.from_utc_datetime(&utc))
}

/// Projects `prototype` onto the calendar week containing `reference`.
///
/// Records are visited Monday through Sunday in declaration order, then
/// sorted by start.
///
/// # Errors
///
/// - [`ScheduleError::Parse`] if any start or duration token is malformed;
///   nothing is materialized in that case.
/// - [`ScheduleError::EmptySchedule`] if the prototype declares no intervals.
/// - [`ScheduleError::OutOfRange`] if the week is not representable.
pub fn materialize<Tz: TimeZone>(
    prototype: &Prototype,
    reference: &DateTime<Tz>,
) -> Result<MaterializedWeek<Tz>, ScheduleError> {
    let anchor = week_anchor(reference)?;
    let mut intervals = Vec::with_capacity(prototype.len());

    let mut day_anchor = anchor.clone();
    for (i, (day, records)) in prototype.days().enumerate() {
        if i > 0 {
            day_anchor = day_anchor
                .checked_add_signed(TimeDelta::hours(24))
                .ok_or(ScheduleError::OutOfRange)?;
        }
        for record in records {
            intervals.push(materialize_record(&day_anchor, day, record)?);
        }
    }

    let week = MaterializedWeek::from_unsorted(anchor, intervals)?;
    debug!(
        "materialized {} intervals for week of {}, span {} -> {}",
        week.len(),
        week.anchor.naive_local(),
        week.span_start.naive_local(),
        week.span_end.naive_local()
    );
    Ok(week)
}

fn materialize_record<Tz: TimeZone>(
    day_anchor: &DateTime<Tz>,
    day: Day,
    record: &IntervalRecord,
) -> Result<MaterializedInterval<Tz>, ScheduleError> {
    let offset = parse_start_of_day(&record.start).ok_or_else(|| ParseError::StartOfDay {
        day,
        label: record.label.clone(),
        token: record.start.clone(),
    })?;
    let length =
        parse_interval_length(&record.duration).map_err(|source| ParseError::Duration {
            day,
            label: record.label.clone(),
            token: record.duration.clone(),
            source,
        })?;

    let start = day_anchor
        .clone()
        .checked_add_signed(offset)
        .ok_or(ScheduleError::OutOfRange)?;
    let end = start
        .clone()
        .checked_add_signed(length - TimeDelta::seconds(1))
        .ok_or(ScheduleError::OutOfRange)?;
    Ok(MaterializedInterval::new(start, end, record.label.clone()))
}
