use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::materialize::{MaterializedInterval, MaterializedWeek};
use crate::prototype::{Definition, Prototype};
mod cache;
pub mod config;
pub mod errors;
use cache::WeekCache;
pub use config::ScheduleConfig;
pub use errors::ScheduleError;


/// Weekly prototype schedule answering point-in-time coverage queries.
///
/// A `Schedule` holds its decoded [`Definition`] and exactly one materialized
/// calendar week. Queries falling outside the cached span re-materialize the
/// week containing the query before answering.
///
/// # Internal Structure
/// - `definition`: decoded description and day-keyed prototype
/// - `cache`: single-slot week cache, invalidated when a refresh fails
///
/// # Complexity
/// - `within` / `matching_intervals`: O(k) scan over the intervals starting
///   at or before the query, plus O(n log n) when the week is rebuilt
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use protoschedule::Schedule;
///
/// let json = r#"{
///     "description": "office",
///     "schedule": {
///         "mon": [{"start": "0900", "duration": "8h", "label": "desk"}],
///         "tue": [{"start": "0900", "duration": "4h", "label": "desk"},
///                 {"start": "1100", "duration": "1h", "label": "standup"}]
///     }
/// }"#;
///
/// // Wednesday 2026-10-14; the cached week starts Monday 2026-10-12.
/// let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
/// let mut schedule = Schedule::new_from_time(json, &now).unwrap();
/// assert_eq!(schedule.len(), 3);
///
/// let monday = Utc.with_ymd_and_hms(2026, 10, 12, 9, 30, 0).unwrap();
/// assert!(schedule.within(&monday).unwrap());
///
/// // Two weeks later the prototype still applies.
/// let later = Utc.with_ymd_and_hms(2026, 10, 27, 11, 15, 0).unwrap();
/// let labels: Vec<_> = schedule
///     .matching_intervals(&later)
///     .unwrap()
///     .iter()
///     .map(|iv| iv.label().to_string())
///     .collect();
/// assert_eq!(labels, vec!["desk", "standup"]);
/// ```
#[derive(Debug, Clone)]
pub struct Schedule<Tz: TimeZone = Local> {
    definition: Definition,
    timezone: Tz,
    config: ScheduleConfig,
    cache: WeekCache<Tz>,
}

impl Schedule<Local> {
    /// Decodes `definition` and materializes the current local week.
    pub fn new(definition: &str) -> Result<Self, ScheduleError> {
        Self::new_from_time(definition, &Local::now())
    }
}

impl<Tz: TimeZone> Schedule<Tz> {
    /// Decodes `definition` and materializes the week containing `reference`.
    ///
    /// The schedule uses `reference`'s time zone as its civil calendar.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::Decode`] if `definition` is not a valid document
    /// - [`ScheduleError::Parse`] if a start or duration token is malformed
    /// - [`ScheduleError::EmptySchedule`] if no interval is declared
    pub fn new_from_time(
        definition: &str,
        reference: &DateTime<Tz>,
    ) -> Result<Self, ScheduleError> {
        Self::with_config(definition, reference, ScheduleConfig::default())
    }

    pub fn with_config(
        definition: &str,
        reference: &DateTime<Tz>,
        config: ScheduleConfig,
    ) -> Result<Self, ScheduleError> {
        Self::from_definition(Definition::from_json(definition)?, reference, config)
    }

    /// Builds a schedule from an already decoded definition.
    pub fn from_definition(
        definition: Definition,
        reference: &DateTime<Tz>,
        config: ScheduleConfig,
    ) -> Result<Self, ScheduleError> {
        let cache = WeekCache::build(&definition.schedule, reference)?;
        Ok(Self {
            definition,
            timezone: reference.timezone(),
            config,
            cache,
        })
    }

    /// Re-seeds the schedule with `definition` at `reference`.
    ///
    /// The result is the schedule [`with_config`](Self::with_config) would
    /// build from the same input, keeping the current config. If decoding or
    /// materializing fails the schedule needs reconstruction.
    pub fn redefine(
        &mut self,
        definition: &str,
        reference: &DateTime<Tz>,
    ) -> Result<(), ScheduleError> {
        let definition = match Definition::from_json(definition) {
            Ok(definition) => definition,
            Err(e) => {
                self.cache.invalidate();
                return Err(e);
            }
        };

        match WeekCache::build(&definition.schedule, reference) {
            Ok(cache) => {
                self.definition = definition;
                self.timezone = reference.timezone();
                self.cache = cache;
                Ok(())
            }
            Err(e) => {
                self.cache.invalidate();
                Err(e)
            }
        }
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn prototype(&self) -> &Prototype {
        &self.definition.schedule
    }

    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// The currently materialized week.
    pub fn week(&self) -> Result<&MaterializedWeek<Tz>, ScheduleError> {
        self.cache.week()
    }

    /// Materialized intervals in start order; empty once reconstruction is needed.
    pub fn intervals(&self) -> &[MaterializedInterval<Tz>] {
        self.cache.week().map(|w| w.intervals()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.intervals().len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals().is_empty()
    }

    /// Earliest start and latest end of the materialized week.
    pub fn span(&self) -> Option<(&DateTime<Tz>, &DateTime<Tz>)> {
        let week = self.cache.week().ok()?;
        Some((week.span_start(), week.span_end()))
    }

    /// Monday midnight the cached week is anchored to.
    pub fn week_anchor(&self) -> Option<&DateTime<Tz>> {
        self.cache.week().ok().map(|w| w.anchor())
    }

    /// True after a failed refresh; the schedule must be rebuilt.
    pub fn needs_reconstruction(&self) -> bool {
        self.cache.is_invalidated()
    }

    /// Re-materializes around `t` if it falls outside the cached span.
    ///
    /// Returns whether the cached week was replaced.
    pub fn refresh<Q: TimeZone>(&mut self, t: &DateTime<Q>) -> Result<bool, ScheduleError> {
        let t = t.with_timezone(&self.timezone);
        self.cache
            .refresh_if_stale(&self.definition.schedule, &t, self.config.reuse_cached_week)
    }

    /// Determines whether `t` lies within any interval, at second precision.
    ///
    /// Refreshes the cached week first when `t` is outside its span.
    ///
    /// # Errors
    ///
    /// Returns the materialization error if the refresh fails, and
    /// [`ScheduleError::NeedsReconstruction`] on every call after that.
    pub fn within<Q: TimeZone>(&mut self, t: &DateTime<Q>) -> Result<bool, ScheduleError> {
        self.refresh(t)?;
        let t = t.with_timezone(&self.timezone);
        Ok(self.cache.week()?.contains(&t))
    }

    /// Returns every interval containing `t`, in start order.
    ///
    /// Overlapping intervals are all reported; tell them apart by label.
    /// Refreshes like [`within`](Self::within) unless
    /// [`ScheduleConfig::refresh_matching`] is off, in which case only the
    /// current week is consulted.
    pub fn matching_intervals<Q: TimeZone>(
        &mut self,
        t: &DateTime<Q>,
    ) -> Result<Vec<MaterializedInterval<Tz>>, ScheduleError> {
        if self.config.refresh_matching {
            self.refresh(t)?;
        }
        Ok(self.cached_matches(t)?.into_iter().cloned().collect())
    }

    /// Intervals of the current week containing `t`; never refreshes.
    pub fn cached_matches<Q: TimeZone>(
        &self,
        t: &DateTime<Q>,
    ) -> Result<Vec<&MaterializedInterval<Tz>>, ScheduleError> {
        let t = t.with_timezone(&self.timezone);
        Ok(self.cache.week()?.matches(t).collect())
    }
}

impl<Tz: TimeZone> Display for Schedule<Tz>
where
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let week = match self.cache.week() {
            Ok(week) => week,
            Err(_) => {
                return writeln!(
                    f,
                    "Schedule definition: {}, needs reconstruction",
                    self.definition.description
                );
            }
        };

        writeln!(
            f,
            "Schedule definition: {}, {} intervals,",
            self.definition.description,
            week.len()
        )?;
        writeln!(f, "span {} -> {}", week.span_start(), week.span_end())?;
        for interval in week.intervals() {
            writeln!(f, "{}", interval)?;
        }
        Ok(())
    }
}
