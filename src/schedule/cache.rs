//! Single-slot week cache behind the query engine.

use chrono::{DateTime, TimeZone};
use log::{debug, warn};

use super::errors::ScheduleError;
use crate::materialize::{materialize, week_anchor, MaterializedWeek};
use crate::prototype::Prototype;

#[derive(Debug, Clone)]
enum CacheState<Tz: TimeZone> {
    Ready(MaterializedWeek<Tz>),
    /// A refresh failed; nothing cached may be trusted.
    Invalidated,
}

/// Holds exactly one materialized week, keyed by its Monday anchor.
#[derive(Debug, Clone)]
pub(crate) struct WeekCache<Tz: TimeZone> {
    state: CacheState<Tz>,
}

impl<Tz: TimeZone> WeekCache<Tz> {
    /// Materializes the week containing `reference`.
    pub(crate) fn build(
        prototype: &Prototype,
        reference: &DateTime<Tz>,
    ) -> Result<Self, ScheduleError> {
        Ok(Self {
            state: CacheState::Ready(materialize(prototype, reference)?),
        })
    }

    pub(crate) fn week(&self) -> Result<&MaterializedWeek<Tz>, ScheduleError> {
        match &self.state {
            CacheState::Ready(week) => Ok(week),
            CacheState::Invalidated => Err(ScheduleError::NeedsReconstruction),
        }
    }

    pub(crate) fn is_invalidated(&self) -> bool {
        matches!(self.state, CacheState::Invalidated)
    }

    pub(crate) fn invalidate(&mut self) {
        self.state = CacheState::Invalidated;
    }

    /// Re-materializes around `t` when it falls outside the cached span.
    ///
    /// Returns whether the cached week was replaced. On failure the cache is
    /// invalidated and every later call reports
    /// [`ScheduleError::NeedsReconstruction`].
    pub(crate) fn refresh_if_stale(
        &mut self,
        prototype: &Prototype,
        t: &DateTime<Tz>,
        reuse_cached_week: bool,
    ) -> Result<bool, ScheduleError> {
        let cached = self.week()?;
        if cached.covers(t) {
            return Ok(false);
        }
        if reuse_cached_week
            && week_anchor(t).is_ok_and(|anchor| anchor == *cached.anchor())
        {
            return Ok(false);
        }

        match materialize(prototype, t) {
            Ok(week) => {
                debug!(
                    "refreshed schedule for {}: week of {}",
                    t.naive_local(),
                    week.anchor().naive_local()
                );
                self.state = CacheState::Ready(week);
                Ok(true)
            }
            Err(e) => {
                warn!("schedule refresh for {} failed: {}", t.naive_local(), e);
                self.invalidate();
                Err(e)
            }
        }
    }
}
