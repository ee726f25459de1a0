//! Query-engine configuration.

/// Controls when a [`Schedule`](super::Schedule) re-materializes its week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Whether `matching_intervals` refreshes an out-of-span query the way
    /// `within` does. When false it only consults the current week.
    pub refresh_matching: bool,
    /// Whether an out-of-span query whose Monday is the one already
    /// materialized keeps the cached week instead of rebuilding it.
    pub reuse_cached_week: bool,
}

impl ScheduleConfig {
    pub fn with_refresh_matching(mut self, refresh_matching: bool) -> Self {
        self.refresh_matching = refresh_matching;
        self
    }

    pub fn with_reuse_cached_week(mut self, reuse_cached_week: bool) -> Self {
        self.reuse_cached_week = reuse_cached_week;
        self
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            refresh_matching: true,
            reuse_cached_week: true,
        }
    }
}
