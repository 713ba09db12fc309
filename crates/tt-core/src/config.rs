//! Per-run scheduler configuration.

/// Tunables applied uniformly to every vehicle in one scheduling run.
///
/// Immutable for the duration of a run.  Typically built from command-line
/// flags by the application and passed by value to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Minutes a vehicle waits at an intermediate station before departing on
    /// its next segment.  Never applied before the first departure.
    pub dwell_minutes: u32,

    /// Minimum buffer between two vehicles' occupancy windows on the same
    /// segment, applied on both sides of every committed window.
    pub headway_minutes: u32,
}

impl SchedulerConfig {
    pub fn new(dwell_minutes: u32, headway_minutes: u32) -> Self {
        Self { dwell_minutes, headway_minutes }
    }

    #[inline]
    pub fn dwell(&self) -> i64 {
        i64::from(self.dwell_minutes)
    }

    #[inline]
    pub fn headway(&self) -> i64 {
        i64::from(self.headway_minutes)
    }
}

impl Default for SchedulerConfig {
    /// Two minutes of dwell and two minutes of headway.
    fn default() -> Self {
        Self::new(2, 2)
    }
}
