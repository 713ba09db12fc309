//! `OccupancyLedger` — per-segment record of committed time windows.
//!
//! # Invariant
//!
//! For any two intervals `a`, `b` on the same [`SegmentKey`]:
//!
//! ```text
//! [a.start - headway, a.end + headway)  ∩  [b.start, b.end)  = ∅
//! ```
//!
//! It is maintained incrementally: the engine only commits windows returned
//! by [`OccupancyLedger::find_earliest_slot`] with the run's headway.
//! Intervals are append-only for the lifetime of a run.
//!
//! # Slot search
//!
//! The search is a greedy bump: take `[desired, desired + duration)`, and
//! whenever it meets a padded interval move the start to `interval.end +
//! headway` and rescan from the first interval.  The start only ever
//! increases, so gaps earlier than `desired` are never considered.  Each bump
//! moves the start strictly forward past one interval, so the loop terminates
//! after at most O(n²) comparisons for n intervals on the segment.

use log::debug;

use tt_core::{Minute, TrainId};
use tt_network::SegmentKey;

#[cfg(feature = "fx-hash")]
type LedgerMap = rustc_hash::FxHashMap<SegmentKey, Vec<OccupancyInterval>>;
#[cfg(not(feature = "fx-hash"))]
type LedgerMap = std::collections::HashMap<SegmentKey, Vec<OccupancyInterval>>;

// ── OccupancyInterval ─────────────────────────────────────────────────────────

/// Half-open window `[start, end)` during which `train` holds one segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyInterval {
    pub start: Minute,
    pub end:   Minute,
    pub train: TrainId,
}

impl OccupancyInterval {
    /// `true` if `[start, end)` overlaps this interval widened by `headway`
    /// on both sides.
    #[inline]
    pub fn blocks(&self, start: Minute, end: Minute, headway: i64) -> bool {
        let padded_start = self.start - headway;
        let padded_end = self.end + headway;
        start < padded_end && padded_start < end
    }
}

// ── OccupancyLedger ───────────────────────────────────────────────────────────

/// Committed occupancy for every segment touched in one scheduling run.
///
/// Created empty at the start of a run and owned by the engine until the run
/// ends.  Intervals on each key are kept sorted by start for readability; the
/// slot search scans all of them regardless of order.
#[derive(Clone, Debug, Default)]
pub struct OccupancyLedger {
    by_segment: LedgerMap,
    /// Cached total interval count for O(1) `len()`.
    total:      usize,
}

impl OccupancyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest `[start, end)` with `start >= desired` and
    /// `end - start == duration` that no committed interval on `key` blocks.
    ///
    /// Read-only; call [`commit`](Self::commit) to claim the result.
    pub fn find_earliest_slot(
        &self,
        key:      &SegmentKey,
        desired:  Minute,
        duration: u32,
        headway:  i64,
    ) -> (Minute, Minute) {
        let duration = i64::from(duration);
        let occupied = self.intervals(key);

        let mut start = desired;
        'scan: loop {
            let end = start + duration;
            for interval in occupied {
                if interval.blocks(start, end, headway) {
                    let bumped = interval.end + headway;
                    debug!(
                        "{key}: [{}, {}) blocked by {} [{}, {}), bumping to {}",
                        start.0,
                        end.0,
                        interval.train,
                        interval.start.0,
                        interval.end.0,
                        bumped.0,
                    );
                    start = bumped;
                    continue 'scan;
                }
            }
            return (start, end);
        }
    }

    /// Record `[start, end)` on `key` for `train`.
    ///
    /// No validation is performed; committing a window not obtained from
    /// [`find_earliest_slot`](Self::find_earliest_slot) can break the
    /// no-overlap invariant.
    pub fn commit(&mut self, key: &SegmentKey, start: Minute, end: Minute, train: TrainId) {
        debug!("{key}: committed [{}, {}) for {train}", start.0, end.0);
        let intervals = self.by_segment.entry(key.clone()).or_default();
        let at = intervals.partition_point(|iv| iv.start <= start);
        intervals.insert(at, OccupancyInterval { start, end, train });
        self.total += 1;
    }

    /// [`find_earliest_slot`](Self::find_earliest_slot) followed by
    /// [`commit`](Self::commit).
    pub fn reserve(
        &mut self,
        key:      &SegmentKey,
        desired:  Minute,
        duration: u32,
        headway:  i64,
        train:    &TrainId,
    ) -> (Minute, Minute) {
        let (start, end) = self.find_earliest_slot(key, desired, duration, headway);
        self.commit(key, start, end, train.clone());
        (start, end)
    }

    /// Committed intervals on `key`, sorted by start.  Empty if none.
    pub fn intervals(&self, key: &SegmentKey) -> &[OccupancyInterval] {
        self.by_segment.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterator over every `(key, intervals)` pair, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&SegmentKey, &[OccupancyInterval])> + '_ {
        self.by_segment.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of segments with at least one committed interval.
    pub fn segment_count(&self) -> usize {
        self.by_segment.len()
    }

    /// Total intervals committed across all segments.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// First pair of intervals on one segment that violates the padded
    /// no-overlap invariant for `headway`, or `None` if the ledger is clean.
    pub fn find_conflict(
        &self,
        headway: i64,
    ) -> Option<(&SegmentKey, &OccupancyInterval, &OccupancyInterval)> {
        self.by_segment.iter().find_map(|(key, intervals)| {
            intervals.iter().enumerate().find_map(|(i, a)| {
                intervals[i + 1..]
                    .iter()
                    .find(|b| a.blocks(b.start, b.end, headway))
                    .map(|b| (key, a, b))
            })
        })
    }
}
