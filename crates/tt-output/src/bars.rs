//! Chart-bar derivation.
//!
//! A vehicle occupies the segment between consecutive stops `i` and `i + 1`
//! from its departure at `i` to its arrival at `i + 1`.  Bars are recovered
//! from the rendered table alone, so any consumer holding only
//! `schedule.csv` gets the same bars.
//!
//! Because clock strings wrap at 24 h, a hop crossing midnight renders with
//! an arrival earlier than its departure.  Such hops yield no bar.

use std::collections::BTreeMap;

use tt_core::{parse_clock, Minute};
use tt_schedule::TimetableRow;

use crate::OutputResult;

/// One busy window of one vehicle on one segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyBar {
    pub train_id: String,
    pub from:     String,
    pub to:       String,
    /// Departure from `from`, in minutes after 00:00.
    pub start:    Minute,
    pub duration: i64,
}

impl OccupancyBar {
    pub fn end(&self) -> Minute {
        self.start + self.duration
    }
}

/// Derive chart bars from timetable rows.
///
/// Rows are grouped by `train_id` (groups in ascending id order, rows within a
/// group in their given order).  Pairs with an empty departure or arrival are
/// skipped.
///
/// # Errors
/// A non-empty time field that is not a clock string.
pub fn occupancy_bars(rows: &[TimetableRow]) -> OutputResult<Vec<OccupancyBar>> {
    let mut by_train: BTreeMap<&str, Vec<&TimetableRow>> = BTreeMap::new();
    for row in rows {
        by_train.entry(row.train_id.as_str()).or_default().push(row);
    }

    let mut bars = Vec::new();
    for (train_id, stops) in by_train {
        for pair in stops.windows(2) {
            let (here, next) = (pair[0], pair[1]);
            if here.departure.is_empty() || next.arrival.is_empty() {
                continue;
            }
            let start = parse_clock(&here.departure)?;
            let end = parse_clock(&next.arrival)?;
            if end > start {
                bars.push(OccupancyBar {
                    train_id: train_id.to_owned(),
                    from:     here.station.clone(),
                    to:       next.station.clone(),
                    start,
                    duration: end.since(start),
                });
            }
        }
    }
    Ok(bars)
}
