//! The `OutputWriter` trait implemented by all backend writers.

use tt_schedule::TimetableRow;

use crate::{OccupancyBar, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Append timetable rows, in the order given.
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()>;

    /// Append chart bars, in the order given.
    fn write_bars(&mut self, bars: &[OccupancyBar]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
