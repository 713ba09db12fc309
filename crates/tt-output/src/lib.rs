//! `tt-output` — timetable output writers for the rust_tt scheduler.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                        |
//! |-----------|---------|--------------------------------------|
//! | *(none)*  | CSV     | `schedule.csv`, `occupancy.csv`      |
//! | `sqlite`  | SQLite  | `timetable.db`                       |
//!
//! Both implement [`OutputWriter`].  The `occupancy` table holds the chart
//! bars derived by [`occupancy_bars`]: one bar per vehicle per travelled
//! segment, for a Gantt-style rendering done elsewhere.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{occupancy_bars, CsvWriter, OutputWriter};
//!
//! let rows = schedule.rows();
//! let mut writer = CsvWriter::new(Path::new("./outputs"))?;
//! writer.write_timetable(&rows)?;
//! writer.write_bars(&occupancy_bars(&rows)?)?;
//! writer.finish()?;
//! ```

pub mod bars;
pub mod csv;
pub mod error;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use bars::{occupancy_bars, OccupancyBar};
pub use self::csv::{read_timetable_csv, read_timetable_reader, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
