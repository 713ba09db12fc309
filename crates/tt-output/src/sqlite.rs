//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `timetable.db` file in the configured output directory
//! with two tables: `schedule` and `occupancy`.  Empty time fields are stored
//! as `NULL`.

use std::path::Path;

use rusqlite::Connection;

use tt_schedule::TimetableRow;

use crate::writer::OutputWriter;
use crate::{OccupancyBar, OutputResult};

/// Writes the timetable and its chart bars to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `timetable.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("timetable.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS schedule (
                 seq       INTEGER PRIMARY KEY,
                 train_id  TEXT NOT NULL,
                 station   TEXT NOT NULL,
                 arrival   TEXT,
                 departure TEXT
             );
             CREATE TABLE IF NOT EXISTS occupancy (
                 train_id     TEXT NOT NULL,
                 from_station TEXT NOT NULL,
                 to_station   TEXT NOT NULL,
                 start_min    INTEGER NOT NULL,
                 duration_min INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

impl OutputWriter for SqliteWriter {
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO schedule (train_id, station, arrival, departure) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.train_id,
                    row.station,
                    non_empty(&row.arrival),
                    non_empty(&row.departure),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_bars(&mut self, bars: &[OccupancyBar]) -> OutputResult<()> {
        if bars.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO occupancy \
                 (train_id, from_station, to_station, start_min, duration_min) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for bar in bars {
                stmt.execute(rusqlite::params![
                    bar.train_id,
                    bar.from,
                    bar.to,
                    bar.start.0,
                    bar.duration,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
