//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedule.csv`  — `train_id,station,arrival,departure`
//! - `occupancy.csv` — `train_id,from,to,start_min,duration_min`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Writer;

use tt_schedule::TimetableRow;

use crate::writer::OutputWriter;
use crate::{OccupancyBar, OutputResult};

pub const TIMETABLE_HEADER: [&str; 4] = ["train_id", "station", "arrival", "departure"];
pub const BARS_HEADER: [&str; 5] = ["train_id", "from", "to", "start_min", "duration_min"];

/// Writes the timetable and its chart bars to two CSV files.
pub struct CsvWriter {
    timetable: Writer<File>,
    bars:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut timetable = Writer::from_path(dir.join("schedule.csv"))?;
        timetable.write_record(TIMETABLE_HEADER)?;

        let mut bars = Writer::from_path(dir.join("occupancy.csv"))?;
        bars.write_record(BARS_HEADER)?;

        Ok(Self { timetable, bars, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()> {
        for row in rows {
            self.timetable.write_record([
                row.train_id.as_str(),
                row.station.as_str(),
                row.arrival.as_str(),
                row.departure.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_bars(&mut self, bars: &[OccupancyBar]) -> OutputResult<()> {
        for bar in bars {
            self.bars.write_record(&[
                bar.train_id.clone(),
                bar.from.clone(),
                bar.to.clone(),
                bar.start.0.to_string(),
                bar.duration.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timetable.flush()?;
        self.bars.flush()?;
        Ok(())
    }
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Read a `schedule.csv` table back into rows, preserving order.
pub fn read_timetable_csv(path: &Path) -> OutputResult<Vec<TimetableRow>> {
    read_timetable_reader(File::open(path)?)
}

/// Like [`read_timetable_csv`] but accepts any `Read` source.
pub fn read_timetable_reader<R: Read>(reader: R) -> OutputResult<Vec<TimetableRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows = rdr.deserialize::<TimetableRow>().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
