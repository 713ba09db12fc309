//! CSV vehicle requests loader.
//!
//! # CSV format
//!
//! One row per vehicle.  Row order is scheduling priority.
//!
//! ```csv
//! train_id,route,start_time
//! T1,"A,B,C",08:00
//! T2,"C,B,A",08:05
//! ```
//!
//! The route field contains commas, so it must be quoted.

use std::io::Read;
use std::path::Path;

use crate::{RequestRecord, ScheduleError, VehicleRequest};

/// Load vehicle requests from a CSV file, preserving row order.
pub fn load_requests_csv(path: &Path) -> Result<Vec<VehicleRequest>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
pub fn load_requests_reader<R: Read>(reader: R) -> Result<Vec<VehicleRequest>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    csv_reader
        .deserialize::<RequestRecord>()
        .enumerate()
        .map(|(i, result)| {
            let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
            record
                .parse()
                .map_err(|source| ScheduleError::Row { row: i + 1, source })
        })
        .collect()
}
