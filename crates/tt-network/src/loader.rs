//! CSV segments loader.
//!
//! # CSV format
//!
//! One row per single-track segment.  Direction does not matter.
//!
//! ```csv
//! source,target,travel_min
//! A,B,5
//! B,C,3
//! ```
//!
//! Header whitespace is ignored.  Field values are validated by
//! [`SegmentRecord::parse`] rather than by serde, so a bad value is reported
//! as a [`FormatError`] naming the offending text.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tt_core::{FormatError, Station};

use crate::{build_network, Network, NetworkError};

// ── CSV record ────────────────────────────────────────────────────────────────

/// One raw row of the segments table.
#[derive(Clone, Debug, Deserialize)]
pub struct SegmentRecord {
    pub source:     String,
    pub target:     String,
    pub travel_min: String,
}

impl SegmentRecord {
    pub fn new(source: &str, target: &str, travel_min: &str) -> Self {
        Self {
            source:     source.to_owned(),
            target:     target.to_owned(),
            travel_min: travel_min.to_owned(),
        }
    }

    /// Validate the row into `(u, v, travel_minutes)`.
    pub fn parse(&self) -> Result<(Station, Station, u32), FormatError> {
        let u = Station::parse(&self.source)?;
        let v = Station::parse(&self.target)?;
        let travel = self
            .travel_min
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&t| t > 0)
            .ok_or_else(|| FormatError::TravelMinutes(self.travel_min.clone()))?;
        Ok((u, v, travel))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and build a [`Network`] from a segments CSV file.
pub fn load_segments_csv(path: &Path) -> Result<Network, NetworkError> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
pub fn load_segments_reader<R: Read>(reader: R) -> Result<Network, NetworkError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<SegmentRecord>()
        .map(|r| r.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    build_network(records)
}
