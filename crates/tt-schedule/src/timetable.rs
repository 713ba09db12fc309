//! Timetable types produced by the engine.
//!
//! [`VehicleTimetable`] keeps minute offsets for arithmetic and tests;
//! [`TimetableRow`] is the rendered table row handed to output collaborators:
//!
//! ```text
//! train_id,station,arrival,departure
//! T1,A,08:00,08:00
//! T1,B,08:05,08:07
//! T1,C,08:10,
//! ```

use serde::{Deserialize, Serialize};

use tt_core::{format_clock, Minute, Station, TrainId};

use crate::OccupancyLedger;

// ── StopTime ──────────────────────────────────────────────────────────────────

/// One station call of one vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopTime {
    pub station:   Station,
    pub arrival:   Option<Minute>,
    /// `None` at the last station of a route.
    pub departure: Option<Minute>,
}

// ── VehicleTimetable ──────────────────────────────────────────────────────────

/// Stop times of one vehicle, in route order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleTimetable {
    pub train: TrainId,
    pub stops: Vec<StopTime>,
}

impl VehicleTimetable {
    /// Departure from the first station.
    pub fn departure(&self) -> Option<Minute> {
        self.stops.first().and_then(|s| s.departure)
    }

    /// Arrival at the last station.
    pub fn arrival(&self) -> Option<Minute> {
        self.stops.last().and_then(|s| s.arrival)
    }

    /// Render one [`TimetableRow`] per stop.
    pub fn rows(&self) -> impl Iterator<Item = TimetableRow> + '_ {
        let render = |m: Option<Minute>| m.map(format_clock).unwrap_or_default();
        self.stops.iter().map(move |stop| TimetableRow {
            train_id:  self.train.to_string(),
            station:   stop.station.to_string(),
            arrival:   render(stop.arrival),
            departure: render(stop.departure),
        })
    }
}

// ── TimetableRow ──────────────────────────────────────────────────────────────

/// One row of the output timetable table.  Empty strings mark absent times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub train_id:  String,
    pub station:   String,
    pub arrival:   String,
    pub departure: String,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Result of one scheduling run.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Per-vehicle timetables, in request (priority) order.
    pub vehicles: Vec<VehicleTimetable>,
    /// Every interval committed during the run.
    pub ledger:   OccupancyLedger,
}

impl Schedule {
    /// Timetable of the first vehicle named `train`.
    pub fn vehicle(&self, train: &str) -> Option<&VehicleTimetable> {
        self.vehicles.iter().find(|v| v.train.as_str() == train)
    }

    /// The flat output table: all vehicles' rows, stably sorted by train id
    /// so each vehicle's stops stay in route order.
    pub fn rows(&self) -> Vec<TimetableRow> {
        let mut rows: Vec<TimetableRow> =
            self.vehicles.iter().flat_map(VehicleTimetable::rows).collect();
        rows.sort_by(|a, b| a.train_id.cmp(&b.train_id));
        rows
    }
}
