//! `tt-schedule` — conflict-free movement timetables over a single-track
//! network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`request`]   | `VehicleRequest`, `RequestRecord`                         |
//! | [`loader`]    | `load_requests_csv`, `load_requests_reader`               |
//! | [`ledger`]    | `OccupancyLedger`, `OccupancyInterval`                    |
//! | [`engine`]    | `schedule_all`, `schedule_vehicle`                        |
//! | [`timetable`] | `Schedule`, `VehicleTimetable`, `StopTime`, `TimetableRow`|
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Scheduling model (summary)
//!
//! Vehicles are scheduled one at a time, in input order, with no
//! backtracking.  For each hop `u → v` of a route:
//!
//! ```text
//! earliest_depart = current_time            (first hop)
//!                 = current_time + dwell    (later hops)
//! [s, e)          = ledger.find_earliest_slot(key(u, v), earliest_depart, travel)
//! departure[u] = s, arrival[v] = e, current_time = e
//! ```
//!
//! Every committed window, padded by `headway` on both sides, is disjoint
//! from every other padded window on the same segment.

pub mod engine;
pub mod error;
pub mod ledger;
pub mod loader;
pub mod request;
pub mod timetable;


pub use engine::{schedule_all, schedule_vehicle};
pub use error::{ScheduleError, ScheduleResult};
pub use ledger::{OccupancyInterval, OccupancyLedger};
pub use loader::{load_requests_csv, load_requests_reader};
pub use request::{RequestRecord, VehicleRequest};
pub use timetable::{Schedule, StopTime, TimetableRow, VehicleTimetable};
