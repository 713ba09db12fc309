//! `tt-core` — foundational types for the `rust_tt` single-track timetable
//! scheduler.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `Station`, `TrainId`                                     |
//! | [`time`]   | `Minute`, `parse_clock`, `format_clock`                  |
//! | [`config`] | `SchedulerConfig` (dwell, headway)                       |
//! | [`error`]  | `FormatError`, `FormatResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SchedulerConfig;
pub use error::{FormatError, FormatResult};
pub use ids::{Station, TrainId};
pub use time::{format_clock, parse_clock, Minute, MINUTES_PER_DAY};
