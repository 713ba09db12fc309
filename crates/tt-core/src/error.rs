//! Input-format error type.
//!
//! Every malformed scalar the scheduler accepts (clock strings, station
//! tokens, travel durations, routes) is rejected with a [`FormatError`]
//! before any scheduling begins.  Downstream crates wrap it as one variant of
//! their own error enums via `#[from]`.

use thiserror::Error;

/// A textual input value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("clock string {0:?} must contain exactly one ':' separator")]
    ClockSeparator(String),

    #[error("clock string {text:?}: {field} field is not an integer")]
    ClockField { text: String, field: &'static str },

    #[error("clock string {0:?} is out of range")]
    ClockRange(String),

    #[error("blank {what} token")]
    BlankToken { what: &'static str },

    #[error("travel duration {0:?} is not a positive integer")]
    TravelMinutes(String),

    #[error("route of train {train:?} names {stations} station(s); at least two are required")]
    ShortRoute { train: String, stations: usize },
}

/// Shorthand result type for parsing helpers.
pub type FormatResult<T> = Result<T, FormatError>;
