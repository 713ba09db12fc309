//! Time codec.
//!
//! # Design
//!
//! All schedule arithmetic happens on integer minute offsets from 00:00 of
//! the day the run starts.  Human input and output use `H:M` clock strings:
//!
//! ```text
//! parse_clock("8:05")  = 485
//! format_clock(485)    = "08:05"
//! format_clock(1445)   = "00:05"   // wraps at 24 h, no day label
//! ```
//!
//! Parsing applies no range validation: an offset is elapsed time, not a
//! wall-clock reading, and sums of start + travel + dwell can exceed one day.
//! Formatting reduces the hour modulo 24, so offsets ≥ [`MINUTES_PER_DAY`]
//! alias to an earlier clock reading.  Callers that care can test
//! [`Minute::day`].
//!
//! `Minute` arithmetic saturates at the `i64` bounds rather than wrapping.

use std::fmt;
use std::str::FromStr;

use crate::FormatError;

/// Minutes in one displayed clock cycle.
pub const MINUTES_PER_DAY: i64 = 1_440;

// ── Minute ────────────────────────────────────────────────────────────────────

/// A minute offset from 00:00 of the run's first day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub i64);

impl Minute {
    /// Zero-based day index this offset falls on (floor division).
    #[inline]
    pub fn day(self) -> i64 {
        self.0.div_euclid(MINUTES_PER_DAY)
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Minute) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<i64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: i64) -> Minute {
        Minute(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub<i64> for Minute {
    type Output = Minute;
    #[inline]
    fn sub(self, rhs: i64) -> Minute {
        Minute(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0.div_euclid(60).rem_euclid(24);
        let minutes = self.0.rem_euclid(60);
        write!(f, "{hours:02}:{minutes:02}")
    }
}

impl FromStr for Minute {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clock(s)
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

/// Parse an `H:M` clock string into a minute offset.
///
/// Exactly one `:` is required.  Each field may carry surrounding whitespace
/// and a sign, and need not be zero-padded (`"8:5"` is minute 485).  A
/// value whose offset does not fit in an `i64` is a [`FormatError::ClockRange`].
pub fn parse_clock(text: &str) -> Result<Minute, FormatError> {
    let mut fields = text.split(':');
    let (Some(h), Some(m), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(FormatError::ClockSeparator(text.to_owned()));
    };
    let field = |raw: &str, name: &'static str| {
        raw.trim().parse::<i64>().map_err(|_| FormatError::ClockField {
            text:  text.to_owned(),
            field: name,
        })
    };
    let (hours, minutes) = (field(h, "hours")?, field(m, "minutes")?);
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .map(Minute)
        .ok_or_else(|| FormatError::ClockRange(text.to_owned()))
}

/// Render a minute offset as a zero-padded `HH:MM` string, wrapping at 24 h.
pub fn format_clock(minute: Minute) -> String {
    minute.to_string()
}
