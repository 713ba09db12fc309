//! Network representation and builder.
//!
//! # Data layout
//!
//! Segments are stored in a `HashMap` keyed by [`SegmentKey`], the station
//! pair sorted lexicographically.  `A–B` and `B–A` therefore resolve to the
//! same entry, and at most one segment exists per unordered pair: inserting a
//! pair again overwrites its travel time.
//!
//! The station set is kept in a `BTreeSet` so iteration is deterministic.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use log::warn;

use tt_core::Station;

use crate::{NetworkError, NetworkResult, SegmentRecord};

// ── SegmentKey ────────────────────────────────────────────────────────────────

/// Direction-independent identifier of a segment.
///
/// Invariant: `low <= high`.  Construct with [`SegmentKey::new`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SegmentKey {
    low:  Station,
    high: Station,
}

impl SegmentKey {
    /// Canonical key for the pair `{u, v}`, whatever the order given.
    pub fn new(u: impl Into<Station>, v: impl Into<Station>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v {
            Self { low: u, high: v }
        } else {
            Self { low: v, high: u }
        }
    }

    /// The two endpoints, lexicographically smaller first.
    pub fn endpoints(&self) -> (&Station, &Station) {
        (&self.low, &self.high)
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Undirected single-track graph: stations joined by segments with a fixed
/// travel time in minutes.
///
/// Do not construct directly; use [`NetworkBuilder`] or [`build_network`].
#[derive(Clone, Debug, Default)]
pub struct Network {
    travel:   HashMap<SegmentKey, u32>,
    stations: BTreeSet<Station>,
}

impl Network {
    /// A network with no stations; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn segment_count(&self) -> usize {
        self.travel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel.is_empty()
    }

    /// `true` if a segment joins `u` and `v`, in either direction.
    pub fn has_segment(&self, u: &str, v: &str) -> bool {
        self.travel.contains_key(&SegmentKey::new(u, v))
    }

    /// Travel time of the segment joining `u` and `v`.
    ///
    /// # Errors
    /// [`NetworkError::MissingSegment`] if no such segment exists.
    pub fn travel_time(&self, u: &str, v: &str) -> NetworkResult<u32> {
        self.travel
            .get(&SegmentKey::new(u, v))
            .copied()
            .ok_or_else(|| NetworkError::MissingSegment {
                from: Station::new(u),
                to:   Station::new(v),
            })
    }

    /// Iterator over all stations in lexicographic order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter()
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tt_core::Station;
/// use tt_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_segment(Station::new("A"), Station::new("B"), 5);
/// let net = b.build();
/// assert_eq!(net.travel_time("B", "A").unwrap(), 5);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    network: Network,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the segment `{u, v}`, overwriting any earlier travel time for
    /// the same unordered pair.  Returns the overwritten travel time, if any.
    pub fn add_segment(&mut self, u: Station, v: Station, travel_minutes: u32) -> Option<u32> {
        self.network.stations.insert(u.clone());
        self.network.stations.insert(v.clone());
        let key = SegmentKey::new(u, v);
        let previous = self.network.travel.insert(key.clone(), travel_minutes);
        if let Some(old) = previous {
            warn!("segment {key} redefined: travel {old} min replaced by {travel_minutes} min");
        }
        previous
    }

    pub fn segment_count(&self) -> usize {
        self.network.segment_count()
    }

    pub fn build(self) -> Network {
        self.network
    }
}

// ── Tabular construction ──────────────────────────────────────────────────────

/// Build a [`Network`] from raw segment rows.
///
/// Station tokens are trimmed and must be non-blank; `travel_min` must parse
/// as a positive integer.  The first malformed row aborts construction with
/// [`NetworkError::Row`] carrying its 1-based position.
pub fn build_network<I>(records: I) -> NetworkResult<Network>
where
    I: IntoIterator<Item = SegmentRecord>,
{
    let mut builder = NetworkBuilder::new();
    for (i, record) in records.into_iter().enumerate() {
        let (u, v, travel) = record
            .parse()
            .map_err(|source| NetworkError::Row { row: i + 1, source })?;
        builder.add_segment(u, v, travel);
    }
    Ok(builder.build())
}
