//! `tt-network` — the single-track network graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network`, `NetworkBuilder`, `SegmentKey`, `build_network`  |
//! | [`loader`]  | `SegmentRecord`, `load_segments_csv`, `load_segments_reader`|
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! The graph is undirected: a segment `{u, v}` may be traversed in either
//! direction, and every lookup goes through the direction-independent
//! [`SegmentKey`].

pub mod error;
pub mod loader;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_segments_csv, load_segments_reader, SegmentRecord};
pub use network::{build_network, Network, NetworkBuilder, SegmentKey};
