//! Vehicle route requests.

use serde::Deserialize;

use tt_core::{parse_clock, FormatError, FormatResult, Minute, Station, TrainId};

/// One vehicle to schedule: its id, ordered station route, and desired start.
///
/// Construct with [`VehicleRequest::new`], which enforces a route of at least
/// two stations.  Whether consecutive stations are joined by a segment is only
/// checked by the engine, against a concrete network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRequest {
    pub train: TrainId,
    route:     Vec<Station>,
    pub start: Minute,
}

impl VehicleRequest {
    pub fn new(train: TrainId, route: Vec<Station>, start: Minute) -> FormatResult<Self> {
        if route.len() < 2 {
            return Err(FormatError::ShortRoute {
                train:    train.to_string(),
                stations: route.len(),
            });
        }
        Ok(Self { train, route, start })
    }

    pub fn route(&self) -> &[Station] {
        &self.route
    }

    /// Consecutive `(u, v)` station pairs, in travel order.
    pub fn hops(&self) -> impl Iterator<Item = (&Station, &Station)> + '_ {
        self.route.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// One raw row of the vehicle requests table.
///
/// `route` is a comma-separated list of station tokens; `start_time` is an
/// `H:M` clock string.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestRecord {
    pub train_id:   String,
    pub route:      String,
    pub start_time: String,
}

impl RequestRecord {
    pub fn new(train_id: &str, route: &str, start_time: &str) -> Self {
        Self {
            train_id:   train_id.to_owned(),
            route:      route.to_owned(),
            start_time: start_time.to_owned(),
        }
    }

    /// Validate the row into a [`VehicleRequest`].
    ///
    /// Route tokens are trimmed and empty tokens dropped, so `"A, B,,C"` is
    /// the route `A → B → C`.
    pub fn parse(&self) -> FormatResult<VehicleRequest> {
        let train = TrainId::parse(&self.train_id)?;
        let route = self
            .route
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Station::from)
            .collect();
        let start = parse_clock(&self.start_time)?;
        VehicleRequest::new(train, route, start)
    }
}
