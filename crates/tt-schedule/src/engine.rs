//! The scheduling engine.
//!
//! Vehicles are processed strictly in input order.  Each vehicle's slot
//! searches observe every interval committed by the vehicles before it, and
//! nothing already committed is ever moved: the first vehicle to claim a
//! window keeps it.

use log::{info, warn};

use tt_core::{Minute, SchedulerConfig};
use tt_network::{Network, NetworkError, SegmentKey};

use crate::{
    OccupancyLedger, Schedule, ScheduleError, ScheduleResult, StopTime, VehicleRequest,
    VehicleTimetable,
};

/// Schedule every request against a fresh ledger.
///
/// # Errors
/// The first request whose route names an unconnected station pair aborts the
/// whole run with [`ScheduleError::MissingSegment`]; no partial schedule is
/// returned.
pub fn schedule_all(
    network:  &Network,
    config:   SchedulerConfig,
    requests: &[VehicleRequest],
) -> ScheduleResult<Schedule> {
    let mut ledger = OccupancyLedger::new();
    let vehicles = requests
        .iter()
        .map(|request| schedule_vehicle(network, config, &mut ledger, request))
        .collect::<ScheduleResult<Vec<_>>>()?;

    info!(
        "scheduled {} trains: {} intervals on {} segments (dwell {} min, headway {} min)",
        vehicles.len(),
        ledger.len(),
        ledger.segment_count(),
        config.dwell_minutes,
        config.headway_minutes,
    );
    Ok(Schedule { vehicles, ledger })
}

/// Walk one request's route, claiming the earliest conflict-free window on
/// each segment and committing it to `ledger`.
///
/// Every hop is resolved against `network` before anything is committed, so
/// a failing request leaves `ledger` untouched.
pub fn schedule_vehicle(
    network: &Network,
    config:  SchedulerConfig,
    ledger:  &mut OccupancyLedger,
    request: &VehicleRequest,
) -> ScheduleResult<VehicleTimetable> {
    let hops = request
        .hops()
        .map(|(u, v)| -> ScheduleResult<(SegmentKey, u32)> {
            let travel = network
                .travel_time(u.as_str(), v.as_str())
                .map_err(|e| match e {
                    NetworkError::MissingSegment { from, to } => ScheduleError::MissingSegment {
                        train: request.train.clone(),
                        from,
                        to,
                    },
                    other => ScheduleError::Network(other),
                })?;
            Ok((SegmentKey::new(u.clone(), v.clone()), travel))
        })
        .collect::<ScheduleResult<Vec<_>>>()?;

    let route = request.route();
    let mut arrivals: Vec<Option<Minute>> = vec![None; route.len()];
    let mut departures: Vec<Option<Minute>> = vec![None; route.len()];

    let mut current = request.start;
    for (i, (key, travel)) in hops.iter().enumerate() {
        let earliest = if i == 0 { current } else { current + config.dwell() };
        let (start, end) = ledger.reserve(key, earliest, *travel, config.headway(), &request.train);
        departures[i] = Some(start);
        arrivals[i + 1] = Some(end);
        current = end;
    }
    // A vehicle "arrives" at its origin the moment it departs.
    arrivals[0] = departures[0];

    if current.day() > request.start.day() {
        warn!(
            "train {} arrives on day +{}; clock strings wrap at 24 h",
            request.train,
            current.day() - request.start.day(),
        );
    }

    let stops = route
        .iter()
        .zip(arrivals.into_iter().zip(departures))
        .map(|(station, (arrival, departure))| StopTime {
            station: station.clone(),
            arrival,
            departure,
        })
        .collect();

    Ok(VehicleTimetable { train: request.train.clone(), stops })
}
