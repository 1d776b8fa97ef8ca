//! Round-based fleet scheduling.
//!
//! Drives repeated dispatch rounds across the whole fleet until no customer
//! node is pending, accumulating each vehicle's itinerary and inserting
//! recharge time between successive trips of the same vehicle.

use serde::{Deserialize, Serialize};

use crate::distance::rank_by_distance;
use crate::error::Error;
use crate::models::{Node, RoutedVehicle, StatusBoard, Vehicle};

use super::fleet::order_by_battery;
use super::tour::build_tour;

/// Tolerance for the symmetry and zero-self-distance validation.
const DISTANCE_TOLERANCE: f64 = 1e-6;

/// The completed outcome of a scheduling run.
///
/// Holds one itinerary per input vehicle, in the same order as the fleet
/// slice passed in (not dispatch order), plus the customers no vehicle
/// could reach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    vehicles: Vec<RoutedVehicle>,
    errored: Vec<usize>,
}

impl Dispatch {
    /// Per-vehicle itineraries, in original fleet order.
    pub fn vehicles(&self) -> &[RoutedVehicle] {
        &self.vehicles
    }

    /// Ids of customers classified unreachable, ascending.
    pub fn errored(&self) -> &[usize] {
        &self.errored
    }

    /// Total deliveries completed across the fleet.
    pub fn deliveries_completed(&self) -> usize {
        self.vehicles.iter().map(|rv| rv.deliveries_completed()).sum()
    }
}

/// Tuning knobs for a scheduling run.
///
/// # Examples
///
/// ```
/// use ev_routing::dispatch::DispatchConfig;
///
/// let config = DispatchConfig::new().with_max_round_limit(100);
/// assert_eq!(config.max_round_limit(), Some(100));
/// assert_eq!(DispatchConfig::default().max_round_limit(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    max_round_limit: Option<usize>,
}

impl DispatchConfig {
    /// Creates the default configuration (no round limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of dispatch rounds; exceeding the cap fails the run
    /// with [`Error::RoundLimit`]. A safety valve, not part of the core
    /// contract.
    pub fn with_max_round_limit(mut self, limit: usize) -> Self {
        self.max_round_limit = Some(limit);
        self
    }

    /// The configured round cap, if any.
    pub fn max_round_limit(&self) -> Option<usize> {
        self.max_round_limit
    }
}

/// Schedules the whole fleet with the default configuration.
///
/// See [`schedule_with`] for the full contract.
///
/// # Examples
///
/// ```
/// use ev_routing::dispatch::schedule;
/// use ev_routing::models::{Node, Vehicle};
///
/// let nodes = vec![
///     Node::new(0, vec![0.0, 10.0, 15.0]),
///     Node::new(1, vec![10.0, 0.0, 5.0]),
///     Node::new(2, vec![15.0, 5.0, 0.0]),
/// ];
/// let fleet = vec![Vehicle::new(2, 100.0, 50.0, 100.0)];
///
/// let dispatch = schedule(&nodes, &fleet).unwrap();
/// assert_eq!(dispatch.vehicles()[0].visited_nodes(), &[2, 1, 0]);
/// assert_eq!(dispatch.deliveries_completed(), 2);
/// assert!(dispatch.errored().is_empty());
/// ```
pub fn schedule(nodes: &[Node], fleet: &[Vehicle]) -> Result<Dispatch, Error> {
    schedule_with(nodes, fleet, &DispatchConfig::default())
}

/// Schedules the whole fleet: repeated dispatch rounds until no customer is
/// pending.
///
/// Each round walks the fleet in descending battery order and builds one
/// trip per vehicle. Trips that delivered are merged into that vehicle's
/// itinerary; a vehicle starting its second or later trip is first charged a
/// full recharge interval (`battery_range_km / recharge_rate_km_per_hour`).
/// The run ends when every customer is delivered or errored; a round that
/// changes nothing while customers remain pending fails with
/// [`Error::NoProgress`], carrying the partial itineraries and the residual
/// pending set.
pub fn schedule_with(
    nodes: &[Node],
    fleet: &[Vehicle],
    config: &DispatchConfig,
) -> Result<Dispatch, Error> {
    validate(nodes, fleet)?;

    let mut board = StatusBoard::new(nodes.len());
    let mut vehicles: Vec<RoutedVehicle> = fleet.iter().map(|_| RoutedVehicle::new()).collect();

    // Both orderings are computed once per run and reused across rounds.
    let warehouse_ranking = rank_by_distance(nodes, 0);
    let dispatch_order = order_by_battery(fleet);

    let mut rounds_run = 0;
    while board.pending_count() > 0 {
        if let Some(limit) = config.max_round_limit() {
            if rounds_run >= limit {
                return Err(Error::RoundLimit {
                    limit,
                    vehicles,
                    pending: board.pending_ids(),
                });
            }
        }

        let pending_before = board.pending_count();

        // Largest battery dispatches first.
        for &fleet_index in dispatch_order.iter().rev() {
            let vehicle = &fleet[fleet_index];
            let trip = build_tour(nodes, vehicle, &warehouse_ranking, &mut board);
            if trip.deliveries == 0 {
                continue;
            }

            let routed = &mut vehicles[fleet_index];
            let mut trip_time_hours = trip.time_hours;
            if routed.stop_count() > 0 {
                trip_time_hours += vehicle.full_recharge_hours();
            }
            routed.record_trip(&trip.stops, trip.deliveries, trip.distance_km, trip_time_hours);
        }

        // Deliveries and errored classifications both shrink the pending
        // set; an unchanged count means the round achieved neither.
        if board.pending_count() == pending_before {
            return Err(Error::NoProgress {
                vehicles,
                pending: board.pending_ids(),
            });
        }
        rounds_run += 1;
    }

    Ok(Dispatch {
        vehicles,
        errored: board.errored_ids(),
    })
}

fn validate(nodes: &[Node], fleet: &[Vehicle]) -> Result<(), Error> {
    if nodes.is_empty() {
        return Err(Error::EmptyNodes);
    }

    let node_count = nodes.len();
    for (position, node) in nodes.iter().enumerate() {
        if node.id() != position {
            return Err(Error::MisnumberedNode {
                position,
                found: node.id(),
            });
        }
        if node.distances().len() != node_count {
            return Err(Error::MalformedDistances {
                node_id: node.id(),
                expected: node_count,
                found: node.distances().len(),
            });
        }
    }

    for from in 0..node_count {
        for to in from..node_count {
            let out = nodes[from].distance_to(to);
            let back = nodes[to].distance_to(from);
            if !out.is_finite() || out < 0.0 {
                return Err(Error::InvalidDistance { from, to });
            }
            if !back.is_finite() || back < 0.0 {
                return Err(Error::InvalidDistance { from: to, to: from });
            }
            if (out - back).abs() > DISTANCE_TOLERANCE {
                return Err(Error::AsymmetricDistances { from, to });
            }
        }
        if nodes[from].distance_to(from).abs() > DISTANCE_TOLERANCE {
            return Err(Error::AsymmetricDistances {
                from,
                to: from,
            });
        }
    }

    for (index, vehicle) in fleet.iter().enumerate() {
        let speed_ok = vehicle.speed_kmh().is_finite() && vehicle.speed_kmh() > 0.0;
        let recharge_ok = vehicle.recharge_rate_km_per_hour().is_finite()
            && vehicle.recharge_rate_km_per_hour() > 0.0;
        let battery_ok =
            vehicle.battery_range_km().is_finite() && vehicle.battery_range_km() >= 0.0;
        if vehicle.capacity() == 0 || !speed_ok || !recharge_ok || !battery_ok {
            return Err(Error::InvalidVehicle { index });
        }
    }

    Ok(())
}
