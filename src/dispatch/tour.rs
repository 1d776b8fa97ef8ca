//! Single-trip tour construction.
//!
//! Builds exactly one round trip for one vehicle in one dispatch round: an
//! entry stop picked farthest-first from the warehouse ranking, then
//! nearest-neighbor chaining under the remaining battery, then the return
//! leg.
//!
//! # Complexity
//!
//! O(n²) per trip where n = number of nodes (one fresh ranking per hop).

use crate::distance::{rank_by_distance, Neighbor};
use crate::models::{Node, StatusBoard, Vehicle};

use super::reachability::{chaining_reachable, first_leg_reachable};

/// The outcome of one tour builder invocation: a single round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Ordered stop sequence, ending with the warehouse return leg when at
    /// least one delivery was made; empty otherwise.
    pub stops: Vec<usize>,
    /// Deliveries completed this trip.
    pub deliveries: usize,
    /// Distance driven across delivery legs, in km.
    pub distance_km: f64,
    /// Travel time across delivery legs, in hours.
    pub time_hours: f64,
    /// Battery left when the chain stopped, in km.
    pub battery_remaining_km: f64,
}

/// Builds one round trip for `vehicle`, starting from a full battery.
///
/// The entry stop is chosen by scanning `warehouse_ranking` from farthest to
/// nearest: the first pending node within half the battery becomes the trip's
/// first stop, and every pending node scanned before it that fails the test
/// is marked errored for good. From the entry stop the trip chains to the
/// nearest pending node the remaining battery can reach, until the vehicle is
/// full or no candidate is left. Nodes out of chaining range merely stay
/// pending. The warehouse is appended as the final stop of any trip that
/// delivered; its return leg is not counted in distance or time.
///
/// Remaining battery is returned in the [`Trip`] rather than written back to
/// the vehicle.
pub fn build_tour(
    nodes: &[Node],
    vehicle: &Vehicle,
    warehouse_ranking: &[Neighbor],
    board: &mut StatusBoard,
) -> Trip {
    let mut battery_km = vehicle.battery_range_km();
    let mut stops: Vec<usize> = Vec::new();
    let mut deliveries = 0;
    let mut distance_km = 0.0;
    let mut time_hours = 0.0;

    // Entry leg: farthest pending node first.
    for entry in warehouse_ranking.iter().rev() {
        if entry.node_id == 0 || !board.is_pending(entry.node_id) {
            continue;
        }
        if first_leg_reachable(entry.distance_km, battery_km) {
            battery_km -= entry.distance_km;
            distance_km += entry.distance_km;
            time_hours += entry.distance_km / vehicle.speed_kmh();
            board.mark_delivered(entry.node_id);
            stops.push(entry.node_id);
            deliveries = 1;
            break;
        }
        board.mark_errored(entry.node_id);
    }

    if stops.is_empty() {
        return Trip {
            stops,
            deliveries: 0,
            distance_km,
            time_hours,
            battery_remaining_km: battery_km,
        };
    }

    // Chain to the nearest reachable pending node until the vehicle is full
    // or nothing qualifies.
    let mut current_id = stops[0];
    while deliveries < vehicle.capacity() && board.pending_count() > 0 {
        let local_ranking = rank_by_distance(nodes, current_id);
        let mut hop: Option<Neighbor> = None;
        for candidate in &local_ranking {
            if candidate.node_id == 0 || !board.is_pending(candidate.node_id) {
                continue;
            }
            // Out-of-range candidates stay pending for a later trip.
            if chaining_reachable(candidate.distance_km, battery_km) {
                hop = Some(*candidate);
                break;
            }
        }

        match hop {
            Some(next) => {
                battery_km -= next.distance_km;
                distance_km += next.distance_km;
                time_hours += next.distance_km / vehicle.speed_kmh();
                board.mark_delivered(next.node_id);
                stops.push(next.node_id);
                deliveries += 1;
                current_id = next.node_id;
            }
            None => break,
        }
    }

    // Return leg: appended to the sequence, not counted toward deliveries
    // or the distance/time totals.
    stops.push(0);

    Trip {
        stops,
        deliveries,
        distance_km,
        time_hours,
        battery_remaining_km: battery_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_customer_nodes() -> Vec<Node> {
        vec![
            Node::new(0, vec![0.0, 10.0, 15.0]),
            Node::new(1, vec![10.0, 0.0, 5.0]),
            Node::new(2, vec![15.0, 5.0, 0.0]),
        ]
    }

    fn build(nodes: &[Node], vehicle: &Vehicle, board: &mut StatusBoard) -> Trip {
        let warehouse_ranking = rank_by_distance(nodes, 0);
        build_tour(nodes, vehicle, &warehouse_ranking, board)
    }

    #[test]
    fn test_tour_farthest_entry_then_nearest_chain() {
        let nodes = two_customer_nodes();
        let vehicle = Vehicle::new(2, 100.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        let trip = build(&nodes, &vehicle, &mut board);
        assert_eq!(trip.stops, vec![2, 1, 0]);
        assert_eq!(trip.deliveries, 2);
        // 0→2 = 15, 2→1 = 5
        assert!((trip.distance_km - 20.0).abs() < 1e-10);
        assert!((trip.time_hours - 0.4).abs() < 1e-10);
        assert!((trip.battery_remaining_km - 80.0).abs() < 1e-10);
        assert_eq!(board.pending_count(), 0);
    }

    #[test]
    fn test_tour_capacity_bounds_chain() {
        let nodes = two_customer_nodes();
        let vehicle = Vehicle::new(1, 100.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        let trip = build(&nodes, &vehicle, &mut board);
        assert_eq!(trip.stops, vec![2, 0]);
        assert_eq!(trip.deliveries, 1);
        assert!(board.is_pending(1));
    }

    #[test]
    fn test_tour_errors_nodes_beyond_half_battery() {
        let nodes = vec![
            Node::new(0, vec![0.0, 40.0, 60.0]),
            Node::new(1, vec![40.0, 0.0, 25.0]),
            Node::new(2, vec![60.0, 25.0, 0.0]),
        ];
        let vehicle = Vehicle::new(2, 100.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        // Node 2 (60 km) fails the half-battery test and is errored before
        // node 1 (40 km) is taken as the entry stop.
        let trip = build(&nodes, &vehicle, &mut board);
        assert_eq!(trip.stops, vec![1, 0]);
        assert_eq!(trip.deliveries, 1);
        assert_eq!(board.errored_ids(), vec![2]);
    }

    #[test]
    fn test_tour_empty_when_nothing_reachable() {
        let nodes = vec![Node::new(0, vec![0.0, 20.0]), Node::new(1, vec![20.0, 0.0])];
        let vehicle = Vehicle::new(2, 10.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        let trip = build(&nodes, &vehicle, &mut board);
        assert!(trip.stops.is_empty());
        assert_eq!(trip.deliveries, 0);
        assert_eq!(trip.distance_km, 0.0);
        assert_eq!(trip.battery_remaining_km, 10.0);
        assert_eq!(board.errored_ids(), vec![1]);
    }

    #[test]
    fn test_tour_chain_leaves_out_of_range_pending() {
        // Entry at node 3 (45 km ≤ half of 100); from there both remaining
        // customers are 70 km away but only 55 km of battery is left.
        let nodes = vec![
            Node::new(0, vec![0.0, 20.0, 30.0, 45.0]),
            Node::new(1, vec![20.0, 0.0, 15.0, 70.0]),
            Node::new(2, vec![30.0, 15.0, 0.0, 70.0]),
            Node::new(3, vec![45.0, 70.0, 70.0, 0.0]),
        ];
        let vehicle = Vehicle::new(4, 100.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        let trip = build(&nodes, &vehicle, &mut board);
        assert_eq!(trip.stops, vec![3, 0]);
        assert_eq!(trip.deliveries, 1);
        assert!(board.is_pending(1));
        assert!(board.is_pending(2));
        assert!(board.errored_ids().is_empty());
    }

    #[test]
    fn test_tour_boundary_distance_is_reachable() {
        let nodes = vec![Node::new(0, vec![0.0, 50.0]), Node::new(1, vec![50.0, 0.0])];
        let vehicle = Vehicle::new(1, 100.0, 50.0, 100.0);
        let mut board = StatusBoard::new(nodes.len());

        // 50 km is exactly half of the 100 km battery.
        let trip = build(&nodes, &vehicle, &mut board);
        assert_eq!(trip.stops, vec![1, 0]);
        assert_eq!(trip.deliveries, 1);
    }
}
