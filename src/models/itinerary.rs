//! Accumulated per-vehicle itinerary.

use serde::{Deserialize, Serialize};

/// The itinerary accumulated for one vehicle across all its trips.
///
/// `visited_nodes` holds every stop and every return-to-warehouse leg in
/// execution order; the sequence only ever grows. One record exists per input
/// vehicle, in the same order as the fleet handed to the scheduler.
///
/// # Examples
///
/// ```
/// use ev_routing::models::RoutedVehicle;
///
/// let rv = RoutedVehicle::new();
/// assert_eq!(rv.stop_count(), 0);
/// assert_eq!(rv.trips_completed(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutedVehicle {
    visited_nodes: Vec<usize>,
    stop_count: usize,
    deliveries_completed: usize,
    total_distance_km: f64,
    total_time_hours: f64,
}

impl RoutedVehicle {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self {
            visited_nodes: Vec::new(),
            stop_count: 0,
            deliveries_completed: 0,
            total_distance_km: 0.0,
            total_time_hours: 0.0,
        }
    }

    /// Every stop and warehouse-return leg across all trips, in order.
    pub fn visited_nodes(&self) -> &[usize] {
        &self.visited_nodes
    }

    /// Total stops recorded, warehouse-return legs included.
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// Customer deliveries completed across all trips.
    pub fn deliveries_completed(&self) -> usize {
        self.deliveries_completed
    }

    /// Distance driven across all delivery legs, in km.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Travel plus recharge time across all trips, in hours.
    pub fn total_time_hours(&self) -> f64 {
        self.total_time_hours
    }

    /// Number of completed trips (one warehouse-return leg per trip).
    pub fn trips_completed(&self) -> usize {
        self.visited_nodes.iter().filter(|&&id| id == 0).count()
    }

    /// Appends one trip's stops and totals to this itinerary.
    pub(crate) fn record_trip(
        &mut self,
        stops: &[usize],
        deliveries: usize,
        distance_km: f64,
        time_hours: f64,
    ) {
        self.visited_nodes.extend_from_slice(stops);
        self.stop_count += stops.len();
        self.deliveries_completed += deliveries;
        self.total_distance_km += distance_km;
        self.total_time_hours += time_hours;
    }
}

impl Default for RoutedVehicle {
    fn default() -> Self {
        Self::new()
    }
}
