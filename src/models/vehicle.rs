//! Vehicle type with battery and capacity parameters.

use serde::{Deserialize, Serialize};

/// An electric delivery vehicle.
///
/// A vehicle has no id of its own; its identity is its position in the fleet
/// slice handed to the scheduler. All parameters are fixed for the run;
/// remaining battery during a trip is tracked by the tour builder, not here.
///
/// # Examples
///
/// ```
/// use ev_routing::models::Vehicle;
///
/// let v = Vehicle::new(4, 120.0, 60.0, 100.0);
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v.battery_range_km(), 120.0);
/// assert!((v.full_recharge_hours() - 1.2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    capacity: usize,
    battery_range_km: f64,
    speed_kmh: f64,
    recharge_rate_km_per_hour: f64,
}

impl Vehicle {
    /// Creates a vehicle.
    ///
    /// `capacity` is the maximum number of delivery stops in a single trip,
    /// `battery_range_km` the distance available on a full charge,
    /// `speed_kmh` the travel speed, and `recharge_rate_km_per_hour` the km
    /// of range restored per hour of recharging.
    pub fn new(
        capacity: usize,
        battery_range_km: f64,
        speed_kmh: f64,
        recharge_rate_km_per_hour: f64,
    ) -> Self {
        Self {
            capacity,
            battery_range_km,
            speed_kmh,
            recharge_rate_km_per_hour,
        }
    }

    /// Maximum delivery stops per trip.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distance available on a full charge, in km.
    pub fn battery_range_km(&self) -> f64 {
        self.battery_range_km
    }

    /// Travel speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Km of range restored per hour of recharging.
    pub fn recharge_rate_km_per_hour(&self) -> f64 {
        self.recharge_rate_km_per_hour
    }

    /// Time to restore a full battery from empty, in hours.
    pub fn full_recharge_hours(&self) -> f64 {
        self.battery_range_km / self.recharge_rate_km_per_hour
    }
}
