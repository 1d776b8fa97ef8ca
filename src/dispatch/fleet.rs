//! Fleet dispatch ordering.

use crate::models::Vehicle;

/// Orders the fleet ascending by battery range, stable on ties.
///
/// Returns indices into the original fleet slice rather than reordering it,
/// since vehicle identity is fleet position. The scheduler walks the result
/// in reverse so the largest-battery vehicle dispatches first in every round
/// and can claim the farthest nodes before a smaller vehicle classifies them
/// unreachable.
///
/// # Examples
///
/// ```
/// use ev_routing::dispatch::order_by_battery;
/// use ev_routing::models::Vehicle;
///
/// let fleet = vec![
///     Vehicle::new(2, 200.0, 50.0, 100.0),
///     Vehicle::new(2, 50.0, 50.0, 100.0),
/// ];
/// assert_eq!(order_by_battery(&fleet), vec![1, 0]);
/// ```
pub fn order_by_battery(fleet: &[Vehicle]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fleet.len()).collect();
    order.sort_by(|&a, &b| {
        fleet[a]
            .battery_range_km()
            .partial_cmp(&fleet[b].battery_range_km())
            .expect("battery range should not be NaN")
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(battery_km: f64) -> Vehicle {
        Vehicle::new(2, battery_km, 50.0, 100.0)
    }

    #[test]
    fn test_order_ascending() {
        let fleet = vec![vehicle(120.0), vehicle(40.0), vehicle(300.0)];
        assert_eq!(order_by_battery(&fleet), vec![1, 0, 2]);
    }

    #[test]
    fn test_order_stable_on_ties() {
        let fleet = vec![vehicle(80.0), vehicle(80.0), vehicle(20.0), vehicle(80.0)];
        assert_eq!(order_by_battery(&fleet), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_order_empty_fleet() {
        assert!(order_by_battery(&[]).is_empty());
    }
}
