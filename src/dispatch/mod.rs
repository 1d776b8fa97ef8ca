//! Greedy dispatch: fleet ordering, reachability tests, tour construction,
//! and round-based fleet scheduling.
//!
//! - [`order_by_battery`] — stable ascending fleet order, walked in reverse at dispatch
//! - [`first_leg_reachable`] / [`chaining_reachable`] — the two reachability tests
//! - [`build_tour`] — one round trip for one vehicle, O(n²)
//! - [`schedule`] — repeated dispatch rounds until no customer is pending

mod fleet;
mod reachability;
mod scheduler;
mod tour;

pub use fleet::order_by_battery;
pub use reachability::{chaining_reachable, first_leg_reachable, FIRST_LEG_RESERVE};
pub use scheduler::{schedule, schedule_with, Dispatch, DispatchConfig};
pub use tour::{build_tour, Trip};
