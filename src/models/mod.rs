//! Domain model types for electric-vehicle delivery routing.
//!
//! Provides the core abstractions: nodes carrying their dense distance rows,
//! vehicles with battery and capacity parameters, per-node delivery status
//! tracking, and the accumulated per-vehicle itinerary output.

mod itinerary;
mod node;
mod status;
mod vehicle;

pub use itinerary::RoutedVehicle;
pub use node::Node;
pub use status::{DeliveryStatus, StatusBoard};
pub use vehicle::Vehicle;
