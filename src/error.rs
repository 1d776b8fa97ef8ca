//! Input validation and run failure taxonomy.

use thiserror::Error;

use crate::models::RoutedVehicle;

/// Errors raised while validating a problem or driving a scheduling run.
///
/// Unreachable customers are not an error: they end up in
/// [`Dispatch::errored`](crate::dispatch::Dispatch::errored) so callers can
/// tell delivered from undeliverable.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The node set is empty.
    #[error("node set is empty")]
    EmptyNodes,

    /// A node's id does not match its position, so node 0 (the warehouse)
    /// or another id is absent from its expected slot.
    #[error("node at position {position} has id {found}; ids must equal their position")]
    MisnumberedNode {
        /// Index of the offending node in the input slice.
        position: usize,
        /// Id the node actually carries.
        found: usize,
    },

    /// A node's distance row does not cover the whole node set.
    #[error("node {node_id} has {found} distances, expected {expected}")]
    MalformedDistances {
        /// Id of the offending node.
        node_id: usize,
        /// Required row length (the node count).
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// A distance is negative or not finite.
    #[error("distance from node {from} to node {to} is not a non-negative finite number")]
    InvalidDistance {
        /// Origin node id.
        from: usize,
        /// Destination node id.
        to: usize,
    },

    /// The distance matrix is not symmetric, or a self-distance is nonzero.
    #[error("distances between nodes {from} and {to} disagree beyond tolerance")]
    AsymmetricDistances {
        /// Origin node id.
        from: usize,
        /// Destination node id.
        to: usize,
    },

    /// A vehicle has a non-positive capacity, speed, or recharge rate, or a
    /// battery range that is negative or not finite.
    #[error("vehicle at position {index} has a non-positive or non-finite parameter")]
    InvalidVehicle {
        /// Index of the offending vehicle in the fleet slice.
        index: usize,
    },

    /// A full dispatch round changed nothing while customers were still
    /// pending; the run cannot progress.
    #[error("dispatch round made no progress with {} customers still pending", pending.len())]
    NoProgress {
        /// Per-vehicle itineraries accumulated before the stall, in fleet order.
        vehicles: Vec<RoutedVehicle>,
        /// Ids of customers still pending, ascending.
        pending: Vec<usize>,
    },

    /// The configured maximum number of dispatch rounds was reached with
    /// customers still pending.
    #[error("round limit of {limit} reached with {} customers still pending", pending.len())]
    RoundLimit {
        /// The configured limit.
        limit: usize,
        /// Per-vehicle itineraries accumulated so far, in fleet order.
        vehicles: Vec<RoutedVehicle>,
        /// Ids of customers still pending, ascending.
        pending: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MisnumberedNode {
            position: 0,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "node at position 0 has id 3; ids must equal their position"
        );

        let err = Error::NoProgress {
            vehicles: vec![],
            pending: vec![1, 4],
        };
        assert_eq!(
            err.to_string(),
            "dispatch round made no progress with 2 customers still pending"
        );
    }
}
