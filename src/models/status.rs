//! Per-node delivery status tracking.

use serde::{Deserialize, Serialize};

/// Delivery state of a single customer node.
///
/// Every customer starts `Pending`. The only transitions are
/// `Pending → Delivered` (a vehicle committed to the stop) and
/// `Pending → Errored` (found unreachable); both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Not yet assigned to any trip.
    Pending,
    /// Committed to a vehicle's trip.
    Delivered,
    /// Permanently excluded — failed the first-leg reachability test.
    Errored,
}

/// Tracks one [`DeliveryStatus`] per customer node.
///
/// The warehouse (node 0) is never tracked; a board for a problem with N
/// nodes holds N-1 statuses for ids `1..N-1`.
///
/// # Examples
///
/// ```
/// use ev_routing::models::{DeliveryStatus, StatusBoard};
///
/// let mut board = StatusBoard::new(3);
/// assert_eq!(board.pending_count(), 2);
///
/// board.mark_delivered(1);
/// board.mark_errored(2);
/// assert_eq!(board.get(1), DeliveryStatus::Delivered);
/// assert_eq!(board.pending_count(), 0);
/// assert_eq!(board.errored_ids(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct StatusBoard {
    statuses: Vec<DeliveryStatus>,
}

impl StatusBoard {
    /// Creates a board for a problem with `node_count` nodes (warehouse
    /// included); all customers start `Pending`.
    pub fn new(node_count: usize) -> Self {
        Self {
            statuses: vec![DeliveryStatus::Pending; node_count.saturating_sub(1)],
        }
    }

    /// Status of the given customer node.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` is 0 (the warehouse is not tracked) or out of range.
    pub fn get(&self, node_id: usize) -> DeliveryStatus {
        assert!(node_id > 0, "warehouse has no delivery status");
        self.statuses[node_id - 1]
    }

    /// Returns `true` if the customer is still `Pending`.
    pub fn is_pending(&self, node_id: usize) -> bool {
        self.get(node_id) == DeliveryStatus::Pending
    }

    /// Marks a pending customer as delivered.
    pub fn mark_delivered(&mut self, node_id: usize) {
        debug_assert!(self.is_pending(node_id), "delivery states are terminal");
        self.statuses[node_id - 1] = DeliveryStatus::Delivered;
    }

    /// Marks a pending customer as unreachable.
    pub fn mark_errored(&mut self, node_id: usize) {
        debug_assert!(self.is_pending(node_id), "delivery states are terminal");
        self.statuses[node_id - 1] = DeliveryStatus::Errored;
    }

    /// Number of customers still `Pending`.
    pub fn pending_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&s| s == DeliveryStatus::Pending)
            .count()
    }

    /// Ids of customers still `Pending`, ascending.
    pub fn pending_ids(&self) -> Vec<usize> {
        self.ids_with(DeliveryStatus::Pending)
    }

    /// Ids of customers marked `Errored`, ascending.
    pub fn errored_ids(&self) -> Vec<usize> {
        self.ids_with(DeliveryStatus::Errored)
    }

    fn ids_with(&self, wanted: DeliveryStatus) -> Vec<usize> {
        self.statuses
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == wanted)
            .map(|(slot, _)| slot + 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_starts_pending() {
        let board = StatusBoard::new(4);
        assert_eq!(board.pending_count(), 3);
        assert_eq!(board.pending_ids(), vec![1, 2, 3]);
        assert!(board.errored_ids().is_empty());
        for id in 1..4 {
            assert!(board.is_pending(id));
        }
    }

    #[test]
    fn test_board_transitions() {
        let mut board = StatusBoard::new(4);
        board.mark_delivered(2);
        board.mark_errored(3);
        assert_eq!(board.get(1), DeliveryStatus::Pending);
        assert_eq!(board.get(2), DeliveryStatus::Delivered);
        assert_eq!(board.get(3), DeliveryStatus::Errored);
        assert_eq!(board.pending_count(), 1);
        assert_eq!(board.pending_ids(), vec![1]);
        assert_eq!(board.errored_ids(), vec![3]);
    }

    #[test]
    fn test_board_warehouse_only() {
        let board = StatusBoard::new(1);
        assert_eq!(board.pending_count(), 0);
        assert!(board.pending_ids().is_empty());
    }
}
