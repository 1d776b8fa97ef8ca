//! Delivery node carrying its dense distance row.

use serde::{Deserialize, Serialize};

/// A location in the delivery network (warehouse or customer).
///
/// Node 0 is the warehouse; ids `1..N-1` are customers. Each node carries the
/// full distance row to every node in the problem, indexed by node id, so a
/// node set of size N forms a dense N×N matrix.
///
/// # Examples
///
/// ```
/// use ev_routing::models::Node;
///
/// let n = Node::new(1, vec![10.0, 0.0, 5.0]);
/// assert_eq!(n.id(), 1);
/// assert_eq!(n.distance_to(0), 10.0);
/// assert_eq!(n.distance_to(2), 5.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    distances: Vec<f64>,
}

impl Node {
    /// Creates a node with the given id and distance row (km, indexed by node id).
    pub fn new(id: usize, distances: Vec<f64>) -> Self {
        Self { id, distances }
    }

    /// Builds a full node set from planar coordinates, with Euclidean
    /// distances between every pair of points.
    ///
    /// The node at index 0 becomes the warehouse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ev_routing::models::Node;
    ///
    /// let nodes = Node::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
    /// assert_eq!(nodes.len(), 2);
    /// assert!((nodes[0].distance_to(1) - 5.0).abs() < 1e-10);
    /// assert!((nodes[1].distance_to(0) - 5.0).abs() < 1e-10);
    /// ```
    pub fn from_points(points: &[(f64, f64)]) -> Vec<Self> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| {
                let distances = points
                    .iter()
                    .map(|&(ox, oy)| {
                        let dx = x - ox;
                        let dy = y - oy;
                        (dx * dx + dy * dy).sqrt()
                    })
                    .collect();
                Self::new(id, distances)
            })
            .collect()
    }

    /// Node id (0 = warehouse).
    pub fn id(&self) -> usize {
        self.id
    }

    /// The full distance row, indexed by node id.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance in km from this node to the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `other_id` is outside the distance row.
    pub fn distance_to(&self, other_id: usize) -> f64 {
        self.distances[other_id]
    }
}
