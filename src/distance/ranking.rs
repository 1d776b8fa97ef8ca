//! Neighbor ranking by ascending distance.

use crate::models::Node;

/// A node seen from some source node, with the separating distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Id of the remote node.
    pub node_id: usize,
    /// Distance from the source to the remote node, in km.
    pub distance_km: f64,
}

/// Ranks every node by ascending distance from the node with `source_id`.
///
/// The source itself is included at distance zero. Ties are broken by
/// ascending node id, so the ranking is deterministic for equal distances.
/// The result is a fresh snapshot on every call; the node set is not
/// mutated.
///
/// # Panics
///
/// Panics if `source_id` is out of bounds for the node set.
///
/// # Examples
///
/// ```
/// use ev_routing::distance::rank_by_distance;
/// use ev_routing::models::Node;
///
/// let nodes = vec![
///     Node::new(0, vec![0.0, 10.0, 15.0]),
///     Node::new(1, vec![10.0, 0.0, 5.0]),
///     Node::new(2, vec![15.0, 5.0, 0.0]),
/// ];
/// let ranking = rank_by_distance(&nodes, 0);
/// let ids: Vec<usize> = ranking.iter().map(|n| n.node_id).collect();
/// assert_eq!(ids, vec![0, 1, 2]);
/// assert_eq!(ranking[2].distance_km, 15.0);
/// ```
pub fn rank_by_distance(nodes: &[Node], source_id: usize) -> Vec<Neighbor> {
    let source = &nodes[source_id];
    let mut ranking: Vec<Neighbor> = nodes
        .iter()
        .map(|node| Neighbor {
            node_id: node.id(),
            distance_km: source.distance_to(node.id()),
        })
        .collect();
    ranking.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .expect("distance should not be NaN")
            .then(a.node_id.cmp(&b.node_id))
    });
    ranking
}
