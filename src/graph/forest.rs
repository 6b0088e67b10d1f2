use super::edge::Edge;
use super::node::NodeId;

/// Number of mountains on the fixed map
pub const NODE_COUNT: usize = 9;

/// Number of road entries as authored (see note on `ROADS`)
pub const EDGE_COUNT: usize = 16;

/// Layout positions in the original 900x500 design space.
/// Presentation-only: nothing in the cover logic reads these.
const NODE_POSITIONS: [(f32, f32); NODE_COUNT] = [
    (150.0, 270.0),
    (290.0, 150.0),
    (450.0, 130.0),
    (610.0, 150.0),
    (750.0, 270.0),
    (610.0, 390.0),
    (450.0, 410.0),
    (290.0, 390.0),
    (450.0, 250.0),
];

/// Roads as authored: the outer ring (0..7), six spokes into the centre
/// mountain (8), and two ring entries that repeat (7,6) and (6,5).
/// The repeats are kept verbatim from the source layout; as unordered pairs
/// there are 14 distinct roads, and coverage is a per-entry check so the
/// duplicates change nothing.
const ROADS: [(usize, usize); EDGE_COUNT] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 0),
    (1, 8),
    (2, 8),
    (3, 8),
    (7, 8),
    (6, 8),
    (5, 8),
    (7, 6),
    (6, 5),
];

/// The fixed forest topology: mountains, their layout positions, and roads.
/// Immutable after construction; marker state lives elsewhere.
#[derive(Debug, Clone)]
pub struct ForestMap {
    edges: [Edge; EDGE_COUNT],
}

impl ForestMap {
    pub fn new() -> Self {
        let edges = ROADS.map(|(a, b)| {
            let edge = Edge::new(NodeId(a), NodeId(b));
            debug_assert!(edge.a != edge.b, "roads must not be self-loops");
            edge
        });
        ForestMap { edges }
    }

    /// All road entries, in authored order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate over all mountain ids
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..NODE_COUNT).map(NodeId)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.is_valid()
    }

    /// Layout position of a mountain in the 900x500 design space
    pub fn position(&self, node: NodeId) -> (f32, f32) {
        NODE_POSITIONS[node.index()]
    }

    /// Roads touching a given mountain
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .copied()
            .filter(move |edge| edge.contains_node(node))
    }

    /// Number of road entries touching a mountain (counts repeats)
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident_edges(node).count()
    }

    /// Number of distinct roads, ignoring the repeated entries
    pub fn distinct_road_count(&self) -> usize {
        let mut seen: Vec<Edge> = Vec::with_capacity(EDGE_COUNT);
        for &edge in &self.edges {
            if !seen.contains(&edge) {
                seen.push(edge);
            }
        }
        seen.len()
    }
}

impl Default for ForestMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_dimensions() {
        let map = ForestMap::new();

        assert_eq!(map.node_ids().count(), 9);
        assert_eq!(map.edges().len(), 16);
        assert_eq!(map.distinct_road_count(), 14);
    }

    #[test]
    fn test_edges_reference_valid_nodes() {
        let map = ForestMap::new();

        for edge in map.edges() {
            assert!(map.contains(edge.a));
            assert!(map.contains(edge.b));
            assert_ne!(edge.a, edge.b, "no self-loops");
        }
    }

    #[test]
    fn test_every_mountain_has_degree_at_least_two() {
        let map = ForestMap::new();

        for node in map.node_ids() {
            assert!(
                map.degree(node) >= 2,
                "mountain {} has degree {}",
                node,
                map.degree(node)
            );
        }
    }

    #[test]
    fn test_centre_mountain_spokes() {
        let map = ForestMap::new();
        let centre = NodeId(8);

        let spokes: Vec<_> = map
            .incident_edges(centre)
            .filter_map(|e| e.other_node(centre))
            .collect();

        // Spokes run to every ring mountain except 0 and 4
        for id in [1, 2, 3, 5, 6, 7] {
            assert!(spokes.contains(&NodeId(id)));
        }
        assert!(!spokes.contains(&NodeId(0)));
        assert!(!spokes.contains(&NodeId(4)));
    }

    #[test]
    fn test_positions_fit_layout_space() {
        let map = ForestMap::new();

        for node in map.node_ids() {
            let (x, y) = map.position(node);
            assert!((0.0..=900.0).contains(&x));
            assert!((0.0..=500.0).contains(&y));
        }
    }
}
