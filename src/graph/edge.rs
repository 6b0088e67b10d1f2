use super::node::NodeId;

/// A road between two mountains
/// Invariant: always stored in canonical form with a <= b
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Create a new edge, automatically ordering the endpoints
    pub fn new(x: NodeId, y: NodeId) -> Self {
        if x <= y { Edge { a: x, b: y } } else { Edge { a: y, b: x } }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Check if this edge touches a given mountain
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Get the endpoint opposite `node`, if `node` is an endpoint
    pub fn other_node(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_form() {
        let e1 = Edge::new(NodeId(1), NodeId(3));
        let e2 = Edge::new(NodeId(3), NodeId(1));

        assert_eq!(e1, e2, "Edges should be equal regardless of order");
        assert_eq!(e1.a, NodeId(1));
        assert_eq!(e1.b, NodeId(3));
    }

    #[test]
    fn test_edge_contains_node() {
        let edge = Edge::new(NodeId(1), NodeId(3));

        assert!(edge.contains_node(NodeId(1)));
        assert!(edge.contains_node(NodeId(3)));
        assert!(!edge.contains_node(NodeId(2)));
    }

    #[test]
    fn test_other_node() {
        let edge = Edge::new(NodeId(7), NodeId(0));

        assert_eq!(edge.other_node(NodeId(0)), Some(NodeId(7)));
        assert_eq!(edge.other_node(NodeId(7)), Some(NodeId(0)));
        assert_eq!(edge.other_node(NodeId(4)), None);
    }
}
