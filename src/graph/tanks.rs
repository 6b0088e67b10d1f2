use std::fmt;

use super::forest::NODE_COUNT;
use super::node::NodeId;

/// Which mountains currently carry a water tank.
/// Always exactly one flag per mountain, indexed by NodeId.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankLayout([bool; NODE_COUNT]);

impl TankLayout {
    /// No tanks placed (the state every round starts in)
    pub const fn empty() -> Self {
        TankLayout([false; NODE_COUNT])
    }

    /// Build a layout with tanks on the given mountains
    pub fn with_tanks(nodes: &[NodeId]) -> Self {
        let mut layout = Self::empty();
        for &node in nodes {
            layout.0[node.index()] = true;
        }
        layout
    }

    pub fn is_placed(&self, node: NodeId) -> bool {
        self.0[node.index()]
    }

    /// Flip the tank flag for a mountain; returns the new flag
    pub fn toggle(&mut self, node: NodeId) -> bool {
        self.0[node.index()] = !self.0[node.index()];
        self.0[node.index()]
    }

    /// Remove all tanks; topology is untouched (it lives in ForestMap)
    pub fn clear(&mut self) {
        self.0 = [false; NODE_COUNT];
    }

    /// Number of tanks currently placed
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&placed| placed).count()
    }

    /// Mountains currently carrying a tank, in id order
    pub fn placed_nodes(&self) -> Vec<NodeId> {
        (0..NODE_COUNT)
            .map(NodeId)
            .filter(|&node| self.is_placed(node))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for TankLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for TankLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, node) in self.placed_nodes().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let layout = TankLayout::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.count(), 0);
        assert!(layout.placed_nodes().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut layout = TankLayout::empty();

        assert!(layout.toggle(NodeId(3)), "first toggle places a tank");
        assert!(layout.is_placed(NodeId(3)));

        assert!(!layout.toggle(NodeId(3)), "second toggle removes it");
        assert!(!layout.is_placed(NodeId(3)));
        assert_eq!(layout, TankLayout::empty());
    }

    #[test]
    fn test_with_tanks_and_count() {
        let layout = TankLayout::with_tanks(&[NodeId(0), NodeId(2), NodeId(8)]);

        assert_eq!(layout.count(), 3);
        assert_eq!(
            layout.placed_nodes(),
            vec![NodeId(0), NodeId(2), NodeId(8)]
        );
        assert!(!layout.is_placed(NodeId(1)));
    }

    #[test]
    fn test_clear() {
        let mut layout = TankLayout::with_tanks(&[NodeId(1), NodeId(5)]);
        layout.clear();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_display() {
        let layout = TankLayout::with_tanks(&[NodeId(4), NodeId(0)]);
        assert_eq!(layout.to_string(), "{0, 4}");
    }
}
