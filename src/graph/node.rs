use std::fmt;

use super::forest::NODE_COUNT;

/// Identifier for a mountain (0-8 on the fixed map)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn index(&self) -> usize {
        self.0
    }

    /// Check if this id names a mountain on the fixed map
    pub const fn is_valid(&self) -> bool {
        self.0 < NODE_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_range() {
        assert!(NodeId(0).is_valid());
        assert!(NodeId(8).is_valid());
        assert!(!NodeId(9).is_valid());
        assert!(!NodeId(100).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeId(4).to_string(), "4");
    }
}
