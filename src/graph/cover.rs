//! Cover evaluation: pure functions over the tank layout and the fixed road
//! list. Nothing in here mutates anything — minimality is decided with a
//! read-only "coverage ignoring this mountain" scan instead of the usual
//! flip-check-restore dance, so an evaluation can never expose a transient
//! layout to a concurrent reader.

use std::fmt;

use super::edge::Edge;
use super::forest::{ForestMap, NODE_COUNT};
use super::node::NodeId;
use super::tanks::TankLayout;

/// Classification of the current tank layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every road is covered and no tank is redundant
    Success,
    /// Every road is covered but at least one tank could be removed
    NotMinimal,
    /// At least one road has no tank on either end
    NotCovered,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "minimal cover"),
            Verdict::NotMinimal => write!(f, "coverage non-minimal"),
            Verdict::NotCovered => write!(f, "not fully covered"),
        }
    }
}

/// A road is covered iff at least one endpoint carries a tank
pub fn is_edge_covered(layout: &TankLayout, edge: Edge) -> bool {
    layout.is_placed(edge.a) || layout.is_placed(edge.b)
}

/// Roads with no tank on either end, in authored order
pub fn uncovered_roads(layout: &TankLayout, map: &ForestMap) -> Vec<Edge> {
    map.edges()
        .iter()
        .copied()
        .filter(|&edge| !is_edge_covered(layout, edge))
        .collect()
}

/// True iff every road on the map is covered
pub fn is_fully_covered(layout: &TankLayout, map: &ForestMap) -> bool {
    map.edges().iter().all(|&edge| is_edge_covered(layout, edge))
}

/// Full coverage if `excluded`'s tank contribution is ignored.
/// Read-only: the layout itself is never touched.
pub fn covered_without(layout: &TankLayout, map: &ForestMap, excluded: NodeId) -> bool {
    map.edges().iter().all(|edge| {
        (edge.a != excluded && layout.is_placed(edge.a))
            || (edge.b != excluded && layout.is_placed(edge.b))
    })
}

/// Placed tanks whose removal would leave every road still covered
pub fn redundant_tanks(layout: &TankLayout, map: &ForestMap) -> Vec<NodeId> {
    layout
        .placed_nodes()
        .into_iter()
        .filter(|&node| covered_without(layout, map, node))
        .collect()
}

/// A cover is (locally) minimal when it is complete and no single tank is
/// redundant. This deliberately does not test global optimality: a layout can
/// pass here while a smaller cover exists elsewhere on the map.
pub fn is_minimal_cover(layout: &TankLayout, map: &ForestMap) -> bool {
    is_fully_covered(layout, map)
        && layout
            .placed_nodes()
            .iter()
            .all(|&node| !covered_without(layout, map, node))
}

/// Classify the layout. Coverage is checked first, so an incomplete layout is
/// always reported as `NotCovered` regardless of redundancy.
pub fn classify(layout: &TankLayout, map: &ForestMap) -> Verdict {
    if !is_fully_covered(layout, map) {
        Verdict::NotCovered
    } else if is_minimal_cover(layout, map) {
        Verdict::Success
    } else {
        Verdict::NotMinimal
    }
}

/// Size of a true minimum vertex cover, by exhaustive search over all 2^9
/// layouts. Informational only (progress text, tests); the game verdict is
/// local minimality, not this.
pub fn minimum_cover_size(map: &ForestMap) -> usize {
    (0u16..1 << NODE_COUNT)
        .filter(|&mask| is_fully_covered(&layout_from_mask(mask), map))
        .map(|mask| mask.count_ones() as usize)
        .min()
        .expect("the full layout always covers every road")
}

fn layout_from_mask(mask: u16) -> TankLayout {
    let nodes: Vec<NodeId> = (0..NODE_COUNT)
        .filter(|i| mask & (1 << i) != 0)
        .map(NodeId)
        .collect();
    TankLayout::with_tanks(&nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_nine() -> TankLayout {
        layout_from_mask(0x1FF)
    }

    /// A true minimum cover of this map: the four alternating ring mountains
    /// plus the centre.
    fn known_minimum() -> TankLayout {
        TankLayout::with_tanks(&[NodeId(0), NodeId(2), NodeId(4), NodeId(6), NodeId(8)])
    }

    #[test]
    fn test_edge_coverage() {
        let map = ForestMap::new();
        let layout = TankLayout::with_tanks(&[NodeId(0)]);

        let ring_road = Edge::new(NodeId(0), NodeId(1));
        let far_road = Edge::new(NodeId(3), NodeId(4));

        assert!(is_edge_covered(&layout, ring_road));
        assert!(!is_edge_covered(&layout, far_road));
        assert_eq!(uncovered_roads(&layout, &map).len(), 13);
    }

    #[test]
    fn test_empty_layout_is_not_covered() {
        let map = ForestMap::new();
        let layout = TankLayout::empty();

        assert!(!is_fully_covered(&layout, &map));
        assert_eq!(uncovered_roads(&layout, &map).len(), map.edges().len());
        assert_eq!(classify(&layout, &map), Verdict::NotCovered);
    }

    #[test]
    fn test_all_nine_covers_but_is_not_minimal() {
        let map = ForestMap::new();
        let layout = all_nine();

        assert!(is_fully_covered(&layout, &map));
        // Every mountain has degree >= 2, so with everything placed any
        // single tank is redundant.
        assert_eq!(redundant_tanks(&layout, &map).len(), 9);
        assert!(!is_minimal_cover(&layout, &map));
        assert_eq!(classify(&layout, &map), Verdict::NotMinimal);
    }

    #[test]
    fn test_known_minimum_cover_succeeds() {
        let map = ForestMap::new();
        let layout = known_minimum();

        assert!(is_fully_covered(&layout, &map));
        assert!(redundant_tanks(&layout, &map).is_empty());
        assert!(is_minimal_cover(&layout, &map));
        assert_eq!(classify(&layout, &map), Verdict::Success);
    }

    #[test]
    fn test_minimum_cover_size_is_five() {
        let map = ForestMap::new();
        assert_eq!(minimum_cover_size(&map), 5);
        assert_eq!(known_minimum().count(), 5);
    }

    #[test]
    fn test_covered_without_is_read_only() {
        let map = ForestMap::new();
        let layout = known_minimum();
        let before = layout;

        for node in map.node_ids() {
            let _ = covered_without(&layout, &map, node);
        }
        assert_eq!(layout, before);
    }

    #[test]
    fn test_redundancy_detection() {
        let map = ForestMap::new();
        // Minimum cover plus one extra tank on mountain 1
        let layout = TankLayout::with_tanks(&[
            NodeId(0),
            NodeId(1),
            NodeId(2),
            NodeId(4),
            NodeId(6),
            NodeId(8),
        ]);

        assert!(is_fully_covered(&layout, &map));
        let redundant = redundant_tanks(&layout, &map);
        assert!(redundant.contains(&NodeId(1)), "the extra tank is removable");
        assert_eq!(classify(&layout, &map), Verdict::NotMinimal);
    }

    /// Exhaustive: for all 512 layouts, `is_fully_covered` agrees with the
    /// definition "every road has an endpoint in the layout".
    #[test]
    fn test_coverage_matches_definition_for_all_layouts() {
        let map = ForestMap::new();

        for mask in 0u16..1 << NODE_COUNT {
            let layout = layout_from_mask(mask);
            let by_definition = map.edges().iter().all(|edge| {
                layout.placed_nodes().contains(&edge.a)
                    || layout.placed_nodes().contains(&edge.b)
            });
            assert_eq!(
                is_fully_covered(&layout, &map),
                by_definition,
                "disagreement for layout {layout}"
            );
        }
    }

    /// Exhaustive: classify() never reports redundancy for incomplete covers,
    /// and Success layouts have no removable tank.
    #[test]
    fn test_classification_consistency_for_all_layouts() {
        let map = ForestMap::new();

        for mask in 0u16..1 << NODE_COUNT {
            let layout = layout_from_mask(mask);
            match classify(&layout, &map) {
                Verdict::NotCovered => assert!(!is_fully_covered(&layout, &map)),
                Verdict::NotMinimal => {
                    assert!(is_fully_covered(&layout, &map));
                    assert!(!redundant_tanks(&layout, &map).is_empty());
                }
                Verdict::Success => {
                    assert!(is_minimal_cover(&layout, &map));
                }
            }
        }
    }
}
