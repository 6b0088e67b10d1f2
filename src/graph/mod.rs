mod cover;
mod edge;
mod forest;
mod node;
mod state;
mod tanks;

pub use cover::{
    Verdict, classify, covered_without, is_edge_covered, is_fully_covered, is_minimal_cover,
    minimum_cover_size, redundant_tanks, uncovered_roads,
};
pub use edge::Edge;
pub use forest::{EDGE_COUNT, ForestMap, NODE_COUNT};
pub use node::NodeId;
pub use state::{ActionError, GameState, Phase};
pub use tanks::TankLayout;
