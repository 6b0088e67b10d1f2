use std::fmt;

use super::cover::{self, Verdict};
use super::edge::Edge;
use super::forest::ForestMap;
use super::node::NodeId;
use super::tanks::TankLayout;

/// Why a player action was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// A verdict is being displayed; input is dropped until the round
    /// returns to idle
    EvaluationInFlight,
    /// The id does not name a mountain on the map
    UnknownNode(NodeId),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::EvaluationInFlight => {
                write!(f, "an evaluation is already in flight")
            }
            ActionError::UnknownNode(n) => write!(f, "no mountain with id {n}"),
        }
    }
}

/// Where the current round is.
/// `Idle -> Evaluating -> Idle`; `Evaluating` is entered only by an explicit
/// check and holds the verdict until the presentation layer finishes
/// displaying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Evaluating(Verdict),
}

/// One round of the game: the fixed map, the mutable tank layout, and the
/// round phase. All mutation goes through the methods here.
#[derive(Debug, Clone)]
pub struct GameState {
    map: ForestMap,
    tanks: TankLayout,
    phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            map: ForestMap::new(),
            tanks: TankLayout::empty(),
            phase: Phase::Idle,
        }
    }

    // === Queries ===

    pub fn map(&self) -> &ForestMap {
        &self.map
    }

    pub fn tanks(&self) -> &TankLayout {
        &self.tanks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_evaluating(&self) -> bool {
        matches!(self.phase, Phase::Evaluating(_))
    }

    pub fn is_road_covered(&self, edge: Edge) -> bool {
        cover::is_edge_covered(&self.tanks, edge)
    }

    pub fn uncovered_roads(&self) -> Vec<Edge> {
        cover::uncovered_roads(&self.tanks, &self.map)
    }

    // === Commands ===

    /// Flip the tank flag on a mountain; returns the new flag.
    /// Rejected (state untouched) while a verdict is in flight or for ids
    /// outside the map.
    pub fn toggle_tank(&mut self, node: NodeId) -> Result<bool, ActionError> {
        if self.is_evaluating() {
            return Err(ActionError::EvaluationInFlight);
        }
        if !self.map.contains(node) {
            return Err(ActionError::UnknownNode(node));
        }

        let placed = self.tanks.toggle(node);
        log::debug!("tank {} on mountain {node}, layout now {}",
            if placed { "placed" } else { "removed" },
            self.tanks
        );
        Ok(placed)
    }

    /// Classify the current layout and enter `Evaluating`.
    /// The layout itself is never modified — on a failing verdict the player
    /// keeps their tanks and can repair the layout.
    pub fn check(&mut self) -> Result<Verdict, ActionError> {
        if self.is_evaluating() {
            return Err(ActionError::EvaluationInFlight);
        }

        let verdict = cover::classify(&self.tanks, &self.map);
        if verdict == Verdict::NotMinimal {
            log::debug!(
                "redundant tanks: {:?}",
                cover::redundant_tanks(&self.tanks, &self.map)
            );
        }
        self.phase = Phase::Evaluating(verdict);
        log::debug!("checked layout {}: {verdict}", self.tanks);
        Ok(verdict)
    }

    /// Return to `Idle`, yielding the pending verdict. Called by the
    /// presentation layer once its timed verdict display has run out.
    pub fn finish_evaluation(&mut self) -> Option<Verdict> {
        match self.phase {
            Phase::Evaluating(verdict) => {
                self.phase = Phase::Idle;
                Some(verdict)
            }
            Phase::Idle => None,
        }
    }

    /// Remove every tank; the topology is untouched.
    /// Like toggling, rejected while a verdict is in flight.
    pub fn reset(&mut self) -> Result<(), ActionError> {
        if self.is_evaluating() {
            return Err(ActionError::EvaluationInFlight);
        }
        self.tanks.clear();
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_minimum(state: &mut GameState) {
        for id in [0, 2, 4, 6, 8] {
            state.toggle_tank(NodeId(id)).unwrap();
        }
    }

    #[test]
    fn test_empty_check_reports_uncovered() {
        let mut state = GameState::new();
        assert_eq!(state.check(), Ok(Verdict::NotCovered));
    }

    #[test]
    fn test_minimum_layout_reports_success() {
        let mut state = GameState::new();
        place_minimum(&mut state);
        assert_eq!(state.check(), Ok(Verdict::Success));
    }

    #[test]
    fn test_unknown_node_is_rejected_without_change() {
        let mut state = GameState::new();
        let before = *state.tanks();

        assert_eq!(
            state.toggle_tank(NodeId(9)),
            Err(ActionError::UnknownNode(NodeId(9)))
        );
        assert_eq!(*state.tanks(), before);
    }

    #[test]
    fn test_evaluating_blocks_toggle_check_and_reset() {
        let mut state = GameState::new();
        place_minimum(&mut state);

        state.check().unwrap();
        assert!(state.is_evaluating());

        let before = *state.tanks();
        assert_eq!(
            state.toggle_tank(NodeId(1)),
            Err(ActionError::EvaluationInFlight)
        );
        assert_eq!(state.check(), Err(ActionError::EvaluationInFlight));
        assert_eq!(state.reset(), Err(ActionError::EvaluationInFlight));
        assert_eq!(*state.tanks(), before, "rejected actions change nothing");
    }

    #[test]
    fn test_finish_evaluation_returns_to_idle() {
        let mut state = GameState::new();
        place_minimum(&mut state);

        let verdict = state.check().unwrap();
        assert_eq!(state.finish_evaluation(), Some(verdict));
        assert_eq!(state.phase(), Phase::Idle);

        // Nothing pending the second time
        assert_eq!(state.finish_evaluation(), None);
    }

    #[test]
    fn test_check_is_idempotent_across_idle_states() {
        let mut state = GameState::new();
        place_minimum(&mut state);
        state.toggle_tank(NodeId(1)).unwrap(); // redundant extra tank

        let first = state.check().unwrap();
        state.finish_evaluation();
        let second = state.check().unwrap();

        assert_eq!(first, second);
        assert_eq!(first, Verdict::NotMinimal);
    }

    #[test]
    fn test_failing_check_leaves_layout_untouched() {
        let mut state = GameState::new();
        state.toggle_tank(NodeId(0)).unwrap();
        let before = *state.tanks();

        assert_eq!(state.check(), Ok(Verdict::NotCovered));
        state.finish_evaluation();
        assert_eq!(*state.tanks(), before);
    }

    #[test]
    fn test_reset_clears_tanks_only() {
        let mut state = GameState::new();
        place_minimum(&mut state);

        state.reset().unwrap();
        assert!(state.tanks().is_empty());
        assert_eq!(state.map().edges().len(), 16);
    }
}
