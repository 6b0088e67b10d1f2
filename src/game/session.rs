// game/session.rs

use crate::graph::*;
use bevy::prelude::Resource;

/// A game session - owns the round state and keeps score across rounds.
/// This is the single write path the Bevy systems go through.
#[derive(Debug, Clone, Resource)]
pub struct FireSession {
    /// The core round state
    state: GameState,
    /// Number of checks the player has run
    attempts: usize,
    /// Smallest successful cover seen so far
    best_tank_count: Option<usize>,
    /// True minimum for this map, computed once for progress text
    minimum_tank_count: usize,
}

impl FireSession {
    pub fn new() -> Self {
        let state = GameState::new();
        let minimum_tank_count = minimum_cover_size(state.map());

        FireSession {
            state,
            attempts: 0,
            best_tank_count: None,
            minimum_tank_count,
        }
    }

    // === Query methods (for Bevy systems to read state) ===

    pub fn map(&self) -> &ForestMap {
        self.state.map()
    }

    /// Does this mountain carry a tank?
    pub fn has_tank(&self, node: NodeId) -> bool {
        self.state.tanks().is_placed(node)
    }

    pub fn tank_count(&self) -> usize {
        self.state.tanks().count()
    }

    /// Is a covered/burning flag for a specific road
    pub fn is_road_covered(&self, edge: Edge) -> bool {
        self.state.is_road_covered(edge)
    }

    /// Roads still burning under the current layout
    pub fn burning_roads(&self) -> Vec<Edge> {
        self.state.uncovered_roads()
    }

    /// Is a verdict currently on display?
    pub fn is_evaluating(&self) -> bool {
        self.state.is_evaluating()
    }

    /// Get progress info for the HUD
    pub fn progress(&self) -> ProgressInfo {
        ProgressInfo {
            attempts: self.attempts,
            best_tank_count: self.best_tank_count,
            minimum_tank_count: self.minimum_tank_count,
        }
    }

    // === Mutation methods (for handling user input) ===

    /// Toggle the tank on a mountain
    pub fn toggle_tank(&mut self, node: NodeId) -> SessionResult {
        match self.state.toggle_tank(node) {
            Ok(true) => SessionResult::TankPlaced(node),
            Ok(false) => SessionResult::TankRemoved(node),
            Err(err) => SessionResult::Rejected(err),
        }
    }

    /// Run the cover check; the verdict stays pending until
    /// `finish_verdict` is called
    pub fn check(&mut self) -> SessionResult {
        match self.state.check() {
            Ok(verdict) => {
                self.attempts += 1;
                if verdict == Verdict::Success {
                    let count = self.tank_count();
                    self.best_tank_count = Some(
                        self.best_tank_count
                            .map_or(count, |best| best.min(count)),
                    );
                }
                SessionResult::VerdictPending(verdict)
            }
            Err(err) => SessionResult::Rejected(err),
        }
    }

    /// End the verdict display and return to idle
    pub fn finish_verdict(&mut self) -> Option<Verdict> {
        self.state.finish_evaluation()
    }

    /// Clear all tanks (keeps the attempt/best counters)
    pub fn reset(&mut self) -> SessionResult {
        match self.state.reset() {
            Ok(()) => SessionResult::Cleared,
            Err(err) => SessionResult::Rejected(err),
        }
    }
}

impl Default for FireSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a session action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    /// A tank was placed on a mountain
    TankPlaced(NodeId),
    /// A tank was removed from a mountain
    TankRemoved(NodeId),
    /// A check ran; the verdict is pending display
    VerdictPending(Verdict),
    /// The board was reset
    Cleared,
    /// The action was ignored
    Rejected(ActionError),
}

/// Progress information for UI display
#[derive(Debug, Clone, Copy)]
pub struct ProgressInfo {
    pub attempts: usize,
    pub best_tank_count: Option<usize>,
    pub minimum_tank_count: usize,
}

impl ProgressInfo {
    /// Format as a string like "checks: 3 | best: 5 (minimum 5)"
    pub fn display_string(&self) -> String {
        match self.best_tank_count {
            Some(best) => format!(
                "checks: {} | best: {} (minimum {})",
                self.attempts, best, self.minimum_tank_count
            ),
            None => format!("checks: {}", self.attempts),
        }
    }

    /// Has the player matched the true minimum?
    pub fn found_minimum(&self) -> bool {
        self.best_tank_count == Some(self.minimum_tank_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(session: &mut FireSession, ids: &[usize]) {
        for &id in ids {
            session.toggle_tank(NodeId(id));
        }
    }

    #[test]
    fn test_session_counts_attempts_and_best() {
        let mut session = FireSession::new();
        place(&mut session, &[0, 2, 4, 6, 8]);

        assert_eq!(
            session.check(),
            SessionResult::VerdictPending(Verdict::Success)
        );
        session.finish_verdict();

        let progress = session.progress();
        assert_eq!(progress.attempts, 1);
        assert_eq!(progress.best_tank_count, Some(5));
        assert!(progress.found_minimum());
        assert_eq!(progress.display_string(), "checks: 1 | best: 5 (minimum 5)");
    }

    #[test]
    fn test_failed_check_does_not_update_best() {
        let mut session = FireSession::new();
        place(&mut session, &[0]);

        assert_eq!(
            session.check(),
            SessionResult::VerdictPending(Verdict::NotCovered)
        );
        session.finish_verdict();

        let progress = session.progress();
        assert_eq!(progress.attempts, 1);
        assert_eq!(progress.best_tank_count, None);
        assert_eq!(progress.display_string(), "checks: 1");
    }

    #[test]
    fn test_toggle_results() {
        let mut session = FireSession::new();

        assert_eq!(
            session.toggle_tank(NodeId(3)),
            SessionResult::TankPlaced(NodeId(3))
        );
        assert_eq!(
            session.toggle_tank(NodeId(3)),
            SessionResult::TankRemoved(NodeId(3))
        );
        assert_eq!(
            session.toggle_tank(NodeId(42)),
            SessionResult::Rejected(ActionError::UnknownNode(NodeId(42)))
        );
    }

    #[test]
    fn test_rejections_while_verdict_pending() {
        let mut session = FireSession::new();
        session.check();

        assert_eq!(
            session.toggle_tank(NodeId(0)),
            SessionResult::Rejected(ActionError::EvaluationInFlight)
        );
        assert_eq!(
            session.check(),
            SessionResult::Rejected(ActionError::EvaluationInFlight)
        );
        assert_eq!(
            session.reset(),
            SessionResult::Rejected(ActionError::EvaluationInFlight)
        );

        assert_eq!(session.finish_verdict(), Some(Verdict::NotCovered));
        assert_eq!(session.reset(), SessionResult::Cleared);
    }

    #[test]
    fn test_reset_keeps_counters() {
        let mut session = FireSession::new();
        place(&mut session, &[0, 2, 4, 6, 8]);
        session.check();
        session.finish_verdict();

        session.reset();
        assert_eq!(session.tank_count(), 0);
        assert_eq!(session.progress().attempts, 1);
        assert_eq!(session.progress().best_tank_count, Some(5));
    }
}
