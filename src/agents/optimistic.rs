//! Best-case search that ignores opponent resistance

use crate::agents::Agent;
use crate::game::Game;
use crate::state::{GameState, Player};

// Each ply toward a win costs a little, so nearer wins score higher.
const PLY_PENALTY: f64 = 0.1;

/// An agent that chases the fastest win it can see, assuming every
/// intermediate move (its own and the opponent's alike) cooperates.
///
/// Terminal states won by this agent's player are worth 1.0, everything
/// else 0.0, and every ply subtracts a small penalty, so the agent heads
/// for the closest winnable leaf. It never anticipates being blocked,
/// which makes it a deliberately beatable baseline opponent.
#[derive(Debug, Clone, Copy)]
pub struct OptimisticAgent {
    player: Player,
}

impl OptimisticAgent {
    pub fn new(player: Player) -> Self {
        OptimisticAgent { player }
    }

    /// The side this agent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Choose the action leading toward the quickest win, ties toward the
    /// lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] when the current state
    /// has no legal actions.
    pub fn decide<S: GameState>(&self, game: &Game<S>) -> crate::Result<S::Action> {
        let state = game.state();

        let mut best_action = None;
        let mut best_score = f64::NEG_INFINITY;

        for action in state.actions() {
            let score = self.score(&state.result(action)?)? - PLY_PENALTY;
            if score > best_score {
                best_score = score;
                best_action = Some(action);
            }
        }

        best_action.ok_or(crate::Error::NoAvailableActions)
    }

    fn score<S: GameState>(&self, state: &S) -> crate::Result<f64> {
        if state.is_terminal() {
            return Ok(if state.winner() == Some(self.player) {
                1.0
            } else {
                0.0
            });
        }

        let actions = state.actions();
        if actions.is_empty() {
            return Ok(0.0);
        }

        let mut best = f64::NEG_INFINITY;
        for action in actions {
            let score = self.score(&state.result(action)?)? - PLY_PENALTY;
            if score > best {
                best = score;
            }
        }
        Ok(best)
    }
}

impl<S: GameState> Agent<S> for OptimisticAgent {
    fn player(&self) -> Player {
        OptimisticAgent::player(self)
    }

    fn decide(&mut self, game: &Game<S>) -> crate::Result<S::Action> {
        OptimisticAgent::decide(self, game)
    }
}
