//! Minimax search with alpha-beta pruning

use crate::agents::Agent;
use crate::game::Game;
use crate::state::{GameState, Player};

// Sentinel bound outside any reachable score. Kept at i32::MAX so its
// negation is still a valid i32.
const UNBOUNDED: i32 = i32::MAX;

/// A perfect-play opponent driven by depth-first negamax search.
///
/// The search explores the full game tree from the current state (bounded
/// by `max_depth` when configured), valuing positions through
/// [`GameState::utility`]. Each recursive level evaluates from the
/// perspective of the side to move and negates child scores, so a single
/// maximizing loop covers both players. A branch is abandoned as soon as
/// its score proves better than the bound the parent can still tolerate.
///
/// The agent is stateless between calls: no transposition table, no
/// memory of earlier games.
///
/// # Examples
///
/// ```
/// use oxo::{Game, MinimaxAgent, Player};
/// use oxo::tictactoe::TicTacToeState;
///
/// let mut game = Game::new(TicTacToeState::new());
/// game.apply_move(4).unwrap(); // X takes the center
///
/// let agent = MinimaxAgent::new(Player::O);
/// let reply = agent.decide(&game).unwrap();
/// assert!([0, 2, 6, 8].contains(&reply)); // only corners avoid a forced loss
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MinimaxAgent {
    player: Player,
    max_depth: Option<u32>,
}

impl MinimaxAgent {
    /// Full-depth search for `player`. The 3x3 tree is small enough that
    /// unlimited depth is the default.
    pub fn new(player: Player) -> Self {
        MinimaxAgent {
            player,
            max_depth: None,
        }
    }

    /// Cut the search off at `max_depth` plies and score the frontier with
    /// the heuristic utility. Only useful for larger-board variants; a
    /// depth of 0 degenerates to ranking the immediate successors.
    pub fn with_max_depth(player: Player, max_depth: u32) -> Self {
        MinimaxAgent {
            player,
            max_depth: Some(max_depth),
        }
    }

    /// The side this agent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Choose the action maximizing the side to move's utility.
    ///
    /// Actions are examined in increasing index order and only a strictly
    /// better score displaces the incumbent, so ties resolve to the lowest
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] when the current state
    /// has no legal actions (the game is already over).
    pub fn decide<S: GameState>(&self, game: &Game<S>) -> crate::Result<S::Action> {
        let state = game.state();
        let actions = state.actions();

        let mut best_action = None;
        let mut best_score = -UNBOUNDED;

        for action in actions {
            let score = -self.search(&state.result(action)?, 1, -best_score)?;
            if score > best_score {
                best_score = score;
                best_action = Some(action);
            }
        }

        best_action.ok_or(crate::Error::NoAvailableActions)
    }

    // Fail-soft negamax. `bound` is the negation of the parent's best
    // score so far: once this node proves a score above it, the parent
    // will never pick this branch and the loop stops early.
    fn search<S: GameState>(&self, state: &S, depth: u32, bound: i32) -> crate::Result<i32> {
        let mover = state.to_move();

        if let Some(limit) = self.max_depth {
            if depth >= limit {
                return Ok(state.utility(mover));
            }
        }
        if state.is_terminal() {
            return Ok(state.utility(mover));
        }

        let actions = state.actions();
        if actions.is_empty() {
            // Unreachable with correct terminal detection
            return Ok(state.utility(mover));
        }

        let mut best = -UNBOUNDED;
        for action in actions {
            let score = -self.search(&state.result(action)?, depth + 1, -best)?;
            if score > bound {
                return Ok(score);
            }
            if score > best {
                best = score;
            }
        }

        Ok(best)
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    fn player(&self) -> Player {
        MinimaxAgent::player(self)
    }

    fn decide(&mut self, game: &Game<S>) -> crate::Result<S::Action> {
        MinimaxAgent::decide(self, game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::TicTacToeState;

    fn game_from(s: &str) -> Game<TicTacToeState> {
        Game::new(TicTacToeState::from_string(s).unwrap())
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // . O .
        // . . O   X to move wins at 2
        let game = Game::new(
            TicTacToeState::from_string_with_player("110020002", Player::X).unwrap(),
        );
        let agent = MinimaxAgent::new(Player::X);
        assert_eq!(agent.decide(&game).unwrap(), 2);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X .
        // . O .
        // . . .   O to move must block at 2
        let game = game_from("110020000");
        assert_eq!(game.state().to_move(), Player::O);

        let agent = MinimaxAgent::new(Player::O);
        assert_eq!(agent.decide(&game).unwrap(), 2);
    }

    #[test]
    fn test_prefers_lowest_index_on_ties() {
        // X X .
        // X O .
        // . O O   X to move wins at both 2 (top row) and 6 (left column);
        // the tie must resolve to the lower index.
        let game = game_from("110120022");
        assert_eq!(game.state().to_move(), Player::X);

        let agent = MinimaxAgent::new(Player::X);
        assert_eq!(agent.decide(&game).unwrap(), 2);
    }

    #[test]
    fn test_decide_errors_when_over() {
        let game = game_from("111220000");
        let agent = MinimaxAgent::new(Player::O);
        assert!(matches!(
            agent.decide(&game),
            Err(crate::Error::NoAvailableActions)
        ));
    }

    #[test]
    fn test_depth_limited_still_finds_immediate_win() {
        let game = Game::new(
            TicTacToeState::from_string_with_player("110020002", Player::X).unwrap(),
        );
        let agent = MinimaxAgent::with_max_depth(Player::X, 1);
        assert_eq!(agent.decide(&game).unwrap(), 2);
    }
}
