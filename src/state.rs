//! Game-state contract shared by adversarial board games
//!
//! The engine core is polymorphic over concrete games: anything that can
//! report whose turn it is, enumerate legal actions, produce successor
//! states, and value a position can be driven by the [`Game`](crate::Game)
//! wrapper and the agents in [`agents`](crate::agents). Only Tic-Tac-Toe is
//! implemented today; a new game adds an implementation, not a subclass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player in a two-player game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A snapshot of a game position.
///
/// Implementations are immutable values: [`result`](GameState::result)
/// returns a new state and never mutates the receiver. Repeated queries on
/// the same state must return the same answers.
pub trait GameState: Clone {
    /// A legal action in this game (a cell index for Tic-Tac-Toe).
    type Action: Copy + Eq + fmt::Debug;

    /// Whose turn it is in this state.
    fn to_move(&self) -> Player;

    /// All legal actions in this state, in increasing index order.
    ///
    /// Terminal states have no legal actions.
    fn actions(&self) -> Vec<Self::Action>;

    /// The successor state after `to_move()` plays `action`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if `action` is not one of
    /// [`actions`](GameState::actions): an occupied cell, an out-of-range
    /// index, or any action in a terminal state.
    fn result(&self, action: Self::Action) -> crate::Result<Self>;

    /// True if the game has ended in this state (win or draw).
    fn is_terminal(&self) -> bool;

    /// The winning player, or `None` for draws and unfinished games.
    fn winner(&self) -> Option<Player>;

    /// Value of this state from `player`'s perspective.
    ///
    /// Zero-sum: `utility(p) == -utility(p.opponent())` in every state,
    /// including non-terminal heuristic evaluations.
    fn utility(&self, player: Player) -> i32;
}
