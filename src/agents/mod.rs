//! Computer opponents
//!
//! Every agent answers the same question: given the game as it stands,
//! which action should its player take next. [`MinimaxAgent`] plays
//! perfectly via adversarial search; [`OptimisticAgent`] and
//! [`RandomAgent`] are weaker baselines.

use crate::game::Game;
use crate::state::{GameState, Player};

pub mod minimax;
pub mod optimistic;
pub mod random;

pub use minimax::MinimaxAgent;
pub use optimistic::OptimisticAgent;
pub use random::RandomAgent;

/// An agent that can pick moves for one side of a game.
pub trait Agent<S: GameState> {
    /// The side this agent plays.
    fn player(&self) -> Player;

    /// Choose an action for the current state of `game`.
    ///
    /// Callers invoke this only when it is [`player`](Agent::player)'s
    /// turn and the game is not over.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableActions`] when the current state
    /// has no legal actions.
    fn decide(&mut self, game: &Game<S>) -> crate::Result<S::Action>;
}
