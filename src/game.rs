//! High-level game management

use serde::{Deserialize, Serialize};

use crate::state::{GameState, Player};

/// A game in progress: exactly one current state, replaced wholesale by
/// each move. No history is retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game<S> {
    current: S,
}

impl<S: GameState> Game<S> {
    /// Start a game from the given initial state.
    pub fn new(initial: S) -> Self {
        Game { current: initial }
    }

    /// The current state (for rendering and agent queries).
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Apply a move for the side to play, advancing the game one ply.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::InvalidAction`] for actions not legal in
    /// the current state; the game is left unchanged in that case.
    pub fn apply_move(&mut self, action: S::Action) -> crate::Result<()> {
        self.current = self.current.result(action)?;
        Ok(())
    }

    /// True once the current state is terminal.
    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current.to_move()
    }

    /// The winner, or `None` while the game is running or after a draw.
    pub fn winner(&self) -> Option<Player> {
        if self.is_over() {
            self.current.winner()
        } else {
            None
        }
    }
}

impl<S: GameState + Default> Default for Game<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
