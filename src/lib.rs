//! oxo: a Tic-Tac-Toe engine with adversarial-search opponents
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe game implementation with validated construction
//! - A game-state contract polymorphic over two-player board games
//! - A perfect-play minimax agent with alpha-beta pruning
//! - Optimistic and random baseline agents
//!
//! The crate is UI-agnostic: a frontend owns a [`Game`] and an agent,
//! feeds human moves in via [`Game::apply_move`], and asks the agent to
//! [`decide`](MinimaxAgent::decide) when it is the computer's turn.

pub mod agents;
pub mod error;
pub mod game;
pub mod state;
pub mod tictactoe;

pub use agents::{Agent, MinimaxAgent, OptimisticAgent, RandomAgent};
pub use error::{Error, Result};
pub use game::Game;
pub use state::{GameState, Player};
pub use tictactoe::{Cell, TicTacToeState};
