//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;

pub use board::{Cell, TicTacToeState, NEAR_WIN_SCORE, TERMINAL_SCORE};
pub use lines::{classify_line, BoardAnalysis, LineState, WINNING_LINES};
