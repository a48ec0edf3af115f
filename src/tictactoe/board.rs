//! Board state representation and basic operations

use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use super::lines::BoardAnalysis;
use crate::state::{GameState, Player};

/// Payoff for a decided game, from the winner's perspective
pub const TERMINAL_SCORE: i32 = 300;

/// Heuristic bonus per line with two own marks and an empty third cell
pub const NEAR_WIN_SCORE: i32 = 50;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Digit form used by the compact board encoding ('0' empty, '1' X, '2' O)
    pub fn to_digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::X => '1',
            Cell::O => '2',
        }
    }

    /// Both the dotted and the digit encodings are accepted.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '0' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::X),
            'O' | 'o' | '2' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

impl Player {
    /// Convert player to the mark it places
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl PieceCount {
    fn of(cells: &[Cell; 9]) -> Self {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }
}

/// Complete Tic-Tac-Toe position: cells, side to move, and a lazily
/// computed line analysis.
///
/// A state is immutable once constructed. [`result`](GameState::result)
/// returns a new state and leaves the receiver untouched, so the analysis
/// (winner, near-win owners, fill level) is computed at most once per state
/// and cached behind a write-once cell. Equality and hashing consider only
/// the cells and the side to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicTacToeState {
    cells: [Cell; 9],
    to_move: Player,
    #[serde(skip)]
    analysis: OnceCell<BoardAnalysis>,
}

impl PartialEq for TicTacToeState {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.to_move == other.to_move
    }
}

impl Eq for TicTacToeState {}

impl Hash for TicTacToeState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.to_move.hash(state);
    }
}

impl TicTacToeState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    pub fn new_with_player(first_player: Player) -> Self {
        Self::from_cells([Cell::Empty; 9], first_player)
    }

    /// Create a state from explicit cells and side to move.
    ///
    /// No reachability validation is performed; tests and analysis tooling
    /// may build positions no real game produces. String constructors are
    /// the validating entry points.
    pub fn from_cells(cells: [Cell; 9], to_move: Player) -> Self {
        TicTacToeState {
            cells,
            to_move,
            analysis: OnceCell::new(),
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (whitespace is filtered
    /// out) in either the dotted (`.XO`) or the digit (`012`) encoding, and
    /// may optionally include a suffix `_X` or `_O` to explicitly set the
    /// player to move. When the suffix is omitted the player is inferred
    /// from the piece counts, defaulting to X-first semantics for ambiguous
    /// cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the board part has fewer than 9 non-whitespace
    /// characters, any character is not a valid cell representation, or the
    /// piece counts could not arise from alternating play.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Cell, TicTacToeState};
    /// use oxo::{GameState, Player};
    ///
    /// let state = TicTacToeState::from_string("110020000").unwrap();
    /// assert_eq!(state.cell(0), Cell::X);
    /// assert_eq!(state.cell(4), Cell::O);
    /// assert_eq!(state.to_move(), Player::O);
    /// ```
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned, s)?;
        let cells = Self::parse_cells(board_part, s)?;
        let count = PieceCount::of(&cells);

        let to_move = match specified_turn {
            Some(turn) => {
                Self::ensure_turn_consistent_with_counts(&count, turn, s)?;
                turn
            }
            None => Self::determine_turn_from_counts(&count)?,
        };

        Ok(Self::from_cells(cells, to_move))
    }

    /// Create a board from a string with an explicit side to move.
    ///
    /// Equivalent to [`from_string`](Self::from_string) with a `_X`/`_O`
    /// suffix; the counts must be consistent with `to_move`.
    pub fn from_string_with_player(s: &str, to_move: Player) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let cells = Self::parse_cells(&cleaned, s)?;
        let count = PieceCount::of(&cells);
        Self::ensure_turn_consistent_with_counts(&count, to_move, s)?;
        Ok(Self::from_cells(cells, to_move))
    }

    fn split_board_and_turn<'a>(
        cleaned: &'a str,
        context: &str,
    ) -> crate::Result<(&'a str, Option<Player>)> {
        match cleaned.find('_') {
            Some(idx) => {
                let board = &cleaned[..idx];
                let player = match &cleaned[idx + 1..] {
                    "X" | "x" => Player::X,
                    "O" | "o" => Player::O,
                    suffix => {
                        return Err(crate::Error::InvalidCellCharacter {
                            character: suffix.chars().next().unwrap_or('_'),
                            position: idx + 1,
                            context: context.to_string(),
                        });
                    }
                };
                Ok((board, Some(player)))
            }
            None => Ok((cleaned, None)),
        }
    }

    fn parse_cells(board_part: &str, context: &str) -> crate::Result<[Cell; 9]> {
        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn determine_turn_from_counts(count: &PieceCount) -> crate::Result<Player> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else if count.o == count.x + 1 {
            Ok(Player::X)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    fn ensure_turn_consistent_with_counts(
        count: &PieceCount,
        player: Player,
        context: &str,
    ) -> crate::Result<()> {
        let valid = match player {
            Player::X => count.x == count.o || count.o == count.x + 1,
            Player::O => count.x == count.o || count.x == count.o + 1,
        };

        if valid {
            Ok(())
        } else {
            Err(crate::Error::InconsistentTurn {
                x_count: count.x,
                o_count: count.o,
                to_move: player,
                context: context.to_string(),
            })
        }
    }

    /// Get cell at position (0-8)
    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// The raw board, row-major from the top-left (for rendering)
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.analysis().occupied
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        self.analysis().winner == Some(player)
    }

    /// Near-win owner per winning line: `Some(p)` where `p` holds two cells
    /// of the line and the third is empty.
    pub fn near_wins(&self) -> [Option<Player>; 8] {
        self.analysis().near_wins
    }

    /// Get a compact string representation for use as a key, in the digit
    /// encoding with the side to move appended ("110020000_O").
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_digit()).collect::<String>(),
            self.to_move
        )
    }

    // Line scan, computed on first use. The cells cannot change after
    // construction, so the cached value stays consistent for the lifetime
    // of the state.
    fn analysis(&self) -> &BoardAnalysis {
        self.analysis.get_or_init(|| BoardAnalysis::scan(&self.cells))
    }
}

impl GameState for TicTacToeState {
    type Action = usize;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    fn result(&self, action: usize) -> crate::Result<Self> {
        if action >= 9 || !self.is_empty(action) || self.is_terminal() {
            return Err(crate::Error::InvalidAction { position: action });
        }

        let mut cells = self.cells;
        cells[action] = self.to_move.mark();
        Ok(Self::from_cells(cells, self.to_move.opponent()))
    }

    fn is_terminal(&self) -> bool {
        let analysis = self.analysis();
        analysis.winner.is_some() || analysis.is_full()
    }

    fn winner(&self) -> Option<Player> {
        self.analysis().winner
    }

    /// Terminal positions are worth the full payoff; anything else is
    /// scored from the near-win table, crediting only the side about to
    /// move. A near-win for the opponent while it is the opponent's turn is
    /// an immediate loss threat, hence the penalty.
    fn utility(&self, player: Player) -> i32 {
        let analysis = self.analysis();

        if self.is_terminal() {
            return match analysis.winner {
                Some(winner) if winner == player => TERMINAL_SCORE,
                Some(_) => -TERMINAL_SCORE,
                None => 0,
            };
        }

        let mut score = 0;
        for &owner in analysis.near_wins.iter().flatten() {
            if owner == player && self.to_move == player {
                score += NEAR_WIN_SCORE;
            } else if owner != player && self.to_move != player {
                score -= NEAR_WIN_SCORE;
            }
        }
        score
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
