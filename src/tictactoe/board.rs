//! Board representation and rule predicates

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{Error, Result};

/// Side length of the board
pub const SIZE: usize = 3;

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

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
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

/// A player in the game. X maximizes, O minimizes.
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

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn as_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// A (row, col) coordinate naming the cell to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move, rejecting coordinates outside the board
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::InvalidPosition { row, col });
        }
        Ok(Move { row, col })
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Result<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    fn checked_index(self) -> Result<usize> {
        Move::new(self.row, self.col).map(Move::index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

/// A 3x3 grid of cells stored row-major.
///
/// `Board` is `Copy` and none of its methods mutate it: every transition
/// returns a fresh board, so a parent position and its successors never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from raw row-major cells.
    ///
    /// No reachability check is applied; see [`Board::is_reachable`].
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from text.
    ///
    /// Whitespace, `/` and `|` are ignored, so `"XX./OO./..."` and a three
    /// line grid both work. Empty cells may be written as `.`, `_` or `-`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 cells remain after filtering separators
    /// - Any character is not a valid cell representation
    /// - The board cannot arise from alternating play starting with X
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        let board = Board {
            cells: Self::parse_cells(&chars, s)?,
        };
        board.check_reachable()?;
        Ok(board)
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9]> {
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Row-major view of the cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) out of bounds");
        self.cells[row * SIZE + col]
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Side to move under X-first alternation
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts cannot arise from alternating play.
    pub fn to_move(&self) -> Result<Player> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(Error::UnreachableBoard {
                reason: format!(
                    "piece counts X={}, O={} (X must equal O or lead by one)",
                    count.x, count.o
                ),
            })
        }
    }

    /// Check if a player owns a complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The owner of a complete line, scanning X before O
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// True when a line is complete or no empty cell remains
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Outcome value from X's perspective: +1 X won, -1 O won, 0 tie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] when the game is still in progress.
    pub fn utility(&self) -> Result<i32> {
        if !self.is_terminal() {
            return Err(Error::NotTerminal);
        }
        Ok(self.score())
    }

    /// Line score without the terminal check; callers must have checked
    /// `is_terminal` already.
    pub(crate) fn score(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is significant: search keeps the first move that reaches the
    /// best value, so ties resolve towards the top-left.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move {
                row: i / SIZE,
                col: i % SIZE,
            })
            .collect()
    }

    /// Place `player` on `mv` and return the resulting board
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move, player: Player) -> Result<Board> {
        let idx = mv.checked_index()?;
        if self.cells[idx] != Cell::Empty {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[idx] = player.to_cell();
        Ok(next)
    }

    /// Console rendering, one `| X | O |   |` row per line
    pub fn render(&self) -> String {
        self.cells
            .chunks(SIZE)
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Empty => " ".to_string(),
                        other => other.to_char().to_string(),
                    })
                    .collect();
                format!("| {} |", cells.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
