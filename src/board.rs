//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
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
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player whose mark occupies this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
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
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// The 3x3 grid, indexed 0-8 in row-major order.
///
/// `Copy` on purpose: the board is 9 bytes, and the advisor's lookahead
/// works on throwaway copies so the live board is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an all-empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board directly from 9 cells
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 non-whitespace characters, one per
    /// cell in row-major order ('.' or ' ' for empty, 'X'/'x', 'O'/'o'/'0').
    ///
    /// # Errors
    ///
    /// Returns an error if the cell count is not 9 or any character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All 9 cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if every cell is occupied (the draw condition when nobody won)
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Write a mark into a cell. Callers must have validated the position;
    /// the engine does, and the advisor only writes into copies.
    pub(crate) fn place(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// The first fully-occupied uniform line in the fixed enumeration order
    /// (3 rows, 3 columns, 2 diagonals), if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        lines::winning_line(&self.cells)
    }

    /// The player holding a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|line| self.cells[line[0]].to_player())
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for pos in 0..9 {
            assert_eq!(board.get(pos), Cell::Empty);
        }
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(2), Cell::X);
        assert_eq!(board.occupied_count(), 3);

        // Whitespace is ignored
        let spaced = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(spaced, board);
    }

    #[test]
    fn test_from_string_rejects_wrong_length() {
        let err = Board::from_string("XO").unwrap_err();
        assert!(err.to_string().contains("got 2"), "got: {err}");

        assert!(Board::from_string("XO........").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(err.to_string().contains('Z'), "got: {err}");
    }

    #[test]
    fn test_empty_positions() {
        let board = Board::from_string(".X.O.....").unwrap();
        assert_eq!(board.empty_positions(), vec![0, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_winner_none_on_mixed_line() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.winner(), None);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.winning_line(), Some([0, 1, 2]));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_opponent_roundtrip() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
        assert_eq!(Player::X.to_cell().to_player(), Some(Player::X));
        assert_eq!(Cell::Empty.to_player(), None);
    }
}
