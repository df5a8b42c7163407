//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

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
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always moves first.
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
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A (row, column) coordinate on the board, each component in 0..3.
///
/// Construction is validated, so a `Coord` always names a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a new coordinate, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CoordOutOfBounds`] if either component is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Coord { row, col })
        } else {
            Err(crate::Error::CoordOutOfBounds { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All coordinates in row-major order (row 0..3, col 0..3).
    ///
    /// This is the fixed scan order used by the search and by move
    /// enumeration, so tie-breaks are deterministic.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(Coord::from_index)
    }

    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Coord {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

/// The 3x3 board: nine cells in row-major order.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
/// Whose turn it is travels separately; the board itself is just the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Borrow the raw cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Place a player's mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is occupied.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), crate::Error> {
        if !self.is_empty(coord) {
            return Err(crate::Error::InvalidMove {
                row: coord.row(),
                col: coord.col(),
            });
        }
        self.mark(coord, player);
        Ok(())
    }

    /// Set a cell unconditionally. The search uses this together with
    /// [`clear`](Self::clear) to explore moves in place and restore them.
    pub(crate) fn mark(&mut self, coord: Coord, player: Player) {
        self.cells[coord.index()] = player.to_cell();
    }

    /// Reset a cell to empty
    pub(crate) fn clear(&mut self, coord: Coord) {
        self.cells[coord.index()] = Cell::Empty;
    }

    /// Get all empty coordinates in row-major order
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_empty(c)).collect()
    }

    fn count_pieces(&self) -> PieceCount {
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

    /// Create a board from a string of nine cell characters in row-major
    /// order ('X', 'O', '.'; whitespace is filtered out). The side to move
    /// is inferred from the piece counts: equal counts mean X to move, X
    /// ahead by one means O to move.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable (X not equal to O or ahead by 1)
    pub fn from_string(s: &str) -> Result<(Board, Player), crate::Error> {
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

        let board = Board { cells };
        let count = board.count_pieces();
        let to_move = if count.x == count.o {
            Player::X
        } else if count.x == count.o + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        };

        Ok((board, to_move))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.cells[row * 3 + col].to_char().to_string())
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
            if row < 2 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for coord in Coord::all() {
            assert_eq!(board.get(coord), Cell::Empty);
        }
    }

    #[test]
    fn test_coord_validation() {
        assert!(Coord::new(0, 0).is_ok());
        assert!(Coord::new(2, 2).is_ok());
        assert!(Coord::new(3, 0).is_err());
        assert!(Coord::new(0, 3).is_err());
        assert!(Coord::new(7, 7).is_err());
    }

    #[test]
    fn test_coord_scan_order_is_row_major() {
        let coords: Vec<(usize, usize)> = Coord::all().map(|c| (c.row(), c.col())).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(coords[8], (2, 2));
        assert_eq!(coords.len(), 9);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        let center = Coord::new(1, 1).unwrap();

        assert!(board.place(center, Player::X).is_ok());
        assert_eq!(board.get(center), Cell::X);

        // Cell is occupied now
        let result = board.place(center, Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_mark_and_clear_roundtrip() {
        let mut board = Board::new();
        let coord = Coord::new(2, 0).unwrap();
        let before = board;

        board.mark(coord, Player::O);
        assert_eq!(board.get(coord), Cell::O);
        board.clear(coord);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_coords() {
        let mut board = Board::new();
        assert_eq!(board.empty_coords().len(), 9);

        let corner = Coord::new(0, 0).unwrap();
        board.place(corner, Player::X).unwrap();
        let empty = board.empty_coords();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&corner));
    }

    #[test]
    fn test_from_string() {
        let (board, to_move) = Board::from_string("XO.......").unwrap();
        assert_eq!(board.get(Coord::new(0, 0).unwrap()), Cell::X);
        assert_eq!(board.get(Coord::new(0, 1).unwrap()), Cell::O);
        // Equal piece counts: X moves next
        assert_eq!(to_move, Player::X);

        let (_, to_move) = Board::from_string("X........").unwrap();
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn test_from_string_filters_whitespace() {
        let (board, to_move) = Board::from_string("XOX\n.O.\nX..").unwrap();
        assert_eq!(board.get(Coord::new(1, 1).unwrap()), Cell::O);
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn test_from_string_rejects_bad_length() {
        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("X.........").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let result = Board::from_string("XOZ......");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains('Z'));
    }

    #[test]
    fn test_from_string_rejects_unreachable_counts() {
        // Two extra X marks can never happen in legal alternating play
        assert!(Board::from_string("XX.......").is_err());
        // O ahead of X is impossible since X moves first
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_display() {
        let (board, _) = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("X | O | X"));
        assert!(display.contains(". | O | ."));
        assert!(display.contains("X | . | ."));
        assert!(display.contains("---------"));
    }
}
