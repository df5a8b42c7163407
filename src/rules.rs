//! Win and draw rules for the 3x3 board
//!
//! Pure queries over a [`Board`]: no search logic lives here. The one
//! ordering rule callers must respect is that [`is_draw`] only checks for
//! emptiness; a full board where a side has three in a row is a win, so
//! winner checks come first. [`winner`] and [`is_terminal`] encode that
//! ordering.

use crate::board::{Board, Coord, Player};

/// Winning line indices on the 3x3 board: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row on any winning line
pub fn is_winner(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Check if the board is completely filled.
///
/// This deliberately does not look for a winner: callers must check
/// [`is_winner`] for both players before treating a full board as drawn.
pub fn is_draw(board: &Board) -> bool {
    Coord::all().all(|c| !board.is_empty(c))
}

/// Check if the game is over (either player won, or the board is full)
pub fn is_terminal(board: &Board) -> bool {
    is_winner(board, Player::X) || is_winner(board, Player::O) || is_draw(board)
}

/// Get the winner if there is one. Wins are checked before fullness, so a
/// full board with a completed line reports the win, not a draw.
pub fn winner(board: &Board) -> Option<Player> {
    if is_winner(board, Player::X) {
        Some(Player::X)
    } else if is_winner(board, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

/// Find all empty cells that would immediately complete a line for the
/// player, in row-major order.
pub fn winning_moves(board: &Board, player: Player) -> Vec<Coord> {
    let mut scratch = *board;
    let mut moves = Vec::new();
    for coord in Coord::all() {
        if !scratch.is_empty(coord) {
            continue;
        }
        scratch.mark(coord, player);
        if is_winner(&scratch, player) {
            moves.push(coord);
        }
        scratch.clear(coord);
    }
    moves
}

/// Check if the player has an immediate winning move available
pub fn has_immediate_win(board: &Board, player: Player) -> bool {
    !winning_moves(board, player).is_empty()
}
