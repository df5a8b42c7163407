//! Minimax search with alpha-beta pruning
//!
//! The full remaining game tree is explored depth-first: at most 9 plies,
//! so no caching or move ordering beyond the fixed row-major scan is
//! needed. X is the minimizing side and O the maximizing side throughout.
//! The search mutates a single board in place and restores every cell it
//! marks before returning, so callers observe no net mutation.

use serde::Serialize;

use crate::{
    board::{Board, Coord, Player},
    rules,
};

/// Minimax value of a position. Wins for O are positive, wins for X
/// negative, draws zero.
pub type Score = i32;

const WIN_SCORE: Score = 10;

/// The move judged optimal for a side, paired with its minimax value.
///
/// `best` is `None` when the board has no empty cell; `value` is then the
/// terminal evaluation of the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub best: Option<Coord>,
    pub value: Score,
}

/// A temporarily marked cell, cleared again on drop.
///
/// Guarantees the restore-on-every-exit-path invariant of the in-place
/// search: sibling branches and callers always see the cell empty again,
/// including when pruning cuts the loop short.
struct PlacedMark<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> PlacedMark<'a> {
    fn new(board: &'a mut Board, coord: Coord, player: Player) -> Self {
        board.mark(coord, player);
        PlacedMark { board, coord }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board.clear(self.coord);
    }
}

/// Evaluate the position assuming both sides play optimally from here on.
///
/// Terminal scores are depth-biased: `-10 + depth` when X has won,
/// `10 - depth` when O has won, `0` for a draw. Among otherwise-equal
/// outcomes this prefers winning sooner and losing later.
///
/// `to_move` is the side placing the next mark; O maximizes, X minimizes.
/// The initial call uses `alpha = Score::MIN`, `beta = Score::MAX` and
/// `depth = 0`. Pruning only skips work, never changes the returned value.
pub fn minimax(
    board: &mut Board,
    depth: Score,
    to_move: Player,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if rules::is_winner(board, Player::X) {
        return -WIN_SCORE + depth;
    }
    if rules::is_winner(board, Player::O) {
        return WIN_SCORE - depth;
    }
    if rules::is_draw(board) {
        return 0;
    }

    match to_move {
        Player::O => {
            let mut best = Score::MIN;
            for coord in Coord::all() {
                if !board.is_empty(coord) {
                    continue;
                }
                let value = {
                    let mut placed = PlacedMark::new(board, coord, Player::O);
                    minimax(placed.board(), depth + 1, Player::X, alpha, beta)
                };
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
        Player::X => {
            let mut best = Score::MAX;
            for coord in Coord::all() {
                if !board.is_empty(coord) {
                    continue;
                }
                let value = {
                    let mut placed = PlacedMark::new(board, coord, Player::X);
                    minimax(placed.board(), depth + 1, Player::O, alpha, beta)
                };
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Find the game-theoretically optimal move for `side`.
///
/// Candidates are tried in row-major order and compared strictly against the
/// running best (greatest value for O, least for X), so the first of several
/// equally good moves wins ties. Each candidate gets a fresh full alpha-beta
/// window, keeping the selection independent of sibling evaluations.
pub fn best_move_for(board: &mut Board, side: Player) -> SearchResult {
    let mut best: Option<Coord> = None;
    let mut best_value = match side {
        Player::O => Score::MIN,
        Player::X => Score::MAX,
    };

    for coord in Coord::all() {
        if !board.is_empty(coord) {
            continue;
        }
        let value = {
            let mut placed = PlacedMark::new(board, coord, side);
            minimax(
                placed.board(),
                0,
                side.opponent(),
                Score::MIN,
                Score::MAX,
            )
        };
        let improves = match side {
            Player::O => value > best_value,
            Player::X => value < best_value,
        };
        if improves {
            best_value = value;
            best = Some(coord);
        }
    }

    if best.is_none() {
        best_value = minimax(board, 0, side, Score::MIN, Score::MAX);
    }

    SearchResult {
        best,
        value: best_value,
    }
}

/// Find the optimal move for the maximizing side O.
///
/// Returns `None` if the board has no empty cell.
pub fn find_best_move(board: &mut Board) -> Option<Coord> {
    best_move_for(board, Player::O).best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap().0
    }

    #[test]
    fn test_empty_board_is_a_draw_under_optimal_play() {
        let mut b = Board::new();
        let value = minimax(&mut b, 0, Player::X, Score::MIN, Score::MAX);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_find_best_move_tie_break_is_first_row_major() {
        // From an empty board every reply draws, so the strict comparison
        // keeps the first candidate scanned.
        let mut b = Board::new();
        assert_eq!(find_best_move(&mut b), Some(coord(0, 0)));
    }

    #[test]
    fn test_forced_win_is_taken() {
        // O completes the top row at (0,2)
        let mut b = board("OO. XX. ..X");
        assert!(rules::has_immediate_win(&b, Player::O));
        assert_eq!(find_best_move(&mut b), Some(coord(0, 2)));
    }

    #[test]
    fn test_forced_block_is_taken() {
        // X threatens the top row at (0,2); O must block
        let mut b = board("XX. .O. .OX");
        assert!(rules::has_immediate_win(&b, Player::X));
        assert!(!rules::has_immediate_win(&b, Player::O));
        assert_eq!(find_best_move(&mut b), Some(coord(0, 2)));
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both sides threaten a row; taking the win at (0,2) outranks
        // blocking X at (1,2)
        let mut b = board("OO. XX. X..");
        let result = best_move_for(&mut b, Player::O);
        assert_eq!(result.best, Some(coord(0, 2)));
        assert_eq!(result.value, WIN_SCORE);
    }

    #[test]
    fn test_double_threat_tie_break() {
        // O can complete either the top row at (0,2) or the left column at
        // (2,0); both win immediately, so the first in scan order is kept.
        let mut b = board("OO. OX. .XX");
        assert_eq!(find_best_move(&mut b), Some(coord(0, 2)));
    }

    #[test]
    fn test_side_aware_search_minimizes_for_x() {
        // X completes the top row at (0,2)
        let mut b = board("XX. OO. ..X");
        let result = best_move_for(&mut b, Player::X);
        assert_eq!(result.best, Some(coord(0, 2)));
        assert_eq!(result.value, -WIN_SCORE);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let mut b = board("XOX .O. X..");
        let before = b;
        let _ = minimax(&mut b, 0, Player::O, Score::MIN, Score::MAX);
        assert_eq!(b, before);

        let _ = best_move_for(&mut b, Player::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        let mut drawn = board("XOX XOO OXX");
        let result = best_move_for(&mut drawn, Player::O);
        assert_eq!(result.best, None);
        assert_eq!(result.value, 0);
        assert_eq!(find_best_move(&mut drawn), None);
    }
}
