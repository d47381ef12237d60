//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn board_from(s: &str) -> Board {
        let mut board = Board::new();
        for (i, ch) in s.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::Occupied(Mark::X),
                'O' => Cell::Occupied(Mark::O),
                _ => Cell::Empty,
            };
            board.set(Position::from_index(i).unwrap(), cell);
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("____X____")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from("XXXOO____");
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
