//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Cell, Mark, Position};

/// Three positions forming a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningPattern([Position; 3]);

impl WinningPattern {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every line, in evaluation order: rows, then columns, then diagonals.
pub const WINNING_PATTERNS: [WinningPattern; 8] = {
    use Position::*;
    [
        // Rows
        WinningPattern::new(TopLeft, TopCenter, TopRight),
        WinningPattern::new(MiddleLeft, Center, MiddleRight),
        WinningPattern::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinningPattern::new(TopLeft, MiddleLeft, BottomLeft),
        WinningPattern::new(TopCenter, Center, BottomCenter),
        WinningPattern::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinningPattern::new(TopLeft, Center, BottomRight),
        WinningPattern::new(TopRight, Center, BottomLeft),
    ]
};

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub pattern: WinningPattern,
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WINNING_PATTERNS`] order whose three cells
/// hold the same mark. Later lines are not reported even if they are also
/// complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_PATTERNS.iter().find_map(|pattern| {
        let [a, b, c] = pattern.positions();
        match board.get(a) {
            Cell::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(Win {
                    mark,
                    pattern: *pattern,
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Cell::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.pattern.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.pattern.indices(), [0, 4, 8]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_pattern_reported_when_two_lines_complete() {
        // X completes row 0 and column 0 at once; row 0 comes first.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(check_winner(&board).unwrap().pattern.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = board_with(&[
            (Position::TopCenter, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomCenter, Mark::O),
            (Position::TopLeft, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(check_winner(&board).unwrap().pattern.indices(), [1, 4, 7]);
    }

    #[test]
    fn test_pattern_order() {
        let all: Vec<[usize; 3]> = WINNING_PATTERNS.iter().map(|p| p.indices()).collect();
        assert_eq!(
            all,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }
}
