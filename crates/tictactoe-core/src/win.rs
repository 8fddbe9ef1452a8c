//! Win detection over the eight fixed winning lines.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::mark::Mark;
use crate::square::Square;

/// The eight winning lines as bitboard masks: the three rows (top to
/// bottom), the three columns (left to right), then the two diagonals.
///
/// The enumeration order is the tie-break when more than one line is
/// covered: the first covered mask in this table wins.
pub const WINNING_LINES: [Bitboard; 8] = [
    Bitboard::new(0b000_000_111), // row 1 (a1 b1 c1)
    Bitboard::new(0b000_111_000), // row 2 (a2 b2 c2)
    Bitboard::new(0b111_000_000), // row 3 (a3 b3 c3)
    Bitboard::new(0b001_001_001), // file a (a1 a2 a3)
    Bitboard::new(0b010_010_010), // file b (b1 b2 b3)
    Bitboard::new(0b100_100_100), // file c (c1 c2 c3)
    Bitboard::new(0b100_010_001), // diagonal a1-c3
    Bitboard::new(0b001_010_100), // diagonal c1-a3
];

/// A decided game: the winning mark and the completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// The mark that completed a line.
    pub mark: Mark,
    /// The completed line (exactly three bits set).
    pub line: Bitboard,
}

impl Win {
    /// Returns the winning line as squares in ascending index order.
    pub fn squares(self) -> [Square; 3] {
        debug_assert_eq!(self.line.count(), 3);
        let (a, rest) = self.line.pop_lsb();
        let (b, rest) = rest.pop_lsb();
        let (c, _) = rest.pop_lsb();
        [a, b, c]
    }
}

/// Scans the winning lines and returns the first one fully covered by a
/// single mark, or `None` if no line is complete.
///
/// Pure and deterministic: the same board always yields the same result,
/// and evaluation has no side effects.
#[inline]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line in WINNING_LINES {
        if board.x.covers(line) {
            return Some(Win { mark: Mark::X, line });
        }
        if board.o.covers(line) {
            return Some(Win { mark: Mark::O, line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_no_line_means_no_winner() {
        // A full drawn board and a few scattered positions.
        for s in ["XOXXOOOXX", "X-O-O-X--", "-X-O-X-O-", "XO--X--O-"] {
            let board = Board::from_string(s);
            // The full-board case must really have no line.
            assert_eq!(evaluate(&board), None, "unexpected winner on {s}");
        }
    }

    #[test]
    fn test_all_eight_lines_win_for_x() {
        for expected in WINNING_LINES {
            let board = Board::from_bitboards(expected, Bitboard::EMPTY);
            let win = evaluate(&board).expect("line should win");
            assert_eq!(win.mark, Mark::X);
            assert_eq!(win.line, expected);
        }
    }

    #[test]
    fn test_all_eight_lines_win_for_o() {
        for expected in WINNING_LINES {
            let board = Board::from_bitboards(Bitboard::EMPTY, expected);
            let win = evaluate(&board).expect("line should win");
            assert_eq!(win.mark, Mark::O);
            assert_eq!(win.line, expected);
        }
    }

    #[test]
    fn test_win_with_mixed_remainder() {
        // X holds the top row; the rest of the board is a realistic mix.
        let board = Board::from_string("XXXOO-O--");
        let win = evaluate(&board).expect("top row should win");
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.squares(), [Square::A1, Square::B1, Square::C1]);
    }

    #[test]
    fn test_diagonal_win_squares() {
        let board = Board::from_string("X-O-X-O-X");
        let win = evaluate(&board).expect("diagonal should win");
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.squares(), [Square::A1, Square::B2, Square::C3]);
    }

    #[test]
    fn test_anti_diagonal_win_squares() {
        let board = Board::from_string("X-O-O-OX-");
        let win = evaluate(&board).expect("anti-diagonal should win");
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.squares(), [Square::C1, Square::B2, Square::A3]);
    }

    #[test]
    fn test_tie_break_is_enumeration_order() {
        // X covers both the top row and the left column; the row is listed
        // first and must be reported.
        let board = Board::from_bitboards(
            WINNING_LINES[0] | WINNING_LINES[3],
            Bitboard::EMPTY,
        );
        let win = evaluate(&board).expect("board is decided");
        assert_eq!(win.line, WINNING_LINES[0]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = Board::from_string("XXXOO----");
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
