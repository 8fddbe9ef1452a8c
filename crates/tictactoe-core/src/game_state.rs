//! Game state management for tic-tac-toe.
//!
//! This module provides the `GameState` struct which owns the append-only
//! history of board snapshots and the cursor selecting the currently viewed
//! position. It handles move application (with silent rejection of illegal
//! moves), time-travel navigation, and win lookup at the cursor.

use std::fmt;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::mark::Mark;
use crate::square::{Square, TOTAL_SQUARES};
use crate::win::{self, Win};

/// Maximum number of snapshots a game can record: the empty board plus one
/// per square.
pub const MAX_SNAPSHOTS: usize = TOTAL_SQUARES + 1;

/// One recorded position: the board and the square filled to reach it.
///
/// `last_move` is `None` only for the initial all-empty snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Square>,
}

impl Snapshot {
    /// Returns a reference to the recorded board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square filled to reach this position.
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }
}

/// Represents the state of a tic-tac-toe game.
///
/// Maintains the snapshot history and the cursor (`step_number`) used for
/// time-travel navigation. The side to move is derived from the cursor
/// parity and never stored separately: jumping to an earlier step restores
/// whose turn it was by construction.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Snapshot history; index 0 is always the all-empty initial position.
    history: ArrayVec<Snapshot, MAX_SNAPSHOTS>,
    /// Index of the currently viewed snapshot.
    step_number: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with an empty board and the cursor at step 0.
    pub fn new() -> Self {
        let mut history = ArrayVec::new();
        history.push(Snapshot {
            board: Board::new(),
            last_move: None,
        });
        Self {
            history,
            step_number: 0,
        }
    }

    /// Replays a move sequence from the empty board.
    ///
    /// # Arguments
    ///
    /// * `moves` - The squares to fill, in play order (X first).
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first illegal move: a square that
    /// is already occupied, or any move after the game is decided.
    pub fn from_moves(moves: &[Square]) -> Result<GameState, String> {
        let mut game = GameState::new();
        for (i, &sq) in moves.iter().enumerate() {
            if !game.make_move(sq) {
                return Err(format!("Illegal move #{} at {sq}", i + 1));
            }
        }
        Ok(game)
    }

    /// Returns a reference to the board at the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns a reference to the snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step_number]
    }

    /// Returns the cursor position.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the number of recorded snapshots (at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the mark the next successful move will place.
    ///
    /// X moves at even cursor positions, O at odd ones.
    pub fn side_to_move(&self) -> Mark {
        if self.step_number % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Runs win detection on the board at the cursor.
    pub fn winner(&self) -> Option<Win> {
        win::evaluate(self.board())
    }

    /// Attempts to place the side to move on the given square.
    ///
    /// A legal move discards any snapshots beyond the cursor (a branch
    /// abandoned through time travel), appends the new position, and moves
    /// the cursor to it.
    ///
    /// # Returns
    ///
    /// `true` if the move was applied. `false` if the square is occupied or
    /// the game is already decided at the cursor; in that case the history
    /// and cursor are left completely unchanged.
    pub fn make_move(&mut self, sq: Square) -> bool {
        let current = self.history[self.step_number];
        if win::evaluate(current.board()).is_some() || !current.board().is_square_empty(sq) {
            return false;
        }

        // A new move overwrites whatever future the cursor had backed away
        // from; only one branch is ever live.
        self.history.truncate(self.step_number + 1);

        let board = current.board().place(sq, self.side_to_move());
        self.history.push(Snapshot {
            board,
            last_move: Some(sq),
        });
        self.step_number = self.history.len() - 1;
        true
    }

    /// Moves the cursor to a recorded step.
    ///
    /// Navigation never truncates: the snapshots beyond `step` stay
    /// available for revisiting until a new move overwrites them.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a recorded snapshot index. Callers produce
    /// steps from the recorded move list, so this is an internal invariant
    /// rather than a user-facing error.
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump_to out of range: {step} (history length {})",
            self.history.len()
        );
        self.step_number = step;
    }

    /// Steps the cursor back one position.
    ///
    /// # Returns
    ///
    /// `true` if the cursor moved, `false` if it was already at the start.
    pub fn undo(&mut self) -> bool {
        if self.step_number > 0 {
            self.step_number -= 1;
            true
        } else {
            false
        }
    }

    /// Steps the cursor forward one position.
    ///
    /// # Returns
    ///
    /// `true` if the cursor moved, `false` if it was already at the newest
    /// recorded snapshot.
    pub fn redo(&mut self) -> bool {
        if self.step_number + 1 < self.history.len() {
            self.step_number += 1;
            true
        } else {
            false
        }
    }

    /// Returns one record per snapshot, in ascending record order.
    ///
    /// This is a pure projection for presentation: entry 0 describes the
    /// game start, entry k >= 1 the square filled by move k. Callers wanting
    /// a newest-first listing reverse the result themselves.
    pub fn move_list(&self) -> Vec<MoveRecord> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveRecord {
                step,
                square: snapshot.last_move(),
            })
            .collect()
    }
}

/// One entry of the navigable move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The step this record describes; pass it to `jump_to`.
    pub step: usize,
    /// The square filled by this move; `None` for the game start.
    pub square: Option<Square>,
}

impl fmt::Display for MoveRecord {
    /// Formats the record as a navigation label, e.g.
    /// "Go to move #3 (row: 2, column: 1)" or "Go to game start".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square {
            None => write!(f, "Go to game start"),
            Some(sq) => {
                let (row, column) = sq.location();
                write!(f, "Go to move #{} (row: {row}, column: {column})", self.step)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.step_number(), 0);
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.side_to_move(), Mark::X);
        assert_eq!(game.current().last_move(), None);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_make_move_alternates_marks() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::A1));
        assert!(game.make_move(Square::B2));
        assert_eq!(game.board().get_mark_at(Square::A1), Mark::X);
        assert_eq!(game.board().get_mark_at(Square::B2), Mark::O);
        assert_eq!(game.side_to_move(), Mark::X);
    }

    #[test]
    fn test_history_grows_by_one_per_move() {
        let mut game = GameState::new();
        for (k, sq) in [Square::A1, Square::B1, Square::B2, Square::C1].iter().enumerate() {
            assert!(game.make_move(*sq));
            assert_eq!(game.step_number(), k + 1);
            assert_eq!(game.history_len(), k + 2);
        }
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::B2));
        let before = game.clone();

        assert!(!game.make_move(Square::B2));
        assert_eq!(game.history_len(), before.history_len());
        assert_eq!(game.step_number(), before.step_number());
        assert_eq!(game.board(), before.board());
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        // X takes the top row: a1 b1 c1 with O answering on row 2.
        let mut game = GameState::new();
        for sq in [Square::A1, Square::A2, Square::B1, Square::B2, Square::C1] {
            assert!(game.make_move(sq));
        }
        assert_eq!(game.winner().map(|w| w.mark), Some(Mark::X));

        let before = game.clone();
        assert!(!game.make_move(Square::C3));
        assert_eq!(game.history_len(), before.history_len());
        assert_eq!(game.step_number(), before.step_number());
    }

    #[test]
    fn test_side_to_move_follows_cursor_parity() {
        let mut game = GameState::new();
        for sq in [Square::A1, Square::B1, Square::B2, Square::C1] {
            assert!(game.make_move(sq));
        }
        for step in 0..game.history_len() {
            game.jump_to(step);
            let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(game.side_to_move(), expected);
        }
    }

    #[test]
    fn test_jump_to_does_not_truncate() {
        let mut game = GameState::new();
        for sq in [Square::A1, Square::B1, Square::B2] {
            assert!(game.make_move(sq));
        }
        game.jump_to(1);
        assert_eq!(game.step_number(), 1);
        assert_eq!(game.history_len(), 4);
        assert_eq!(game.current().last_move(), Some(Square::A1));
    }

    #[test]
    #[should_panic(expected = "jump_to out of range")]
    fn test_jump_to_out_of_range_panics() {
        let mut game = GameState::new();
        game.jump_to(1);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let mut game = GameState::new();
        for sq in [Square::A1, Square::B1, Square::B2, Square::C1, Square::C3] {
            assert!(game.make_move(sq));
        }
        assert_eq!(game.history_len(), 6);

        game.jump_to(0);
        assert!(game.make_move(Square::B2));

        assert_eq!(game.history_len(), 2);
        assert_eq!(game.step_number(), 1);
        assert_eq!(game.board().get_mark_at(Square::B2), Mark::X);
        assert_eq!(game.board().get_empty_count(), 8);
    }

    #[test]
    fn test_rejected_move_after_jump_keeps_future() {
        let mut game = GameState::new();
        for sq in [Square::A1, Square::B1, Square::B2] {
            assert!(game.make_move(sq));
        }
        game.jump_to(1);
        // a1 is occupied at step 1, so the move is rejected and the future
        // beyond the cursor must survive.
        assert!(!game.make_move(Square::A1));
        assert_eq!(game.history_len(), 4);
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_undo_redo_walk_the_cursor() {
        let mut game = GameState::new();
        assert!(!game.undo());
        assert!(!game.redo());

        assert!(game.make_move(Square::A1));
        assert!(game.make_move(Square::B2));

        assert!(game.undo());
        assert_eq!(game.step_number(), 1);
        assert!(game.undo());
        assert_eq!(game.step_number(), 0);
        assert!(!game.undo());

        assert!(game.redo());
        assert!(game.redo());
        assert_eq!(game.step_number(), 2);
        assert!(!game.redo());
        assert_eq!(game.history_len(), 3);
    }

    #[test]
    fn test_winner_follows_cursor() {
        let mut game = GameState::new();
        for sq in [Square::A1, Square::A2, Square::B1, Square::B2, Square::C1] {
            assert!(game.make_move(sq));
        }
        assert!(game.winner().is_some());

        game.jump_to(4);
        assert_eq!(game.winner(), None);
        assert_eq!(game.side_to_move(), Mark::X);
    }

    #[test]
    fn test_move_list_labels() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::A1));
        assert!(game.make_move(Square::C2));

        let records = game.move_list();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].to_string(), "Go to game start");
        assert_eq!(records[1].to_string(), "Go to move #1 (row: 1, column: 1)");
        assert_eq!(records[2].to_string(), "Go to move #2 (row: 2, column: 3)");
    }

    #[test]
    fn test_move_list_matches_history_order() {
        let mut game = GameState::new();
        let moves = [Square::B2, Square::A1, Square::C3];
        for sq in moves {
            assert!(game.make_move(sq));
        }
        let records = game.move_list();
        assert_eq!(records.len(), game.history_len());
        for (k, record) in records.iter().enumerate() {
            assert_eq!(record.step, k);
        }
        for (k, sq) in moves.iter().enumerate() {
            assert_eq!(records[k + 1].square, Some(*sq));
        }
    }

    #[test]
    fn test_from_moves_replays_a_game() {
        let game = GameState::from_moves(&[Square::A1, Square::B2, Square::B1]).unwrap();
        assert_eq!(game.step_number(), 3);
        assert_eq!(game.board().get_mark_at(Square::A1), Mark::X);
        assert_eq!(game.board().get_mark_at(Square::B2), Mark::O);
        assert_eq!(game.board().get_mark_at(Square::B1), Mark::X);
    }

    #[test]
    fn test_from_moves_rejects_occupied_square() {
        let err = GameState::from_moves(&[Square::A1, Square::A1]).unwrap_err();
        assert!(err.contains("#2"), "unexpected error: {err}");
        assert!(err.contains("a1"), "unexpected error: {err}");
    }

    #[test]
    fn test_from_moves_rejects_moves_after_win() {
        let moves = [
            Square::A1,
            Square::A2,
            Square::B1,
            Square::B2,
            Square::C1, // X completes the top row
            Square::C3,
        ];
        let err = GameState::from_moves(&moves).unwrap_err();
        assert!(err.contains("#6"), "unexpected error: {err}");
    }
}
