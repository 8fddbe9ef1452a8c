//! Non-interactive replay of a recorded move string.

use colored::Colorize;

use tictactoe_core::game_state::GameState;
use tictactoe_core::mark::Mark;
use tictactoe_core::square::{BOARD_SIZE, Square};

use crate::tui::parse;

/// Replays a concatenated move string and prints every recorded position,
/// each under its navigation label, followed by the final status line.
pub fn replay(input: &str) -> Result<(), String> {
    let moves = parse::parse_move_string(input)?;
    let mut game = GameState::from_moves(&moves)?;

    for record in game.move_list() {
        game.jump_to(record.step);
        println!("{record}");
        print_board(&game);
        println!();
    }

    match game.winner() {
        Some(win) => {
            let mark = match win.mark {
                Mark::X => "X".bright_green(),
                _ => "O".bright_yellow(),
            };
            println!("Winner: {mark}");
        }
        None => {
            let mark = match game.side_to_move() {
                Mark::X => "X".bright_green(),
                _ => "O".bright_yellow(),
            };
            println!("Next player: {mark}");
        }
    }

    Ok(())
}

/// Prints a colored representation of the board at the cursor.
fn print_board(game: &GameState) {
    let board = game.board();
    let last_move = game.current().last_move();

    println!("      a   b   c");
    println!("    ┌───┬───┬───┐");

    for row in 0..BOARD_SIZE {
        print!("  {} │", row + 1);

        for col in 0..BOARD_SIZE {
            let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
            let is_last_move = Some(sq) == last_move;

            let symbol = match board.get_mark_at(sq) {
                Mark::X if is_last_move => " X ".on_bright_black().bright_green(),
                Mark::O if is_last_move => " O ".on_bright_black().bright_yellow(),
                Mark::X => " X ".bright_green(),
                Mark::O => " O ".bright_yellow(),
                Mark::Empty => "   ".normal(),
            };
            print!("{symbol}│");
        }

        println!();
        if row < BOARD_SIZE - 1 {
            println!("    ├───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┘");
}
