//! Interactive TUI (Terminal User Interface) for the tic-tac-toe game.

use crate::tui;

/// Main TUI loop.
///
/// Runs the terminal user interface, handling user input and game state.
///
/// # Arguments
/// * `descending` - Whether the move list starts sorted newest-first
pub fn ui_loop(descending: bool) -> Result<(), String> {
    let app = tui::App::new(descending);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
