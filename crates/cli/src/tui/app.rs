//! Application state and main loop for the TUI.

use std::time::Duration;

use ratatui::DefaultTerminal;
use tictactoe_core::game_state::GameState;
use tictactoe_core::square::{BOARD_SIZE, Square};

use super::event::{self, Event};
use super::render;

/// Display order of the move list.
///
/// A pure presentation toggle: changing it never touches the game history
/// or the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest move first
    Ascending,
    /// Newest move first
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Returns a display string for the sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game state
    pub game: GameState,
    /// Current sort order of the move list
    pub sort_order: SortOrder,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board (0-2 for both row and col)
    pub cursor: (usize, usize),
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(descending: bool) -> Self {
        Self {
            game: GameState::new(),
            sort_order: if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            ui_mode: UiMode::Normal,
            cursor: (1, 1), // Start at center
            should_quit: false,
            status_message: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        // Enable mouse capture
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;

        loop {
            // Draw the UI
            terminal.draw(|frame| render::render(frame, &self))?;

            // Handle events with timeout for responsive redraws
            if let Some(event) = event::poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        // Disable mouse capture on exit
        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;

        Ok(())
    }

    /// Handles an input event.
    fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal game mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            Event::CursorDown => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            Event::CursorRight => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => {
                self.try_make_move_at_cursor();
            }
            Event::Click(row, col) => {
                if row < BOARD_SIZE && col < BOARD_SIZE {
                    self.cursor = (row, col);
                    self.try_make_move_at_cursor();
                }
            }
            Event::Undo => {
                self.undo_move();
            }
            Event::Redo => {
                self.redo_move();
            }
            Event::ToggleSort => {
                self.sort_order = self.sort_order.toggled();
                self.status_message = Some(format!("Move list: {}", self.sort_order.as_str()));
            }
            Event::NewGame => {
                self.new_game();
            }
            Event::Char(c) if c.is_ascii_digit() => {
                self.jump_to_step(c as usize - '0' as usize);
            }
            _ => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            Event::Char('n') | Event::Char('N') | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Tries to place a mark at the current cursor position.
    fn try_make_move_at_cursor(&mut self) {
        if self.game.winner().is_some() {
            self.status_message = Some("Game is already decided".to_string());
            return;
        }

        let sq = Square::from_usize_unchecked(self.cursor.0 * BOARD_SIZE + self.cursor.1);
        if self.game.make_move(sq) {
            self.status_message = None;
        } else {
            self.status_message = Some("Square is already taken".to_string());
        }
    }

    /// Steps the history cursor back one position without discarding moves.
    fn undo_move(&mut self) {
        if self.game.undo() {
            self.status_message = Some(format!("At move #{}", self.game.step_number()));
        } else {
            self.status_message = Some("Nothing to undo".to_string());
        }
    }

    /// Steps the history cursor forward one position.
    fn redo_move(&mut self) {
        if self.game.redo() {
            self.status_message = Some(format!("At move #{}", self.game.step_number()));
        } else {
            self.status_message = Some("Nothing to redo".to_string());
        }
    }

    /// Jumps to a recorded step selected by its number.
    fn jump_to_step(&mut self, step: usize) {
        if step < self.game.history_len() {
            self.game.jump_to(step);
            self.status_message = Some(if step == 0 {
                "Jumped to game start".to_string()
            } else {
                format!("Jumped to move #{step}")
            });
        } else {
            self.status_message = Some(format!("No move #{step} recorded"));
        }
    }

    /// Starts a new game.
    fn new_game(&mut self) {
        self.game = GameState::new();
        self.cursor = (1, 1);
        self.status_message = Some("New game started".to_string());
    }
}
