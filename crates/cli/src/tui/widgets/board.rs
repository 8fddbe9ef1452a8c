//! Board widget for rendering the 3×3 game grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tictactoe_core::{
    bitboard::Bitboard,
    board::Board,
    mark::Mark,
    square::{BOARD_SIZE, Square},
};

/// Widget for rendering the game board.
pub struct BoardWidget<'a> {
    /// The game board to render
    board: &'a Board,
    /// Cursor position (row, col)
    cursor: (usize, usize),
    /// Last move played
    last_move: Option<Square>,
    /// Winning line to highlight, if the game is decided
    winning_line: Option<Bitboard>,
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            last_move: None,
            winning_line: None,
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = (row, col);
        self
    }

    /// Sets the last move.
    pub fn last_move(mut self, sq: Option<Square>) -> Self {
        self.last_move = sq;
        self
    }

    /// Sets the winning line to highlight.
    pub fn winning_line(mut self, line: Option<Bitboard>) -> Self {
        self.winning_line = line;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Minimum size check
        if area.width < 16 || area.height < 9 {
            return;
        }

        // Column headers
        let header = Line::from(vec![
            Span::raw("    "),
            Span::styled("a", Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("b", Style::default().fg(Color::Cyan)),
            Span::raw("   "),
            Span::styled("c", Style::default().fg(Color::Cyan)),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        // Top border
        let top_border = "  ┌───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        // Board rows
        for row in 0..BOARD_SIZE {
            let y = area.y + 2 + (row as u16) * 2;

            // Row number and cells
            let row_num = format!("{} │", row + 1);
            buf.set_string(area.x, y, &row_num, Style::default().fg(Color::Cyan));

            for col in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(row * BOARD_SIZE + col);
                let mark = self.board.get_mark_at(sq);
                let is_cursor = self.cursor == (row, col);
                let is_last_move = self.last_move == Some(sq);
                let is_winning = self.winning_line.is_some_and(|line| line.contains(sq));

                // Determine cell content and style
                let (content, mut style) = match mark {
                    Mark::X => (" X ", Style::default().fg(Color::Green)),
                    Mark::O => (" O ", Style::default().fg(Color::Yellow)),
                    Mark::Empty => ("   ", Style::default()),
                };

                // Winning squares take precedence over the last-move tint
                if is_winning {
                    style = style
                        .bg(Color::Rgb(20, 80, 20))
                        .add_modifier(Modifier::BOLD);
                } else if is_last_move {
                    style = style.bg(Color::Rgb(50, 50, 80));
                }

                // Apply cursor highlight
                if is_cursor {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }

                let x = area.x + 3 + (col as u16) * 4;
                buf.set_string(x, y, content, style);

                // Cell separator
                if col < BOARD_SIZE - 1 {
                    buf.set_string(x + 3, y, "│", Style::default());
                }
            }

            // Right border
            buf.set_string(area.x + 14, y, "│", Style::default());

            // Row separator
            if row < BOARD_SIZE - 1 {
                let separator = "  ├───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        // Bottom border
        let bottom_border = "  └───┴───┴───┘";
        buf.set_string(area.x, area.y + 7, bottom_border, Style::default());

        // Cursor position indicator
        let cursor_sq = Square::from_usize_unchecked(self.cursor.0 * BOARD_SIZE + self.cursor.1);
        let cursor_info = format!("  Cursor: {cursor_sq}");
        buf.set_string(
            area.x,
            area.y + 8,
            &cursor_info,
            Style::default().fg(Color::Cyan),
        );
    }
}
