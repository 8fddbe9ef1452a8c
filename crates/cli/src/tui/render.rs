//! Rendering logic for the TUI.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::mark::Mark;

use super::app::{App, SortOrder, UiMode};
use super::widgets::BoardWidget;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: title, content, help bar
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(13),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2]);

    if app.ui_mode == UiMode::ConfirmQuit {
        render_quit_dialog(frame);
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Tic-Tac-Toe ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let content_layout = Layout::horizontal([
        Constraint::Length(20), // Board area
        Constraint::Min(24),    // Info panel
    ])
    .split(area);

    render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
}

/// Renders the game board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let board_widget = BoardWidget::new(app.game.board())
        .cursor(app.cursor.0, app.cursor.1)
        .last_move(app.game.current().last_move())
        .winning_line(app.game.winner().map(|w| w.line));

    frame.render_widget(board_widget, inner_area);
}

/// Renders the information panel: status text, cursor position within the
/// history, and the navigable move list.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let mut lines = Vec::new();

    lines.push(Line::from(""));

    // Status text: the winner when decided, otherwise whose turn it is.
    let status = match app.game.winner() {
        Some(win) => match win.mark {
            Mark::X => Span::styled(
                "Winner: X",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => Span::styled(
                "Winner: O",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        },
        None => match app.game.side_to_move() {
            Mark::X => Span::styled("Next player: X", Style::default().fg(Color::Green)),
            _ => Span::styled("Next player: O", Style::default().fg(Color::Yellow)),
        },
    };
    lines.push(Line::from(status));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("Step: "),
        Span::styled(
            format!("{}/{}", app.game.step_number(), app.game.history_len() - 1),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Sort: "),
        Span::styled(app.sort_order.as_str(), Style::default().fg(Color::Cyan)),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(inner_area.width as usize)));

    // Move list
    lines.push(Line::from(Span::styled(
        "Moves:",
        Style::default().fg(Color::Cyan),
    )));

    let mut records = app.game.move_list();
    if app.sort_order == SortOrder::Descending {
        records.reverse();
    }

    for record in records {
        let is_current = record.step == app.game.step_number();
        let marker = if is_current { "▶ " } else { "  " };

        // Odd-numbered moves were placed by X, even ones by O.
        let color = if record.step == 0 {
            Color::DarkGray
        } else if record.step % 2 == 1 {
            Color::Green
        } else {
            Color::Yellow
        };
        let style = if is_current {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(record.to_string(), style),
        ]));
    }

    // Status message
    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    let info = Paragraph::new(lines);
    frame.render_widget(info, inner_area);
}

/// Renders the help bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_items = [
        ("Enter", "Place"),
        ("U", "Undo"),
        ("R", "Redo"),
        ("0-9", "Jump"),
        ("T", "Sort"),
        ("N", "New"),
        ("Q", "Quit"),
    ];

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" [{key}] "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!("{desc} ")),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Tic-Tac-Toe?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to quit, N to cancel"),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm "),
        );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
