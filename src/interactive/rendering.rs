//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard and game-over menu.

use super::app::{App, InputMode, MessageStyle};
use crate::board::GameStatus;
use crate::core::{Row, TileState, WORD_LENGTH};
use crate::output::formatters::{KEYBOARD_ROWS, keyboard_hints};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Grid
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, now, chunks[2]);

    if app.input_mode == InputMode::Menu {
        render_game_over_menu(f, app, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD BOARD 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: TileState) -> Style {
    let style = match state {
        TileState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        TileState::WrongSpot => Style::default().fg(Color::Black).bg(Color::Yellow),
        TileState::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileState::Occupied => Style::default().fg(Color::White),
        TileState::Empty => Style::default().fg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

fn row_line(row: &Row, is_cursor_row: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.tiles().len() * 2);
    for tile in row.tiles() {
        let letter = tile.letter().map_or('·', |c| c.to_ascii_uppercase());
        spans.push(Span::styled(format!(" {letter} "), tile_style(tile.state())));
        spans.push(Span::raw(" "));
    }
    if is_cursor_row {
        spans.push(Span::styled("◀", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let (cursor_row, _) = app.board.cursor();
    let playing = app.board.status() == GameStatus::Playing;

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in app.board.rows().iter().enumerate() {
        lines.push(row_line(row, playing && i == cursor_row));
        lines.push(Line::from(""));
    }

    if app.feedback.invalid_banner {
        lines.push(Line::from(Span::styled(
            "Not in word list",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = keyboard_hints(app.board.rows());

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .map(|c| {
                    let state = hints[usize::from(c as u8 - b'a')];
                    let style = match state {
                        TileState::Empty | TileState::Occupied => {
                            Style::default().fg(Color::White)
                        }
                        scored => tile_style(scored),
                    };
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .feedback
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (row, col) = app.board.cursor();
    let position = match app.input_mode {
        InputMode::Playing => format!("Row {} | Letters {col}/{WORD_LENGTH}", row + 1),
        InputMode::GameOverPending => {
            let wait = app
                .transition
                .map_or(0, |t| t.remaining(now).as_millis());
            format!("Menu in {wait} ms")
        }
        InputMode::Menu => "Game over".to_string(),
    };
    f.render_widget(
        Paragraph::new(position).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Playing => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOverPending | InputMode::Menu => "n: New Word | r: Try Again | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_game_over_menu(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(50, 40, area);
    f.render_widget(Clear, popup_area);

    let (title, headline, color) = if app.board.status() == GameStatus::Won {
        let n = app.board.attempts_used();
        (
            " SOLVED ",
            format!("Solved in {n} {}", if n == 1 { "guess" } else { "guesses" }),
            Color::Green,
        )
    } else {
        (" GAME OVER ", "Out of guesses".to_string(), Color::Red)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color));
    f.render_widget(block, popup_area);

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                app.board.answer().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from("n: New Word"),
        Line::from("r: Try Again"),
        Line::from("q: Quit"),
    ]);

    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        popup_area.inner(Margin::new(2, 1)),
    );
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
