//! TUI rendering with ratatui
//!
//! Board, keyboard hints and statistics for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterVerdict, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::SessionStatus;
use crate::storage::StatsStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

const fn verdict_color(verdict: LetterVerdict) -> Color {
    match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, background: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let session = app.game.session();
    let history = session.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(record) = history.get(row) {
            for (&letter, &verdict) in record.guess.chars().iter().zip(record.feedback.verdicts()) {
                spans.push(tile(char::from(letter), verdict_color(verdict)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let letter = typed.get(i).copied().unwrap_or(' ');
                spans.push(Span::styled(
                    format!("[{letter}]"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled("[ ]", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match session.status() {
        SessionStatus::InProgress => format!(
            " Board - {} tries left ",
            session.attempts_remaining()
        ),
        SessionStatus::Won => " Board - Solved! ".to_string(),
        SessionStatus::Lost => format!(" Board - The word was {} ", session.secret()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Win rate gauge
            Constraint::Length(3), // Counters
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_statistics(f, app, chunks[1], chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_keyboard<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let hints = app.game.session().letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let background = hints
                        .get(&letter)
                        .map_or(Color::Gray, |&verdict| verdict_color(verdict));
                    tile(char::from(letter), background)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );

    f.render_widget(keyboard, area);
}

fn render_statistics<S: StatsStore, R: Rng>(
    f: &mut Frame,
    app: &App<S, R>,
    gauge_area: Rect,
    counters_area: Rect,
) {
    let stats = app.game.current_statistics();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win % ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(stats.win_percentage.min(100) as u16)
        .label(format!("{}%", stats.win_percentage));
    f.render_widget(gauge, gauge_area);

    let counters = Paragraph::new(format!(
        "Played: {}  |  Current streak: {}",
        stats.games_played, stats.current_streak
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(counters, counters_area);
}

fn render_messages<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let messages: Vec<ListItem> = app
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

fn render_input<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 'n' or Enter for new game, 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: StatsStore, R: Rng>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit | Backspace: Delete",
        InputMode::GameOver => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
