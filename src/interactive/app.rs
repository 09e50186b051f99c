//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, SessionStatus};
use crate::storage::StatsStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, R = StdRng> {
    pub game: Game<S, R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: StatsStore, R: Rng> App<S, R> {
    #[must_use]
    pub fn new(game: Game<S, R>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the 5-letter word in 6 tries. Type and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.guess(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.status {
                    SessionStatus::Won => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message("You won! 🎉", MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::Lost => {
                        self.input_mode = InputMode::GameOver;
                        let text = format!(
                            "You lost! The word was: {}",
                            self.game.session().secret()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::InProgress => {}
                }
            }
            Err(err) if err.is_rejected_guess() => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&format!("Error: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();

        match self.game.new_session() {
            Ok(()) => {
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&format!("Error: {err}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press to the application state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {
                    // Ignore typing until a new game starts
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                // Chords like Alt-x or Ctrl-a are not letters
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: StatsStore,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
