//! TUI application state and logic

use crate::core::MAX_ATTEMPTS;
use crate::game::{Direction, Session, Statistics, Status};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Game,
    Leaderboard,
}

/// Application state
pub struct App<'a, R> {
    pub session: Session<'a, R>,
    pub route: Route,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(session: Session<'a, R>) -> Self {
        Self {
            session,
            route: Route::Game,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the five-letter word in {MAX_ATTEMPTS} tries. Type letters, Enter submits the last row."
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Green: right spot. Yellow: in the word. Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.route {
            Route::Leaderboard => match key.code {
                KeyCode::Esc | KeyCode::Char('b') => self.route = Route::Game,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Route::Game if self.session.state().is_over() => match key.code {
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('l') => self.open_leaderboard(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Route::Game => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.session.type_letter(c),
                KeyCode::Backspace => self.session.backspace(),
                KeyCode::Left => self.session.move_cursor(Direction::Left),
                KeyCode::Right => self.session.move_cursor(Direction::Right),
                KeyCode::Up => self.session.move_cursor(Direction::Up),
                KeyCode::Down => self.session.move_cursor(Direction::Down),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn submit(&mut self) {
        self.session.submit_active_row();

        let state = self.session.state();
        if !state.is_over() {
            return;
        }

        let (status, score) = (state.status(), state.score());
        self.stats.record(status, score, state.guesses().len());

        match status {
            Status::Won => {
                self.add_message(
                    &format!("Congratulations! You've won {score} points!"),
                    MessageStyle::Success,
                );
            }
            Status::Lost => {
                let text = format!("Sorry, you lost. The word was: {}", state.secret());
                self.add_message(&text, MessageStyle::Error);
            }
            Status::InProgress => {}
        }
        self.add_message("Press 'r' to restart or 'l' for the leaderboard.", MessageStyle::Info);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    /// Navigate to the leaderboard; no game data travels with the navigation
    pub fn open_leaderboard(&mut self) {
        debug!("navigating to leaderboard");
        self.route = Route::Leaderboard;
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
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

    if let Err(err) = res {
        error!("TUI loop failed: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
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
