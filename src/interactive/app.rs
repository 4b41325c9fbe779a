//! TUI application state and logic

use crate::board::{
    BoardEngine, BoardObserver, Cue, GameStatus, InputEvent, Notification, Statistics,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Pause between the final reveal and the game-over menu
pub const GAME_OVER_DELAY: Duration = Duration::from_secs(1);

const TICK: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys go to the board
    Playing,
    /// Game finished, menu not yet shown
    GameOverPending,
    Menu,
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

/// Pending switch to the game-over menu
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    deadline: Instant,
    cancelled: bool,
}

impl Transition {
    #[must_use]
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.deadline
    }

    /// Time left before the menu appears, zero once due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Collects board notifications for the next frame
#[derive(Debug, Default)]
pub struct Feedback {
    pub messages: Vec<Message>,
    pub invalid_banner: bool,
    pub last_cue: Option<Cue>,
    game_over: Option<GameStatus>,
}

impl Feedback {
    pub fn push(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Game-over signal received since the last call, if any
    pub fn take_game_over(&mut self) -> Option<GameStatus> {
        self.game_over.take()
    }

    fn reset(&mut self) {
        self.invalid_banner = false;
        self.last_cue = None;
        self.game_over = None;
    }
}

impl BoardObserver for Feedback {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::InvalidWordShown(shown) => self.invalid_banner = shown,
            Notification::Cue(cue) => {
                if cue == Cue::Invalid {
                    self.push("Not in word list", MessageStyle::Error);
                }
                self.last_cue = Some(cue);
            }
            Notification::GameOver(status) => self.game_over = Some(status),
            Notification::TileChanged { .. } => {}
        }
    }
}

/// Application state
pub struct App<'a> {
    pub board: BoardEngine<'a>,
    pub feedback: Feedback,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub transition: Option<Transition>,
    pub should_quit: bool,
    rng: StdRng,
}

/// Translate a key press into a board event
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(InputEvent::Letter(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Submit),
        _ => None,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(board: BoardEngine<'a>, rng: StdRng) -> Self {
        let mut feedback = Feedback::default();
        feedback.push("Guess the five-letter word!", MessageStyle::Info);
        feedback.push("Type letters, Enter to submit, Esc to quit.", MessageStyle::Info);

        Self {
            board,
            feedback,
            stats: Statistics::default(),
            input_mode: InputMode::Playing,
            transition: None,
            should_quit: false,
            rng,
        }
    }

    /// Apply one key press at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => {
                if let Some(event) = map_key(key) {
                    self.board.handle(event, &mut self.feedback);
                    self.check_game_over(now);
                }
            }
            InputMode::GameOverPending | InputMode::Menu => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('r') => self.retry(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter => self.show_menu(),
                _ => {}
            },
        }
    }

    /// Advance timers; shows the menu once the game-over delay has passed
    pub fn tick(&mut self, now: Instant) {
        if self.input_mode == InputMode::GameOverPending
            && self.transition.is_some_and(|t| t.is_due(now))
        {
            self.show_menu();
        }
    }

    pub fn new_game(&mut self) {
        self.cancel_transition();
        match self.board.new_game_with(&mut self.rng) {
            Ok(()) => {
                self.restart("New word chosen. Good luck!");
            }
            Err(err) => {
                log::error!("new game failed: {err}");
                self.feedback
                    .push(format!("Cannot start a new game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn retry(&mut self) {
        self.cancel_transition();
        self.board.retry();
        self.restart("Same word, fresh board.");
    }

    fn restart(&mut self, message: &str) {
        self.feedback.reset();
        self.feedback.push(message, MessageStyle::Info);
        self.input_mode = InputMode::Playing;
    }

    fn show_menu(&mut self) {
        if self.input_mode == InputMode::GameOverPending {
            self.transition = None;
            self.input_mode = InputMode::Menu;
        }
    }

    fn cancel_transition(&mut self) {
        if let Some(mut transition) = self.transition.take() {
            transition.cancel();
            log::debug!("game-over transition cancelled");
        }
    }

    fn check_game_over(&mut self, now: Instant) {
        let Some(status) = self.feedback.take_game_over() else {
            return;
        };

        let attempts = self.board.attempts_used();
        self.stats.record(status, attempts);

        if status == GameStatus::Won {
            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.feedback.push(celebration, MessageStyle::Success);
        } else {
            self.feedback.push(
                format!(
                    "Out of guesses. The word was {}",
                    self.board.answer().text().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }

        self.input_mode = InputMode::GameOverPending;
        self.transition = Some(Transition::new(now, GAME_OVER_DELAY));
    }
}

/// Run the TUI application
///
/// Returns the statistics of the games finished during the session.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map(|()| app.stats)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app, Instant::now()))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
