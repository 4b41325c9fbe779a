//! Interactive TUI front end

pub mod app;
pub mod rendering;

pub use app::{App, Feedback, GAME_OVER_DELAY, InputMode, Transition, map_key, run_tui};
