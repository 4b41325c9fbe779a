//! Formatting utilities for terminal output

use crate::core::{Row, TileState};
use colored::{ColoredString, Colorize};

/// Keyboard layout used by both front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known state of every letter `a..=z` across the scored rows
///
/// `Correct` beats `WrongSpot` beats `Incorrect`; unseen letters stay `Empty`.
#[must_use]
pub fn keyboard_hints(rows: &[Row]) -> [TileState; 26] {
    let mut hints = [TileState::Empty; 26];
    for tile in rows.iter().flat_map(Row::tiles) {
        let Some(letter) = tile.letter() else {
            continue;
        };
        if !tile.state().is_scored() || !letter.is_ascii_lowercase() {
            continue;
        }
        let slot = &mut hints[usize::from(letter as u8 - b'a')];
        if rank(tile.state()) > rank(*slot) {
            *slot = tile.state();
        }
    }
    hints
}

const fn rank(state: TileState) -> u8 {
    match state {
        TileState::Empty | TileState::Occupied => 0,
        TileState::Incorrect => 1,
        TileState::WrongSpot => 2,
        TileState::Correct => 3,
    }
}

/// Color a single uppercase letter cell by state
#[must_use]
pub fn colored_cell(letter: char, state: TileState) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        TileState::Correct => cell.black().on_green().bold(),
        TileState::WrongSpot => cell.black().on_yellow().bold(),
        TileState::Incorrect => cell.white().on_bright_black(),
        TileState::Occupied => cell.bold(),
        TileState::Empty => cell.bright_black(),
    }
}

/// Render a row as colored cells, empty tiles as underscores
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.tiles()
        .iter()
        .map(|tile| colored_cell(tile.letter().unwrap_or('_'), tile.state()).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
