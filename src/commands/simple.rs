//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a guess or a command.

use crate::board::{BoardEngine, Cue, GameStatus, InputEvent, Notification, Statistics};
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::output::formatters::{KEYBOARD_ROWS, colored_cell, colored_row, keyboard_hints};
use crate::output::write_statistics;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads guesses from `input` until `quit` or end of input and returns the
/// statistics of the games finished along the way.
///
/// # Errors
///
/// Returns an I/O error from reading `input` or writing `out`, or an
/// `InvalidData` error if a new game cannot be started from the corpus.
pub fn run_simple<R, W, G>(
    board: &mut BoardEngine,
    rng: &mut G,
    input: R,
    out: &mut W,
) -> io::Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║           Word Board - Text Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries. Type a word and press Enter."
    )?;
    writeln!(out, "Commands: 'new' for a new word, 'retry' to replay this word, 'quit' to exit\n")?;

    let mut stats = Statistics::default();
    let mut lines = input.lines();

    loop {
        write_board(out, board)?;

        let prompt = if board.status().is_over() {
            "new / retry / quit"
        } else {
            "Guess"
        };
        write!(out, "{prompt}: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                board
                    .new_game_with(rng)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            "retry" | "r" => {
                board.retry();
                writeln!(out, "\n🔁 Same word, fresh board.\n")?;
            }
            "" => {}
            _ if board.status().is_over() => {
                writeln!(out, "Game over. Type 'new', 'retry' or 'quit'.")?;
            }
            guess
                if guess.chars().count() != WORD_LENGTH
                    || !guess.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                writeln!(
                    out,
                    "{}",
                    format!("❌ Guesses must be exactly {WORD_LENGTH} letters").red()
                )?;
            }
            guess => {
                let events = submit_guess(board, guess);
                report(out, board, &events, &mut stats)?;
            }
        }
    }

    write_statistics(out, &stats)?;
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Type `guess` into the current row and submit it
///
/// A rejected row is wiped so the next line starts from column 0.
fn submit_guess(board: &mut BoardEngine, guess: &str) -> Vec<Notification> {
    let mut events = Vec::new();
    for letter in guess.chars() {
        board.handle(InputEvent::Letter(letter), &mut events);
    }
    board.handle(InputEvent::Submit, &mut events);

    let (_, col) = board.cursor();
    if board.status() == GameStatus::Playing && col > 0 {
        let mut discarded = Vec::new();
        for _ in 0..col {
            board.handle(InputEvent::Backspace, &mut discarded);
        }
    }
    events
}

fn report<W: Write>(
    out: &mut W,
    board: &BoardEngine,
    events: &[Notification],
    stats: &mut Statistics,
) -> io::Result<()> {
    for event in events {
        match event {
            Notification::Cue(Cue::Invalid) => {
                writeln!(out, "{}", "❌ Not in word list".red().bold())?;
            }
            Notification::Cue(Cue::Win) => {
                let n = board.attempts_used();
                writeln!(
                    out,
                    "\n{}",
                    format!(
                        "🎉 Solved in {n} {}!",
                        if n == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            Notification::Cue(Cue::Lose) => {
                writeln!(
                    out,
                    "\n{} {}",
                    "💀 Out of guesses. The word was".red().bold(),
                    board.answer().text().to_uppercase().bright_yellow().bold()
                )?;
            }
            Notification::GameOver(status) => stats.record(*status, board.attempts_used()),
            _ => {}
        }
    }
    Ok(())
}

fn write_board<W: Write>(out: &mut W, board: &BoardEngine) -> io::Result<()> {
    writeln!(out)?;
    for row in board.rows() {
        writeln!(out, "   {}", colored_row(row))?;
    }

    let hints = keyboard_hints(board.rows());
    writeln!(out)?;
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let cells: String = keys
            .chars()
            .map(|c| colored_cell(c, hints[usize::from(c as u8 - b'a')]).to_string())
            .collect();
        writeln!(out, "{}{cells}", " ".repeat(indent * 2))?;
    }
    writeln!(out)
}
