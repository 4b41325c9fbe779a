//! Word Board
//!
//! A five-letter word-guessing puzzle: a board engine with duplicate-aware
//! scoring, plus TUI and text front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::board::{BoardEngine, GameStatus, InputEvent, Notification};
//! use wordle_board::corpus::WordCorpus;
//!
//! let corpus = WordCorpus::new(["crane", "speed"], ["speed"]).unwrap();
//! let mut board = BoardEngine::with_answer(&corpus, "speed").unwrap();
//!
//! let mut events: Vec<Notification> = Vec::new();
//! for letter in "speed".chars() {
//!     board.handle(InputEvent::Letter(letter), &mut events);
//! }
//! board.handle(InputEvent::Submit, &mut events);
//!
//! assert_eq!(board.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Accepted words and solution pool
pub mod corpus;

// Game state machine
pub mod board;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Stderr logger for the binary
pub mod logging;
