//! Core domain types for the puzzle
//!
//! Pure data types and the scoring function. Nothing here knows about input,
//! rendering or word lists.

mod row;
mod score;
mod tile;
mod word;

pub use row::Row;
pub use score::{Mark, Score};
pub use tile::{Tile, TileState};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
