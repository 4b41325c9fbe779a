//! Letter cells

use super::Mark;

/// Display state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    Occupied,
    Correct,
    WrongSpot,
    Incorrect,
}

impl TileState {
    /// True for the three post-scoring states
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::WrongSpot | Self::Incorrect)
    }
}

impl From<Mark> for TileState {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Correct => Self::Correct,
            Mark::WrongSpot => Self::WrongSpot,
            Mark::Incorrect => Self::Incorrect,
        }
    }
}

/// A single letter cell
///
/// `state` is `Empty` exactly when `letter` is `None`; the setters keep the two
/// in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<char>,
    state: TileState,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Place a letter, marking the tile `Occupied`
    pub(crate) fn fill(&mut self, letter: char) {
        self.letter = Some(letter);
        self.state = TileState::Occupied;
    }

    /// Remove the letter, back to `Empty`
    pub(crate) fn clear(&mut self) {
        self.letter = None;
        self.state = TileState::Empty;
    }

    /// Apply a scoring mark to a filled tile
    pub(crate) fn mark(&mut self, mark: Mark) {
        debug_assert!(self.letter.is_some(), "only filled tiles are scored");
        self.state = mark.into();
    }
}
