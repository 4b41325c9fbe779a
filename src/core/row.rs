//! One guess worth of tiles

use super::{Mark, Score, Tile, TileState, WORD_LENGTH};

/// Fixed-length row of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub const fn tile(&self, col: usize) -> &Tile {
        &self.tiles[col]
    }

    /// The word spelled by this row, or `None` while any tile is empty
    #[must_use]
    pub fn word(&self) -> Option<String> {
        self.tiles.iter().map(Tile::letter).collect()
    }

    /// True once every tile carries a scoring mark
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.tiles.iter().all(|t| t.state().is_scored())
    }

    /// Marks of a scored row, `None` before scoring
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        for (mark, tile) in marks.iter_mut().zip(&self.tiles) {
            *mark = match tile.state() {
                TileState::Correct => Mark::Correct,
                TileState::WrongSpot => Mark::WrongSpot,
                TileState::Incorrect => Mark::Incorrect,
                TileState::Empty | TileState::Occupied => return None,
            };
        }
        Some(Score::new(marks))
    }

    /// True iff every tile is `Correct`
    #[must_use]
    pub fn is_full_match(&self) -> bool {
        self.tiles.iter().all(|t| t.state() == TileState::Correct)
    }

    pub(crate) fn tile_mut(&mut self, col: usize) -> &mut Tile {
        &mut self.tiles[col]
    }

    /// Write scoring marks into the tiles
    pub(crate) fn apply(&mut self, score: &Score) {
        for (tile, &mark) in self.tiles.iter_mut().zip(score.marks()) {
            tile.mark(mark);
        }
    }

    pub(crate) fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.clear();
        }
    }
}
