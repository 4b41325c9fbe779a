//! Duplicate-aware guess scoring
//!
//! A score holds one [`Mark`] per letter position of a guess:
//! - `Correct`: letter matches the answer at the same position
//! - `WrongSpot`: letter is in the answer elsewhere (subject to duplicate counts)
//! - `Incorrect`: letter is absent once duplicates are accounted for

use super::{WORD_LENGTH, Word};

/// Per-position result of scoring a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    WrongSpot,
    Incorrect,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongSpot => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Scored feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([Mark; WORD_LENGTH]);

impl Score {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Build a score from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and consume one occurrence
    ///    of that letter from the remaining pool
    /// 2. Second pass, left to right over the rest: `WrongSpot` while the pool
    ///    still holds the letter (consuming it), otherwise `Incorrect`
    ///
    /// Consumption order is strictly left to right, so surplus duplicates in
    /// the guess are marked `Incorrect` from the right.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Mark, Score, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let answer = Word::new("speed").unwrap();
    /// let score = Score::calculate(&guess, &answer);
    ///
    /// use Mark::{Incorrect as I, WrongSpot as Y};
    /// assert_eq!(score.marks(), &[Y, I, I, Y, Y]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        let mut exact = [false; WORD_LENGTH];
        let mut remaining = answer.char_counts();

        // Allow: Index needed to access guess[i], answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                marks[i] = Mark::Correct;
                exact[i] = true;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if exact[i] {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::WrongSpot;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert the score to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}
