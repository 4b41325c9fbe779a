//! Score command
//!
//! Scores one guess against one answer without running a game.

use crate::core::{Score, Word, WordError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub score: Score,
}

/// Score `guess` against `answer`
///
/// Neither word has to be in a corpus; both only need the right shape.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let score = Score::calculate(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        score,
    })
}
