//! Word corpora
//!
//! The accepted-guess dictionary and the solution pool, plus the loaders that
//! feed them. A [`WordCorpus`] is immutable once built and is borrowed by the
//! board for the lifetime of a session.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Corpus precondition failures
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("accepted word list is empty")]
    EmptyValidWords,
    #[error("solution list is empty")]
    EmptySolutions,
    #[error("solution '{word}' cannot be used as an answer: {source}")]
    MalformedAnswer {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Accepted words and candidate answers
#[derive(Debug, Clone)]
pub struct WordCorpus {
    valid_words: FxHashSet<String>,
    solutions: Vec<String>,
}

impl WordCorpus {
    /// Build a corpus from the two lists
    ///
    /// Entries are trimmed and blank entries dropped. Accepted words are stored
    /// lowercase; solutions are kept as given and normalized when drawn.
    ///
    /// # Errors
    ///
    /// Returns `EmptyValidWords` or `EmptySolutions` if either list has no
    /// entries left.
    pub fn new<V, S>(valid_words: V, solutions: S) -> Result<Self, CorpusError>
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let valid_words: FxHashSet<String> = valid_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        if valid_words.is_empty() {
            return Err(CorpusError::EmptyValidWords);
        }

        let solutions: Vec<String> = solutions
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if solutions.is_empty() {
            return Err(CorpusError::EmptySolutions);
        }

        let unguessable = solutions
            .iter()
            .filter(|s| !valid_words.contains(&s.to_lowercase()))
            .count();
        if unguessable > 0 {
            log::warn!("{unguessable} solutions are missing from the accepted word list");
        }

        log::debug!(
            "corpus ready: {} accepted words, {} solutions",
            valid_words.len(),
            solutions.len()
        );

        Ok(Self {
            valid_words,
            solutions,
        })
    }

    /// Corpus built from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded lists are empty.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::new(ALLOWED.iter(), SOLUTIONS.iter())
    }

    /// True iff `word` is in the accepted list, matched exactly
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_words.contains(word)
    }

    /// Candidate answers
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Number of accepted words
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid_words.len()
    }

    /// Draw an answer uniformly at random from the solution pool
    ///
    /// # Errors
    ///
    /// Returns `MalformedAnswer` if the drawn entry is not a well-formed word.
    pub fn draw_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, CorpusError> {
        let raw = self
            .solutions
            .choose(rng)
            .ok_or(CorpusError::EmptySolutions)?;
        Word::new(raw).map_err(|source| CorpusError::MalformedAnswer {
            word: raw.clone(),
            source,
        })
    }
}
