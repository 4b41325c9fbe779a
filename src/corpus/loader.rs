//! Word list loading utilities
//!
//! Turns newline-delimited lists into word sequences. Each non-blank line is
//! one word; no other parsing happens here.

use super::CorpusError;
use std::fs;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Lines are trimmed (so CRLF files work) and blank lines are dropped.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_board::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split newline-delimited text into words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_board::corpus::loader::words_from_slice;
/// use wordle_board::corpus::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
