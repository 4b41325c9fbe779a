//! Self-play simulation
//!
//! Plays many games through the board engine with a random guesser that only
//! picks solutions still consistent with the feedback so far.

use crate::board::{
    BoardEngine, BoardObserver, Cue, EngineError, GameStatus, InputEvent, Notification, Statistics,
};
use crate::core::{Score, WORD_LENGTH, Word};
use crate::corpus::WordCorpus;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Aggregate result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub stats: Statistics,
    /// Guesses the board refused because they were not accepted words
    pub invalid_guesses: usize,
    /// Games left unfinished because the guesser ran out of candidates
    pub abandoned: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy)]
struct GameOutcome {
    status: GameStatus,
    attempts: usize,
    invalid_guesses: usize,
}

/// Counts rejected submissions
#[derive(Default)]
struct InvalidCounter(usize);

impl BoardObserver for InvalidCounter {
    fn notify(&mut self, notification: Notification) {
        if notification == Notification::Cue(Cue::Invalid) {
            self.0 += 1;
        }
    }
}

/// Play `config.games` games in parallel
///
/// Game `i` uses a generator seeded with `config.seed + i`, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns `EngineError` if a game cannot be started (malformed answer).
pub fn run_simulation(
    corpus: &WordCorpus,
    config: &SimulationConfig,
) -> Result<SimulationResult, EngineError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("playing");

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let outcome = play_one(corpus, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("done");

    let stats = outcomes
        .par_iter()
        .map(|outcome| {
            let mut single = Statistics::default();
            single.record(outcome.status, outcome.attempts);
            single
        })
        .reduce(Statistics::default, |a, b| a.merge(&b));
    let invalid_guesses = outcomes.iter().map(|o| o.invalid_guesses).sum();
    let abandoned = outcomes
        .iter()
        .filter(|o| o.status == GameStatus::Playing)
        .count();

    let duration = start.elapsed();
    let games_per_second = if duration.is_zero() {
        0.0
    } else {
        outcomes.len() as f64 / duration.as_secs_f64()
    };

    log::info!(
        "simulated {} games: {} won, {} abandoned",
        outcomes.len(),
        stats.games_won,
        abandoned
    );

    Ok(SimulationResult {
        stats,
        invalid_guesses,
        abandoned,
        duration,
        games_per_second,
    })
}

fn play_one<R: Rng>(corpus: &WordCorpus, rng: &mut R) -> Result<GameOutcome, EngineError> {
    let mut board = BoardEngine::with_rng(corpus, &mut *rng)?;
    let mut counter = InvalidCounter::default();
    let mut candidates: Vec<Word> = corpus
        .solutions()
        .iter()
        .filter_map(|s| Word::new(s).ok())
        .collect();

    while board.status() == GameStatus::Playing && !candidates.is_empty() {
        let pick = rng.random_range(0..candidates.len());
        let guess = candidates.swap_remove(pick);

        for letter in guess.text().chars() {
            board.handle(InputEvent::Letter(letter), &mut counter);
        }
        board.handle(InputEvent::Submit, &mut counter);

        if board.invalid_word_shown() {
            for _ in 0..WORD_LENGTH {
                board.handle(InputEvent::Backspace, &mut counter);
            }
            continue;
        }

        let (row, _) = board.cursor();
        let scored_row = match board.status() {
            GameStatus::Won => row,
            _ => row.saturating_sub(1),
        };
        if let Some(observed) = board.rows()[scored_row].score() {
            candidates.retain(|c| Score::calculate(&guess, c) == observed);
        }
    }

    Ok(GameOutcome {
        status: board.status(),
        attempts: board.attempts_used(),
        invalid_guesses: counter.0,
    })
}
