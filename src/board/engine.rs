//! Turn and cursor state machine

use super::event::{BoardObserver, Cue, GameStatus, InputEvent, Notification};
use crate::core::{MAX_ATTEMPTS, Row, Score, TileState, WORD_LENGTH, Word, WordError};
use crate::corpus::{CorpusError, WordCorpus};
use rand::Rng;
use thiserror::Error;

/// Board setup failures
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] WordError),
}

/// Where the cursor state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current row has room for another letter
    AwaitingLetter,
    /// Current row is full; waiting for submit or backspace
    RowComplete,
    Won,
    Lost,
    /// No game running; the last attempt to start one failed
    Halted,
}

/// Owns the grid, cursor and answer for one game session
///
/// Input is processed one event at a time through [`BoardEngine::handle`];
/// each state change is reported to the supplied observer as it happens.
/// Once the game is won or lost every event is ignored until
/// [`BoardEngine::new_game`] or [`BoardEngine::retry`].
#[derive(Debug, Clone)]
pub struct BoardEngine<'a> {
    corpus: &'a WordCorpus,
    rows: [Row; MAX_ATTEMPTS],
    row_index: usize,
    column_index: usize,
    answer: Word,
    accepting: bool,
    invalid_word_shown: bool,
    status: GameStatus,
}

impl<'a> BoardEngine<'a> {
    /// Create a board and start a game with a randomly drawn answer
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Corpus` if the drawn answer is malformed.
    pub fn new(corpus: &'a WordCorpus) -> Result<Self, EngineError> {
        Self::with_rng(corpus, &mut rand::rng())
    }

    /// Create a board, drawing the first answer from `rng`
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Corpus` if the drawn answer is malformed.
    pub fn with_rng<R: Rng + ?Sized>(
        corpus: &'a WordCorpus,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let answer = corpus.draw_answer(rng)?;
        Ok(Self::start(corpus, answer))
    }

    /// Create a board with a fixed answer
    ///
    /// The answer is normalized like a drawn one but need not be in the
    /// solution pool.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidAnswer` if `answer` is not a well-formed word.
    pub fn with_answer(corpus: &'a WordCorpus, answer: &str) -> Result<Self, EngineError> {
        let answer = Word::new(answer)?;
        Ok(Self::start(corpus, answer))
    }

    fn start(corpus: &'a WordCorpus, answer: Word) -> Self {
        log::info!("new game started");
        log::debug!("answer is '{answer}'");
        Self {
            corpus,
            rows: [Row::default(); MAX_ATTEMPTS],
            row_index: 0,
            column_index: 0,
            answer,
            accepting: true,
            invalid_word_shown: false,
            status: GameStatus::Playing,
        }
    }

    /// Start over with a freshly drawn answer
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Corpus` if the drawn answer is malformed; the
    /// board then stops accepting input and no game is started.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        self.new_game_with(&mut rand::rng())
    }

    /// [`BoardEngine::new_game`] with an explicit random source
    ///
    /// # Errors
    ///
    /// See [`BoardEngine::new_game`].
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        match self.corpus.draw_answer(rng) {
            Ok(answer) => {
                log::info!("new game started");
                log::debug!("answer is '{answer}'");
                self.answer = answer;
                self.reset();
                Ok(())
            }
            Err(err) => {
                log::error!("cannot start a new game: {err}");
                self.reset();
                self.accepting = false;
                Err(err.into())
            }
        }
    }

    /// Start over with the same answer
    pub fn retry(&mut self) {
        log::info!("retrying the current answer");
        self.reset();
    }

    /// Empty every row and rewind the cursor, keeping the answer
    fn reset(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.row_index = 0;
        self.column_index = 0;
        self.accepting = true;
        self.invalid_word_shown = false;
        self.status = GameStatus::Playing;
    }

    /// Process one input event
    pub fn handle<O: BoardObserver + ?Sized>(&mut self, event: InputEvent, observer: &mut O) {
        if !self.accepting {
            log::trace!("ignoring {event:?}: board is not accepting input");
            return;
        }

        log::debug!(
            "{event:?} at row {} col {}",
            self.row_index,
            self.column_index
        );

        match event {
            InputEvent::Letter(letter) => self.type_letter(letter, observer),
            InputEvent::Backspace => self.backspace(observer),
            InputEvent::Submit => self.submit(observer),
        }
    }

    fn type_letter<O: BoardObserver + ?Sized>(&mut self, letter: char, observer: &mut O) {
        if !letter.is_ascii_alphabetic() || self.column_index >= WORD_LENGTH {
            return;
        }

        let letter = letter.to_ascii_lowercase();
        let (row, col) = (self.row_index, self.column_index);
        self.rows[row].tile_mut(col).fill(letter);
        self.column_index += 1;

        observer.notify(Notification::TileChanged {
            row,
            col,
            letter: Some(letter),
            state: TileState::Occupied,
        });
        observer.notify(Notification::Cue(Cue::Keypress));
    }

    fn backspace<O: BoardObserver + ?Sized>(&mut self, observer: &mut O) {
        if self.column_index == 0 {
            // Nothing to delete, but the key press is still acknowledged
            observer.notify(Notification::Cue(Cue::Delete));
            return;
        }

        self.column_index -= 1;
        let (row, col) = (self.row_index, self.column_index);
        self.rows[row].tile_mut(col).clear();

        observer.notify(Notification::TileChanged {
            row,
            col,
            letter: None,
            state: TileState::Empty,
        });
        if self.invalid_word_shown {
            self.invalid_word_shown = false;
            observer.notify(Notification::InvalidWordShown(false));
        }
        observer.notify(Notification::Cue(Cue::Delete));
    }

    fn submit<O: BoardObserver + ?Sized>(&mut self, observer: &mut O) {
        if self.column_index < WORD_LENGTH {
            return;
        }

        let row_index = self.row_index;
        let guess = self.rows[row_index]
            .word()
            .filter(|word| self.corpus.is_valid_word(word))
            .and_then(|word| Word::new(word).ok());

        let Some(guess) = guess else {
            log::debug!("rejected row {row_index}: not in word list");
            self.invalid_word_shown = true;
            observer.notify(Notification::InvalidWordShown(true));
            observer.notify(Notification::Cue(Cue::Invalid));
            return;
        };

        let score = Score::calculate(&guess, &self.answer);
        let row = &mut self.rows[row_index];
        row.apply(&score);

        for (col, tile) in row.tiles().iter().enumerate() {
            observer.notify(Notification::TileChanged {
                row: row_index,
                col,
                letter: tile.letter(),
                state: tile.state(),
            });
        }

        if row.is_full_match() {
            self.finish(GameStatus::Won, observer);
            return;
        }

        self.row_index += 1;
        self.column_index = 0;

        if self.row_index == MAX_ATTEMPTS {
            self.finish(GameStatus::Lost, observer);
        }
    }

    fn finish<O: BoardObserver + ?Sized>(&mut self, status: GameStatus, observer: &mut O) {
        self.accepting = false;
        self.status = status;

        let cue = if status == GameStatus::Won {
            log::info!("solved in {} attempts", self.attempts_used());
            Cue::Win
        } else {
            log::info!("out of attempts, answer was '{}'", self.answer);
            Cue::Lose
        };

        observer.notify(Notification::Cue(cue));
        observer.notify(Notification::GameOver(status));
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.status {
            GameStatus::Playing if !self.accepting => Phase::Halted,
            GameStatus::Won => Phase::Won,
            GameStatus::Lost => Phase::Lost,
            GameStatus::Playing if self.column_index < WORD_LENGTH => Phase::AwaitingLetter,
            GameStatus::Playing => Phase::RowComplete,
        }
    }

    /// `(row_index, column_index)`
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row_index, self.column_index)
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        self.accepting
    }

    #[must_use]
    pub const fn invalid_word_shown(&self) -> bool {
        self.invalid_word_shown
    }

    /// Number of rows that have been scored
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        match self.status {
            GameStatus::Won => self.row_index + 1,
            _ => self.row_index,
        }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "speed", "erase", "crane", "slate", "irate", "robot", "floor", "grate", "pious", "mound",
    ];

    fn corpus() -> WordCorpus {
        WordCorpus::new(WORDS, ["speed"]).unwrap()
    }

    fn type_word(board: &mut BoardEngine, word: &str, events: &mut Vec<Notification>) {
        for ch in word.chars() {
            board.handle(InputEvent::Letter(ch), events);
        }
    }

    fn guess(board: &mut BoardEngine, word: &str) -> Vec<Notification> {
        let mut events = Vec::new();
        type_word(board, word, &mut events);
        board.handle(InputEvent::Submit, &mut events);
        events
    }

    fn states(row: &Row) -> Vec<TileState> {
        row.tiles().iter().map(|t| t.state()).collect()
    }

    #[test]
    fn new_board_is_empty_and_accepting() {
        let corpus = corpus();
        let board = BoardEngine::new(&corpus).unwrap();

        assert_eq!(board.answer().text(), "speed");
        assert_eq!(board.cursor(), (0, 0));
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.phase(), Phase::AwaitingLetter);
        assert!(board.is_accepting());
        assert!(board.rows().iter().all(|r| *r == Row::default()));
    }

    #[test]
    fn letter_fills_tile_and_advances() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        board.handle(InputEvent::Letter('C'), &mut events);

        assert_eq!(board.cursor(), (0, 1));
        assert_eq!(board.rows()[0].tile(0).letter(), Some('c'));
        assert_eq!(board.rows()[0].tile(0).state(), TileState::Occupied);
        assert_eq!(
            events,
            [
                Notification::TileChanged {
                    row: 0,
                    col: 0,
                    letter: Some('c'),
                    state: TileState::Occupied
                },
                Notification::Cue(Cue::Keypress),
            ]
        );
    }

    #[test]
    fn non_letters_are_ignored() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        for ch in ['1', ' ', 'é', '-'] {
            board.handle(InputEvent::Letter(ch), &mut events);
        }

        assert!(events.is_empty());
        assert_eq!(board.cursor(), (0, 0));
    }

    #[test]
    fn letters_ignored_when_row_complete() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        type_word(&mut board, "crane", &mut events);
        assert_eq!(board.phase(), Phase::RowComplete);

        events.clear();
        board.handle(InputEvent::Letter('x'), &mut events);
        assert!(events.is_empty());
        assert_eq!(board.cursor(), (0, 5));
        assert_eq!(board.rows()[0].word().as_deref(), Some("crane"));
    }

    #[test]
    fn submit_ignored_until_row_complete() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        type_word(&mut board, "cra", &mut events);
        events.clear();
        board.handle(InputEvent::Submit, &mut events);

        assert!(events.is_empty());
        assert_eq!(board.cursor(), (0, 3));
        assert!(!board.invalid_word_shown());
    }

    #[test]
    fn backspace_clears_previous_tile() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        type_word(&mut board, "cr", &mut events);
        events.clear();
        board.handle(InputEvent::Backspace, &mut events);

        assert_eq!(board.cursor(), (0, 1));
        assert!(board.rows()[0].tile(1).is_empty());
        assert_eq!(
            events,
            [
                Notification::TileChanged {
                    row: 0,
                    col: 1,
                    letter: None,
                    state: TileState::Empty
                },
                Notification::Cue(Cue::Delete),
            ]
        );
    }

    #[test]
    fn backspace_at_column_zero_only_cues_delete() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();

        board.handle(InputEvent::Backspace, &mut events);

        assert_eq!(events, [Notification::Cue(Cue::Delete)]);
        assert_eq!(board.cursor(), (0, 0));
        assert!(board.rows().iter().all(|r| *r == Row::default()));

        for _ in 0..9 {
            board.handle(InputEvent::Backspace, &mut events);
        }
        assert_eq!(events.len(), 10);
        assert_eq!(board.cursor(), (0, 0));
    }

    #[test]
    fn backspace_does_not_reach_scored_rows() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();

        guess(&mut board, "crane");
        let scored = board.rows()[0];

        let mut events = Vec::new();
        board.handle(InputEvent::Backspace, &mut events);

        assert_eq!(events, [Notification::Cue(Cue::Delete)]);
        assert_eq!(board.cursor(), (1, 0));
        assert_eq!(board.rows()[0], scored);
    }

    #[test]
    fn invalid_word_keeps_row_editable() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let mut events = Vec::new();
        type_word(&mut board, "zzzzz", &mut events);
        let before = board.rows()[0];

        events.clear();
        board.handle(InputEvent::Submit, &mut events);

        assert_eq!(
            events,
            [
                Notification::InvalidWordShown(true),
                Notification::Cue(Cue::Invalid),
            ]
        );
        assert!(board.invalid_word_shown());
        assert_eq!(board.cursor(), (0, 5));
        assert_eq!(board.rows()[0], before);
        assert_eq!(board.phase(), Phase::RowComplete);
    }

    #[test]
    fn backspace_hides_invalid_word_feedback() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        guess(&mut board, "zzzzz");
        assert!(board.invalid_word_shown());

        let mut events = Vec::new();
        board.handle(InputEvent::Backspace, &mut events);

        assert!(!board.invalid_word_shown());
        assert!(events.contains(&Notification::InvalidWordShown(false)));
        assert_eq!(events.last(), Some(&Notification::Cue(Cue::Delete)));
    }

    #[test]
    fn corrected_word_can_be_submitted() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        guess(&mut board, "cranz");

        let mut events = Vec::new();
        board.handle(InputEvent::Backspace, &mut events);
        board.handle(InputEvent::Letter('e'), &mut events);
        board.handle(InputEvent::Submit, &mut events);

        assert_eq!(board.cursor(), (1, 0));
        assert!(board.rows()[0].is_scored());
    }

    #[test]
    fn valid_guess_is_scored_and_advances() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();

        let events = guess(&mut board, "erase");

        use TileState::{Incorrect as X, WrongSpot as Y};
        assert_eq!(states(&board.rows()[0]), [Y, X, X, Y, Y]);
        assert_eq!(board.cursor(), (1, 0));
        assert_eq!(board.status(), GameStatus::Playing);

        let scored: Vec<_> = events
            .iter()
            .filter_map(|n| match n {
                Notification::TileChanged { row: 0, state, .. } if state.is_scored() => {
                    Some(*state)
                }
                _ => None,
            })
            .collect();
        assert_eq!(scored, [Y, X, X, Y, Y]);
    }

    #[test]
    fn exact_guess_wins() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        guess(&mut board, "crane");

        let events = guess(&mut board, "speed");

        assert_eq!(board.status(), GameStatus::Won);
        assert_eq!(board.phase(), Phase::Won);
        assert!(!board.is_accepting());
        assert!(board.rows()[1].is_full_match());
        assert_eq!(board.cursor(), (1, 5));
        assert_eq!(board.attempts_used(), 2);
        assert_eq!(
            &events[events.len() - 2..],
            [
                Notification::Cue(Cue::Win),
                Notification::GameOver(GameStatus::Won)
            ]
        );
    }

    #[test]
    fn six_misses_lose_exactly_on_the_last_row() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        let misses = ["crane", "slate", "irate", "robot", "floor", "grate"];

        for (i, word) in misses.iter().enumerate() {
            assert_eq!(board.status(), GameStatus::Playing);
            let events = guess(&mut board, word);
            let game_over = events
                .iter()
                .filter(|n| matches!(n, Notification::GameOver(_)))
                .count();
            assert_eq!(game_over, usize::from(i == misses.len() - 1));
        }

        assert_eq!(board.status(), GameStatus::Lost);
        assert_eq!(board.phase(), Phase::Lost);
        assert_eq!(board.cursor(), (MAX_ATTEMPTS, 0));
        assert_eq!(board.attempts_used(), MAX_ATTEMPTS);
        assert!(board.rows().iter().all(Row::is_scored));
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let corpus = corpus();
        let mut board = BoardEngine::new(&corpus).unwrap();
        guess(&mut board, "speed");
        let snapshot = *board.rows();

        let mut events = Vec::new();
        board.handle(InputEvent::Letter('a'), &mut events);
        board.handle(InputEvent::Backspace, &mut events);
        board.handle(InputEvent::Submit, &mut events);

        assert!(events.is_empty());
        assert_eq!(*board.rows(), snapshot);
        assert_eq!(board.status(), GameStatus::Won);
    }

    #[test]
    fn retry_keeps_answer_and_resets_board() {
        let corpus = WordCorpus::new(WORDS, WORDS).unwrap();
        let mut board = BoardEngine::with_rng(&corpus, &mut StdRng::seed_from_u64(3)).unwrap();
        let answer = board.answer().clone();

        guess(&mut board, "crane");
        guess(&mut board, "zzzzz");
        board.retry();

        assert_eq!(board.answer(), &answer);
        assert_eq!(board.cursor(), (0, 0));
        assert!(board.is_accepting());
        assert!(!board.invalid_word_shown());
        assert_eq!(board.status(), GameStatus::Playing);
        assert!(board.rows().iter().all(|r| *r == Row::default()));
    }

    #[test]
    fn new_game_draws_from_solutions() {
        let corpus = WordCorpus::new(WORDS, ["crane", "slate"]).unwrap();
        let mut board = BoardEngine::with_answer(&corpus, "speed").unwrap();
        guess(&mut board, "speed");
        assert_eq!(board.status(), GameStatus::Won);

        board
            .new_game_with(&mut StdRng::seed_from_u64(11))
            .unwrap();

        assert!(["crane", "slate"].contains(&board.answer().text()));
        assert_eq!(board.status(), GameStatus::Playing);
        assert!(board.is_accepting());
        assert_eq!(board.cursor(), (0, 0));
    }

    #[test]
    fn malformed_answer_refuses_to_start() {
        let corpus = WordCorpus::new(WORDS, ["speeds"]).unwrap();
        assert!(matches!(
            BoardEngine::new(&corpus),
            Err(EngineError::Corpus(CorpusError::MalformedAnswer { .. }))
        ));

        let mut board = BoardEngine::with_answer(&corpus, "crane").unwrap();
        guess(&mut board, "slate");
        board.handle(InputEvent::Letter('c'), &mut Vec::new());

        assert!(board.new_game().is_err());
        assert!(!board.is_accepting());
        assert_eq!(board.phase(), Phase::Halted);
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.cursor(), (0, 0));
        assert!(board.rows().iter().all(|r| *r == Row::default()));

        let mut events = Vec::new();
        board.handle(InputEvent::Letter('a'), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn with_answer_validates_shape() {
        let corpus = corpus();
        assert!(matches!(
            BoardEngine::with_answer(&corpus, "abc"),
            Err(EngineError::InvalidAnswer(WordError::InvalidLength(3)))
        ));
        let board = BoardEngine::with_answer(&corpus, " CRANE ").unwrap();
        assert_eq!(board.answer().text(), "crane");
    }

    #[test]
    fn win_agrees_with_scoring() {
        let corpus = corpus();
        let mut board = BoardEngine::with_answer(&corpus, "robot").unwrap();
        guess(&mut board, "floor");

        let marks = Score::calculate(
            &Word::new("floor").unwrap(),
            &Word::new("robot").unwrap(),
        );
        let expected: Vec<TileState> = marks.marks().iter().map(|&m| m.into()).collect();
        assert_eq!(states(&board.rows()[0]), expected);
        assert!(marks.marks().contains(&Mark::Incorrect));
        assert_eq!(board.status(), GameStatus::Playing);
    }
}
