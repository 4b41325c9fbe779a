use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use wordle_board::board::{BoardEngine, GameStatus, InputEvent, Notification};
use wordle_board::core::{MAX_ATTEMPTS, Mark, Score, TileState, WORD_LENGTH, Word};
use wordle_board::corpus::WordCorpus;

const WORDS: &[&str] = &[
    "crane", "slate", "irate", "robot", "floor", "grate", "pious", "mound", "erase", "eerie",
    "geese", "lolly", "alloy", "those", "speed",
];

fn word() -> impl Strategy<Value = String> {
    "[a-z]{5}"
}

fn count(text: &str, letter: char) -> usize {
    text.chars().filter(|&c| c == letter).count()
}

fn submit(board: &mut BoardEngine, guess: &str) -> Vec<Notification> {
    let mut events = Vec::new();
    for c in guess.chars() {
        board.handle(InputEvent::Letter(c), &mut events);
    }
    board.handle(InputEvent::Submit, &mut events);
    events
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scoring is a pure function of its inputs
    #[test]
    fn scoring_is_deterministic(guess in word(), answer in word()) {
        let g = Word::new(&guess).unwrap();
        let a = Word::new(&answer).unwrap();
        prop_assert_eq!(Score::calculate(&g, &a), Score::calculate(&g, &a));
    }

    /// Each letter earns at most as many non-gray marks as the answer holds
    #[test]
    fn marked_letters_never_exceed_answer_counts(guess in word(), answer in word()) {
        let score = Score::calculate(&Word::new(&guess).unwrap(), &Word::new(&answer).unwrap());

        for letter in 'a'..='z' {
            let marked = guess
                .chars()
                .zip(score.marks())
                .filter(|&(c, &m)| c == letter && m != Mark::Incorrect)
                .count();
            prop_assert_eq!(marked, count(&guess, letter).min(count(&answer, letter)));
        }

        for (i, (g, a)) in guess.chars().zip(answer.chars()).enumerate() {
            prop_assert_eq!(score.marks()[i] == Mark::Correct, g == a);
        }
    }

    /// Guessing the answer marks every tile correct and wins
    #[test]
    fn exact_guess_wins_with_all_correct(answer in word()) {
        let corpus = WordCorpus::new([answer.as_str()], [answer.as_str()]).unwrap();
        let mut board = BoardEngine::with_answer(&corpus, &answer).unwrap();

        let events = submit(&mut board, &answer);

        prop_assert_eq!(board.status(), GameStatus::Won);
        prop_assert!(board.rows()[0].tiles().iter().all(|t| t.state() == TileState::Correct));
        prop_assert_eq!(events.last(), Some(&Notification::GameOver(GameStatus::Won)));
    }

    /// Backspace never moves the cursor below column zero
    #[test]
    fn backspace_clamps_at_column_zero(typed in 0usize..=WORD_LENGTH, deletes in 0usize..20) {
        let corpus = WordCorpus::new(WORDS, ["speed"]).unwrap();
        let mut board = BoardEngine::with_answer(&corpus, "speed").unwrap();
        let mut events = Vec::new();

        for c in "crane".chars().take(typed) {
            board.handle(InputEvent::Letter(c), &mut events);
        }
        for _ in 0..deletes {
            board.handle(InputEvent::Backspace, &mut events);
        }

        prop_assert_eq!(board.cursor(), (0, typed.saturating_sub(deletes)));
    }

    /// A rejected word changes nothing but the invalid flag
    #[test]
    fn invalid_word_leaves_board_untouched(guess in word()) {
        prop_assume!(!WORDS.contains(&guess.as_str()));
        let corpus = WordCorpus::new(WORDS, ["speed"]).unwrap();
        let mut board = BoardEngine::with_answer(&corpus, "speed").unwrap();

        let mut events = Vec::new();
        for c in guess.chars() {
            board.handle(InputEvent::Letter(c), &mut events);
        }
        let rows = *board.rows();

        board.handle(InputEvent::Submit, &mut events);

        prop_assert_eq!(*board.rows(), rows);
        prop_assert_eq!(board.cursor(), (0, WORD_LENGTH));
        prop_assert!(board.invalid_word_shown());
        prop_assert_eq!(board.status(), GameStatus::Playing);
    }

    /// Six valid misses lose, and nothing after that is scored
    #[test]
    fn six_misses_lose(picks in prop::collection::vec(0..WORDS.len() - 1, MAX_ATTEMPTS + 1)) {
        // Last entry is the answer, so every pick is a miss
        let corpus = WordCorpus::new(WORDS, ["speed"]).unwrap();
        let mut board = BoardEngine::with_answer(&corpus, "speed").unwrap();

        for &i in &picks[..MAX_ATTEMPTS] {
            prop_assert_eq!(board.status(), GameStatus::Playing);
            submit(&mut board, WORDS[i]);
        }
        prop_assert_eq!(board.status(), GameStatus::Lost);

        let rows = *board.rows();
        let events = submit(&mut board, WORDS[picks[MAX_ATTEMPTS]]);
        prop_assert!(events.is_empty());
        prop_assert_eq!(*board.rows(), rows);
        prop_assert_eq!(board.attempts_used(), MAX_ATTEMPTS);
    }

    /// Retry keeps the answer and clears the board
    #[test]
    fn retry_preserves_answer(seed in any::<u64>(), picks in prop::collection::vec(0..WORDS.len(), 0..4)) {
        let corpus = WordCorpus::new(WORDS, WORDS).unwrap();
        let mut board = BoardEngine::with_rng(&corpus, &mut StdRng::seed_from_u64(seed)).unwrap();
        let answer = board.answer().clone();

        for &i in &picks {
            submit(&mut board, WORDS[i]);
        }
        board.retry();

        prop_assert_eq!(board.answer(), &answer);
        prop_assert_eq!(board.cursor(), (0, 0));
        prop_assert_eq!(board.status(), GameStatus::Playing);
        prop_assert!(board.rows().iter().all(|r| r.tiles().iter().all(|t| t.is_empty())));
    }
}
