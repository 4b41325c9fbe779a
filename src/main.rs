//! Word Board - CLI
//!
//! Play the word-guessing puzzle in a TUI or as plain text, score single
//! guesses, or run self-play simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_board::{
    board::BoardEngine,
    commands::{SimulationConfig, run_simple, run_simulation, score_words},
    corpus::{ALLOWED, SOLUTIONS, WordCorpus, loader::{load_from_file, words_from_slice}},
    logging::init_logging,
    output::{print_score_result, print_simulation_result, print_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted guesses: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Solution pool file (default: embedded list)
    #[arg(short = 's', long, global = true)]
    solutions: Option<String>,

    /// Seed for reproducible answer draws
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,

    /// Score one guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Play many self-play games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Build the corpus from the -w and -s flags
fn load_corpus(wordlist: &str, solutions: Option<&str>) -> Result<WordCorpus> {
    let valid_words = match wordlist {
        "embedded" => words_from_slice(ALLOWED),
        path => load_from_file(path)
            .with_context(|| format!("loading accepted words from '{path}'"))?,
    };

    let solution_words = match solutions {
        None => words_from_slice(SOLUTIONS),
        Some(path) => {
            load_from_file(path).with_context(|| format!("loading solutions from '{path}'"))?
        }
    };

    WordCorpus::new(valid_words, solution_words).context("building word corpus")
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist, cli.solutions.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, cli.seed),
        Commands::Simple => run_simple_command(&corpus, cli.seed),
        Commands::Score { guess, answer } => {
            let result = score_words(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simulate { count } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!(
                "Simulating {count} games over {} solutions, {} accepted words (seed {seed})...",
                corpus.solutions().len(),
                corpus.valid_count()
            );
            let result = run_simulation(&corpus, &SimulationConfig::new(count, seed))?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_simple_command(corpus: &WordCorpus, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut board = BoardEngine::with_rng(corpus, &mut rng)?;

    let stdin = io::stdin();
    run_simple(&mut board, &mut rng, stdin.lock(), &mut io::stdout())
        .context("text mode failed")?;
    Ok(())
}

fn run_play_command(corpus: &WordCorpus, seed: Option<u64>) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let mut rng = make_rng(seed);
    let board = BoardEngine::with_rng(corpus, &mut rng)?;
    let stats = run_tui(App::new(board, rng))?;

    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}
