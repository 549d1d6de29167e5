//! DashWords - CLI
//!
//! Five-letter word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashwords::{
    commands::{SimulationConfig, evaluate_guess, run_simple, run_simulation},
    game::Session,
    output::{print_evaluation, print_simulation_result},
    wordlists::{WordList, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[command(
    name = "dashwords",
    about = "Guess the five-letter word in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write log events to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show the feedback a guess gets against a secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Play many games with a random guesser and report the scores
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Install the tracing subscriber
///
/// Events go to `log_file` when given. Otherwise the TUI discards them, since
/// anything written to the terminal would tear the alternate screen, and the
/// other modes log to stderr.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if tui => (BoxMakeWriter::new(io::sink), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();

    Ok(())
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    let words = match wordlist {
        "embedded" => WordList::embedded().context("embedded word list is empty")?,
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'"))?,
    };
    info!(words = words.len(), source = wordlist, "word list loaded");
    Ok(words)
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let words = load_wordlist(&cli.wordlist)?;
            run_play_command(&words, cli.seed)
        }
        Commands::Simple => {
            let words = load_wordlist(&cli.wordlist)?;
            run_simple_command(&words, cli.seed)
        }
        Commands::Evaluate { secret, guess } => run_evaluate_command(&secret, &guess),
        Commands::Simulate { count } => {
            let words = load_wordlist(&cli.wordlist)?;
            run_simulate_command(&words, count, cli.seed);
            Ok(())
        }
    }
}

fn run_evaluate_command(secret: &str, guess: &str) -> Result<()> {
    let result = evaluate_guess(secret, guess)?;
    print_evaluation(&result);
    Ok(())
}

fn run_simulate_command(words: &WordList, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {count} games over {} words (seed {seed})...", words.len());

    let result = run_simulation(words, &SimulationConfig::new(count, seed));
    print_simulation_result(&result);
}

fn run_simple_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(words, rng_from_seed(seed));
    let stats = run_simple(&mut session).context("failed to read input")?;
    info!(games = stats.total_games, won = stats.games_won, "simple mode finished");
    Ok(())
}

fn run_play_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    use dashwords::interactive::{App, run_tui};

    let app = App::new(Session::new(words, rng_from_seed(seed)));
    run_tui(app)
}
