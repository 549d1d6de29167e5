//! Simulation command
//!
//! Plays many games with a player that guesses random list words and reports
//! how the scoring rules play out. Games are independent and run in parallel.

use crate::game::{Session, Statistics, Status, pick_word};
use crate::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self { games, seed }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub stats: Statistics,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    /// Mean score over all games, losses included
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.stats.total_games == 0 {
            0.0
        } else {
            f64::from(self.stats.total_score) / self.stats.total_games as f64
        }
    }
}

struct GameOutcome {
    status: Status,
    score: u32,
    rows_used: usize,
}

/// Run `config.games` games against secrets drawn from `words`
///
/// Game `i` is seeded from `config.seed + i`, so a run is reproducible
/// regardless of how rayon schedules the games.
#[must_use]
pub fn run_simulation(words: &WordList, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|i| play_random_game(words, config.seed.wrapping_add(i as u64)))
        .collect();

    let mut stats = Statistics::default();
    for outcome in &outcomes {
        stats.record(outcome.status, outcome.score, outcome.rows_used);
    }

    let duration = start.elapsed();
    debug!(games = config.games, ?duration, "simulation finished");

    SimulationResult {
        games_per_second: stats.total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        stats,
        duration,
    }
}

fn play_random_game(words: &WordList, seed: u64) -> GameOutcome {
    let mut session = Session::new(words, StdRng::seed_from_u64(seed));
    let mut guesser = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);

    while !session.state().is_over() {
        let guess = pick_word(words, &mut guesser);
        session.submit_guess(guess.text());
    }

    let state = session.state();
    GameOutcome {
        status: state.status(),
        score: state.score(),
        rows_used: state.guesses().len(),
    }
}
