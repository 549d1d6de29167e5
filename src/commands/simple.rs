//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line, grid printed after
//! every submission.

use crate::core::MAX_ATTEMPTS;
use crate::game::{Session, Statistics};
use crate::output::{print_grid, print_outcome, print_statistics};
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Returns the statistics of the games finished before the player quit or
/// input ended.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> io::Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     DashWords - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries. Type a guess and press Enter.");
    println!("  - Green: letter in the right spot");
    println!("  - Yellow: letter somewhere in the word");
    println!("Commands: 'restart', 'leaderboard', 'quit'\n");

    let mut stats = Statistics::default();

    loop {
        let state = session.state();
        let prompt = if state.is_over() {
            "Command (restart/leaderboard/quit)".to_string()
        } else {
            format!("Guess {}/{MAX_ATTEMPTS}", state.guess_count() + 1)
        };

        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(stats);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
            "restart" | "r" | "new" => {
                session.restart();
                println!("\n🔄 New game started!\n");
            }
            "leaderboard" | "l" => print_statistics(&stats),
            "" => {}
            guess => {
                if session.state().is_over() {
                    println!("The game is over. Type 'restart' to play again.\n");
                    continue;
                }

                session.submit_guess(guess);
                let state = session.state();
                print_grid(state);

                if state.is_over() {
                    stats.record(state.status(), state.score(), state.guesses().len());
                    print_outcome(state);
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
