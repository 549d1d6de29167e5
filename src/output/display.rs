//! Display functions for game state and command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{EvaluationResult, SimulationResult};
use crate::core::{MAX_ATTEMPTS, POINTS_PER_SPARE_GUESS};
use crate::game::{GameState, Statistics, Status};
use colored::Colorize;

/// Print every row of the grid with its feedback colours
pub fn print_grid(state: &GameState) {
    println!();
    for (i, (row, feedback)) in state.guesses().iter().zip(state.feedback()).enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            colored_row(row, *feedback)
        );
    }
    println!();
}

/// Print the win or loss message for a finished game
pub fn print_outcome(state: &GameState) {
    match state.status() {
        Status::Won => println!(
            "{}",
            format!("🎉 Congratulations! You've won {} points!", state.score())
                .green()
                .bold()
        ),
        Status::Lost => println!(
            "{}",
            format!("Sorry, you lost. The word was: {}", state.secret())
                .red()
                .bold()
        ),
        Status::InProgress => return,
    }
    println!("Type 'restart' to play again or 'leaderboard' to see your results.\n");
}

/// Print the result of evaluating a single guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", result.feedback.to_emoji());
    println!(
        "  Correct: {}   Present: {}",
        result.feedback.count_correct(),
        result.feedback.count_present()
    );

    if result.solved {
        println!(
            "\n{}",
            format!(
                "✅ Exact match! A first-guess win scores {} points.",
                MAX_ATTEMPTS as u32 * POINTS_PER_SPARE_GUESS
            )
            .green()
            .bold()
        );
    }
}

/// Print the leaderboard view of finished games
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Games won:     {} ({:.0}%)",
        stats.games_won,
        stats.win_rate()
    );
    println!(
        "   Best score:    {}",
        stats.best_score.to_string().bright_yellow().bold()
    );
    println!("   Total points:  {}", stats.total_score);
    print_distribution(stats);
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Average score:    {:.2}", result.average_score());
    println!("   Best score:       {}", stats.best_score);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    print_distribution(stats);
}

fn print_distribution(stats: &Statistics) {
    println!("\n📈 {}", "Wins by guesses:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
}
