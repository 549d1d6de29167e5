//! Per-run game statistics
//!
//! Tallied by front ends as games finish; never part of [`GameState`](super::GameState).

use super::Status;
use crate::core::MAX_ATTEMPTS;

/// Results of the games finished in this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_score: u32,
    pub total_score: u32,
    /// Wins by number of rows used, index 1..=5
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Count a finished game
    pub fn record(&mut self, status: Status, score: u32, rows_used: usize) {
        self.total_games += 1;
        if status == Status::Won {
            self.games_won += 1;
            self.total_score += score;
            self.best_score = self.best_score.max(score);
            if rows_used <= MAX_ATTEMPTS {
                self.guess_distribution[rows_used] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(Status::Won, 25, 1);
        stats.record(Status::Won, 15, 3);
        stats.record(Status::Lost, 0, 5);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.best_score, 25);
        assert_eq!(stats.total_score, 40);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 1, 0, 0]);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
