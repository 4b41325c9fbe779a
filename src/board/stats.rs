//! Session statistics over finished games

use super::GameStatus;
use crate::core::MAX_ATTEMPTS;

/// Win/loss tally and guess distribution
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress are not counted.
    pub fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::Playing => {}
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
            }
        }
    }

    #[must_use]
    pub fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }

    /// Combine two tallies
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.total_games += other.total_games;
        self.games_won += other.games_won;
        for (mine, theirs) in self
            .guess_distribution
            .iter_mut()
            .zip(other.guess_distribution)
        {
            *mine += theirs;
        }
        self
    }
}
