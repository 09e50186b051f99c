//! Cumulative statistics across sessions

use serde::{Deserialize, Serialize};

/// Running totals over every finished session
///
/// Only `record_outcome` changes these numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    games_played: u32,
    wins: u32,
    current_streak: u32,
}

/// Read-only view for display
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub games_played: u32,
    pub win_percentage: u32,
    pub current_streak: u32,
}

impl Statistics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games_played: 0,
            wins: 0,
            current_streak: 0,
        }
    }

    /// Count one finished session
    ///
    /// Counters saturate at `u32::MAX` so loaded extremes cannot wrap.
    pub fn record_outcome(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Percentage of games won, rounded half up; 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let wins = u64::from(self.wins);
        let played = u64::from(self.games_played);
        // round(100 * wins / played) without going through floats
        ((200 * wins + played) / (2 * played)) as u32
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            games_played: self.games_played,
            win_percentage: self.win_percentage(),
            current_streak: self.current_streak,
        }
    }

    /// Whether the counters satisfy `wins <= games_played` and
    /// `current_streak <= wins`
    ///
    /// Always true for values built through `record_outcome`; loaded data
    /// may not be.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.wins <= self.games_played && self.current_streak <= self.wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_statistics_are_zero() {
        let stats = Statistics::new();
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.win_percentage(), 0);
    }

    #[test]
    fn wins_extend_streak() {
        let mut stats = Statistics::new();
        stats.record_outcome(true);
        stats.record_outcome(true);

        assert_eq!(stats.games_played(), 2);
        assert_eq!(stats.wins(), 2);
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.win_percentage(), 100);
    }

    #[test]
    fn loss_resets_streak_but_keeps_wins() {
        let mut stats = Statistics::new();
        stats.record_outcome(true);
        stats.record_outcome(false);

        assert_eq!(stats.games_played(), 2);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                games_played: 2,
                win_percentage: 50,
                current_streak: 0,
            }
        );
    }

    #[test]
    fn win_percentage_rounds_half_up() {
        let mut stats = Statistics::new();
        // 1 of 3 = 33.33 -> 33
        stats.record_outcome(true);
        stats.record_outcome(false);
        stats.record_outcome(false);
        assert_eq!(stats.win_percentage(), 33);

        // 2 of 3 = 66.67 -> 67
        let mut stats = Statistics::new();
        stats.record_outcome(true);
        stats.record_outcome(true);
        stats.record_outcome(false);
        assert_eq!(stats.win_percentage(), 67);

        // 1 of 8 = 12.5 -> 13
        let mut stats = Statistics::new();
        stats.record_outcome(true);
        for _ in 0..7 {
            stats.record_outcome(false);
        }
        assert_eq!(stats.win_percentage(), 13);
    }

    #[test]
    fn consistency_check() {
        let mut stats = Statistics::new();
        stats.record_outcome(true);
        assert!(stats.is_consistent());

        let broken: Statistics =
            serde_json::from_str(r#"{"games_played":1,"wins":3,"current_streak":0}"#).unwrap();
        assert!(!broken.is_consistent());
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut stats: Statistics = serde_json::from_str(
            r#"{"games_played":4294967295,"wins":4294967295,"current_streak":4294967295}"#,
        )
        .unwrap();
        stats.record_outcome(true);
        assert_eq!(stats.games_played(), u32::MAX);
        assert_eq!(stats.wins(), u32::MAX);
        assert_eq!(stats.current_streak(), u32::MAX);
        assert_eq!(stats.win_percentage(), 100);

        let mut stats: Statistics =
            serde_json::from_str(r#"{"games_played":4294967295,"wins":0,"current_streak":0}"#)
                .unwrap();
        stats.record_outcome(false);
        assert_eq!(stats.games_played(), u32::MAX);
        assert_eq!(stats.current_streak(), 0);
        assert!(stats.is_consistent());
    }
}
