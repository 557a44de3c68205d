use crate::MAX_SCORE;
use crate::Score;
use serde::Serialize;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// running totals shared by every worker
#[derive(Debug, Default)]
pub struct Tally {
    games: AtomicUsize,
    score: AtomicUsize,
    perfect: AtomicUsize,
}

impl Tally {
    pub fn record(&self, score: Score) {
        self.games.fetch_add(1, Ordering::Relaxed);
        self.score.fetch_add(score as usize, Ordering::Relaxed);
        if score == MAX_SCORE {
            self.perfect.fetch_add(1, Ordering::Relaxed);
        }
    }
    pub fn games(&self) -> usize {
        self.games.load(Ordering::Relaxed)
    }
    pub fn score(&self) -> usize {
        self.score.load(Ordering::Relaxed)
    }
    pub fn perfect(&self) -> usize {
        self.perfect.load(Ordering::Relaxed)
    }
    pub fn summary(&self, elapsed: Duration) -> Summary {
        let games = self.games();
        let ratio = |n: usize| match games {
            0 => 0.0,
            g => n as f64 / g as f64,
        };
        Summary {
            games,
            score: self.score(),
            perfect: self.perfect(),
            average: ratio(self.score()),
            perfect_rate: ratio(self.perfect()),
            seconds: elapsed.as_secs_f64(),
        }
    }
}

/// the outcome of a batch of games
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub score: usize,
    pub perfect: usize,
    pub average: f64,
    pub perfect_rate: f64,
    pub seconds: f64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} games, average {:.4}, perfect {:.2}%, {:.1}s",
            self.games,
            self.average,
            self.perfect_rate * 100.0,
            self.seconds
        )
    }
}
