use super::executor::Executor;
use super::tally::Summary;
use super::tally::Tally;
use crate::Score;
use crate::agents::AgentKind;
use crate::game::Nature;
use crate::seer::SeerConfig;
use anyhow::Context;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Pool plays a batch of seeds across a fixed number of threads.
/// workers pull the next unplayed seed from a shared counter and play
/// it to the end on their own stack with their own agent, so nothing
/// but the tally is shared.
#[derive(Debug, Clone, Copy)]
pub struct Pool {
    pub players: usize,
    pub agent: AgentKind,
    pub config: SeerConfig,
    pub threads: usize,
    /// log any game scoring this or lower
    pub record_score: Score,
    /// log any game taking this long or longer
    pub record_time: Duration,
}

impl Pool {
    pub fn run(&self, seeds: &[u32]) -> anyhow::Result<Summary> {
        crate::cards::init(self.players < 4);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .context("build thread pool")?;
        log::info!(
            "playing {} seeds with {} {} agents on {} threads",
            seeds.len(),
            self.players,
            self.agent,
            self.threads
        );
        let next = AtomicUsize::new(0);
        let tally = Tally::default();
        let start = Instant::now();
        pool.broadcast(|_| self.work(seeds, &next, &tally));
        let summary = tally.summary(start.elapsed());
        log::info!("{}", summary);
        Ok(summary)
    }

    /// play one seed start to finish
    pub fn game(&self, seed: u32) -> (Score, Duration) {
        let start = Instant::now();
        let nature = Nature::new(self.players, seed);
        let score = Executor::new(nature, self.agent.build(self.config)).play(false);
        (score, start.elapsed())
    }

    fn work(&self, seeds: &[u32], next: &AtomicUsize, tally: &Tally) {
        while let Some(seed) = seeds.get(next.fetch_add(1, Ordering::Relaxed)).copied() {
            let (score, time) = self.game(seed);
            tally.record(score);
            if score <= self.record_score || time >= self.record_time {
                log::info!(
                    "seed {:>10} scored {:>2} in {:>8.3}s",
                    seed,
                    score,
                    time.as_secs_f64()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(threads: usize) -> Pool {
        Pool {
            players: 4,
            agent: AgentKind::Heuristic,
            config: SeerConfig::default(),
            threads,
            record_score: 0,
            record_time: Duration::MAX,
        }
    }

    #[test]
    fn every_seed_is_played_once() {
        let summary = pool(3).run(&[1, 2, 3, 4, 5]).unwrap();
        assert!(summary.games == 5);
    }

    #[test]
    fn thread_count_does_not_change_the_outcome() {
        let seeds = [8, 9, 10, 11];
        let one = pool(1).run(&seeds).unwrap();
        let many = pool(4).run(&seeds).unwrap();
        assert!(one.score == many.score);
        assert!(one.perfect == many.perfect);
    }
}
