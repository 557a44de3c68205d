use super::config::SeerConfig;
use super::endgame::Endgame;
use super::intent::Intent;
use super::key::Key;
use super::options::options;
use crate::MAX_SCORE;
use crate::PERFECT_SCALE;
use crate::Utility;
use std::collections::HashMap;

/// Solver finds the intent with the highest expected final score
/// from a canonical Endgame, averaging over every order the remaining
/// cards could be drawn in. solved positions are remembered for the
/// lifetime of the solver, so one solver follows one game.
#[derive(Debug, Default)]
pub struct Solver {
    config: SeerConfig,
    memo: HashMap<Key, (Intent, Utility)>,
}

impl From<SeerConfig> for Solver {
    fn from(config: SeerConfig) -> Self {
        Self {
            config,
            memo: HashMap::new(),
        }
    }
}

impl Solver {
    pub fn solve(&mut self, endgame: &Endgame) -> (Intent, Utility) {
        let solution = self.search(endgame);
        log::debug!(
            "solved {} at {:.4} with {} positions memoized",
            solution.0,
            solution.1,
            self.memo.len()
        );
        solution
    }

    pub fn memoized(&self) -> usize {
        self.memo.len()
    }

    fn search(&mut self, endgame: &Endgame) -> (Intent, Utility) {
        assert!(endgame.current() == 0, "endgame is not canonical");
        if endgame.is_over() {
            return (Intent::Hint, self.terminal(endgame));
        }
        let key = endgame.key();
        if let Some(solution) = self.memo.get(&key) {
            return *solution;
        }
        let solution = self.expand(endgame);
        self.memo.insert(key, solution);
        solution
    }

    fn terminal(&self, endgame: &Endgame) -> Utility {
        let score = endgame.score();
        if self.config.optimize_for_perfect && score != MAX_SCORE {
            score as Utility / PERFECT_SCALE
        } else {
            score as Utility
        }
    }

    /// the first option with the strictly best expectation wins
    fn expand(&mut self, endgame: &Endgame) -> (Intent, Utility) {
        let mut best: Option<(Intent, Utility)> = None;
        for intent in options(endgame.hand(0), endgame.played(), endgame.hints(), true) {
            let value = self.expect(endgame, intent);
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((intent, value));
            }
            if value == MAX_SCORE as Utility {
                break;
            }
            if endgame.deck_size() == 0 && !intent.is_play() {
                break;
            }
        }
        debug_assert!(best.is_some(), "no options in a live endgame");
        best.unwrap_or((Intent::Hint, 0.0))
    }

    /// average over every card that could be drawn next
    fn expect(&mut self, endgame: &Endgame, intent: Intent) -> Utility {
        let draws = endgame.deck_size().max(1);
        let total = (0..draws)
            .map(|index| {
                let mut next = *endgame;
                next.update_and_advance(intent, index);
                self.search(&next).1
            })
            .sum::<Utility>();
        total / draws as Utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::game::Nature;

    /// four players, the deck exhausted, one final turn each
    fn exhausted(seed: u32) -> Nature {
        let mut nature = Nature::new(4, seed);
        while !nature.deck().is_empty() {
            nature.draw();
        }
        for seat in 0..4 {
            nature.hands[seat] = Hand::empty();
        }
        nature
    }

    #[test]
    fn plays_the_playable_card() {
        let mut nature = exhausted(0);
        nature.played = crate::game::Played::from([3, 2, 1, 4, 0]);
        nature.hands[0] = Hand::try_from("R2 W1").unwrap();
        nature.actions = Some(1);
        let endgame = Endgame::from(&nature);
        let mut solver = Solver::from(SeerConfig {
            optimize_for_perfect: false,
            ..SeerConfig::default()
        });
        let (intent, value) = solver.solve(&endgame);
        assert!(intent.is_play());
        assert!(value == (nature.played().total() + 1) as Utility);
    }

    #[test]
    fn perfect_lines_dominate() {
        let mut nature = exhausted(1);
        nature.played = crate::game::Played::from([5, 5, 5, 5, 4]);
        nature.hands[0] = Hand::try_from("B1 Y5").unwrap();
        nature.actions = Some(2);
        let endgame = Endgame::from(&nature);
        let mut solver = Solver::default();
        let (intent, value) = solver.solve(&endgame);
        assert!(value == MAX_SCORE as Utility);
        assert!(intent.card().map(|c| c.value()) == Some(5));
        assert!(intent.is_play());
    }

    #[test]
    fn imperfect_scores_are_scaled() {
        let mut nature = exhausted(2);
        nature.played = crate::game::Played::from([1, 0, 0, 0, 0]);
        nature.hands[0] = Hand::try_from("G4").unwrap();
        nature.actions = Some(1);
        nature.hints = 0;
        let endgame = Endgame::from(&nature);
        let (_, value) = Solver::from(SeerConfig::default()).solve(&endgame);
        assert!(value == 1.0 / PERFECT_SCALE);
    }

    #[test]
    fn waits_for_a_teammate() {
        // the four only becomes playable after seat 1 plays the three,
        // and seat 0 gets no second turn
        let mut nature = exhausted(3);
        nature.played = crate::game::Played::from([2, 5, 5, 5, 5]);
        nature.hands[0] = Hand::try_from("B4 G1").unwrap();
        nature.hands[1] = Hand::try_from("B3").unwrap();
        nature.actions = Some(2);
        nature.hints = 3;
        let endgame = Endgame::from(&nature);
        let mut solver = Solver::from(SeerConfig {
            optimize_for_perfect: false,
            ..SeerConfig::default()
        });
        let (intent, value) = solver.solve(&endgame);
        assert!(!intent.is_play());
        assert!(value == 23.0);
        assert!(solver.memoized() > 0);
    }

    #[test]
    fn memo_is_reused() {
        let mut nature = Nature::new(4, 7);
        while nature.deck().size() > 2 {
            nature.draw();
        }
        let endgame = Endgame::from(&nature);
        let mut solver = Solver::default();
        let first = solver.solve(&endgame);
        let size = solver.memoized();
        let again = solver.solve(&endgame);
        assert!(first == again);
        assert!(solver.memoized() == size);
    }
}
