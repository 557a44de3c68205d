use super::Agent;
use crate::ENDGAME_DECK;
use crate::MAX_SCORE;
use crate::game::Decision;
use crate::game::Nature;
use crate::seer::Endgame;
use crate::seer::Planner;
use crate::seer::SeerConfig;
use crate::seer::Solver;
use crate::seer::translate;

/// Seer sees every hand, including its own. with five or fewer cards
/// left it searches the endgame exactly, otherwise it plans one round
/// ahead. its memo table lives as long as the agent, so one agent
/// should follow one game.
#[derive(Debug, Default)]
pub struct Seer {
    config: SeerConfig,
    solver: Solver,
    planner: Planner,
}

impl From<SeerConfig> for Seer {
    fn from(config: SeerConfig) -> Self {
        Self {
            config,
            solver: Solver::from(config),
            planner: Planner::from(config),
        }
    }
}

impl Seer {
    /// whether a perfect game is still arithmetically possible
    fn can_win(nature: &Nature) -> bool {
        nature.score() as usize + nature.deck_size() + nature.players() >= MAX_SCORE as usize
    }

    fn should_solve(&self, nature: &Nature) -> bool {
        let deck = nature.deck_size();
        deck <= ENDGAME_DECK && (self.config.always_brute_force || deck == 0 || Self::can_win(nature))
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }
}

impl Agent for Seer {
    fn act(&mut self, nature: &Nature) -> Decision {
        if self.should_solve(nature) {
            let (intent, value) = self.solver.solve(&Endgame::from(nature));
            log::trace!("seer expects {:.4} from {}", value, intent);
            translate(intent, nature.state(), true)
        } else {
            let intent = self.planner.plan(nature.state());
            translate(intent, nature.state(), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;

    fn near_the_end(seed: u32, left: usize) -> Nature {
        let mut nature = Nature::new(4, seed);
        while nature.deck_size() > left {
            nature.draw();
        }
        nature
    }

    #[test]
    fn plans_with_a_full_deck() {
        let mut seer = Seer::default();
        let nature = Nature::new(4, 5);
        seer.act(&nature);
        assert!(seer.solver().memoized() == 0);
    }

    #[test]
    fn solves_a_short_deck() {
        let mut seer = Seer::default();
        let nature = near_the_end(5, 2);
        seer.act(&nature);
        assert!(seer.solver().memoized() > 0);
    }

    #[test]
    fn hopeless_endgames_are_planned_unless_forced() {
        let nature = near_the_end(5, 3);
        assert!(!Seer::can_win(&nature));
        let mut seer = Seer::from(SeerConfig {
            always_brute_force: false,
            ..SeerConfig::default()
        });
        seer.act(&nature);
        assert!(seer.solver().memoized() == 0);
    }

    /// play one game with a fresh seer, returning the action log
    /// and how many endgame positions it solved along the way
    fn replay(seed: u32) -> (Vec<Action>, usize) {
        let mut seer = Seer::default();
        let mut nature = Nature::new(4, seed);
        let mut actions = Vec::new();
        loop {
            let action = nature.resolve(seer.act(&nature));
            actions.push(action);
            nature.update(&action);
            if nature.is_over() {
                break;
            }
            seer.inform(&action);
            nature.advance_turn();
        }
        (actions, seer.solver().memoized())
    }

    #[test]
    fn endgame_replay_is_deterministic() {
        let (seed, actions, solved) = (0..8)
            .map(|seed| {
                let (actions, solved) = replay(seed);
                (seed, actions, solved)
            })
            .find(|(_, _, solved)| *solved > 0)
            .unwrap();
        let (again, resolved) = replay(seed);
        assert!(actions == again);
        assert!(solved == resolved);
    }
}
