use super::config::SeerConfig;
use super::intent::Intent;
use super::options::options;
use super::ranking::Ranking;
use crate::MAX_HINTS;
use crate::WINNABLE_DISCARDS;
use crate::cards::Hand;
use crate::game::Discarded;
use crate::game::GameState;
use crate::game::Played;

/// Planner looks one round ahead without drawing: every player in turn
/// order, starting with the one to act, tries each of their options
/// against the fireworks, hints and discards left by the players before
/// them. each finished round is ranked, and the first move of the best
/// round is the recommendation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Planner {
    config: SeerConfig,
}

impl From<SeerConfig> for Planner {
    fn from(config: SeerConfig) -> Self {
        Self { config }
    }
}

/// the branch-local state carried from one seat to the next
#[derive(Debug, Clone, Copy)]
struct Branch {
    played: Played,
    hints: u8,
    discarded: Discarded,
    actions: u8,
}

impl Planner {
    pub fn plan(&self, state: &GameState) -> Intent {
        let hand = state.hand(state.current());
        let first = options(hand, state.played(), state.hints(), false)
            .first()
            .copied();
        match first {
            Some(discard @ Intent::Discard(_)) if state.discarded().total() < WINNABLE_DISCARDS => {
                return discard;
            }
            Some(Intent::Hint) if state.hints() == MAX_HINTS => {
                return Intent::Hint;
            }
            _ => {}
        }
        let hands = (0..state.players())
            .map(|offset| state.hand(state.seat(offset)))
            .collect::<Vec<Hand>>();
        let root = Branch {
            played: *state.played(),
            hints: state.hints(),
            discarded: *state.discarded(),
            actions: 0,
        };
        let (ranking, intent) = self.maximize(&hands, 0, root);
        log::trace!("planned {} ranked {}", intent, ranking);
        intent
    }

    fn leaf(&self, branch: Branch) -> (Ranking, Intent) {
        let ranking = Ranking::new(
            branch.played,
            branch.hints,
            branch.discarded,
            branch.actions,
            &self.config,
        );
        (ranking, Intent::Hint)
    }

    /// best (ranking, first intent) over every line from seat `off` onward.
    /// ties go to the earlier option unless a later one is more active.
    fn maximize(&self, hands: &[Hand], off: usize, branch: Branch) -> (Ranking, Intent) {
        if off == hands.len() {
            return self.leaf(branch);
        }
        let candidates = options(hands[off], &branch.played, branch.hints, true);
        if candidates.is_empty() {
            return self.leaf(branch);
        }
        let mut best: Option<(Ranking, Intent)> = None;
        for intent in candidates {
            let mut next = branch;
            match intent {
                Intent::Play(card) => {
                    next.played.play(card.colour());
                    next.actions += 1;
                }
                Intent::Hint => next.hints -= 1,
                Intent::Discard(card) => {
                    next.discarded.discard(card);
                    next.hints += 1;
                    next.actions += 1;
                }
            }
            let (mut ranking, _) = self.maximize(hands, off + 1, next);
            if let Intent::Discard(card) = intent {
                if !branch.played.is_discardable(card) {
                    let copies = hands.iter().map(|h| h.count(card)).sum::<usize>();
                    if copies == 1 {
                        ranking.bury(card);
                    }
                    if self.config.track_hand_weight {
                        ranking.weigh(hands[off]);
                    }
                }
            }
            let better = match best {
                None => true,
                Some((r, i)) => (ranking, intent.priority()) > (r, i.priority()),
            };
            if better {
                best = Some((ranking, intent));
            }
        }
        best.unwrap_or_else(|| self.leaf(branch))
    }
}
