use super::config::SeerConfig;
use crate::HINT_RESERVE;
use crate::N_COLOURS;
use crate::WINNABLE_DISCARDS;
use crate::cards::Card;
use crate::cards::Colour;
use crate::cards::Hand;
use crate::game::Discarded;
use crate::game::Played;

const INITIALIZED: usize = 0;
const ACTIONS_NZ: usize = 1;
const NUM_UNREACHABLE: usize = 2;
const WINNABLE: usize = 3;
const NUM_NON5_BURIED: usize = 4;
const SCORE_ORDER: usize = 5;
const SCORE: usize = SCORE_ORDER + N_COLOURS;
const MAGIC: usize = SCORE + 1;
const NUM_BLOCKED_WEIGHTED: usize = MAGIC + 1;
const NUM_HINTS: usize = NUM_BLOCKED_WEIGHTED + 1;
const CRITICAL_MASS_DELTA: usize = NUM_HINTS + 1;
const PLAYABLE_MASS_DELTA: usize = CRITICAL_MASS_DELTA + 1;
const LIMIT: usize = PLAYABLE_MASS_DELTA + 1;

/// Ranking scores the outcome of one simulated round as a tuple of
/// small integers compared lexicographically, higher is better:
///
/// | field | meaning |
/// |---|---|
/// | initialized | any real outcome beats the default |
/// | actions | someone played or discarded |
/// | unreachable | minus the value locked out of reach forever |
/// | winnable | discards still leave room for 25 |
/// | buried | minus the value of last copies thrown away |
/// | score order | played counts, ascending, to favour even progress |
/// | score | cards played |
/// | magic | minus one when hoarding hints under discard pressure |
/// | blocked | minus the value stuck behind a partly discarded card |
/// | hints | tokens left |
/// | critical, playable mass | hand weight of risky discards, when tracked |
///
/// the state it was computed from rides along for hand weighting
/// but takes no part in the ordering.
#[derive(Debug, Clone, Copy)]
pub struct Ranking {
    repr: [i8; LIMIT],
    played: Played,
    discarded: Discarded,
}

impl Default for Ranking {
    fn default() -> Self {
        Self {
            repr: [i8::MIN; LIMIT],
            played: Played::default(),
            discarded: Discarded::default(),
        }
    }
}

impl Ranking {
    pub fn new(played: Played, hints: u8, discarded: Discarded, actions: u8, config: &SeerConfig) -> Self {
        let mut repr = [i8::MIN; LIMIT];
        let (unreachable, blocked) = Self::criticals(&played, &discarded);
        let mut order = played.values().map(|v| v as i8);
        order.sort();
        repr[INITIALIZED] = 1;
        repr[ACTIONS_NZ] = (actions > 0) as i8;
        repr[NUM_UNREACHABLE] = -unreachable;
        repr[WINNABLE] = (discarded.total() <= WINNABLE_DISCARDS) as i8;
        repr[NUM_NON5_BURIED] = 0;
        repr[SCORE_ORDER..SCORE].copy_from_slice(&order);
        repr[SCORE] = played.total() as i8;
        let pressure = HINT_RESERVE.min(WINNABLE_DISCARDS - discarded.total());
        repr[MAGIC] = -((config.allow_magic && hints as i8 > pressure) as i8);
        repr[NUM_BLOCKED_WEIGHTED] = -blocked;
        repr[NUM_HINTS] = hints as i8;
        repr[CRITICAL_MASS_DELTA] = 0;
        repr[PLAYABLE_MASS_DELTA] = 0;
        Self {
            repr,
            played,
            discarded,
        }
    }

    /// (unreachable, blocked) value per colour. a colour becomes
    /// unreachable at the first value whose every copy is gone; each
    /// partly discarded value before that counts as blocked.
    pub fn criticals(played: &Played, discarded: &Discarded) -> (i8, i8) {
        let mut unreachable = 0;
        let mut blocked = 0;
        for colour in Colour::all() {
            for value in played.get(colour) + 1..=5 {
                let card = Card::from((colour, value));
                let weight = 6 - value as i8;
                if discarded.is_exhausted(card) {
                    unreachable += weight;
                    break;
                }
                if discarded.count(card) > 0 {
                    blocked += weight;
                }
            }
        }
        (unreachable, blocked)
    }

    /// penalize throwing away the last copy of a card
    pub fn bury(&mut self, card: Card) {
        self.repr[NUM_NON5_BURIED] -= 6 - card.value() as i8;
    }

    /// penalize risky discards from hands heavy with live cards
    pub fn weigh(&mut self, hand: Hand) {
        let live = hand
            .iter()
            .filter(|c| !self.played.is_discardable(*c))
            .collect::<Vec<Card>>();
        let critical = live
            .iter()
            .filter(|c| c.value() == 5 || self.discarded.count(**c) > 0)
            .count() as i8;
        let playable = live.len() as i8;
        self.repr[PLAYABLE_MASS_DELTA] -= playable * playable;
        self.repr[CRITICAL_MASS_DELTA] -= critical * critical;
    }

    pub fn is_bad(&self) -> bool {
        self.repr[MAGIC] != 0
    }
}

impl PartialEq for Ranking {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}
impl Eq for Ranking {}
impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let fields = self.repr.map(|x| x.to_string());
        write!(f, "[{}]", fields.join(" "))
    }
}
