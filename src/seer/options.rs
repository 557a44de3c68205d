use super::intent::Intent;
use crate::MAX_HINTS;
use crate::cards::Hand;
use crate::game::Played;

/// candidate intents for one hand, in the order searches try them:
///
/// 1. one play per distinct playable card
/// 2. with a hint to regain, the first dead card, else the first duplicate,
///    one discard either way
/// 3. a hint, if any tokens remain
/// 4. with `forced`, and nothing safe to throw, every card as a discard
///
/// the order doubles as the tie-break in both searches.
pub fn options(hand: Hand, played: &Played, hints: u8, forced: bool) -> Vec<Intent> {
    let cards = hand.cards();
    let mut options = Vec::with_capacity(cards.len() + 2);

    cards
        .iter()
        .enumerate()
        .filter(|(i, card)| !cards[..*i].contains(card))
        .filter(|(_, card)| played.is_playable(**card))
        .for_each(|(_, card)| options.push(Intent::Play(*card)));

    let mut safe = false;
    if hints < MAX_HINTS {
        if let Some(card) = cards.iter().find(|c| played.is_discardable(**c)) {
            options.push(Intent::Discard(*card));
            safe = true;
        } else if let Some(i) = (0..cards.len()).find(|i| cards[i + 1..].contains(&cards[*i])) {
            options.push(Intent::Discard(cards[i]));
            safe = true;
        }
    }

    if hints > 0 {
        options.push(Intent::Hint);
    }

    if forced && !safe && hints < MAX_HINTS {
        options.extend(cards.iter().map(|c| Intent::Discard(*c)));
    }

    options
}
