use super::endgame::DEAD;
use super::intent::Intent;
use crate::Position;
use crate::cards::Card;
use crate::cards::Permutation;
use crate::game::Clue;
use crate::game::Decision;
use crate::game::GameState;

/// turn an omniscient intent back into a move on the real table.
///
/// with `canonical`, the intent speaks about the relabelled colours of an
/// Endgame snapshot of `state`; colours are mapped back first, and the dead
/// card matches whichever dead card the real hand holds first. a hint
/// becomes a value hint on the first card of a fixed neighbour.
pub fn translate(intent: Intent, state: &GameState, canonical: bool) -> Decision {
    match intent {
        Intent::Play(card) => Decision::Play(locate(card, state, canonical)),
        Intent::Discard(card) => Decision::Discard(locate(card, state, canonical)),
        Intent::Hint => {
            let hintee = neighbour(state);
            let value = state.hand(hintee)[0].value();
            Decision::Hint(hintee, Clue::Value(value))
        }
    }
}

fn locate(card: Card, state: &GameState, canonical: bool) -> Position {
    let hand = state.hand(state.current());
    let position = if canonical {
        let real = Permutation::ascending(&state.played().values())
            .inverse()
            .card(card);
        hand.iter()
            .position(|c| c == real || (card == DEAD && state.is_discardable(c)))
    } else {
        hand.position(card)
    };
    match position {
        Some(pos) => pos,
        None => panic!("{} has no counterpart in hand {}", card, hand),
    }
}

/// seat 1 for even seats, seat 0 for odd ones, so never the actor.
/// falls through to the next seat holding cards if that hand is empty.
fn neighbour(state: &GameState) -> Position {
    let fixed = (state.current() & 1) ^ 1;
    (0..state.players())
        .map(|offset| (fixed + offset) % state.players())
        .filter(|seat| *seat != state.current())
        .find(|seat| state.hand(*seat).size() > 0)
        .unwrap_or(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Colour::*;
    use crate::cards::Hand;

    fn card(colour: crate::cards::Colour, value: u8) -> Card {
        Card::from((colour, value))
    }

    /// played is {B1 G0 R0 W4 Y0}, seat 2 to act holding R3 B2
    fn fixture() -> GameState {
        let mut g = GameState::new(4);
        g.played.play(Blue);
        (0..4).for_each(|_| g.played.play(White));
        g.current = 2;
        g.hands[2].add(card(Red, 3));
        g.hands[2].add(card(Blue, 2));
        g
    }

    #[test]
    fn canonical_play() {
        let g = fixture();
        assert!(translate(Intent::Play(card(White, 2)), &g, true) == Decision::Play(1));
    }

    #[test]
    fn literal_play() {
        let g = fixture();
        assert!(translate(Intent::Play(card(Blue, 2)), &g, false) == Decision::Play(1));
    }

    #[test]
    fn canonical_discard() {
        let g = fixture();
        assert!(translate(Intent::Discard(card(Green, 3)), &g, true) == Decision::Discard(0));
    }

    #[test]
    fn hint_the_neighbour() {
        let mut g = fixture();
        g.hands[0].add(card(Red, 3));
        g.hands[1].add(card(Red, 3));
        g.hands[3].add(card(Red, 3));
        assert!(translate(Intent::Hint, &g, true) == Decision::Hint(1, Clue::Value(3)));
    }

    #[test]
    fn dead_card_matches_any_dead_card() {
        let mut g = fixture();
        g.hands[2] = Hand::try_from("R3 W2 B1").unwrap();
        assert!(translate(Intent::Discard(DEAD), &g, true) == Decision::Discard(1));
    }

    #[test]
    fn hint_skips_an_empty_neighbour() {
        let mut g = fixture();
        g.hands[3].add(card(Green, 4));
        assert!(translate(Intent::Hint, &g, true) == Decision::Hint(3, Clue::Value(4)));
    }

    #[test]
    #[should_panic]
    fn missing_card_is_a_bug() {
        let g = fixture();
        translate(Intent::Play(card(Yellow, 5)), &g, false);
    }
}
