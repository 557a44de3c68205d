use super::intent::Intent;
use super::key::Key;
use crate::ENDGAME_DECK;
use crate::cards::Card;
use crate::cards::Colour;
use crate::cards::Hand;
use crate::cards::Permutation;
use crate::game::GameState;
use crate::game::Nature;

/// the single identity that stands in for every dead card
pub const DEAD: Card = Card::new(Colour::Yellow, 1);

/// Endgame is a game state with at most five cards left to draw,
/// the remaining deck laid out in a fixed padded array. every public
/// constructor and mutator leaves it canonical:
///
/// - colours relabelled so played counts ascend
/// - dead cards collapsed into one identity
/// - the player to act seated at 0
/// - the deck and every hand sorted
///
/// two positions that play out identically thus share one Key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Endgame {
    pub(crate) state: GameState,
    pub(crate) deck: [Card; ENDGAME_DECK],
}

impl std::ops::Deref for Endgame {
    type Target = GameState;
    fn deref(&self) -> &Self::Target {
        &self.state
    }
}
impl std::ops::DerefMut for Endgame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl From<&Nature> for Endgame {
    fn from(nature: &Nature) -> Self {
        let size = nature.deck_size();
        assert!(size <= ENDGAME_DECK, "{} cards is too many to solve", size);
        assert!(size == nature.deck().size());
        let mut deck = [Card::none(); ENDGAME_DECK];
        nature
            .deck()
            .remaining()
            .zip(deck.iter_mut())
            .for_each(|(card, slot)| *slot = card);
        let mut endgame = Self {
            state: *nature.state(),
            deck,
        };
        endgame.canonicalize();
        endgame
    }
}

impl Endgame {
    pub fn deck(&self) -> &[Card] {
        &self.deck[..self.deck_size]
    }
    pub fn key(&self) -> Key {
        Key::from(self)
    }

    pub fn canonicalize(&mut self) {
        self.reorder();
        self.yellowify();
        self.rotate();
        self.sort();
    }

    /// relabel colours so that played counts ascend
    pub fn reorder(&mut self) {
        let permutation = Permutation::ascending(&self.played.values());
        if permutation.is_identity() {
            return;
        }
        self.state.permute(&permutation);
        for hand in self.state.hands.iter_mut() {
            *hand = permutation.hand(*hand);
        }
        let size = self.deck_size;
        for card in self.deck[..size].iter_mut() {
            *card = permutation.card(*card);
        }
    }

    /// fold every dead card, wherever it lies, into the one dead identity
    pub fn yellowify(&mut self) {
        let played = self.played;
        for card in Card::unique() {
            if played.is_discardable(card) {
                let count = self.discarded.count(card);
                self.discarded.adjust(card, -count);
                self.discarded.adjust(DEAD, count);
            }
        }
        let bury = |card: Card| if played.is_discardable(card) { DEAD } else { card };
        for hand in self.state.hands.iter_mut() {
            *hand = hand.iter().map(bury).fold(Hand::empty(), Hand::with);
        }
        let size = self.deck_size;
        for card in self.deck[..size].iter_mut() {
            debug_assert!(!card.is_none());
            *card = bury(*card);
        }
    }

    /// seat the player to act at 0
    pub fn rotate(&mut self) {
        let players = self.players;
        let current = self.current;
        self.state.hands[..players].rotate_left(current);
        self.current = 0;
    }

    pub fn sort(&mut self) {
        let size = self.deck_size;
        self.deck[..size].sort();
        for hand in self.state.hands.iter_mut() {
            *hand = hand.sorted();
        }
    }

    /// act on behalf of seat 0, draw the deck card at `index` as the
    /// replacement, then pass the turn and restore canonical form
    pub fn update_and_advance(&mut self, intent: Intent, index: usize) {
        assert!(self.actions != Some(0), "endgame is already over");
        if let Some(actions) = self.actions.as_mut() {
            *actions -= 1;
        }
        match intent {
            Intent::Play(card) => {
                self.play_card(card);
                let pos = self.find(card);
                let draw = self.draw(index);
                self.drop_and_draw(0, pos, draw);
                self.reorder();
                self.yellowify();
                self.sort();
            }
            Intent::Discard(card) => {
                self.discard_card(card);
                let pos = self.find(card);
                let draw = self.draw(index);
                self.drop_and_draw(0, pos, draw);
                self.sort();
            }
            Intent::Hint => self.spend_hint(),
        }
        self.advance_turn();
        self.rotate();
    }

    fn find(&self, card: Card) -> usize {
        match self.hand(0).position(card) {
            Some(pos) => pos,
            None => panic!("{} is not in the acting hand {}", card, self.hand(0)),
        }
    }

    /// take a deck card by index, closing the gap
    fn draw(&mut self, index: usize) -> Card {
        let size = self.deck_size;
        if size == 0 {
            return Card::none();
        }
        assert!(index < size, "draw index {} beyond {} cards", index, size);
        let card = self.deck[index];
        self.deck.copy_within(index + 1..size, index);
        self.deck[size - 1] = Card::none();
        self.deck_size -= 1;
        if self.deck_size == 0 {
            self.actions = Some(self.players as u8);
        }
        card
    }
}

impl std::fmt::Display for Endgame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.state)?;
        write!(f, "Deck:")?;
        for card in self.deck() {
            write!(f, " {}", card)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Colour::*;

    fn card(colour: Colour, value: u8) -> Card {
        Card::from((colour, value))
    }

    /// four players, four cards left, every hand emptied
    fn nature() -> Nature {
        let mut nature = Nature::new(4, 0);
        while nature.deck().size() > 4 {
            nature.draw();
        }
        for seat in 0..4 {
            nature.hands[seat] = Hand::empty();
        }
        nature
    }

    #[test]
    fn construction_is_canonical() {
        let endgame = Endgame::from(&nature());
        assert!(endgame.deck_size() == 4);
        assert!(endgame.deck[4] == Card::none());
        let key = endgame.key();
        let mut again = endgame;
        again.reorder();
        assert!(again.key() == key);
        again.yellowify();
        assert!(again.key() == key);
        again.rotate();
        assert!(again.key() == key);
        again.sort();
        assert!(again.key() == key);
    }

    #[test]
    fn canonicalize_twice_is_once() {
        for seed in 0..16 {
            let mut nature = Nature::new(4, seed);
            while nature.deck().size() > 3 {
                nature.draw();
            }
            nature.current = seed as usize % 4;
            nature.played = crate::game::Played::from([2, 0, 1, 0, 3]);
            let mut once = Endgame::from(&nature);
            let key = once.key();
            once.canonicalize();
            assert!(once.key() == key);
        }
    }

    #[test]
    fn reorder() {
        let mut g = Endgame::from(&nature());
        g.played.play(Blue);
        g.played.play(Blue);
        g.played.play(Green);
        g.played.play(Green);
        g.hands[0].add(card(Green, 1));
        (0..4).for_each(|_| g.discarded.discard(card(White, 2)));
        g.deck_size = 1;
        g.deck[0] = card(Yellow, 4);
        g.reorder();
        assert!(g.played().get(Blue) == 0);
        assert!(g.played().get(Yellow) == 2);
        assert!(g.hand(0)[0] == card(Yellow, 1));
        assert!(g.discarded().count(card(White, 2)) == 0);
        assert!(g.discarded().count(card(Green, 2)) == 4);
        assert!(g.deck[0] == card(Red, 4));
    }

    #[test]
    fn yellowify() {
        let mut g = Endgame::from(&nature());
        g.played.play(Blue);
        g.played.play(Blue);
        g.played.play(Green);
        g.played.play(Green);
        g.hands[0].add(card(Blue, 1));
        g.hands[0].add(card(Blue, 3));
        g.discarded.adjust(card(Blue, 2), 8);
        g.discarded.adjust(card(Blue, 5), 9);
        g.deck_size = 2;
        g.deck[0] = card(Green, 1);
        g.deck[1] = card(Red, 1);
        g.yellowify();
        assert!(g.hand(0)[0] == DEAD);
        assert!(g.hand(0)[1] == card(Blue, 3));
        assert!(g.discarded().count(DEAD) == 8);
        assert!(g.discarded().count(card(Blue, 5)) == 9);
        assert!(g.deck[0] == DEAD);
        assert!(g.deck[1] == card(Red, 1));
    }

    #[test]
    fn rotate() {
        let mut g = Endgame::from(&nature());
        g.hands[0].add(card(Green, 1));
        g.current = 2;
        g.rotate();
        assert!(g.current() == 0);
        assert!(g.hand(2)[0] == card(Green, 1));
    }

    #[test]
    fn sort() {
        let mut g = Endgame::from(&nature());
        g.hands[0].add(card(Red, 2));
        g.hands[0].add(card(Green, 1));
        g.deck_size = 2;
        g.deck[0] = card(Yellow, 4);
        g.deck[1] = card(White, 3);
        g.sort();
        assert!(g.hand(0)[0] == card(Green, 1));
        assert!(g.hand(0)[1] == card(Red, 2));
        assert!(g.deck[0] == card(White, 3));
        assert!(g.deck[1] == card(Yellow, 4));
    }

    #[test]
    fn update_and_advance() {
        let mut g = Endgame::from(&nature());
        assert!(g.players() == 4);
        g.hands[0].add(card(Blue, 1));
        let replace = card(Blue, 5);
        g.deck[1] = replace;
        assert!(g.deck_size() == 4);
        g.update_and_advance(Intent::Play(card(Blue, 1)), 1);
        assert!(g.deck_size() == 3);
        assert!(g.hand(3)[0].value() == replace.value());
        assert!(g.deck[g.deck_size()] == Card::none());
        let key = g.key();
        g.canonicalize();
        assert!(g.key() == key);
    }

    #[test]
    fn last_draw_starts_final_round() {
        let mut g = Endgame::from(&nature());
        g.hands[0].add(card(Red, 3));
        g.hints = 0;
        g.deck_size = 1;
        g.deck[1..].fill(Card::none());
        g.update_and_advance(Intent::Discard(card(Red, 3)), 0);
        assert!(g.deck_size() == 0);
        assert!(g.actions_left() == Some(4));
        assert!(g.hints() == 1);
        g.update_and_advance(Intent::Hint, 0);
        assert!(g.actions_left() == Some(3));
        assert!(g.hints() == 0);
    }
}
