use super::card::Card;
use super::colour::Colour;
use super::permutation::Permutation;
use crate::Value;

/// CardSet is membership over the 25 card identities.
/// bit i is set iff the card with index i is a member,
/// so bit 0 (the empty card) is never set.
/// {B1, G3}
/// xxxxxx 0000000000000000100000010
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardSet(u32);

impl CardSet {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn add(&mut self, card: Card) {
        debug_assert!(!card.is_none());
        self.0 |= 1 << card.index();
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !(1 << card.index());
    }
    pub fn has(&self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// relabel every member's colour through the permutation
    pub fn permute(&mut self, permutation: &Permutation) {
        let members = *self;
        *self = members.map(|card| permutation.card(card)).collect();
    }
}

/// every colour of a single value
impl From<Value> for CardSet {
    fn from(value: Value) -> Self {
        Colour::all()
            .into_iter()
            .map(|colour| Card::from((colour, value)))
            .collect()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::empty();
        for card in iter {
            set.add(card);
        }
        set
    }
}

/// we can empty a set from low to high
/// by removing the lowest card until the set is empty
impl Iterator for CardSet {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove_has() {
        let mut set = CardSet::empty();
        let b2 = Card::from((Colour::Blue, 2));
        let g4 = Card::from((Colour::Green, 4));
        assert!(!set.has(b2));
        set.add(b2);
        assert!(set.has(b2));
        set.add(b2);
        set.add(g4);
        assert!(set.size() == 2);
        set.remove(b2);
        assert!(!set.has(b2));
        assert!(set.has(g4));
    }

    #[test]
    fn every_colour_of_value() {
        let fives = CardSet::from(5 as Value);
        assert!(fives.size() == 5);
        assert!(fives.has(Card::from((Colour::Blue, 5))));
        assert!(fives.has(Card::from((Colour::Yellow, 5))));
        assert!(!fives.has(Card::from((Colour::Blue, 2))));
    }

    #[test]
    fn permute_colours() {
        let mut set = CardSet::empty();
        set.add(Card::from((Colour::Green, 3)));
        set.add(Card::from((Colour::Blue, 3)));
        set.add(Card::from((Colour::Red, 1)));
        let permutation = Permutation::from([
            Colour::Green,
            Colour::Blue,
            Colour::Yellow,
            Colour::White,
            Colour::Red,
        ]);
        set.permute(&permutation);
        assert!(set.has(Card::from((Colour::Blue, 3))));
        assert!(set.has(Card::from((Colour::Green, 3))));
        assert!(set.has(Card::from((Colour::Yellow, 1))));
        assert!(!set.has(Card::from((Colour::Red, 1))));
    }

    #[test]
    fn iteration_ascends() {
        let set = CardSet::from(1 as Value);
        let cards = set.collect::<Vec<Card>>();
        assert!(cards.len() == 5);
        assert!(cards.windows(2).all(|w| w[0] < w[1]));
    }
}
