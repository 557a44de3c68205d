use super::card::Card;
use super::colour::Colour;
use super::hand::Hand;
use crate::Value;

/// an array of 5 unique Colours represents
/// any of the 5! = 120 elements in the Colour permutation group.
/// by assuming a "canonical" order of colours (B < G < R < W < Y),
/// we use [Colour; 5] to map B -> P[0], G -> P[1], ..., Y -> P[4].
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub struct Permutation([Colour; 5]);

impl Permutation {
    pub const fn identity() -> Self {
        Self(Colour::all())
    }

    /// the relabelling that makes per-colour progress ascending.
    /// colours are stably sorted by how far they have been played,
    /// so ties keep their original relative order and an already
    /// ascending table maps to the identity.
    pub fn ascending(played: &[Value; 5]) -> Self {
        let mut order = Colour::all();
        order.sort_by_key(|colour| played[colour.index()]);
        Self(order).inverse()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// the permutation that undoes this one
    pub fn inverse(&self) -> Self {
        let mut inverse = Colour::all();
        for colour in Colour::all() {
            inverse[self.map(colour).index()] = colour;
        }
        Self(inverse)
    }

    /// get the image of a Colour under a Permutation
    pub fn map(&self, colour: Colour) -> Colour {
        self.0[colour.index()]
    }

    /// the image of a card keeps its value and relabels its colour
    pub fn card(&self, card: Card) -> Card {
        Card::from((self.map(card.colour()), card.value()))
    }

    /// the image of a hand keeps card positions
    pub fn hand(&self, hand: Hand) -> Hand {
        hand.iter()
            .map(|card| self.card(card))
            .fold(Hand::empty(), Hand::with)
    }
}

impl From<[Colour; 5]> for Permutation {
    fn from(colours: [Colour; 5]) -> Self {
        let mut seen = [false; 5];
        for colour in colours {
            assert!(!seen[colour.index()], "not a permutation: {:?}", colours);
            seen[colour.index()] = true;
        }
        Self(colours)
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for colour in Colour::all() {
            writeln!(f, "{} -> {}", colour, self.map(colour))?;
        }
        Ok(())
    }
}
