use super::card::Card;
use super::cardset::CardSet;
use super::hands::HandTable;
use super::hands::OFFSETS;
use super::hands::table;
use crate::Arbitrary;
use crate::MAX_HAND;
use crate::N_UNIQUE;

/// Hand is an ordered sequence of at most five cards, repeats allowed,
/// stored as a single index into the precomputed HandTable. adding a card
/// is index arithmetic; erasing, sorting, and reading cards are one lookup
/// each. this is what keeps the endgame solver's inner loop constant-time.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u32);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        HandTable::size(self.0)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// append a card at the end
    pub fn add(&mut self, card: Card) {
        let size = self.size();
        assert!(size < MAX_HAND, "hand is full");
        assert!(!card.is_none(), "cannot hold the empty card");
        let digits = (self.0 - OFFSETS[size]) * N_UNIQUE as u32 + u8::from(card) as u32 - 1;
        self.0 = digits + OFFSETS[size + 1];
    }
    /// builder form of add, handy for folds
    pub fn with(mut self, card: Card) -> Self {
        self.add(card);
        self
    }
    /// remove the card at a position, later cards shift down
    pub fn erase(&mut self, pos: usize) {
        *self = table(self.0).erase(*self, pos);
    }
    pub fn get(&self, pos: usize) -> Option<Card> {
        self.cards().get(pos).copied()
    }
    pub fn cards(&self) -> &'static [Card] {
        table(self.0).cards(*self)
    }
    pub fn iter(&self) -> impl Iterator<Item = Card> + 'static {
        self.cards().iter().copied()
    }
    pub fn sorted(&self) -> Self {
        table(self.0).sorted(*self)
    }
    pub fn set(&self) -> CardSet {
        table(self.0).set(*self)
    }
    pub fn position(&self, card: Card) -> Option<usize> {
        self.iter().position(|c| c == card)
    }
    pub fn count(&self, card: Card) -> usize {
        self.iter().filter(|c| *c == card).count()
    }
}

impl std::ops::Index<usize> for Hand {
    type Output = Card;
    fn index(&self, pos: usize) -> &Self::Output {
        &self.cards()[pos]
    }
}

/// u32 isomorphism
impl From<Hand> for u32 {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}
impl From<u32> for Hand {
    fn from(n: u32) -> Self {
        assert!(n < OFFSETS[MAX_HAND + 1], "invalid hand index {}", n);
        Self(n)
    }
}

/// str isomorphism
/// "B1 G3 G3" keeps the order given
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.len() > MAX_HAND {
            return Err(anyhow::anyhow!("too many cards in {:?}", s));
        }
        Ok(cards.into_iter().fold(Self::empty(), Self::with))
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        (0..rand::random_range(0..MAX_HAND))
            .map(|_| Card::random())
            .fold(Self::empty(), Self::with)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.iter() {
            write!(f, " {} ", card)?;
        }
        Ok(())
    }
}
