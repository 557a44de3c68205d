use super::card::Card;
use crate::DECK_SIZE;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Deck is the full 50-card multiset shuffled once from a seed.
/// cards are drawn from the back; drawn slots are blanked so the
/// live prefix is always cards[..size].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    size: usize,
}

impl Deck {
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    /// take the last card. an exhausted deck yields the empty card,
    /// which every caller treats as "nothing drawn".
    pub fn draw(&mut self) -> Card {
        if self.is_empty() {
            return Card::none();
        }
        self.size -= 1;
        std::mem::take(&mut self.cards[self.size])
    }
    /// the cards still to come, last drawn first
    pub fn remaining(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards[..self.size].iter().rev().copied()
    }
}

/// seeded shuffle
impl From<u32> for Deck {
    fn from(seed: u32) -> Self {
        let mut cards = [Card::none(); DECK_SIZE];
        cards.copy_from_slice(&Card::all());
        cards.shuffle(&mut StdRng::seed_from_u64(seed as u64));
        Self {
            cards,
            size: DECK_SIZE,
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Deck:")?;
        for card in self.remaining() {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
