use crate::N_UNIQUE;
use crate::cards::Card;
use crate::cards::Permutation;

/// Discarded counts copies in the discard pile per card identity.
/// counts are signed so that canonicalization can move counts between
/// identities with negative adjustments.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Discarded {
    counts: [i8; N_UNIQUE + 1],
    total: i8,
}

impl Discarded {
    pub fn count(&self, card: Card) -> i8 {
        self.counts[card.index()]
    }
    pub fn total(&self) -> i8 {
        self.total
    }
    pub fn discard(&mut self, card: Card) {
        self.adjust(card, 1);
    }
    /// shift a card's count by any amount, keeping the total in step
    pub fn adjust(&mut self, card: Card, by: i8) {
        debug_assert!(!card.is_none());
        self.counts[card.index()] += by;
        self.total += by;
    }
    /// every copy of this card is in the pile
    pub fn is_exhausted(&self, card: Card) -> bool {
        self.count(card) >= Card::copies(card.value()) as i8
    }
    pub fn permute(&mut self, permutation: &Permutation) {
        let counts = self.counts;
        for card in Card::unique() {
            self.counts[permutation.card(card).index()] = counts[card.index()];
        }
    }
}

impl std::fmt::Display for Discarded {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Card::unique() {
            for _ in 0..self.count(card).max(0) {
                write!(f, "{} ", card)?;
            }
        }
        Ok(())
    }
}
