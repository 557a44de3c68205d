use super::card::Card;
use super::cardset::CardSet;
use super::hand::Hand;
use crate::MAX_HAND;
use crate::N_UNIQUE;
use std::sync::OnceLock;

/// first index of each hand size. a hand of size k is a base-25 number
/// of k digits (card index - 1, first card most significant) shifted
/// by OFFSETS[k], so sizes occupy disjoint, contiguous ranges.
pub const OFFSETS: [u32; MAX_HAND + 2] = [0, 1, 26, 651, 16_276, 406_901, 10_172_526];

static FOUR: OnceLock<HandTable> = OnceLock::new();
static FIVE: OnceLock<HandTable> = OnceLock::new();

/// everything the search loop ever asks about a hand,
/// computed once so that each question is one lookup.
#[derive(Debug, Default, Clone, Copy)]
struct Entry {
    cards: [Card; MAX_HAND],
    size: u8,
    sorted: Hand,
    set: CardSet,
    erase: [Hand; MAX_HAND],
}

/// HandTable enumerates every ordered hand, repeats allowed, up to
/// four cards (406 901 entries) or up to five (10 172 526 entries).
/// the four-card table serves four and five player games; the first
/// five-card hand anyone reads builds the larger one, which then
/// answers every lookup.
#[derive(Debug)]
pub struct HandTable {
    entries: Vec<Entry>,
    largest: usize,
}

/// build a table ahead of the first lookup that needs it
pub fn init(five: bool) {
    let table = if five {
        FIVE.get_or_init(|| HandTable::build(5))
    } else {
        table(0)
    };
    log::debug!("hand table ready up to {} cards", table.largest());
}

/// the table that can answer for this hand index
pub(super) fn table(index: u32) -> &'static HandTable {
    match FIVE.get() {
        Some(five) => five,
        None if index < OFFSETS[MAX_HAND] => FOUR.get_or_init(|| HandTable::build(4)),
        None => FIVE.get_or_init(|| HandTable::build(5)),
    }
}

impl HandTable {
    fn build(largest: usize) -> Self {
        assert!(largest <= MAX_HAND);
        log::debug!("building hand table up to {} cards", largest);
        let entries = (0..OFFSETS[largest + 1])
            .map(Self::entry)
            .collect::<Vec<Entry>>();
        log::debug!("built hand table with {} entries", entries.len());
        Self { entries, largest }
    }

    fn entry(index: u32) -> Entry {
        let size = Self::size(index);
        let mut cards = [Card::none(); MAX_HAND];
        let mut digits = index - OFFSETS[size];
        for slot in (0..size).rev() {
            cards[slot] = Card::from((digits % N_UNIQUE as u32) as u8 + 1);
            digits /= N_UNIQUE as u32;
        }
        let mut sorted = cards;
        sorted[..size].sort();
        let mut erase = [Hand::empty(); MAX_HAND];
        for pos in 0..size {
            erase[pos] = cards[..size]
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, card)| *card)
                .fold(Hand::empty(), Hand::with);
        }
        Entry {
            cards,
            size: size as u8,
            sorted: sorted[..size]
                .iter()
                .copied()
                .fold(Hand::empty(), Hand::with),
            set: cards[..size].iter().copied().collect(),
            erase,
        }
    }

    /// hand size straight from the index range, no lookup needed
    pub fn size(index: u32) -> usize {
        OFFSETS[1..].iter().take_while(|o| **o <= index).count()
    }

    /// every hand index of one size, including physically impossible
    /// hands such as two blue fives
    pub fn enumerate(size: usize) -> impl Iterator<Item = Hand> {
        assert!(size <= MAX_HAND);
        (OFFSETS[size]..OFFSETS[size + 1]).map(Hand::from)
    }

    pub fn largest(&self) -> usize {
        self.largest
    }

    fn get(&self, hand: Hand) -> &Entry {
        let index = u32::from(hand) as usize;
        assert!(
            index < self.entries.len(),
            "hand of {} cards is beyond a {}-card table",
            Self::size(index as u32),
            self.largest
        );
        &self.entries[index]
    }
    pub(super) fn cards(&self, hand: Hand) -> &[Card] {
        let entry = self.get(hand);
        &entry.cards[..entry.size as usize]
    }
    pub(super) fn sorted(&self, hand: Hand) -> Hand {
        self.get(hand).sorted
    }
    pub(super) fn set(&self, hand: Hand) -> CardSet {
        self.get(hand).set
    }
    pub(super) fn erase(&self, hand: Hand, pos: usize) -> Hand {
        let entry = self.get(hand);
        assert!(pos < entry.size as usize, "erase position {} out of range", pos);
        entry.erase[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn offsets_are_powers() {
        for size in 0..=MAX_HAND {
            let span = OFFSETS[size + 1] - OFFSETS[size];
            assert!(span == (N_UNIQUE as u32).pow(size as u32));
        }
    }

    #[test]
    fn size_from_index() {
        assert!(HandTable::size(0) == 0);
        assert!(HandTable::size(1) == 1);
        assert!(HandTable::size(25) == 1);
        assert!(HandTable::size(26) == 2);
        assert!(HandTable::size(406_900) == 4);
        assert!(HandTable::size(406_901) == 5);
    }

    #[test]
    fn enumerate_singletons() {
        let hands = HandTable::enumerate(1).collect::<Vec<Hand>>();
        assert!(hands.len() == 25);
        assert!(hands.iter().all(|h| h.size() == 1));
        let cards = hands
            .iter()
            .map(|h| h[0])
            .collect::<std::collections::BTreeSet<Card>>();
        assert!(cards.len() == 25);
    }

    #[test]
    fn five_card_hands_on_demand() {
        let mut hand = Hand::try_from("B1 G2 R3 W4").unwrap();
        hand.add(Card::try_from("Y5").unwrap());
        assert!(hand.size() == 5);
        assert!(hand[4] == Card::try_from("Y5").unwrap());
        assert!(hand.sorted() == hand);
        hand.erase(0);
        assert!(hand == Hand::try_from("G2 R3 W4 Y5").unwrap());
        assert!(table(0).largest() == 5);
    }

    #[test]
    fn erase_then_add_restores() {
        for _ in 0..256 {
            let hand = Hand::random();
            if hand.size() == 0 {
                continue;
            }
            let last = hand.size() - 1;
            let mut erased = hand;
            erased.erase(last);
            erased.add(hand[last]);
            assert!(erased == hand);
        }
    }

    #[test]
    fn set_matches_cards() {
        for _ in 0..256 {
            let hand = Hand::random();
            let set = hand.iter().collect::<CardSet>();
            assert!(hand.set() == set);
        }
    }

    #[test]
    fn sorted_is_idempotent() {
        for _ in 0..256 {
            let hand = Hand::random();
            let sorted = hand.sorted();
            assert!(sorted.sorted() == sorted);
            assert!(sorted.size() == hand.size());
            assert!(sorted.iter().collect::<Vec<_>>().windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
