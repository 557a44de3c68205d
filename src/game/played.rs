use crate::MAX_SCORE;
use crate::N_COLOURS;
use crate::Value;
use crate::cards::Card;
use crate::cards::CardSet;
use crate::cards::Colour;
use crate::cards::Permutation;

/// Played tracks the top of each colour's firework. the playable
/// and discardable sets are maintained incrementally on every play
/// so that option generation never has to rebuild them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Played {
    values: [Value; N_COLOURS],
    playable: CardSet,
    discardable: CardSet,
}

impl Default for Played {
    fn default() -> Self {
        Self {
            values: [0; N_COLOURS],
            playable: CardSet::from(1 as Value),
            discardable: CardSet::empty(),
        }
    }
}

impl Played {
    pub fn get(&self, colour: Colour) -> Value {
        self.values[colour.index()]
    }
    pub fn values(&self) -> [Value; N_COLOURS] {
        self.values
    }
    pub fn total(&self) -> u8 {
        self.values.iter().sum()
    }
    pub fn is_complete(&self) -> bool {
        self.total() == MAX_SCORE
    }
    pub fn is_playable(&self, card: Card) -> bool {
        self.get(card.colour()) + 1 == card.value()
    }
    pub fn is_discardable(&self, card: Card) -> bool {
        self.get(card.colour()) >= card.value()
    }
    pub fn playable(&self) -> CardSet {
        self.playable
    }
    pub fn discardable(&self) -> CardSet {
        self.discardable
    }

    /// raise a colour by one
    pub fn play(&mut self, colour: Colour) {
        let value = &mut self.values[colour.index()];
        assert!(*value < 5, "{} is already complete", colour);
        *value += 1;
        let top = Card::from((colour, *value));
        self.discardable.add(top);
        self.playable.remove(top);
        if *value < 5 {
            self.playable.add(Card::from((colour, *value + 1)));
        }
    }

    /// relabel colours; the value of colour c moves to p(c)
    pub fn permute(&mut self, permutation: &Permutation) {
        let values = self.values;
        for colour in Colour::all() {
            self.values[permutation.map(colour).index()] = values[colour.index()];
        }
        self.playable.permute(permutation);
        self.discardable.permute(permutation);
    }
}

impl From<[Value; N_COLOURS]> for Played {
    fn from(values: [Value; N_COLOURS]) -> Self {
        let mut played = Self::default();
        for colour in Colour::all() {
            let target = values[colour.index()];
            assert!(target <= 5, "invalid played value {}", target);
            (0..target).for_each(|_| played.play(colour));
        }
        played
    }
}

impl std::fmt::Display for Played {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for colour in Colour::all() {
            write!(f, "{}{} ", colour, self.get(colour))?;
        }
        Ok(())
    }
}
