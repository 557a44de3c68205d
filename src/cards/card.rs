use super::colour::Colour;
use crate::Arbitrary;
use crate::N_UNIQUE;
use crate::Value;
use colored::Colorize;

/// Card is a (Colour, Value) pair packed into one byte.
/// index 0 is reserved for "no card", the padding used by
/// empty deck slots and by draws from an exhausted deck.
/// real cards live in [1, 26): 5 * colour + value.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

/// physical copies of each value, indexed by value
const COPIES: [u8; 6] = [0, 3, 2, 2, 2, 1];

impl Card {
    pub const fn new(colour: Colour, value: Value) -> Self {
        assert!(value >= 1 && value <= 5, "invalid card value");
        Self(5 * colour as u8 + value)
    }
    pub const fn none() -> Self {
        Self(0)
    }
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
    pub fn colour(&self) -> Colour {
        debug_assert!(!self.is_none(), "colour of the empty card");
        Colour::from((self.0 - 1) / 5)
    }
    pub fn value(&self) -> Value {
        debug_assert!(!self.is_none(), "value of the empty card");
        (self.0 - 1) % 5 + 1
    }
    /// position in per-card arrays of length 26
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    /// how many physical copies of a value exist per colour
    pub fn copies(value: Value) -> u8 {
        COPIES[value as usize]
    }
    /// the 25 distinct cards, colour-major
    pub fn unique() -> [Self; N_UNIQUE] {
        std::array::from_fn(|i| Self(i as u8 + 1))
    }
    /// the full 50-card multiset in colour-major order
    pub fn all() -> Vec<Self> {
        Self::unique()
            .into_iter()
            .flat_map(|card| std::iter::repeat_n(card, Self::copies(card.value()) as usize))
            .collect()
    }
}

/// (Colour, Value) isomorphism
impl From<(Colour, Value)> for Card {
    fn from((colour, value): (Colour, Value)) -> Self {
        Self::new(colour, value)
    }
}
impl From<Card> for (Colour, Value) {
    fn from(card: Card) -> Self {
        (card.colour(), card.value())
    }
}

/// u8 isomorphism
/// each card maps to its index in a colour-major ordering, 0 reserved
/// G3
/// 8
/// 0b00001000
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n as usize <= N_UNIQUE, "invalid card u8: {}", n);
        Self(n)
    }
}

/// str isomorphism
/// "G3" is the green three
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        let colour = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty card string"))
            .and_then(Colour::try_from)?;
        let value = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|v| (1..=5).contains(v))
            .ok_or_else(|| anyhow::anyhow!("invalid card value in {:?}", s))?;
        match chars.next() {
            None => Ok(Self::from((colour, value as Value))),
            Some(_) => Err(anyhow::anyhow!("trailing characters in {:?}", s)),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(1..=N_UNIQUE as u8))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "--");
        }
        let text = format!("{}{}", self.colour(), self.value());
        let text = match self.colour() {
            Colour::Blue => text.bright_cyan(),
            Colour::Green => text.bright_green(),
            Colour::Red => text.bright_red(),
            Colour::White => text.bright_white(),
            Colour::Yellow => text.bright_yellow(),
        };
        write!(f, "{}", text.reversed())
    }
}
