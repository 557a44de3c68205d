use crate::cards::Card;

/// Intent is a decision made with every card in view. plays and
/// discards name a card identity rather than a position, and a hint
/// is a single contentless pass of information.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Intent {
    #[default]
    Hint,
    Discard(Card),
    Play(Card),
}

impl Intent {
    /// tie-break order among equally ranked lines:
    /// acting beats passing information
    pub fn priority(&self) -> u8 {
        match self {
            Intent::Hint => 0,
            Intent::Discard(_) => 1,
            Intent::Play(_) => 2,
        }
    }
    pub fn card(&self) -> Option<Card> {
        match self {
            Intent::Play(card) | Intent::Discard(card) => Some(*card),
            Intent::Hint => None,
        }
    }
    pub fn is_play(&self) -> bool {
        matches!(self, Intent::Play(_))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Intent::Hint => write!(f, "hint"),
            Intent::Discard(card) => write!(f, "discard {}", card),
            Intent::Play(card) => write!(f, "play {}", card),
        }
    }
}
