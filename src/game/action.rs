use crate::MAX_HAND;
use crate::Position;
use crate::Value;
use crate::cards::Card;
use crate::cards::Colour;
use colored::Colorize;

/// what a hint names
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Clue {
    Colour(Colour),
    Value(Value),
}

impl Clue {
    pub fn matches(&self, card: Card) -> bool {
        match self {
            Clue::Colour(colour) => card.colour() == *colour,
            Clue::Value(value) => card.value() == *value,
        }
    }
}

/// Decision is what a player intends: positions refer to the
/// actor's own hand, seats to absolute table positions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Decision {
    Play(Position),
    Discard(Position),
    Hint(Position, Clue),
}

/// Action is what actually happened once a Decision met the real hands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Play {
        actor: Position,
        pos: Position,
        card: Card,
    },
    Discard {
        actor: Position,
        pos: Position,
        card: Card,
    },
    Hint {
        actor: Position,
        hintee: Position,
        clue: Clue,
        positions: [bool; MAX_HAND],
    },
}

impl Action {
    pub fn actor(&self) -> Position {
        match self {
            Action::Play { actor, .. }
            | Action::Discard { actor, .. }
            | Action::Hint { actor, .. } => *actor,
        }
    }
    /// the card that left a hand, if any
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play { card, .. } | Action::Discard { card, .. } => Some(*card),
            Action::Hint { .. } => None,
        }
    }
    pub fn is_hint(&self) -> bool {
        matches!(self, Action::Hint { .. })
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Clue::Colour(colour) => write!(f, "{}", colour),
            Clue::Value(value) => write!(f, "{}", value),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Play { actor, pos, card } => {
                write!(f, "{} {}  played    position {}  {}", "[P]".green(), actor, pos, card)
            }
            Action::Discard { actor, pos, card } => {
                write!(f, "{} {}  discarded position {}  {}", "[D]".red(), actor, pos, card)
            }
            Action::Hint {
                actor,
                hintee,
                clue,
                ..
            } => write!(f, "{} {}  hinted    player   {}  about {}", "[H]".cyan(), actor, hintee, clue),
        }
    }
}
