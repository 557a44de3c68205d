use super::discarded::Discarded;
use super::played::Played;
use crate::MAX_BOMBS;
use crate::MAX_HINTS;
use crate::MAX_PLAYERS;
use crate::Position;
use crate::Score;
use crate::cards::Card;
use crate::cards::Permutation;

/// PublicState holds everything every player can see: the counters,
/// the fireworks, and the discard pile. no hands, no deck order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct PublicState {
    pub(crate) players: usize,
    pub(crate) current: Position,
    pub(crate) hints: u8,
    pub(crate) bombs: u8,
    pub(crate) deck_size: usize,
    pub(crate) turn: u32,
    /// None while cards remain; once the deck runs out,
    /// each player gets exactly one more turn.
    pub(crate) actions: Option<u8>,
    pub(crate) played: Played,
    pub(crate) discarded: Discarded,
}

impl PublicState {
    pub fn new(players: usize) -> Self {
        assert!((2..=MAX_PLAYERS).contains(&players), "unsupported player count {}", players);
        Self {
            players,
            current: 0,
            hints: MAX_HINTS,
            bombs: MAX_BOMBS,
            deck_size: crate::DECK_SIZE,
            turn: 0,
            actions: None,
            played: Played::default(),
            discarded: Discarded::default(),
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }
    pub fn current(&self) -> Position {
        self.current
    }
    pub fn hints(&self) -> u8 {
        self.hints
    }
    pub fn bombs(&self) -> u8 {
        self.bombs
    }
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    pub fn actions_left(&self) -> Option<u8> {
        self.actions
    }
    pub fn played(&self) -> &Played {
        &self.played
    }
    pub fn discarded(&self) -> &Discarded {
        &self.discarded
    }
    pub fn is_playable(&self, card: Card) -> bool {
        self.played.is_playable(card)
    }
    pub fn is_discardable(&self, card: Card) -> bool {
        self.played.is_discardable(card)
    }

    /// out of bombs, out of turns, or every colour complete
    pub fn is_over(&self) -> bool {
        self.bombs == 0 || self.actions == Some(0) || self.played.is_complete()
    }
    pub fn score(&self) -> Score {
        match self.bombs {
            0 => 0,
            _ => self.played.total(),
        }
    }

    /// a playable card extends its firework, and a completed firework
    /// returns a hint token. anything else explodes into the discard pile.
    pub fn play_card(&mut self, card: Card) {
        if self.is_playable(card) {
            self.played.play(card.colour());
            if card.value() == 5 && self.hints < MAX_HINTS {
                self.hints += 1;
            }
        } else {
            assert!(self.bombs > 0, "no bombs left to lose");
            self.discarded.discard(card);
            self.bombs -= 1;
        }
    }
    pub fn discard_card(&mut self, card: Card) {
        assert!(self.hints < MAX_HINTS, "cannot discard with {} hints", self.hints);
        self.discarded.discard(card);
        self.hints += 1;
    }
    pub fn spend_hint(&mut self) {
        assert!(self.hints > 0, "no hints to spend");
        self.hints -= 1;
    }

    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players;
        self.turn += 1;
    }

    pub fn permute(&mut self, permutation: &Permutation) {
        self.played.permute(permutation);
        self.discarded.permute(permutation);
    }
}

impl std::fmt::Display for PublicState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Deck:  {}", self.deck_size)?;
        writeln!(f, "Hints: {}", self.hints)?;
        writeln!(f, "Bombs: {}", self.bombs)?;
        writeln!(f, "Score: {}", self.score())?;
        writeln!(f, "Turn:  {}", self.turn)?;
        writeln!(f, "Played:    {}", self.played)?;
        writeln!(f, "Discarded: {}", self.discarded)
    }
}
