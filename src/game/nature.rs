use super::action::Action;
use super::state::GameState;
use crate::cards::Card;
use crate::cards::Deck;

/// Nature is the omniscient game: the full state plus the live deck.
/// it is the only state that draws real cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nature {
    state: GameState,
    deck: Deck,
    seed: u32,
}

impl std::ops::Deref for Nature {
    type Target = GameState;
    fn deref(&self) -> &Self::Target {
        &self.state
    }
}
impl std::ops::DerefMut for Nature {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl Nature {
    /// shuffle from the seed and deal: five cards each
    /// for two or three players, four cards each otherwise
    pub fn new(players: usize, seed: u32) -> Self {
        let mut nature = Self {
            state: GameState::new(players),
            deck: Deck::from(seed),
            seed,
        };
        let cards = if players > 3 { 4 } else { 5 };
        for seat in 0..players {
            for _ in 0..cards {
                let card = nature.deck.draw();
                nature.state.hands[seat].add(card);
                nature.state.deck_size -= 1;
            }
        }
        log::trace!("dealt {} cards to {} players from seed {}", cards, players, seed);
        nature
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// draw the next card, starting the final round when the deck runs dry
    pub(crate) fn draw(&mut self) -> Card {
        if self.deck.is_empty() {
            return Card::none();
        }
        let card = self.deck.draw();
        self.state.deck_size -= 1;
        if self.deck.is_empty() {
            self.state.actions = Some(self.state.players as u8);
        }
        card
    }

    /// apply a resolved action. turn order is left to the caller.
    pub fn update(&mut self, action: &Action) {
        assert!(self.state.actions != Some(0), "game is already over");
        if let Some(actions) = self.state.actions.as_mut() {
            *actions -= 1;
        }
        match *action {
            Action::Play { actor, pos, card } => {
                self.state.play_card(card);
                let draw = self.draw();
                self.state.drop_and_draw(actor, pos, draw);
            }
            Action::Discard { actor, pos, card } => {
                self.state.discard_card(card);
                let draw = self.draw();
                self.state.drop_and_draw(actor, pos, draw);
            }
            Action::Hint { .. } => self.state.spend_hint(),
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Seed:  {}", self.seed)?;
        write!(f, "{}", self.state)?;
        writeln!(f, "{}", self.deck)
    }
}
