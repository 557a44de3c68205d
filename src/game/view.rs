use super::action::Action;
use super::public::PublicState;
use super::state::GameState;
use crate::Position;
use crate::cards::Hand;

/// View is one player's window onto the table. seats are relative:
/// the viewer is 0, the next player to act after them is 1, and so on.
/// the viewer may count their own cards but never look at them.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    state: &'a GameState,
    seat: Position,
}

impl<'a> From<(&'a GameState, Position)> for View<'a> {
    fn from((state, seat): (&'a GameState, Position)) -> Self {
        assert!(seat < state.players(), "no such seat {}", seat);
        Self { state, seat }
    }
}

impl std::ops::Deref for View<'_> {
    type Target = PublicState;
    fn deref(&self) -> &Self::Target {
        self.state.public()
    }
}

impl View<'_> {
    pub fn seat(&self) -> Position {
        self.seat
    }
    /// absolute seat of a relative one
    pub fn absolute(&self, relative: Position) -> Position {
        (self.seat + relative) % self.state.players()
    }
    /// relative seat of an absolute one
    pub fn relative(&self, absolute: Position) -> Position {
        (absolute + self.state.players() - self.seat) % self.state.players()
    }
    pub fn is_my_turn(&self) -> bool {
        self.state.current() == self.seat
    }
    pub fn own_size(&self) -> usize {
        self.state.hand(self.seat).size()
    }
    /// someone else's hand, by relative seat
    pub fn hand(&self, relative: Position) -> Hand {
        assert!(relative != 0, "players cannot see their own hand");
        self.state.hand(self.absolute(relative))
    }
    /// an action as this player experiences it, with seats made relative
    pub fn localize(&self, action: &Action) -> Action {
        match *action {
            Action::Play { actor, pos, card } => Action::Play {
                actor: self.relative(actor),
                pos,
                card,
            },
            Action::Discard { actor, pos, card } => Action::Discard {
                actor: self.relative(actor),
                pos,
                card,
            },
            Action::Hint {
                actor,
                hintee,
                clue,
                positions,
            } => Action::Hint {
                actor: self.relative(actor),
                hintee: self.relative(hintee),
                clue,
                positions,
            },
        }
    }
}
