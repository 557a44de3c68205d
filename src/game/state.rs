use super::action::Action;
use super::action::Decision;
use super::public::PublicState;
use crate::MAX_HAND;
use crate::MAX_HINTS;
use crate::MAX_PLAYERS;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hand;

/// GameState is the public state plus every hand. seats beyond
/// the player count hold the empty hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct GameState {
    pub(crate) public: PublicState,
    pub(crate) hands: [Hand; MAX_PLAYERS],
}

impl std::ops::Deref for GameState {
    type Target = PublicState;
    fn deref(&self) -> &Self::Target {
        &self.public
    }
}
impl std::ops::DerefMut for GameState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.public
    }
}

impl GameState {
    pub fn new(players: usize) -> Self {
        Self {
            public: PublicState::new(players),
            hands: [Hand::empty(); MAX_PLAYERS],
        }
    }
    pub fn public(&self) -> &PublicState {
        &self.public
    }
    pub fn hand(&self, seat: Position) -> Hand {
        self.hands[seat]
    }
    pub fn hands(&self) -> &[Hand] {
        &self.hands[..self.players]
    }
    /// the seat `offset` places after the current player
    pub fn seat(&self, offset: usize) -> Position {
        (self.current + offset) % self.players
    }

    /// bind a decision by the current player to the real hands
    pub fn resolve(&self, decision: Decision) -> Action {
        let actor = self.current;
        let hand = self.hands[actor];
        match decision {
            Decision::Play(pos) => {
                assert!(pos < hand.size(), "play position {} out of range", pos);
                Action::Play {
                    actor,
                    pos,
                    card: hand[pos],
                }
            }
            Decision::Discard(pos) => {
                assert!(pos < hand.size(), "discard position {} out of range", pos);
                assert!(self.hints != MAX_HINTS, "cannot discard with full hints");
                Action::Discard {
                    actor,
                    pos,
                    card: hand[pos],
                }
            }
            Decision::Hint(hintee, clue) => {
                assert!(self.hints != 0, "no hints left");
                assert!(hintee != actor, "cannot hint yourself");
                assert!(hintee < self.players, "no such player {}", hintee);
                let mut positions = [false; MAX_HAND];
                self.hands[hintee]
                    .iter()
                    .enumerate()
                    .for_each(|(i, card)| positions[i] = clue.matches(card));
                assert!(positions.iter().any(|p| *p), "hint {} touches no cards", clue);
                Action::Hint {
                    actor,
                    hintee,
                    clue,
                    positions,
                }
            }
        }
    }

    /// remove a card and append the replacement, if there is one
    pub fn drop_and_draw(&mut self, seat: Position, pos: Position, draw: Card) {
        self.hands[seat].erase(pos);
        if !draw.is_none() {
            self.hands[seat].add(draw);
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.public)?;
        for (seat, hand) in self.hands().iter().enumerate() {
            let marker = if seat == self.current { ">" } else { " " };
            writeln!(f, "{} Player {} {}", marker, seat, hand)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Colour;
    use crate::game::action::Clue;

    fn fixture() -> GameState {
        let mut state = GameState::new(4);
        state.hands[0] = Hand::try_from("B1 G2 B1 R5").unwrap();
        state.hands[1] = Hand::try_from("W3 W4 Y1 G2").unwrap();
        state.hands[2] = Hand::try_from("R1 R2 R3 R4").unwrap();
        state.hands[3] = Hand::try_from("Y5 B5 G5 W5").unwrap();
        state
    }

    #[test]
    fn resolve_play() {
        let state = fixture();
        match state.resolve(Decision::Play(3)) {
            Action::Play { actor, pos, card } => {
                assert!(actor == 0);
                assert!(pos == 3);
                assert!(card == Card::from((Colour::Red, 5)));
            }
            _ => panic!("expected a play"),
        }
    }

    #[test]
    fn resolve_hint_marks_positions() {
        let state = fixture();
        match state.resolve(Decision::Hint(1, Clue::Colour(Colour::White))) {
            Action::Hint { positions, .. } => {
                assert!(positions == [true, true, false, false, false]);
            }
            _ => panic!("expected a hint"),
        }
        match state.resolve(Decision::Hint(3, Clue::Value(5))) {
            Action::Hint { positions, .. } => {
                assert!(positions == [true, true, true, true, false]);
            }
            _ => panic!("expected a hint"),
        }
    }

    #[test]
    #[should_panic]
    fn resolve_empty_hint() {
        fixture().resolve(Decision::Hint(2, Clue::Colour(Colour::Blue)));
    }

    #[test]
    #[should_panic]
    fn resolve_discard_at_max_hints() {
        fixture().resolve(Decision::Discard(0));
    }

    #[test]
    #[should_panic]
    fn resolve_hint_without_tokens() {
        let mut state = fixture();
        state.hints = 0;
        state.resolve(Decision::Hint(1, Clue::Value(3)));
    }

    #[test]
    fn drop_and_draw_appends() {
        let mut state = fixture();
        state.drop_and_draw(2, 1, Card::from((Colour::Blue, 2)));
        assert!(state.hand(2) == Hand::try_from("R1 R3 R4 B2").unwrap());
        state.drop_and_draw(2, 0, Card::none());
        assert!(state.hand(2) == Hand::try_from("R3 R4 B2").unwrap());
    }

    #[test]
    fn seats_wrap() {
        let mut state = fixture();
        state.current = 3;
        assert!(state.seat(0) == 3);
        assert!(state.seat(1) == 0);
        assert!(state.seat(3) == 2);
    }
}
