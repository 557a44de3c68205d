use super::Agent;
use crate::game::Decision;
use crate::game::Nature;
use crate::game::View;

/// plays its first card, sight unseen
#[derive(Debug, Default, Clone, Copy)]
pub struct Placeholder;

impl Agent for Placeholder {
    fn act(&mut self, nature: &Nature) -> Decision {
        let view = View::from((nature.state(), nature.current()));
        assert!(view.is_my_turn());
        assert!(view.own_size() > 0, "nothing left to play");
        log::trace!("seat {} plays blind before {}", view.seat(), view.hand(1));
        Decision::Play(0)
    }
}
