pub mod heuristic;
pub use heuristic::*;

pub mod placeholder;
pub use placeholder::*;

pub mod seer;
pub use seer::*;

use crate::game::Action;
use crate::game::Decision;
use crate::game::Nature;
use crate::seer::SeerConfig;

/// an Agent makes every decision at the table, whichever seat is up.
/// it is handed the full simulation and trusted to look only at what
/// its role allows.
pub trait Agent: std::fmt::Debug {
    fn act(&mut self, nature: &Nature) -> Decision;
    fn inform(&mut self, _: &Action) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AgentKind {
    /// planner until the deck is small, exact search after
    #[default]
    Seer,
    /// planner only
    Heuristic,
    /// always plays its first card
    Placeholder,
}

impl AgentKind {
    pub fn build(self, config: SeerConfig) -> Box<dyn Agent> {
        match self {
            Self::Seer => Box::new(Seer::from(config)),
            Self::Heuristic => Box::new(Heuristic::from(config)),
            Self::Placeholder => Box::new(Placeholder),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seer => write!(f, "seer"),
            Self::Heuristic => write!(f, "heuristic"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}
