use super::Agent;
use crate::game::Decision;
use crate::game::Nature;
use crate::seer::Planner;
use crate::seer::SeerConfig;
use crate::seer::translate;

/// sees every hand, plans one round ahead, never solves
#[derive(Debug, Default)]
pub struct Heuristic {
    planner: Planner,
}

impl From<SeerConfig> for Heuristic {
    fn from(config: SeerConfig) -> Self {
        Self {
            planner: Planner::from(config),
        }
    }
}

impl Agent for Heuristic {
    fn act(&mut self, nature: &Nature) -> Decision {
        let intent = self.planner.plan(nature.state());
        translate(intent, nature.state(), false)
    }
}
