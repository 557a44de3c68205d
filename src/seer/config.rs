use serde::Deserialize;
use serde::Serialize;

/// behaviour switches for the solver and the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeerConfig {
    /// rank every perfect line above every imperfect one
    pub optimize_for_perfect: bool,
    /// solve exactly whenever the deck is small enough,
    /// not only while a perfect game is still in reach
    pub always_brute_force: bool,
    /// weigh the hand a risky discard came from
    pub track_hand_weight: bool,
    /// penalize sitting on hints while discards pile up
    pub allow_magic: bool,
}

impl Default for SeerConfig {
    fn default() -> Self {
        Self {
            optimize_for_perfect: true,
            always_brute_force: true,
            track_hand_weight: false,
            allow_magic: true,
        }
    }
}
