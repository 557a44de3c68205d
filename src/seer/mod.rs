pub mod config;
pub use config::*;

pub mod endgame;
pub use endgame::*;

pub mod intent;
pub use intent::*;

pub mod key;
pub use key::*;

pub mod options;
pub use options::*;

pub mod planner;
pub use planner::*;

pub mod ranking;
pub use ranking::*;

pub mod solver;
pub use solver::*;

pub mod translate;
pub use translate::*;
