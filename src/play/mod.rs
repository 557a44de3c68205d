pub mod executor;
pub use executor::*;

pub mod seeds;
pub use seeds::*;

pub mod tally;
pub use tally::*;

#[cfg(feature = "cli")]
pub mod pool;
#[cfg(feature = "cli")]
pub use pool::*;
