pub mod action;
pub use action::*;

pub mod discarded;
pub use discarded::*;

pub mod nature;
pub use nature::*;

pub mod played;
pub use played::*;

pub mod public;
pub use public::*;

pub mod state;
pub use state::*;

pub mod view;
pub use view::*;
