pub mod card;
pub use card::*;

pub mod cardset;
pub use cardset::*;

pub mod colour;
pub use colour::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::HandTable;
pub use hands::OFFSETS;
pub use hands::init;

pub mod permutation;
pub use permutation::*;
