mod bet;
mod constants;
mod error;
mod multiplier;
mod point;
mod settlement;
mod wager;

pub use bet::*;
pub use constants::*;
pub use error::*;
pub use multiplier::*;
pub use point::*;
pub use settlement::*;
pub use wager::*;
