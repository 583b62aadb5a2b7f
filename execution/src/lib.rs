pub mod crash;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use crash::{
    encoder::encode,
    flight::FlightPath,
    round::{play_round, Endpoint, Resolution, Round, RoundState, Settler},
    sampler::{sample_loss, sample_loss_thread_rng},
    UnitSource,
};
