//! Value types shared by the crashbet encoder, sampler, and simulator.

pub mod crash;

pub use crash::Error;
