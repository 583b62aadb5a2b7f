//! Bet array encoding.
//!
//! The betting engine only understands integer-weighted buckets, so a target
//! multiplier `m` is expressed as `k` win buckets paying `m` followed by enough
//! zero buckets that the array length is `ceil(m * k)`.
//!
//! Only quarter and half fractions can be expressed exactly with a small `k`:
//!
//! | fraction | win buckets |
//! |----------|-------------|
//! | .25      | 4           |
//! | .50      | 2           |
//! | .75      | 4           |
//! | other    | 1           |
//!
//! Every other fraction (2.1, 2.33, ...) collapses to a single win bucket over
//! `ceil(m)` buckets. That under-pays relative to `1/m` odds. The settlement
//! contract depends on this exact bucket count, so it is kept as-is.

use crashbet_types::crash::{BetWeightArray, Error, TargetMultiplier};

/// Number of equal win buckets used to express a fractional part (in hundredths).
pub fn repeat_count(fraction_cents: u32) -> usize {
    match fraction_cents {
        25 | 75 => 4,
        50 => 2,
        _ => 1,
    }
}

/// Encode a target multiplier into the bet weight array consumed by the betting engine.
///
/// Fails with [Error::InvalidArgument] when `target` is non-finite or `<= 1.0`.
pub fn encode(target: f64) -> Result<BetWeightArray, Error> {
    encode_target(TargetMultiplier::new(target)?)
}

/// Encode an already validated target multiplier.
pub fn encode_target(target: TargetMultiplier) -> Result<BetWeightArray, Error> {
    let wins = repeat_count(target.fraction_cents());
    let total_sum = target.get() * wins as f64;

    // Saturates for absurd targets instead of wrapping
    let total_elements = total_sum.ceil() as usize;
    let zeros = total_elements.saturating_sub(wins);

    BetWeightArray::new(target, wins, zeros)
}
