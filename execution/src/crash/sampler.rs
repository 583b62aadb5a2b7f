//! Crash point sampling for lost rounds.
//!
//! The result only drives the loss animation ("crashed at 1.37x"). It is drawn
//! after the betting engine has already settled the round as a loss and never
//! feeds back into payout. [crate::crash::round::Round::settle] is the only
//! place in this workspace that calls it, and only on [Outcome::Loss].
//!
//! Shaping: `1 + u^e * (cap - 1)` with `cap = min(target, 12)`. Exponents above
//! 1 pull mass toward 1.0, so most crashes are early. 5% of draws use a softer
//! exponent to produce near misses.
//!
//! [Outcome::Loss]: crashbet_types::crash::Outcome::Loss

use super::UnitSource;
use crashbet_types::crash::{
    CrashPoint, Error, TargetMultiplier, CRASH_POINT_CAP, DEFAULT_EXPONENT, DISPLAY_SCALE,
    HIGH_TARGET_EXPONENT, HIGH_TARGET_THRESHOLD, MIN_TARGET_MULTIPLIER, NEAR_MISS_EXPONENT,
    NEAR_MISS_THRESHOLD,
};

/// Pick the shaping exponent for a draw `u` against `target`.
pub fn shaping_exponent(u: f64, target: f64) -> f64 {
    if u > NEAR_MISS_THRESHOLD {
        NEAR_MISS_EXPONENT
    } else if target > HIGH_TARGET_THRESHOLD {
        HIGH_TARGET_EXPONENT
    } else {
        DEFAULT_EXPONENT
    }
}

/// Sample a cosmetic crash point for a round already settled as a loss.
///
/// Fails with [Error::InvalidArgument] when `target` is non-finite or `<= 1.0`.
pub fn sample_loss<S: UnitSource>(target: f64, source: &mut S) -> Result<CrashPoint, Error> {
    Ok(sample_loss_target(TargetMultiplier::new(target)?, source))
}

/// Same as [sample_loss] using the calling thread's generator.
pub fn sample_loss_thread_rng(target: f64) -> Result<CrashPoint, Error> {
    sample_loss(target, &mut rand::thread_rng())
}

/// Sample a crash point for an already validated target.
pub fn sample_loss_target<S: UnitSource>(target: TargetMultiplier, source: &mut S) -> CrashPoint {
    let target = target.get();

    // Scripted sources may hand back anything
    let u = source.next_unit();
    let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.0 };

    let cap = target.min(CRASH_POINT_CAP);
    let exponent = shaping_exponent(u, target);
    let raw = MIN_TARGET_MULTIPLIER + u.powf(exponent) * (cap - MIN_TARGET_MULTIPLIER);

    // Step down in whole hundredths until the display value is below the target
    let floor = MIN_TARGET_MULTIPLIER * DISPLAY_SCALE;
    let mut cents = (raw * DISPLAY_SCALE).round();
    while cents > floor && cents / DISPLAY_SCALE >= target {
        cents -= 1.0;
    }
    CrashPoint::from_raw(cents / DISPLAY_SCALE)
}
