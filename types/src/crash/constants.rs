/// Smallest target multiplier that is not degenerate (payout must exceed the wager)
pub const MIN_TARGET_MULTIPLIER: f64 = 1.0;

/// Highest multiplier a loss animation will ever climb to
pub const CRASH_POINT_CAP: f64 = 12.0;

/// Draws above this value use the near-miss exponent
pub const NEAR_MISS_THRESHOLD: f64 = 0.95;

/// Shaping exponent for near-miss draws (lands closer to the cap)
pub const NEAR_MISS_EXPONENT: f64 = 2.8;

/// Targets above this use the softer high-target exponent
pub const HIGH_TARGET_THRESHOLD: f64 = 10.0;

/// Shaping exponent for targets above [HIGH_TARGET_THRESHOLD]
pub const HIGH_TARGET_EXPONENT: f64 = 5.0;

/// Shaping exponent for everything else (most front-loaded)
pub const DEFAULT_EXPONENT: f64 = 6.0;

/// Display precision (2 decimal places) expressed as a scale
pub const DISPLAY_SCALE: f64 = 100.0;

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Minimum wager accepted from the UI, in SOL
pub const MIN_WAGER_SOL: f64 = 0.001;

/// Wager preselected by the UI, in SOL
pub const DEFAULT_WAGER_SOL: f64 = 0.01;

/// Half/double buttons round the SOL amount to this many decimals (expressed as a scale)
pub const WAGER_ADJUST_SCALE: f64 = 1_000.0;

/// Multiplier increment between two flight animation frames
pub const FLIGHT_STEP: f64 = 0.05;

/// Milliseconds between two flight animation frames
pub const FLIGHT_TICK_MS: u64 = 50;

/// Round a value to the 2-decimal display precision.
pub fn round_display(value: f64) -> f64 {
    (value * DISPLAY_SCALE).round() / DISPLAY_SCALE
}
