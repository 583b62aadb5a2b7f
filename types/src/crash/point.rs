use super::{round_display, MIN_TARGET_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic "crashed at X" value shown while animating a lost round.
///
/// A crash point is purely cosmetic. Settlement (and therefore the payout) has
/// already been decided by the external betting engine before one is produced,
/// and nothing in this workspace reads a crash point back into payout logic.
///
/// Values are rounded to 2 decimals and never below 1.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrashPoint(f64);

impl CrashPoint {
    /// Round `value` to display precision and floor it at 1.0.
    pub fn from_raw(value: f64) -> Self {
        Self(round_display(value).max(MIN_TARGET_MULTIPLIER))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for CrashPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}
