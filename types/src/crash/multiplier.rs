use super::{Error, DISPLAY_SCALE, MIN_TARGET_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payout multiple a player selects before wagering (e.g. 2.0 = double-or-nothing).
///
/// Always finite and strictly greater than 1.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TargetMultiplier(f64);

impl TargetMultiplier {
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() || value <= MIN_TARGET_MULTIPLIER {
            return Err(Error::InvalidArgument {
                field: "target_multiplier",
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Fractional part expressed in hundredths (2.25 -> 25, 2.999 -> 100).
    pub fn fraction_cents(self) -> u32 {
        // Non-negative and below 1.0, so the cast cannot truncate meaningfully
        ((self.0 % 1.0) * DISPLAY_SCALE).round() as u32
    }
}

impl TryFrom<f64> for TargetMultiplier {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TargetMultiplier> for f64 {
    fn from(value: TargetMultiplier) -> Self {
        value.0
    }
}

impl fmt::Display for TargetMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}
