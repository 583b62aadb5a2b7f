use super::{BetWeightArray, Error, LAMPORTS_PER_SOL, MIN_WAGER_SOL, WAGER_ADJUST_SCALE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount staked on a single round, in lamports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wager(u64);

impl Wager {
    /// Convert a SOL amount entered in the UI (truncated to whole lamports).
    pub fn from_sol(sol: f64) -> Result<Self, Error> {
        if !sol.is_finite() || sol < MIN_WAGER_SOL {
            return Err(Error::InvalidWager {
                value: sol,
                min: MIN_WAGER_SOL,
            });
        }
        Ok(Self((sol * LAMPORTS_PER_SOL as f64).floor() as u64))
    }

    pub fn from_lamports(lamports: u64) -> Self {
        Self(lamports)
    }

    pub fn lamports(self) -> u64 {
        self.0
    }

    pub fn as_sol(self) -> f64 {
        self.0 as f64 / LAMPORTS_PER_SOL as f64
    }

    /// Half the SOL amount, rounded to 3 decimals, never below the minimum.
    pub fn halved(self) -> Self {
        self.adjusted(0.5)
    }

    /// Double the SOL amount, rounded to 3 decimals.
    pub fn doubled(self) -> Self {
        self.adjusted(2.0)
    }

    fn adjusted(self, factor: f64) -> Self {
        let sol = (self.as_sol() * factor * WAGER_ADJUST_SCALE).round() / WAGER_ADJUST_SCALE;
        let sol = sol.max(MIN_WAGER_SOL);
        Self((sol * LAMPORTS_PER_SOL as f64).floor() as u64)
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", self.as_sol())
    }
}

/// Payload handed to the external betting engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WagerRequest {
    pub wager: Wager,
    pub bet: BetWeightArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sol() {
        assert_eq!(Wager::from_sol(0.01).unwrap().lamports(), 10_000_000);
        assert_eq!(Wager::from_sol(1.0).unwrap().lamports(), LAMPORTS_PER_SOL);
        assert_eq!(Wager::from_sol(0.001).unwrap().lamports(), 1_000_000);
    }

    #[test]
    fn test_from_sol_rejects() {
        for sol in [0.0, 0.000_5, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Wager::from_sol(sol),
                Err(Error::InvalidWager { .. })
            ));
        }
    }

    #[test]
    fn test_halved_and_doubled() {
        let wager = Wager::from_sol(0.01).unwrap();
        assert_eq!(wager.halved().lamports(), 5_000_000);
        assert_eq!(wager.doubled().lamports(), 20_000_000);

        // 0.005 / 2 rounds to 0.003
        let wager = Wager::from_sol(0.005).unwrap();
        assert_eq!(wager.halved().lamports(), 3_000_000);

        // Halving never drops below the minimum
        let wager = Wager::from_sol(MIN_WAGER_SOL).unwrap();
        assert_eq!(wager.halved().lamports(), 1_000_000);
    }
}
