use serde::{Deserialize, Serialize};

/// Result reported by the external betting engine once a wager settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Lamports returned to the player (0 on a loss).
    pub payout: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
}

impl Settlement {
    pub fn new(payout: u64) -> Self {
        Self { payout }
    }

    pub fn outcome(&self) -> Outcome {
        if self.payout > 0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}
