use super::{Error, TargetMultiplier};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter;

/// Outcome weights handed to the external betting engine.
///
/// Each bucket is equally likely to be rolled. A win bucket pays the target
/// multiplier and a loss bucket pays `0`, so the array's length and sum jointly
/// define the implied win probability and payout. Win buckets always come first.
///
/// The array is stored as counts rather than materialised, so arbitrarily large
/// targets never allocate until a caller asks for [BetWeightArray::to_vec] or
/// serializes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetWeightArray {
    multiplier: TargetMultiplier,
    wins: usize,
    losses: usize,
}

impl BetWeightArray {
    /// Build an array of `wins` copies of `multiplier` followed by `losses` zeros.
    pub fn new(multiplier: TargetMultiplier, wins: usize, losses: usize) -> Result<Self, Error> {
        if wins == 0 {
            return Err(Error::InvalidBet {
                reason: "at least one win bucket is required",
            });
        }
        if losses == 0 {
            return Err(Error::InvalidBet {
                reason: "at least one loss bucket is required",
            });
        }
        Ok(Self {
            multiplier,
            wins,
            losses,
        })
    }

    pub fn multiplier(&self) -> TargetMultiplier {
        self.multiplier
    }

    pub fn win_buckets(&self) -> usize {
        self.wins
    }

    pub fn loss_buckets(&self) -> usize {
        self.losses
    }

    pub fn len(&self) -> usize {
        self.wins.saturating_add(self.losses)
    }

    /// Always false: [BetWeightArray::new] requires a win and a loss bucket.
    /// Kept alongside [BetWeightArray::len] for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Weight of the bucket at `index`, if any.
    pub fn weight(&self, index: usize) -> Option<f64> {
        if index < self.wins {
            Some(self.multiplier.get())
        } else if index < self.len() {
            Some(0.0)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        iter::repeat(self.multiplier.get())
            .take(self.wins)
            .chain(iter::repeat(0.0).take(self.losses))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.multiplier.get() * self.wins as f64
    }

    /// Probability that a uniformly rolled bucket is a win bucket.
    pub fn win_probability(&self) -> f64 {
        self.wins as f64 / self.len() as f64
    }

    /// Expected return per unit wagered (1.0 is a fair bet).
    pub fn expected_return(&self) -> f64 {
        self.total_weight() / self.len() as f64
    }

    /// Lamports paid when the bucket at `index` is rolled.
    pub fn payout(&self, wager_lamports: u64, index: usize) -> Option<u64> {
        self.weight(index)
            .map(|weight| (wager_lamports as f64 * weight).floor() as u64)
    }
}

impl TryFrom<Vec<f64>> for BetWeightArray {
    type Error = Error;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        let first = *weights.first().ok_or(Error::InvalidBet {
            reason: "bet array is empty",
        })?;
        let multiplier = TargetMultiplier::new(first)?;
        let wins = weights.iter().take_while(|&&w| w == first).count();
        if weights[wins..].iter().any(|&w| w != 0.0) {
            return Err(Error::InvalidBet {
                reason: "every bucket must be the target or 0, wins first",
            });
        }
        Self::new(multiplier, wins, weights.len() - wins)
    }
}

impl Serialize for BetWeightArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for BetWeightArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let weights = Vec::<f64>::deserialize(deserializer)?;
        Self::try_from(weights).map_err(serde::de::Error::custom)
    }
}
