use crashbet_execution::Settler;
use crashbet_types::crash::{Error, Settlement, WagerRequest};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::future::{self, Future};

/// Local stand-in for the on-chain betting engine.
///
/// Rolls one bucket of the bet array uniformly and pays `floor(wager * weight)`.
pub struct LocalSettler {
    rng: ChaCha20Rng,
}

impl LocalSettler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Settle a request synchronously.
    pub fn roll(&mut self, request: &WagerRequest) -> Result<Settlement, Error> {
        let bucket = self.rng.gen_range(0..request.bet.len());
        let payout = request
            .bet
            .payout(request.wager.lamports(), bucket)
            .ok_or(Error::InvalidBet {
                reason: "rolled bucket out of range",
            })?;
        Ok(Settlement::new(payout))
    }
}

impl Settler for LocalSettler {
    fn play(
        &mut self,
        request: WagerRequest,
    ) -> impl Future<Output = Result<Settlement, Error>> + Send {
        future::ready(self.roll(&request))
    }
}
