//! Round lifecycle around the external betting engine.
//!
//! State machine:
//! ```text
//! Idle --start--> Playing --settle(win)--> Won
//!                    |    --settle(loss)-> Lost
//!                    +----abort----------> Idle
//! Won/Lost --start--> Playing
//! ```
//!
//! Settlement is owned entirely by the [Settler]. A round only reads the
//! reported payout; the crash point for a lost round is sampled afterwards and
//! is display-only.

use super::{encoder::encode_target, sampler::sample_loss_target, UnitSource};
use crashbet_types::crash::{
    BetWeightArray, CrashPoint, Error, Outcome, Settlement, TargetMultiplier, Wager, WagerRequest,
};
use std::future::Future;
use tracing::{debug, info, warn};

/// External wagering capability (the on-chain betting SDK).
pub trait Settler {
    /// Submit a wager and resolve once the engine has settled it.
    fn play(
        &mut self,
        request: WagerRequest,
    ) -> impl Future<Output = Result<Settlement, Error>> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundState {
    Idle,
    Playing,
    Won,
    Lost,
}

/// Where the flight animation stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoint {
    /// Won rounds fly all the way to the target.
    Target(TargetMultiplier),
    /// Lost rounds stop at a cosmetic crash point.
    Crashed(CrashPoint),
}

impl Endpoint {
    pub fn value(&self) -> f64 {
        match self {
            Endpoint::Target(target) => target.get(),
            Endpoint::Crashed(point) => point.get(),
        }
    }
}

/// Settled round as presented to the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    /// Lamports paid by the engine (copied from the settlement, never derived here).
    pub payout: u64,
    pub endpoint: Endpoint,
}

#[derive(Clone, Debug)]
pub struct Round {
    target: TargetMultiplier,
    wager: Wager,
    bet: BetWeightArray,
    state: RoundState,
}

impl Round {
    /// Prepare an idle round, encoding the bet array up front.
    pub fn new(target: f64, wager: Wager) -> Result<Self, Error> {
        let target = TargetMultiplier::new(target)?;
        Ok(Self {
            target,
            wager,
            bet: encode_target(target)?,
            state: RoundState::Idle,
        })
    }

    pub fn target(&self) -> TargetMultiplier {
        self.target
    }

    pub fn wager(&self) -> Wager {
        self.wager
    }

    pub fn bet(&self) -> &BetWeightArray {
        &self.bet
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Move to [RoundState::Playing] and return the request for the betting engine.
    pub fn start(&mut self, connected: bool) -> Result<WagerRequest, Error> {
        if !connected {
            return Err(Error::NotConnected);
        }
        if self.state == RoundState::Playing {
            return Err(Error::RoundInProgress);
        }
        self.state = RoundState::Playing;
        Ok(WagerRequest {
            wager: self.wager,
            bet: self.bet,
        })
    }

    /// Apply the engine's settlement. A crash point is only sampled for a loss.
    pub fn settle<S: UnitSource>(
        &mut self,
        settlement: Settlement,
        source: &mut S,
    ) -> Result<Resolution, Error> {
        if self.state != RoundState::Playing {
            return Err(Error::RoundNotPlaying);
        }
        let outcome = settlement.outcome();
        let endpoint = match outcome {
            Outcome::Win => {
                self.state = RoundState::Won;
                Endpoint::Target(self.target)
            }
            Outcome::Loss => {
                self.state = RoundState::Lost;
                Endpoint::Crashed(sample_loss_target(self.target, source))
            }
        };
        Ok(Resolution {
            outcome,
            payout: settlement.payout,
            endpoint,
        })
    }

    /// Return to [RoundState::Idle] after the wager was rejected or failed.
    pub fn abort(&mut self) {
        if self.state == RoundState::Playing {
            self.state = RoundState::Idle;
        }
    }
}

/// Drive a round through the betting engine: start, play, settle.
///
/// If the engine fails the round is aborted and the error is returned.
pub async fn play_round<T: Settler, S: UnitSource>(
    settler: &mut T,
    round: &mut Round,
    connected: bool,
    source: &mut S,
) -> Result<Resolution, Error> {
    let request = round.start(connected)?;
    debug!(
        multiplier = %round.target(),
        wager = round.wager().lamports(),
        buckets = request.bet.len(),
        "submitting wager"
    );

    let settlement = match settler.play(request).await {
        Ok(settlement) => settlement,
        Err(err) => {
            round.abort();
            warn!(?err, "wager failed");
            return Err(err);
        }
    };

    let resolution = round.settle(settlement, source)?;
    info!(
        outcome = ?resolution.outcome,
        payout = resolution.payout,
        endpoint = resolution.endpoint.value(),
        "round settled"
    );
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{FixedSettler, SequenceSource};
    use futures::executor::block_on;

    fn wager() -> Wager {
        Wager::from_sol(0.01).unwrap()
    }

    #[test]
    fn test_new_encodes_bet() {
        let round = Round::new(2.5, wager()).unwrap();
        assert_eq!(round.state(), RoundState::Idle);
        assert_eq!(round.bet().to_vec(), vec![2.5, 2.5, 0.0, 0.0, 0.0]);
        assert!(matches!(
            Round::new(1.0, wager()),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_start_requires_connection() {
        let mut round = Round::new(2.0, wager()).unwrap();
        assert_eq!(round.start(false), Err(Error::NotConnected));
        assert_eq!(round.state(), RoundState::Idle);

        let request = round.start(true).unwrap();
        assert_eq!(request.wager, wager());
        assert_eq!(request.bet.to_vec(), vec![2.0, 0.0]);
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.start(true), Err(Error::RoundInProgress));
    }

    #[test]
    fn test_settle_win_flies_to_target() {
        let mut round = Round::new(2.0, wager()).unwrap();
        round.start(true).unwrap();

        // A win must not consume randomness
        let mut source = SequenceSource::new(vec![]);
        let resolution = round.settle(Settlement::new(20_000_000), &mut source).unwrap();
        assert_eq!(resolution.outcome, Outcome::Win);
        assert_eq!(resolution.payout, 20_000_000);
        assert_eq!(resolution.endpoint.value(), 2.0);
        assert_eq!(source.draws(), 0);
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn test_settle_loss_samples_crash_point() {
        let mut round = Round::new(2.0, wager()).unwrap();
        round.start(true).unwrap();

        let mut source = SequenceSource::new(vec![0.5]);
        let resolution = round.settle(Settlement::new(0), &mut source).unwrap();
        assert_eq!(resolution.outcome, Outcome::Loss);
        assert_eq!(resolution.payout, 0);
        assert_eq!(
            resolution.endpoint,
            Endpoint::Crashed(CrashPoint::from_raw(1.02))
        );
        assert_eq!(source.draws(), 1);
        assert_eq!(round.state(), RoundState::Lost);
    }

    #[test]
    fn test_settle_requires_playing() {
        let mut round = Round::new(2.0, wager()).unwrap();
        let mut source = SequenceSource::new(vec![0.5]);
        assert_eq!(
            round.settle(Settlement::new(0), &mut source),
            Err(Error::RoundNotPlaying)
        );

        round.start(true).unwrap();
        round.settle(Settlement::new(0), &mut source).unwrap();
        assert_eq!(
            round.settle(Settlement::new(0), &mut source),
            Err(Error::RoundNotPlaying)
        );
    }

    #[test]
    fn test_abort() {
        let mut round = Round::new(3.0, wager()).unwrap();
        round.abort();
        assert_eq!(round.state(), RoundState::Idle);

        round.start(true).unwrap();
        round.abort();
        assert_eq!(round.state(), RoundState::Idle);
        assert!(round.start(true).is_ok());
    }

    #[test]
    fn test_play_round_loss() {
        let mut settler = FixedSettler::new(Ok(Settlement::new(0)));
        let mut round = Round::new(3.0, wager()).unwrap();
        let mut source = SequenceSource::new(vec![0.0]);

        let resolution =
            block_on(play_round(&mut settler, &mut round, true, &mut source)).unwrap();
        assert_eq!(resolution.outcome, Outcome::Loss);
        assert_eq!(resolution.endpoint.value(), 1.0);
        assert_eq!(round.state(), RoundState::Lost);

        let submitted = settler.requests();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].bet.to_vec(), vec![3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_play_round_replays_after_settlement() {
        let mut settler = FixedSettler::new(Ok(Settlement::new(30_000_000)));
        let mut round = Round::new(3.0, wager()).unwrap();
        let mut source = SequenceSource::new(vec![]);

        for _ in 0..3 {
            let resolution =
                block_on(play_round(&mut settler, &mut round, true, &mut source)).unwrap();
            assert_eq!(resolution.endpoint, Endpoint::Target(round.target()));
        }
        assert_eq!(settler.requests().len(), 3);
    }

    #[test]
    fn test_play_round_settler_error_aborts() {
        let mut settler = FixedSettler::new(Err(Error::Settlement("User rejected".into())));
        let mut round = Round::new(2.0, wager()).unwrap();
        let mut source = SequenceSource::new(vec![0.5]);

        let result = block_on(play_round(&mut settler, &mut round, true, &mut source));
        assert_eq!(result, Err(Error::Settlement("User rejected".into())));
        assert_eq!(round.state(), RoundState::Idle);
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_play_round_disconnected_never_submits() {
        let mut settler = FixedSettler::new(Ok(Settlement::new(0)));
        let mut round = Round::new(2.0, wager()).unwrap();
        let mut source = SequenceSource::new(vec![0.5]);

        let result = block_on(play_round(&mut settler, &mut round, false, &mut source));
        assert_eq!(result, Err(Error::NotConnected));
        assert!(settler.requests().is_empty());
    }
}
