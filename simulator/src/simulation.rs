use crate::{LocalSettler, ValidatedConfig};
use crashbet_execution::{play_round, Endpoint, Resolution, Round, Settler, UnitSource};
use crashbet_types::crash::{Error, Outcome, Wager};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::info;

/// Aggregate statistics for a simulated session.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub seed: u64,
    pub target_multiplier: f64,
    pub bet_buckets: usize,
    pub win_buckets: usize,

    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub wagered: u64,
    pub paid: u64,

    pub expected_win_rate: f64,
    pub observed_win_rate: f64,
    pub return_to_player: f64,

    /// Crash points are cosmetic; these only describe the loss animations shown.
    pub mean_crash_point: Option<f64>,
    pub max_crash_point: Option<f64>,

    #[serde(skip)]
    crash_point_sum: f64,
}

impl Report {
    fn new(seed: u64, round: &Round) -> Self {
        Self {
            seed,
            target_multiplier: round.target().get(),
            bet_buckets: round.bet().len(),
            win_buckets: round.bet().win_buckets(),
            expected_win_rate: round.bet().win_probability(),
            ..Self::default()
        }
    }

    fn record(&mut self, wager: Wager, resolution: &Resolution) {
        self.rounds += 1;
        self.wagered = self.wagered.saturating_add(wager.lamports());
        self.paid = self.paid.saturating_add(resolution.payout);
        match resolution.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
        if let Endpoint::Crashed(point) = resolution.endpoint {
            let value = point.get();
            self.crash_point_sum += value;
            self.max_crash_point = Some(self.max_crash_point.map_or(value, |max| max.max(value)));
        }
    }

    fn finish(&mut self) {
        if self.rounds > 0 {
            self.observed_win_rate = self.wins as f64 / self.rounds as f64;
        }
        if self.wagered > 0 {
            self.return_to_player = self.paid as f64 / self.wagered as f64;
        }
        if self.losses > 0 {
            self.mean_crash_point = Some(self.crash_point_sum / self.losses as f64);
        }
    }
}

/// Play a session against the [LocalSettler].
///
/// Settlement and crash points draw from separate seeded streams so the
/// cosmetic draws never shift which buckets are rolled.
pub async fn run(config: &ValidatedConfig) -> Result<Report, Error> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut settler = LocalSettler::new(seed);
    let mut source = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    run_with(config, seed, &mut settler, &mut source).await
}

/// Play a session against any [Settler].
pub async fn run_with<T: Settler, S: UnitSource>(
    config: &ValidatedConfig,
    seed: u64,
    settler: &mut T,
    source: &mut S,
) -> Result<Report, Error> {
    let mut round = Round::new(config.target.get(), config.wager)?;
    let mut report = Report::new(seed, &round);
    info!(
        seed,
        multiplier = %config.target,
        wager = %config.wager,
        rounds = config.rounds,
        buckets = report.bet_buckets,
        "starting simulation"
    );

    for _ in 0..config.rounds {
        let resolution = play_round(settler, &mut round, true, source).await?;
        report.record(config.wager, &resolution);
    }
    report.finish();

    info!(
        wins = report.wins,
        losses = report.losses,
        rtp = report.return_to_player,
        "simulation complete"
    );
    Ok(report)
}
