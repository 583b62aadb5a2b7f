use anyhow::Context;
use clap::Parser;
use crashbet_execution::FlightPath;
use crashbet_simulator::{run, Config};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    target: Option<f64>,

    /// Wager in SOL
    #[arg(short, long)]
    wager: Option<f64>,

    #[arg(short, long)]
    rounds: Option<usize>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(target) = args.target {
        config.target_multiplier = target;
    }
    if let Some(wager) = args.wager {
        config.wager_sol = wager;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let config = config.validate().context("invalid configuration")?;

    // Create logger
    let subscriber = tracing_subscriber::fmt().with_max_level(config.log_level);
    if config.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // Run session
    let report = run(&config).await.context("simulation failed")?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
        return Ok(());
    }

    println!("target       {:.2}x", report.target_multiplier);
    println!(
        "bet          {} buckets ({} win)",
        report.bet_buckets, report.win_buckets
    );
    println!("rounds       {} ({} won, {} lost)", report.rounds, report.wins, report.losses);
    println!(
        "win rate     {:.4} observed / {:.4} expected",
        report.observed_win_rate, report.expected_win_rate
    );
    println!("rtp          {:.4}", report.return_to_player);
    if let (Some(mean), Some(max)) = (report.mean_crash_point, report.max_crash_point) {
        let flight = FlightPath::new(mean);
        println!(
            "crash points mean {mean:.2}x / max {max:.2}x (~{} ms flight)",
            flight.duration().as_millis()
        );
    }
    info!(seed = report.seed, "replay with --seed");

    Ok(())
}
