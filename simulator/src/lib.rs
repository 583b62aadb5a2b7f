use crashbet_types::crash::{Error, TargetMultiplier, Wager, DEFAULT_WAGER_SOL};
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use tracing::Level;

mod settler;
mod simulation;

pub use settler::LocalSettler;
pub use simulation::{run, run_with, Report};

/// Configuration for a simulated session.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_target_multiplier")]
    pub target_multiplier: f64,
    #[serde(default = "default_wager_sol")]
    pub wager_sol: f64,
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: usize },
    #[error("invalid target_multiplier")]
    InvalidMultiplier(#[source] Error),
    #[error("invalid wager_sol")]
    InvalidWager(#[source] Error),
}

pub struct ValidatedConfig {
    pub target: TargetMultiplier,
    pub wager: Wager,
    pub rounds: usize,
    pub seed: Option<u64>,

    pub log_level: Level,
    pub json_logs: bool,
}

fn default_target_multiplier() -> f64 {
    2.0
}

fn default_wager_sol() -> f64 {
    DEFAULT_WAGER_SOL
}

fn default_rounds() -> usize {
    1_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_multiplier: default_target_multiplier(),
            wager_sol: default_wager_sol(),
            rounds: default_rounds(),
            seed: None,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "rounds",
                value: self.rounds,
            });
        }

        let target =
            TargetMultiplier::new(self.target_multiplier).map_err(ConfigError::InvalidMultiplier)?;
        let wager = Wager::from_sol(self.wager_sol).map_err(ConfigError::InvalidWager)?;

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            target,
            wager,
            rounds: self.rounds,
            seed: self.seed,
            log_level,
            json_logs: self.json_logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashbet_types::crash::MIN_WAGER_SOL;

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse("rounds: 10\n").unwrap();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.target_multiplier, 2.0);
        assert_eq!(config.wager_sol, DEFAULT_WAGER_SOL);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            "target_multiplier: 2.25\nwager_sol: 0.5\nrounds: 50\nseed: 9\nlog_level: debug\njson_logs: true\n",
        )
        .unwrap();
        let validated = config.validate().unwrap();
        assert_eq!(validated.target.get(), 2.25);
        assert_eq!(validated.wager.lamports(), 500_000_000);
        assert_eq!(validated.rounds, 50);
        assert_eq!(validated.seed, Some(9));
        assert_eq!(validated.log_level, Level::DEBUG);
        assert!(validated.json_logs);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Config::parse("rounds: many"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_errors() {
        let config = Config {
            rounds: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNonZero { field: "rounds", .. })
        ));

        let config = Config {
            target_multiplier: 1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMultiplier(Error::InvalidArgument { .. }))
        ));

        let config = Config {
            wager_sol: MIN_WAGER_SOL / 2.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWager(Error::InvalidWager { .. }))
        ));

        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/crashbet.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
