use thiserror::Error;

/// Errors surfaced by the crash core.
///
/// Nothing in the core logs or swallows these; callers decide how to present them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{field} must be finite and > 1.0 (got {value})")]
    InvalidArgument { field: &'static str, value: f64 },
    #[error("wager must be finite and >= {min} SOL (got {value})")]
    InvalidWager { value: f64, min: f64 },
    #[error("invalid bet array: {reason}")]
    InvalidBet { reason: &'static str },
    #[error("wallet session is not connected")]
    NotConnected,
    #[error("round is already in flight")]
    RoundInProgress,
    #[error("round is not awaiting settlement")]
    RoundNotPlaying,
    #[error("settlement failed: {0}")]
    Settlement(String),
}
