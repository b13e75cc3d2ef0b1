use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::hints::{HintBundle, ProximityTier};
use super::{MAX_GUESS, MIN_GUESS};

/// What happened to an accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessResult {
    /// Wrong guess, attempts remain
    Continuing {
        guess: u32,
        attempts_used: u32,
        max_attempts: u32,
        proximity: ProximityTier,
        hints: HintBundle,
    },
    Won { secret: u32, attempts_used: u32 },
    /// Last attempt spent without a hit; the secret is revealed
    Lost { secret: u32, max_attempts: u32 },
}

impl GuessResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuessResult::Continuing { .. })
    }
}

/// Why a raw guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", content = "input", rename_all = "snake_case")]
pub enum InvalidGuess {
    #[error("no guess entered")]
    Empty,
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("{0} is outside {lo}..={hi}", lo = MIN_GUESS, hi = MAX_GUESS)]
    OutOfRange(i64),
}

/// Rejected submissions. Neither variant touches the round.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "detail", rename_all = "snake_case")]
pub enum GuessError {
    #[error("invalid guess: {0}")]
    InvalidInput(#[from] InvalidGuess),
    #[error("round is already over")]
    RoundFinished,
}
