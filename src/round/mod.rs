//! One round of the guessing game: the secret, the attempt budget and the
//! guesses made so far. No I/O happens here; adapters call in and render
//! whatever comes back.

pub mod hints;
pub mod outcome;

use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::secret::{RandomSecret, SecretSource};
pub use hints::{Direction, DistanceBand, HintBundle, Parity, ProximityTier};
pub use outcome::{GuessError, GuessResult, InvalidGuess};

pub const MIN_GUESS: u32 = 1;
pub const MAX_GUESS: u32 = 100;
pub const SECRET_RANGE: RangeInclusive<u32> = MIN_GUESS..=MAX_GUESS;
pub const MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_finished(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// Read-only snapshot for re-rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub history: Vec<u32>,
    /// Tier of each entry in `history`, same order
    pub proximity: Vec<ProximityTier>,
    pub status: RoundStatus,
    /// Only revealed once the round is over
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secret: Option<u32>,
}

impl RoundView {
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts - self.attempts_used
    }
}

/// State of a single round.
///
/// Created by [`GuessingRound::start`] or [`GuessingRound::start_with`] and
/// only changed through [`GuessingRound::submit_guess`] /
/// [`GuessingRound::submit_number`]. A new game is a new value.
#[derive(Debug, Clone)]
pub struct GuessingRound {
    secret: u32,
    max_attempts: u32,
    attempts_used: u32,
    history: Vec<u32>,
    status: RoundStatus,
}

impl GuessingRound {
    /// Start a round with a secret from the thread-local generator
    pub fn start() -> Self {
        Self::start_with(&mut RandomSecret::thread())
    }

    pub fn start_with(source: &mut impl SecretSource) -> Self {
        let drawn = source.draw_secret();
        let secret = drawn.clamp(MIN_GUESS, MAX_GUESS);
        if secret != drawn {
            warn!(drawn, secret, "secret source left the allowed range, clamped");
        }

        info!(max_attempts = MAX_ATTEMPTS, "round started");
        debug!(secret, "secret drawn");

        Self {
            secret,
            max_attempts: MAX_ATTEMPTS,
            attempts_used: 0,
            history: Vec::with_capacity(MAX_ATTEMPTS as usize),
            status: RoundStatus::InProgress,
        }
    }

    /// Parse and submit a guess typed by the player.
    ///
    /// Finished rounds reject everything with [`GuessError::RoundFinished`];
    /// otherwise bad input is [`GuessError::InvalidInput`]. The round is left
    /// untouched on any error.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GuessError> {
        if self.status.is_finished() {
            return Err(GuessError::RoundFinished);
        }
        let guess = parse_guess(raw).inspect_err(|e| debug!(raw, error = %e, "guess rejected"))?;
        self.submit_number(guess)
    }

    /// Submit an already-parsed guess
    pub fn submit_number(&mut self, guess: i64) -> Result<GuessResult, GuessError> {
        if self.status.is_finished() {
            return Err(GuessError::RoundFinished);
        }
        let guess = validate(guess)?;

        self.attempts_used += 1;
        self.history.push(guess);

        let proximity = ProximityTier::from_distance(self.secret.abs_diff(guess));
        debug!(guess, attempt = self.attempts_used, ?proximity, "guess accepted");

        if guess == self.secret {
            self.status = RoundStatus::Won;
            info!(attempts = self.attempts_used, "round won");
            return Ok(GuessResult::Won {
                secret: self.secret,
                attempts_used: self.attempts_used,
            });
        }

        if self.attempts_used == self.max_attempts {
            self.status = RoundStatus::Lost;
            info!(secret = self.secret, "round lost");
            return Ok(GuessResult::Lost {
                secret: self.secret,
                max_attempts: self.max_attempts,
            });
        }

        Ok(GuessResult::Continuing {
            guess,
            attempts_used: self.attempts_used,
            max_attempts: self.max_attempts,
            proximity,
            hints: HintBundle::derive(self.secret, guess, self.attempts_used),
        })
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            attempts_used: self.attempts_used,
            max_attempts: self.max_attempts,
            history: self.history.clone(),
            proximity: self
                .history
                .iter()
                .map(|&g| ProximityTier::from_distance(self.secret.abs_diff(g)))
                .collect(),
            status: self.status,
            secret: self.status.is_finished().then_some(self.secret),
        }
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

/// Parse raw text into an integer guess. Range is checked separately.
pub fn parse_guess(raw: &str) -> Result<i64, InvalidGuess> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidGuess::Empty);
    }

    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        // Still an integer, just a very large one
        IntErrorKind::PosOverflow => InvalidGuess::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => InvalidGuess::OutOfRange(i64::MIN),
        _ => InvalidGuess::NotANumber(trimmed.to_string()),
    })
}

fn validate(guess: i64) -> Result<u32, InvalidGuess> {
    u32::try_from(guess)
        .ok()
        .filter(|g| SECRET_RANGE.contains(g))
        .ok_or(InvalidGuess::OutOfRange(guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::FixedSecret;

    fn round_with(secret: u32) -> GuessingRound {
        GuessingRound::start_with(&mut FixedSecret::new(secret).unwrap())
    }

    struct OutOfRange(u32);

    impl SecretSource for OutOfRange {
        fn draw_secret(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn fresh_round_view() {
        let round = round_with(42);
        let view = round.view();
        assert_eq!(view.attempts_used, 0);
        assert_eq!(view.max_attempts, MAX_ATTEMPTS);
        assert!(view.history.is_empty());
        assert_eq!(view.status, RoundStatus::InProgress);
        assert_eq!(view.secret, None);
        assert_eq!(view.attempts_left(), 10);
    }

    #[test]
    fn parses_trimmed_and_signed() {
        assert_eq!(parse_guess(" 42\n"), Ok(42));
        assert_eq!(parse_guess("+7"), Ok(7));
        assert_eq!(parse_guess("-5"), Ok(-5));
        assert_eq!(parse_guess(""), Err(InvalidGuess::Empty));
        assert_eq!(parse_guess("   "), Err(InvalidGuess::Empty));
        assert_eq!(parse_guess("abc"), Err(InvalidGuess::NotANumber("abc".into())));
        assert_eq!(parse_guess("4.5"), Err(InvalidGuess::NotANumber("4.5".into())));
        assert_eq!(
            parse_guess("99999999999999999999999"),
            Err(InvalidGuess::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn validation_bounds() {
        assert_eq!(validate(1), Ok(1));
        assert_eq!(validate(100), Ok(100));
        assert_eq!(validate(0), Err(InvalidGuess::OutOfRange(0)));
        assert_eq!(validate(101), Err(InvalidGuess::OutOfRange(101)));
        assert_eq!(validate(-5), Err(InvalidGuess::OutOfRange(-5)));
        assert_eq!(validate(i64::from(u32::MAX) + 1), Err(InvalidGuess::OutOfRange(4_294_967_296)));
    }

    #[test]
    fn secret_is_clamped() {
        let high = GuessingRound::start_with(&mut OutOfRange(500));
        assert_eq!(high.secret, 100);
        let low = GuessingRound::start_with(&mut OutOfRange(0));
        assert_eq!(low.secret, 1);
    }

    #[test]
    fn view_tracks_proximity_and_reveals_when_done() {
        let mut round = round_with(50);
        round.submit_number(48).unwrap();
        round.submit_number(60).unwrap();
        round.submit_number(90).unwrap();

        let view = round.view();
        assert_eq!(view.history, vec![48, 60, 90]);
        assert_eq!(
            view.proximity,
            vec![ProximityTier::Close, ProximityTier::Neutral, ProximityTier::Far]
        );
        assert_eq!(view.secret, None);

        round.submit_number(50).unwrap();
        let view = round.view();
        assert_eq!(view.status, RoundStatus::Won);
        assert_eq!(view.secret, Some(50));
        assert_eq!(view.proximity.last(), Some(&ProximityTier::Exact));
    }

    #[test]
    fn finished_round_rejects_even_bad_input() {
        let mut round = round_with(3);
        round.submit_guess("3").unwrap();
        assert_eq!(round.submit_guess("abc"), Err(GuessError::RoundFinished));
        assert_eq!(round.submit_number(3), Err(GuessError::RoundFinished));
        assert_eq!(round.attempts_used(), 1);
    }
}
