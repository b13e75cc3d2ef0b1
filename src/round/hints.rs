/// Hint derivation - pure functions of the secret, the guess and the attempt count
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attempt count at which the parity hint unlocks
pub const PARITY_HINT_AT: u32 = 3;
/// Attempt count at which the divisible-by-five hint unlocks
pub const DIVISIBILITY_HINT_AT: u32 = 5;
/// Attempt count at which the digit-sum hint unlocks
pub const DIGIT_SUM_HINT_AT: u32 = 7;

/// How close a guess landed, used to colour the guess list.
///
/// These bands (≤5 / ≥30) are not the same as [`DistanceBand`] (≤5 / ≤15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityTier {
    Exact,
    Close,
    Neutral,
    Far,
}

impl ProximityTier {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 => ProximityTier::Exact,
            1..=5 => ProximityTier::Close,
            d if d >= 30 => ProximityTier::Far,
            _ => ProximityTier::Neutral,
        }
    }
}

/// Which way the secret lies from the last guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Higher,
    Lower,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Higher => f.write_str("higher"),
            Direction::Lower => f.write_str("lower"),
        }
    }
}

/// Textual distance hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceBand {
    VeryClose,
    GettingCloser,
    QuiteFar,
}

impl DistanceBand {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0..=5 => DistanceBand::VeryClose,
            6..=15 => DistanceBand::GettingCloser,
            _ => DistanceBand::QuiteFar,
        }
    }
}

impl fmt::Display for DistanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceBand::VeryClose => f.write_str("very close"),
            DistanceBand::GettingCloser => f.write_str("getting closer"),
            DistanceBand::QuiteFar => f.write_str("quite far"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: u32) -> Self {
        if n % 2 == 0 { Parity::Even } else { Parity::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("even"),
            Parity::Odd => f.write_str("odd"),
        }
    }
}

/// Every hint unlocked for a non-winning guess.
///
/// The two leading hints are always present; the rest appear once enough
/// attempts have been spent and stay for the rest of the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintBundle {
    pub direction: Direction,
    pub distance: DistanceBand,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parity: Option<Parity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub divisible_by_five: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub digit_sum: Option<u32>,
}

impl HintBundle {
    /// Derive the hints for `guess`, with `attempts_used` already counting it.
    pub fn derive(secret: u32, guess: u32, attempts_used: u32) -> Self {
        let direction = if guess < secret { Direction::Higher } else { Direction::Lower };

        Self {
            direction,
            distance: DistanceBand::from_distance(secret.abs_diff(guess)),
            parity: (attempts_used >= PARITY_HINT_AT).then(|| Parity::of(secret)),
            divisible_by_five: (attempts_used >= DIVISIBILITY_HINT_AT).then_some(secret % 5 == 0),
            digit_sum: (attempts_used >= DIGIT_SUM_HINT_AT).then(|| digit_sum(secret)),
        }
    }

    /// Number of hints present
    pub fn len(&self) -> usize {
        2 + usize::from(self.parity.is_some())
            + usize::from(self.divisible_by_five.is_some())
            + usize::from(self.digit_sum.is_some())
    }

    // Never empty, direction and distance are always there.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Sum of the decimal digits of `n`
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_bands() {
        assert_eq!(ProximityTier::from_distance(0), ProximityTier::Exact);
        assert_eq!(ProximityTier::from_distance(1), ProximityTier::Close);
        assert_eq!(ProximityTier::from_distance(5), ProximityTier::Close);
        assert_eq!(ProximityTier::from_distance(6), ProximityTier::Neutral);
        assert_eq!(ProximityTier::from_distance(29), ProximityTier::Neutral);
        assert_eq!(ProximityTier::from_distance(30), ProximityTier::Far);
        assert_eq!(ProximityTier::from_distance(99), ProximityTier::Far);
    }

    #[test]
    fn distance_bands_differ_from_proximity() {
        assert_eq!(DistanceBand::from_distance(5), DistanceBand::VeryClose);
        assert_eq!(DistanceBand::from_distance(6), DistanceBand::GettingCloser);
        assert_eq!(DistanceBand::from_distance(15), DistanceBand::GettingCloser);
        assert_eq!(DistanceBand::from_distance(16), DistanceBand::QuiteFar);

        // 20 away: neutral tier but already "quite far" in text
        assert_eq!(ProximityTier::from_distance(20), ProximityTier::Neutral);
        assert_eq!(DistanceBand::from_distance(20), DistanceBand::QuiteFar);
    }

    #[test]
    fn hints_unlock_by_attempt() {
        let early = HintBundle::derive(42, 10, 2);
        assert_eq!(early.len(), 2);
        assert_eq!(early.parity, None);

        let third = HintBundle::derive(42, 10, 3);
        assert_eq!(third.parity, Some(Parity::Even));
        assert_eq!(third.divisible_by_five, None);

        let fifth = HintBundle::derive(42, 10, 5);
        assert_eq!(fifth.divisible_by_five, Some(false));
        assert_eq!(fifth.digit_sum, None);

        let seventh = HintBundle::derive(42, 10, 7);
        assert_eq!(seventh.digit_sum, Some(6));
        assert_eq!(seventh.len(), 5);
    }

    #[test]
    fn direction_and_labels() {
        let hints = HintBundle::derive(42, 90, 1);
        assert_eq!(hints.direction, Direction::Lower);
        assert_eq!(hints.direction.to_string(), "lower");
        assert_eq!(hints.distance.to_string(), "quite far");

        let hints = HintBundle::derive(42, 40, 1);
        assert_eq!(hints.direction.to_string(), "higher");
        assert_eq!(hints.distance.to_string(), "very close");
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(42), 6);
        assert_eq!(digit_sum(99), 18);
        assert_eq!(digit_sum(100), 1);
    }
}
