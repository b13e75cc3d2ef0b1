/// Player-facing text for round results, shared by the terminal adapters
use crate::round::{DistanceBand, GuessError, GuessResult, HintBundle, RoundView};

pub const WELCOME: &str = "Let's begin!";
pub const INVALID: &str = "Please enter a valid number between 1 and 100.";
pub const ROUND_OVER: &str = "This round is over. Start a new game to keep playing.";

/// Lines describing an accepted guess
pub fn result_lines(result: &GuessResult) -> Vec<String> {
    match result {
        GuessResult::Continuing { guess, attempts_used, max_attempts, hints, .. } => {
            let mut lines = vec![format!(
                "Attempt {attempts_used}/{max_attempts}: You guessed {guess}. That's not correct."
            )];
            lines.extend(hint_lines(hints));
            lines
        }
        GuessResult::Won { secret, attempts_used } => vec![format!(
            "Congratulations! You guessed the number {secret} in {attempts_used} attempts!"
        )],
        GuessResult::Lost { secret, max_attempts } => vec![format!(
            "Game over! You've used all {max_attempts} attempts. The number was {secret}."
        )],
    }
}

pub fn hint_lines(hints: &HintBundle) -> Vec<String> {
    let mut lines = vec![format!("The secret number is {}.", hints.direction)];

    lines.push(
        match hints.distance {
            DistanceBand::VeryClose => "You're very close!",
            DistanceBand::GettingCloser => "You're getting closer.",
            DistanceBand::QuiteFar => "You're still quite far away.",
        }
        .to_string(),
    );

    if let Some(parity) = hints.parity {
        lines.push(format!("The secret number is {parity}."));
    }
    if let Some(divisible) = hints.divisible_by_five {
        lines.push(if divisible {
            "The secret number is divisible by 5.".to_string()
        } else {
            "The secret number is not divisible by 5.".to_string()
        });
    }
    if let Some(sum) = hints.digit_sum {
        lines.push(format!("The sum of the digits in the secret number is {sum}."));
    }
    lines
}

pub fn error_line(error: &GuessError) -> String {
    match error {
        GuessError::InvalidInput(_) => INVALID.to_string(),
        GuessError::RoundFinished => ROUND_OVER.to_string(),
    }
}

/// Short status line, e.g. "Attempts: 3/10"
pub fn attempts_line(view: &RoundView) -> String {
    format!("Attempts: {}/{}", view.attempts_used, view.max_attempts)
}
