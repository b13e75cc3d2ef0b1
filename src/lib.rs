pub mod cli;
pub mod feedback;
pub mod line;
pub mod logging;
pub mod round;
pub mod secret;
pub mod tui;

// Re-export for convenience
pub use crate::round::{GuessError, GuessResult, GuessingRound, RoundStatus, RoundView};
pub use crate::secret::{FixedSecret, RandomSecret, SecretSource};
