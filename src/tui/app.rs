use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::feedback;
use crate::round::{GuessingRound, RoundView};
use crate::secret::SecretSource;

/// Interactive session state: the live round plus what the player is typing
pub struct App<S> {
    source: S,
    round: GuessingRound,
    input: String,
    feedback: Vec<String>,
    should_quit: bool,
}

impl<S: SecretSource> App<S> {
    pub fn new(mut source: S) -> Self {
        let round = GuessingRound::start_with(&mut source);
        Self {
            source,
            round,
            input: String::new(),
            feedback: vec![feedback::WELCOME.to_string()],
            should_quit: false,
        }
    }

    /// Throw the current round away and draw a fresh secret
    pub fn new_round(&mut self) {
        self.round = GuessingRound::start_with(&mut self.source);
        self.input.clear();
        self.feedback = vec![feedback::WELCOME.to_string()];
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            _ if self.is_finished() => match key.code {
                KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => self.new_round(),
                _ => {}
            },
            KeyCode::Char(c) if c.is_ascii_digit() => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.feedback = match self.round.submit_guess(&raw) {
            Ok(result) => feedback::result_lines(&result),
            Err(error) => {
                debug!(%error, "input rejected");
                vec![feedback::error_line(&error)]
            }
        };
    }
}

impl<S> App<S> {
    pub fn view(&self) -> RoundView {
        self.round.view()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn is_finished(&self) -> bool {
        self.round.status().is_finished()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
