//! Line-oriented front end: one guess per input line, text or JSON out.
//!
//! Handy for scripting and for terminals where the full-screen UI is not
//! wanted. `new` starts a fresh round, `quit` ends the session.

use anyhow::Result;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::feedback;
use crate::round::{GuessError, GuessResult, GuessingRound, RoundView};
use crate::secret::SecretSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineOptions {
    /// Emit one JSON object per event instead of text
    pub json: bool,
    /// Stop after the first round ends
    pub once: bool,
}

/// What a JSON consumer sees for each step
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum LineEvent<'a> {
    Started { view: RoundView },
    Guess { result: &'a GuessResult, view: RoundView },
    Rejected { error: &'a GuessError, view: RoundView },
}

/// Session state for line mode, independent of where lines come from
pub struct LineSession<S> {
    source: S,
    round: GuessingRound,
    options: LineOptions,
    done: bool,
}

impl<S: SecretSource> LineSession<S> {
    pub fn new(mut source: S, options: LineOptions) -> Self {
        let round = GuessingRound::start_with(&mut source);
        Self { source, round, options, done: false }
    }

    /// Output for a freshly started round
    pub fn greeting(&self) -> Result<Vec<String>> {
        if self.options.json {
            Ok(vec![serde_json::to_string(&LineEvent::Started { view: self.round.view() })?])
        } else {
            Ok(vec![feedback::WELCOME.to_string()])
        }
    }

    /// Handle one line of input and return the lines to print
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<String>> {
        match line.trim() {
            "quit" | "exit" => {
                self.done = true;
                return Ok(Vec::new());
            }
            "new" => return self.restart(),
            _ => {}
        }

        let mut out = match self.round.submit_guess(line) {
            Ok(result) => {
                let out = if self.options.json {
                    vec![serde_json::to_string(&LineEvent::Guess { result: &result, view: self.round.view() })?]
                } else {
                    feedback::result_lines(&result)
                };
                if result.is_terminal() {
                    return self.finish_round(out);
                }
                out
            }
            Err(error) => {
                debug!(%error, "line rejected");
                if self.options.json {
                    vec![serde_json::to_string(&LineEvent::Rejected { error: &error, view: self.round.view() })?]
                } else {
                    vec![feedback::error_line(&error)]
                }
            }
        };

        if !self.options.json && !self.round.status().is_finished() {
            out.push(feedback::attempts_line(&self.round.view()));
        }
        Ok(out)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn finish_round(&mut self, mut out: Vec<String>) -> Result<Vec<String>> {
        if self.options.once {
            self.done = true;
            return Ok(out);
        }
        out.extend(self.restart()?);
        Ok(out)
    }

    fn restart(&mut self) -> Result<Vec<String>> {
        self.round = GuessingRound::start_with(&mut self.source);
        self.greeting()
    }
}

/// Play over any line source and sink until `quit`, EOF, or (with `once`)
/// the end of the first round.
pub async fn run<S, R, W>(source: S, options: LineOptions, input: R, mut output: W) -> Result<()>
where
    S: SecretSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = LineSession::new(source, options);
    let mut lines = input.lines();

    write_lines(&mut output, &session.greeting()?).await?;

    while let Some(line) = lines.next_line().await? {
        let out = session.handle_line(&line)?;
        write_lines(&mut output, &out).await?;
        if session.is_done() {
            break;
        }
    }

    info!("line session ended");
    Ok(())
}

/// Line mode on the process's stdin and stdout
pub async fn run_stdio<S: SecretSource>(source: S, options: LineOptions) -> Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run(source, options, stdin, tokio::io::stdout()).await
}

async fn write_lines<W: AsyncWrite + Unpin>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::FixedSecret;

    fn session(secret: u32, options: LineOptions) -> LineSession<FixedSecret> {
        LineSession::new(FixedSecret::new(secret).unwrap(), options)
    }

    #[test]
    fn text_mode_reports_attempts() {
        let mut s = session(42, LineOptions::default());
        let out = s.handle_line("10").unwrap();
        assert_eq!(out.first().map(String::as_str), Some("Attempt 1/10: You guessed 10. That's not correct."));
        assert_eq!(out.last().map(String::as_str), Some("Attempts: 1/10"));

        let out = s.handle_line("abc").unwrap();
        assert_eq!(out, vec![feedback::INVALID, "Attempts: 1/10"]);
    }

    #[test]
    fn finished_round_restarts_unless_once() {
        let mut s = session(42, LineOptions::default());
        let out = s.handle_line("42").unwrap();
        assert_eq!(out[0], "Congratulations! You guessed the number 42 in 1 attempts!");
        assert_eq!(out[1], feedback::WELCOME);
        assert!(!s.is_done());
        assert_eq!(s.round.attempts_used(), 0);

        let mut s = session(42, LineOptions { once: true, ..Default::default() });
        s.handle_line("42").unwrap();
        assert!(s.is_done());
    }

    #[test]
    fn json_events() {
        let mut s = session(42, LineOptions { json: true, once: true });
        let started: serde_json::Value = serde_json::from_str(&s.greeting().unwrap()[0]).unwrap();
        assert_eq!(started["event"], "started");
        assert_eq!(started["view"]["status"], "in_progress");

        let out = s.handle_line("10").unwrap();
        let guess: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(guess["event"], "guess");
        assert_eq!(guess["result"]["outcome"], "continuing");
        assert_eq!(guess["result"]["hints"]["direction"], "higher");
        assert_eq!(guess["view"]["attempts_used"], 1);

        let out = s.handle_line("101").unwrap();
        let rejected: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(rejected["event"], "rejected");
        assert_eq!(rejected["error"]["error"], "invalid_input");
        assert_eq!(rejected["error"]["detail"]["reason"], "out_of_range");
        assert_eq!(rejected["error"]["detail"]["input"], 101);
    }

    #[test]
    fn quit_and_new() {
        let mut s = session(42, LineOptions::default());
        s.handle_line("10").unwrap();
        assert_eq!(s.handle_line("new").unwrap(), vec![feedback::WELCOME]);
        assert_eq!(s.round.attempts_used(), 0);

        assert!(s.handle_line("quit").unwrap().is_empty());
        assert!(s.is_done());
    }
}
