use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::secret::SecretSource;
use crate::tui::app::App;

/// Drive the app until the player quits or input closes
pub async fn run<S: SecretSource>(mut app: App<S>, mut terminal: DefaultTerminal) -> Result<()> {
    let mut events = EventStream::new();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            // Keyboard input; resize and focus events just fall through to a redraw
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },

            // SIGINT from outside; in raw mode Ctrl+C arrives as a key instead
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
    }

    Ok(())
}
