//! Interactive terminal front end

pub mod app;
pub mod engine;
mod renderer;

use anyhow::Result;

use crate::secret::SecretSource;
pub use app::App;

/// Take over the terminal and play until the player quits
pub async fn play<S: SecretSource>(source: S) -> Result<()> {
    let terminal = ratatui::init();
    let result = engine::run(App::new(source), terminal).await;
    ratatui::restore();
    result
}
