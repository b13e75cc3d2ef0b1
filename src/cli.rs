use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::line::{self, LineOptions};
use crate::logging::{self, LogTarget};
use crate::secret::{RandomSecret, SecretSource};
use crate::tui;

#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(about = "🎯 Guess the secret number between 1 and 100 in ten tries")]
#[command(version)]
pub struct Cli {
    /// Seed for the secret generator, for reproducible sessions
    #[arg(long, env = "NUMGUESS_SEED", global = true)]
    pub seed: Option<u64>,

    /// Log filter directive (RUST_LOG overrides it)
    #[arg(long, env = "NUMGUESS_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to this file (needed to see logs in the interactive UI)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Play in the full-screen terminal UI (default)
    Play,
    /// Play one guess per line over stdin/stdout
    Line {
        /// Print JSON events instead of text
        #[arg(long)]
        json: bool,
        /// Exit when the first round ends
        #[arg(long)]
        once: bool,
    },
}

impl Cli {
    pub fn secret_source(&self) -> Box<dyn SecretSource> {
        match self.seed {
            Some(seed) => Box::new(RandomSecret::seeded(seed)),
            None => Box::new(RandomSecret::thread()),
        }
    }

    fn log_target(&self, command: Commands) -> LogTarget<'_> {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.as_path()),
            (None, Commands::Play) => LogTarget::Off,
            (None, Commands::Line { .. }) => LogTarget::Stderr,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(&cli.log_level, cli.log_target(command))?;
    info!(?command, seeded = cli.seed.is_some(), "starting");

    let source = cli.secret_source();
    match command {
        Commands::Play => tui::play(source).await,
        Commands::Line { json, once } => line::run_stdio(source, LineOptions { json, once }).await,
    }
}
