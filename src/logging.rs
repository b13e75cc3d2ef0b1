use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, Once};

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// The full-screen UI owns the terminal and no file was given
    Off,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` when it is set.
pub fn init(default_filter: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("bad log filter `{default_filter}`: {e}"))?;

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

static TEST_INIT: Once = Once::new();

/// Test logging, quiet unless `TEST_LOG` (or `RUST_LOG`) asks for more.
/// Safe to call from every test.
pub fn init_for_tests() {
    TEST_INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
