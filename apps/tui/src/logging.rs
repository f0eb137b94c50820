//! Tracing setup for the terminal dashboard.
//!
//! The interactive UI owns stdout, so log lines go to a file there; headless
//! runs log to stderr. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

pub const fn default_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let level = default_level(debug);
    let default_filter = format!("car_market={level},car_market_tui={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init_logging(target: LogTarget<'_>, debug: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(debug));

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr);
            let _ = registry.with(layer).try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            let _ = registry.with(layer).try_init();
        }
    }

    Ok(())
}
