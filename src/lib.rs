pub mod cli;
pub mod commands;
pub mod core;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Structured logging to stderr. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
