//! Structured logging setup for the binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left to
//! whoever owns `main`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter from `RUST_LOG` when set, otherwise from `default_level`
/// (an `EnvFilter` directive such as `"info"` or `"warn,traj_engine=debug"`).
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter(default_level))
}

/// Filter built from `level` alone, falling back to `info` when the directive does not parse.
pub fn default_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a stderr subscriber. Returns false when one was already installed.
pub fn init_logging(default_level: &str) -> bool {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(console_layer)
        .try_init()
        .is_ok()
}
