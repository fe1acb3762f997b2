// src/log.rs
//! Process-wide logging. The binary calls [`init`] once at start-up; the
//! pipeline stages only emit `tracing` events and never touch subscriber state.
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Install the stderr subscriber. `RUST_LOG` overrides the default `info`
/// filter. Timestamps are elapsed time since start-up.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
