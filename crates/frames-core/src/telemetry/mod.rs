//! Tracing bootstrap.
//!
//! The resolver only emits `tracing` events; the subscriber is owned by the
//! embedding process. This helper installs a plain fmt subscriber for tools
//! and tests that do not bring their own.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install a global fmt subscriber filtered by `FRAMES_LOG`, falling back to
/// `default_directive` (e.g. `"info"` or `"frames_resolver=debug"`).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
