//! Tracing setup.
//!
//! The library only emits `tracing` events; hosts that want them printed
//! call [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `filter` (an `EnvFilter`
/// directive such as `"info"` or `"loadout_planner=debug"`).
///
/// Returns `false` when a global subscriber was already installed, which
/// makes repeated calls harmless.
pub fn init_tracing(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
