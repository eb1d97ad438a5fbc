//! Logging bootstrap.
//!
//! Library code only emits `tracing` events; the host decides whether to
//! install a subscriber. [`init`] is the default one used by demos and tools.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "debug,bloxel_gui=debug,bloxel_input=info,winit=info";

/// Install a fmt subscriber honouring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Like [`init`], but does nothing if a global subscriber already exists.
/// Useful from tests and examples that may run in the same process.
pub fn try_init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
