// ============================================================================
// Logging
// Optional tracing subscriber setup for binaries, demos and benchmarks
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g. `"calculator=debug"`).
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
