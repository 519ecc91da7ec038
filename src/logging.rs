//! Log output for the function binaries

use tracing_subscriber::EnvFilter;

/// Install a compact subscriber filtered by `RUST_LOG` (default `info`)
///
/// Timestamps and targets are omitted; the hosting log service records
/// ingestion time itself. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
