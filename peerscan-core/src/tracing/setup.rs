//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Peerscan tracing/logging system.
///
/// Reads the `PEERSCAN_LOG` environment variable for per-subsystem log
/// levels, e.g. `PEERSCAN_LOG=peerscan_storage=debug,peerscan_detect=info`.
/// Falls back to `peerscan=info` when unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PEERSCAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("peerscan=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
