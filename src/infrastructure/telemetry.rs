//! # Telemetry
//!
//! Installs the process-wide `tracing` subscriber.
//!
//! Events go to stderr so that quote output on stdout stays machine-readable.
//! The filter comes from `RUST_LOG` and falls back to `info`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a fmt subscriber, as JSON lines when `json` is true.
///
/// Returns false if a global subscriber was already set; the existing one
/// is kept.
pub fn init_tracing(json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(json, "tracing initialised");
    }
    installed
}
