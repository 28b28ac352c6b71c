//! Tracing subscriber setup.
//!
//! The SDK crates only emit `tracing` events. Applications that want them on
//! stderr call [`init`] once at startup.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,neo_sdk=info";

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. Returns `false` when a global
/// subscriber was already installed, so calling this twice is harmless.
pub fn init(filter: Option<&str>) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));

    let builder = fmt().with_env_filter(env_filter).with_target(true);

    #[cfg(feature = "json-logs")]
    let installed = builder.json().try_init().is_ok();
    #[cfg(not(feature = "json-logs"))]
    let installed = builder.try_init().is_ok();

    installed
}
