//! Logging setup
//!
//! Events go through `tracing`. The filter comes from `RUST_LOG` and falls
//! back to `info`; per-query summaries are emitted at `debug`.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
