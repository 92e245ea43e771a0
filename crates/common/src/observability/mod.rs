//! Observability primitives - tracing subscriber setup
//!
//! Host applications call [`init_tracing`] once at startup; repeated calls
//! are no-ops so tests can call it freely.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber (env-filter + fmt).
///
/// Filtering defaults to `info` and can be overridden with `RUST_LOG`.
/// Idempotent: only the first call installs anything.
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init so an embedding application's own subscriber wins
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
