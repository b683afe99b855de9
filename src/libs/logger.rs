//! Tracing subscriber setup.
//!
//! Structured logs are only emitted in debug mode (`OKR_DEBUG` or `RUST_LOG`
//! set, see [`crate::libs::messages::macros::is_debug_mode`]). Otherwise the
//! CLI prints plain messages and no subscriber is installed.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "okr=debug";

/// Installs the global subscriber when debug mode is on.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
