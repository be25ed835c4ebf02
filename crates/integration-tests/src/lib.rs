//! Shared helpers for Velvet Fig integration tests.
//!
//! The actual tests live in `tests/`; this library only carries the bits
//! several test files want.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize a test tracing subscriber once per process.
///
/// Respects `RUST_LOG`; defaults to warnings so persistence fallbacks
/// show up in test output without drowning it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into());
        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}
