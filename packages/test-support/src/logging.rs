//! Unified test logging initialization
//!
//! One idempotent entry point used by unit tests (through the library's
//! `ctor` hook) and by every integration test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests.
///
/// Safe to call any number of times from any thread. The filter comes from,
/// in order of precedence:
///
/// 1. `TEST_LOG`
/// 2. `RUST_LOG`
/// 3. `"warn"`
///
/// Output goes through the test writer so cargo captures it per test.
///
/// ```bash
/// TEST_LOG=figgie=debug cargo test -p figgie
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
    tracing::trace!("test logging ready");
}
