//! Logging setup for binaries embedding the crate.
//!
//! The library itself only emits through the `tracing` macros; installing a
//! subscriber is the embedding application's call.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the process-global tracing subscriber.
///
/// Uses `try_init` so repeated calls (tests, applications with their own
/// setup) are harmless.
pub fn init(default_level: &str) {
    let level = match default_level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let _ = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
