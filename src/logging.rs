//! Tracing subscriber setup.
//!
//! Engines emit `tracing` events unconditionally; installing a subscriber
//! requires the `logging` feature. Without it every function here is a
//! no-op that reports nothing was installed.
//!
//! Only one global subscriber can exist per process. The first successful
//! call wins; later calls leave it in place and return `false`.

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs a subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LEVEL`].
///
/// Returns `true` if this call installed the subscriber, `false` if one was
/// already set (the call then changes nothing).
#[cfg(feature = "logging")]
pub fn init() -> bool {
    init_with_level(DEFAULT_LEVEL)
}

/// Installs a subscriber filtered by `RUST_LOG`, falling back to `level`.
///
/// # Arguments
/// * `level` - Filter directive used when `RUST_LOG` is unset
///   (e.g. `"debug"`, `"u_cpu_schedule=trace"`).
///
/// Returns `true` if this call installed the subscriber. A second call, or
/// a call after another crate set a global subscriber, returns `false`
/// and keeps the existing one with its filter.
#[cfg(feature = "logging")]
pub fn init_with_level(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// Installs a `debug` subscriber that writes through the test harness, so
/// output is captured per test. Repeated calls are harmless.
#[cfg(feature = "logging")]
pub fn init_test() {
    let installed = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("test subscriber installed");
    }
}

/// Without the `logging` feature: installs nothing and returns `false`.
#[cfg(not(feature = "logging"))]
pub fn init() -> bool {
    false
}

/// Without the `logging` feature: ignores `level`, installs nothing and
/// returns `false`.
#[cfg(not(feature = "logging"))]
pub fn init_with_level(_level: &str) -> bool {
    false
}

/// Without the `logging` feature: does nothing, so tests may call it
/// unconditionally.
#[cfg(not(feature = "logging"))]
pub fn init_test() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_test();
        // A subscriber is already set (or the feature is off), so neither
        // call installs anything.
        assert!(!init());
        assert!(!init_with_level("trace"));
    }

    #[test]
    fn test_init_test_repeatable() {
        init_test();
        init_test();
        tracing::info!(target: "u_cpu_schedule", "still logging");
    }
}
