#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports of tracing macros when the `tracing` feature is enabled; no-op
//! macros otherwise so call sites compile either way. The `tracing-json`
//! feature adds a JSON subscriber initializer for production hosts.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error macro when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }
}

/// Install a JSON-formatted subscriber filtered by `TOHFA_LOG`.
///
/// Falls back to the given default directive when the variable is unset or
/// malformed. Returns quietly if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json(default_directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("TOHFA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init();
}
