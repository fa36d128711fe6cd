#![forbid(unsafe_code)]

//! Runtime: event throttling and the host-driven session loop.
//!
//! The host (the page) delivers events and a per-frame tick; the runtime
//! owns the classifier, the feature gate, one throttle per wrapped event
//! source, and the order form. Everything is single-threaded and
//! deterministic: no timers of its own, no background work.

pub mod session;
pub mod throttle;

pub use session::{ListenerSpec, SessionConfig, SessionRuntime};
pub use throttle::{SCROLL_INTERVAL, Throttle};
