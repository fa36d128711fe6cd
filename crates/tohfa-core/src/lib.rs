#![forbid(unsafe_code)]

//! Core: device classification, feature gating, events, and logging.

pub mod event;
pub mod feature_gate;
pub mod logging;
pub mod viewport;

pub use event::{Event, EventKind};
pub use feature_gate::{
    AnimationDriver, AnimationOptions, AnimationUnavailable, FeatureGate, FeatureState, Features,
    NullAnimationDriver,
};
pub use viewport::{DeviceClass, MOBILE_BREAKPOINT_PX, ViewportClassifier};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
