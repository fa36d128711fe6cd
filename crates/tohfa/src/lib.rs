#![forbid(unsafe_code)]

//! Tohfa public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! A typical host creates a [`SessionRuntime`] at page load, attaches the
//! DOM listeners its [`listener_table`](SessionRuntime::listener_table)
//! describes, forwards events plus a per-frame tick, and renders from the
//! read-only accessors.

// --- Core re-exports -------------------------------------------------------

pub use tohfa_core::event::{Event, EventKind};
pub use tohfa_core::feature_gate::{
    AnimationDriver, AnimationOptions, AnimationUnavailable, FeatureGate, FeatureState, Features,
    NullAnimationDriver,
};
pub use tohfa_core::viewport::{DeviceClass, MOBILE_BREAKPOINT_PX, ViewportClassifier};

// --- Order re-exports ------------------------------------------------------

pub use tohfa_order::controller::{
    Confirmation, Field, FieldValues, FormStatus, OrderFormController, SubmitOutcome,
};
pub use tohfa_order::order_id::{ORDER_ID_PREFIX, OrderId};

// --- Runtime re-exports ----------------------------------------------------

pub use tohfa_runtime::session::{ListenerSpec, SessionConfig, SessionRuntime};
pub use tohfa_runtime::throttle::{SCROLL_INTERVAL, Throttle};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnimationDriver, AnimationOptions, Confirmation, DeviceClass, Event, EventKind,
        FeatureState, Field, FormStatus, NullAnimationDriver, OrderFormController, OrderId,
        SessionConfig, SessionRuntime, Throttle,
    };

    pub use crate::{core, order, runtime};
}

pub use tohfa_core as core;
pub use tohfa_order as order;
pub use tohfa_runtime as runtime;
