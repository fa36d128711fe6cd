#![forbid(unsafe_code)]

//! Canonical host event types.
//!
//! The host environment (the page) delivers discrete events: load-time and
//! resize viewport widths, scroll positions, touch activity, form input,
//! submit, reset, and unload. This module defines the one canonical enum for
//! them. All events derive `Clone`, `PartialEq`, and `Eq` for use in tests
//! and pattern matching.
//!
//! The runtime does not define delivery semantics for these sources, only
//! its reaction; payloads carry exactly what the reaction needs.

/// Canonical host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Viewport was resized.
    Resize {
        /// New viewport width in device-independent pixels.
        width: u32,
    },

    /// Page scrolled.
    Scroll {
        /// New vertical scroll offset in pixels.
        top: u32,
    },

    /// A touch interaction began.
    TouchStart,

    /// A touch interaction moved.
    TouchMove,

    /// An order-form field changed.
    Input {
        /// Form field identifier as the host reports it.
        field: String,
        /// Full current value of the field.
        value: String,
    },

    /// The order form was submitted.
    Submit,

    /// The order form was reset.
    Reset,

    /// The page is unloading; tear down pending work.
    Unload,
}

impl Event {
    /// The kind of this event, for dispatch-table lookup.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::TouchStart => EventKind::TouchStart,
            Self::TouchMove => EventKind::TouchMove,
            Self::Input { .. } => EventKind::Input,
            Self::Submit => EventKind::Submit,
            Self::Reset => EventKind::Reset,
            Self::Unload => EventKind::Unload,
        }
    }
}

/// Typed event-source names for listener registration and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `resize` on the viewport.
    Resize,
    /// `scroll` on the document.
    Scroll,
    /// `touchstart` on the document.
    TouchStart,
    /// `touchmove` on the document.
    TouchMove,
    /// `input` on an order-form field.
    Input,
    /// `submit` on the order form.
    Submit,
    /// Reset control on the order form.
    Reset,
    /// Page unload.
    Unload,
}

impl EventKind {
    /// The DOM event name this kind subscribes to.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Scroll => "scroll",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Unload => "unload",
        }
    }

    /// Whether listeners for this kind must be passive.
    ///
    /// Touch listeners only mark activity; they must never block the
    /// default scroll behavior.
    #[must_use]
    pub const fn passive(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchMove)
    }
}
