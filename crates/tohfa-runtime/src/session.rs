#![forbid(unsafe_code)]

//! Host-driven session runtime.
//!
//! Wires the pieces for one page session: classify the viewport at load,
//! apply the feature gate, wrap the high-frequency sources in throttles,
//! and route form events to the order controller. The host owns event
//! delivery and calls [`tick`](SessionRuntime::tick) once per frame; the
//! runtime schedules nothing of its own.
//!
//! # Ordering
//!
//! All work happens on the host's single UI thread in dispatch order.
//! Within a throttle window only the most recent queued invocation
//! survives; earlier invocations are superseded, not executed out of
//! order. No locks: correctness comes from idempotent re-entry (the gate)
//! and explicit state transitions (the form).
//!
//! # Teardown
//!
//! [`Event::Unload`] cancels all pending throttle work and deadens the
//! runtime; later events and ticks are no-ops.

use std::time::{Duration, Instant};

use tohfa_core::event::{Event, EventKind};
use tohfa_core::feature_gate::{AnimationDriver, AnimationOptions, FeatureGate, FeatureState};
use tohfa_core::viewport::{DeviceClass, MOBILE_BREAKPOINT_PX, ViewportClassifier};
use tohfa_order::controller::{Confirmation, Field, OrderFormController, SubmitOutcome};

use crate::throttle::{SCROLL_INTERVAL, Throttle};

/// One row of the listener registration table.
///
/// The host attaches one DOM listener per row; `passive` rows must never
/// cancel the default scroll behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerSpec {
    /// The event source to subscribe to.
    pub kind: EventKind,
    /// Whether the listener must be registered as passive.
    pub passive: bool,
    /// Throttle window for this source (zero = pass-through).
    pub interval: Duration,
}

/// Session configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Mobile/desktop breakpoint in device-independent pixels.
    pub breakpoint: u32,
    /// Throttle window for scroll handlers.
    pub scroll_interval: Duration,
    /// Options handed to the animation driver on init.
    pub animation: AnimationOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT_PX,
            scroll_interval: SCROLL_INTERVAL,
            animation: AnimationOptions::default(),
        }
    }
}

impl SessionConfig {
    /// Override the breakpoint (builder).
    #[must_use]
    pub const fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Override the scroll throttle window (builder).
    #[must_use]
    pub const fn with_scroll_interval(mut self, interval: Duration) -> Self {
        self.scroll_interval = interval;
        self
    }

    /// Override the animation options (builder).
    #[must_use]
    pub const fn with_animation(mut self, animation: AnimationOptions) -> Self {
        self.animation = animation;
        self
    }
}

/// The per-session runtime: one classifier, one gate, one throttle per
/// wrapped source, one order form.
#[derive(Debug)]
pub struct SessionRuntime<D: AnimationDriver> {
    config: SessionConfig,
    classifier: ViewportClassifier,
    gate: FeatureGate,
    driver: D,
    scroll: Throttle,
    touch_start: Throttle,
    touch_move: Throttle,
    form: OrderFormController,
    last_scroll_top: Option<u32>,
    last_touch_at: Option<Instant>,
    shut_down: bool,
}

impl<D: AnimationDriver> SessionRuntime<D> {
    /// Create a runtime for one page session.
    #[must_use]
    pub fn new(config: SessionConfig, driver: D) -> Self {
        Self {
            config,
            classifier: ViewportClassifier::new().with_breakpoint(config.breakpoint),
            gate: FeatureGate::new(config.animation),
            driver,
            scroll: Throttle::new(config.scroll_interval),
            // Touch handlers only mark activity; no throttling.
            touch_start: Throttle::pass_through(),
            touch_move: Throttle::pass_through(),
            form: OrderFormController::new(),
            last_scroll_top: None,
            last_touch_at: None,
            shut_down: false,
        }
    }

    /// Run the load-time classification and gate application.
    pub fn start(&mut self, width: u32) -> FeatureState {
        let class = self.classifier.classify(width);
        self.classifier.observe(width);
        let state = self.gate.apply(class, &mut self.driver);
        tracing::info!(?class, width, animations = state.animations(), "session started");
        state
    }

    /// The listener registration table for this session.
    ///
    /// One row per subscribed source; the host wires each row to the
    /// matching DOM event with the given passive flag.
    #[must_use]
    pub fn listener_table(&self) -> [ListenerSpec; 8] {
        let row = |kind: EventKind| {
            let interval = match kind {
                EventKind::Scroll => self.config.scroll_interval,
                _ => Duration::ZERO,
            };
            ListenerSpec {
                kind,
                passive: kind.passive(),
                interval,
            }
        };
        [
            row(EventKind::Resize),
            row(EventKind::Scroll),
            row(EventKind::TouchStart),
            row(EventKind::TouchMove),
            row(EventKind::Input),
            row(EventKind::Submit),
            row(EventKind::Reset),
            row(EventKind::Unload),
        ]
    }

    /// Dispatch one host event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        if self.shut_down {
            return;
        }
        match event {
            Event::Resize { width } => {
                // Classification is cheap; resize is never throttled.
                if let Some(class) = self.classifier.observe(width) {
                    let state = self.gate.apply(class, &mut self.driver);
                    tracing::debug!(?class, width, animations = state.animations(), "re-gated");
                }
            }
            Event::Scroll { .. } => {
                if let Some(Event::Scroll { top }) = self.scroll.offer(event, now) {
                    self.on_scroll(top);
                }
            }
            Event::TouchStart => {
                if self.touch_start.offer(event, now).is_some() {
                    self.last_touch_at = Some(now);
                }
            }
            Event::TouchMove => {
                if self.touch_move.offer(event, now).is_some() {
                    self.last_touch_at = Some(now);
                }
            }
            Event::Input { field, value } => match Field::parse(&field) {
                Some(field) => {
                    self.form.update_field(field, value);
                }
                None => tracing::warn!(field = %field, "input for unknown form field"),
            },
            Event::Submit => {
                let outcome = self.form.submit(&mut rand::rng());
                if let SubmitOutcome::Rejected(status) = outcome {
                    tracing::debug!(?status, "submit ignored");
                }
            }
            Event::Reset => self.form.reset(),
            Event::Unload => self.shutdown(),
        }
    }

    /// Release due throttle work. The host calls this once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.shut_down {
            return;
        }
        if let Some(Event::Scroll { top }) = self.scroll.tick(now) {
            self.on_scroll(top);
        }
    }

    /// Cancel pending throttle work and deaden the runtime.
    pub fn shutdown(&mut self) {
        let cancelled = self.scroll.cancel();
        self.touch_start.cancel();
        self.touch_move.cancel();
        self.shut_down = true;
        tracing::info!(cancelled_scroll = cancelled, "session shut down");
    }

    fn on_scroll(&mut self, top: u32) {
        self.last_scroll_top = Some(top);
        tracing::trace!(top, "scroll handled");
    }

    // ── Read-only surface ──────────────────────────────────────────────

    /// The current device class, once [`start`](Self::start) has run.
    #[must_use]
    pub fn device_class(&self) -> Option<DeviceClass> {
        self.classifier.current()
    }

    /// The feature state from the most recent gate application.
    #[must_use]
    pub fn features(&self) -> FeatureState {
        self.gate.state()
    }

    /// The order form, for hosts rendering its state.
    #[must_use]
    pub const fn form(&self) -> &OrderFormController {
        &self.form
    }

    /// The confirmation artifact, once the form is confirmed.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation<'_>> {
        self.form.confirmation()
    }

    /// The last scroll offset a handler actually ran for.
    #[must_use]
    pub const fn last_scroll_top(&self) -> Option<u32> {
        self.last_scroll_top
    }

    /// When touch activity was last marked.
    #[must_use]
    pub const fn last_touch_at(&self) -> Option<Instant> {
        self.last_touch_at
    }

    /// Whether the session has been torn down.
    #[must_use]
    pub const fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
