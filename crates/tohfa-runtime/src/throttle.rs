#![forbid(unsafe_code)]

//! Rate limiting for high-frequency event sources.
//!
//! Scroll events arrive at native frequency, far above what the page's
//! handlers need. A [`Throttle`] caps handler execution to once per
//! interval with latest-wins coalescing: invocations landing inside an
//! active window replace the pending one and the survivor fires exactly
//! once when the window closes. Nothing is dropped silently and nothing
//! runs twice per window.
//!
//! # Design
//!
//! Host-driven, like the rest of the runtime: [`offer`](Throttle::offer)
//! decides whether an invocation runs now or parks, and
//! [`tick`](Throttle::tick) (called once per frame) releases a parked
//! invocation once its window has closed. There is one pending slot and
//! at most one conceptual timer per source, never concurrent work.
//!
//! An interval of zero is a pass-through: every offer fires immediately.
//! Touch sources use this, since their handlers only mark activity.
//!
//! # Teardown
//!
//! [`cancel`](Throttle::cancel) drops the pending invocation. The session
//! runtime calls it on page unload so nothing fires into a torn-down DOM;
//! cancelling with nothing pending is a no-op, not an error.

use std::time::{Duration, Instant};

use tohfa_core::event::Event;

/// Throttle interval for scroll handlers: one execution per ~60 fps frame.
pub const SCROLL_INTERVAL: Duration = Duration::from_millis(16);

/// Per-source rate limiter with latest-wins coalescing.
///
/// The state is exactly the per-source record: the last invocation
/// timestamp, the pending slot, and the interval.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: Option<Event>,
}

#[inline]
fn duration_since_or_zero(now: Instant, earlier: Instant) -> Duration {
    now.checked_duration_since(earlier)
        .unwrap_or(Duration::ZERO)
}

impl Throttle {
    /// Create a throttle with the given window interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: None,
        }
    }

    /// Create a pass-through throttle (zero interval, never coalesces).
    #[must_use]
    pub const fn pass_through() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured window interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an invocation is parked waiting for its window to close.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending invocation becomes due, if one is parked.
    ///
    /// Hosts that schedule a real timer instead of polling [`tick`] can use
    /// this as the deadline.
    ///
    /// [`tick`]: Throttle::tick
    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_fired.and_then(|last| last.checked_add(self.interval))
    }

    /// Offer an invocation.
    ///
    /// Returns `Some(event)` when the handler should run now; `None` when
    /// the invocation was parked (latest wins). An offer that fires
    /// supersedes any parked invocation from an earlier window.
    pub fn offer(&mut self, event: Event, now: Instant) -> Option<Event> {
        if self.interval.is_zero() {
            self.last_fired = Some(now);
            return Some(event);
        }
        if let Some(last) = self.last_fired
            && duration_since_or_zero(now, last) < self.interval
        {
            self.pending = Some(event);
            return None;
        }
        self.pending = None;
        self.last_fired = Some(now);
        Some(event)
    }

    /// Release the pending invocation if its window has closed.
    ///
    /// Call once per frame. Returns `Some(event)` at most once per window.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        self.pending.as_ref()?;
        let due = match self.last_fired {
            Some(last) => duration_since_or_zero(now, last) >= self.interval,
            None => true,
        };
        if due {
            self.last_fired = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending invocation, if any. Returns whether one was parked.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
