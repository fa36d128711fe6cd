#![forbid(unsafe_code)]

//! Viewport width classification.
//!
//! Every cost decision in the runtime hangs off a single coarse question:
//! is the viewport mobile-sized or desktop-sized? This module answers it in
//! exactly one place so consumers read a classification instead of
//! re-querying the width themselves.
//!
//! # Design
//!
//! - [`DeviceClass::classify`] is a pure function of width against one
//!   breakpoint. No side effects, no error conditions.
//! - [`ViewportClassifier`] adds the stateful part: it remembers the last
//!   class and reports *crossings*, so the feature gate re-runs exactly when
//!   a resize moves the viewport across the breakpoint and never otherwise.
//!
//! Classification is cheap and resize events are infrequent relative to
//! scroll, so resize handling is deliberately not throttled.

/// Widths at or below this many device-independent pixels classify as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Coarse classification of the viewing context.
///
/// Exactly one class is active at any instant; the class is derived from the
/// current viewport width and never stored across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Narrow viewport: heavyweight visual features are gated off.
    Mobile,
    /// Wide viewport: heavyweight visual features may be enabled.
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width against the default breakpoint.
    ///
    /// Pure: `width <= 768` is [`DeviceClass::Mobile`], anything wider is
    /// [`DeviceClass::Desktop`].
    #[must_use]
    pub const fn classify(width: u32) -> Self {
        Self::classify_against(width, MOBILE_BREAKPOINT_PX)
    }

    /// Classify a viewport width against an explicit breakpoint.
    #[must_use]
    pub const fn classify_against(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this is the mobile class.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Stateful classifier that tracks the current class across resizes.
///
/// The runtime owns one of these as the single source of truth for device
/// class. Feed it widths via [`observe`](ViewportClassifier::observe); it
/// returns `Some(new_class)` only on a breakpoint crossing.
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    breakpoint: u32,
    current: Option<DeviceClass>,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportClassifier {
    /// Create a classifier with the default breakpoint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            breakpoint: MOBILE_BREAKPOINT_PX,
            current: None,
        }
    }

    /// Override the breakpoint (builder).
    #[must_use]
    pub const fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// The breakpoint this classifier compares against.
    #[must_use]
    pub const fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Classify a width without updating the tracked class.
    #[must_use]
    pub const fn classify(&self, width: u32) -> DeviceClass {
        DeviceClass::classify_against(width, self.breakpoint)
    }

    /// The class from the most recent [`observe`](Self::observe) call, if any.
    #[must_use]
    pub const fn current(&self) -> Option<DeviceClass> {
        self.current
    }

    /// Observe a new width, returning `Some(class)` when the class changed.
    ///
    /// The first observation always reports a change (there is no previous
    /// class). Subsequent observations report only breakpoint crossings, so
    /// callers can re-run gating exactly on transitions.
    pub fn observe(&mut self, width: u32) -> Option<DeviceClass> {
        let class = self.classify(width);
        if self.current == Some(class) {
            None
        } else {
            self.current = Some(class);
            Some(class)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_on_mobile_side() {
        assert_eq!(DeviceClass::classify(768), DeviceClass::Mobile);
        assert_eq!(DeviceClass::classify(769), DeviceClass::Desktop);
    }

    #[test]
    fn narrow_widths_are_mobile() {
        assert_eq!(DeviceClass::classify(0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::classify(400), DeviceClass::Mobile);
    }

    #[test]
    fn wide_widths_are_desktop() {
        assert_eq!(DeviceClass::classify(1024), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify(u32::MAX), DeviceClass::Desktop);
    }

    #[test]
    fn first_observation_reports_a_change() {
        let mut classifier = ViewportClassifier::new();
        assert_eq!(classifier.current(), None);
        assert_eq!(classifier.observe(1024), Some(DeviceClass::Desktop));
        assert_eq!(classifier.current(), Some(DeviceClass::Desktop));
    }

    #[test]
    fn same_side_resizes_report_nothing() {
        let mut classifier = ViewportClassifier::new();
        classifier.observe(1024);
        assert_eq!(classifier.observe(1280), None);
        assert_eq!(classifier.observe(900), None);
        assert_eq!(classifier.current(), Some(DeviceClass::Desktop));
    }

    #[test]
    fn crossings_report_the_new_class() {
        let mut classifier = ViewportClassifier::new();
        classifier.observe(1024);
        assert_eq!(classifier.observe(400), Some(DeviceClass::Mobile));
        assert_eq!(classifier.observe(800), Some(DeviceClass::Desktop));
    }

    #[test]
    fn custom_breakpoint_is_honored() {
        let classifier = ViewportClassifier::new().with_breakpoint(1000);
        assert_eq!(classifier.classify(1000), DeviceClass::Mobile);
        assert_eq!(classifier.classify(1001), DeviceClass::Desktop);
    }
}
