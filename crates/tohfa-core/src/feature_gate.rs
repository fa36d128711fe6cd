#![forbid(unsafe_code)]

//! Feature gating keyed on device class.
//!
//! Heavyweight visual behaviors (scroll animations, hover transitions, the
//! decorative background image) cost frame budget that narrow devices cannot
//! afford. The gate maps a [`DeviceClass`] to an enabled feature set and owns
//! the one side effect in the policy: initializing the external animation
//! driver, at most once per session.
//!
//! # Policy
//!
//! | Feature | Mobile | Desktop |
//! |---------|--------|---------|
//! | animations | off | on (driver permitting) |
//! | hover effects | off | on |
//! | decorative background | off (flat fill) | on (image) |
//!
//! # Invariants
//!
//! 1. The driver is initialized at most once per gate instance; re-entering
//!    Desktop after a successful init does not re-init.
//! 2. A driver that reports [`AnimationUnavailable`] stays unavailable for
//!    the rest of the session; `ANIMATIONS` is forced off on every
//!    subsequent apply. This is recoverable and silent to the user.
//! 3. Consumers read [`FeatureState`]; only the gate mutates it.
//!
//! The "already initialized" flag is an owned field on the gate, scoped to
//! the session, never a process-wide global.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use bitflags::bitflags;

use crate::viewport::DeviceClass;

bitflags! {
    /// The set of gateable heavyweight features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Features: u8 {
        /// Scroll-triggered entrance animations (external driver).
        const ANIMATIONS = 1 << 0;
        /// Hover transition effects.
        const HOVER_EFFECTS = 1 << 1;
        /// Decorative background image (vs. a flat fill).
        const DECORATIVE_BACKGROUND = 1 << 2;
    }
}

/// Enabled feature set for the current device class.
///
/// Produced by [`FeatureGate::apply`]; read-only to styling and animation
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureState {
    enabled: Features,
}

impl Default for FeatureState {
    fn default() -> Self {
        Self::all_off()
    }
}

impl FeatureState {
    /// All features disabled (the mobile policy).
    #[must_use]
    pub const fn all_off() -> Self {
        Self {
            enabled: Features::empty(),
        }
    }

    /// All features enabled (the desktop policy, before driver checks).
    #[must_use]
    pub const fn all_on() -> Self {
        Self {
            enabled: Features::all(),
        }
    }

    /// The raw enabled set.
    #[must_use]
    pub const fn enabled(&self) -> Features {
        self.enabled
    }

    /// Whether scroll animations are enabled.
    #[must_use]
    pub const fn animations(&self) -> bool {
        self.enabled.contains(Features::ANIMATIONS)
    }

    /// Whether hover effects are enabled.
    #[must_use]
    pub const fn hover_effects(&self) -> bool {
        self.enabled.contains(Features::HOVER_EFFECTS)
    }

    /// Whether the decorative background image is enabled.
    #[must_use]
    pub const fn decorative_background(&self) -> bool {
        self.enabled.contains(Features::DECORATIVE_BACKGROUND)
    }

    const fn without(self, features: Features) -> Self {
        Self {
            enabled: self.enabled.difference(features),
        }
    }
}

/// Configuration handed to the animation driver on init.
///
/// Matches the driver's recognized `{duration, offset}` options: entrance
/// animation duration and the scroll offset (in pixels) at which elements
/// start animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Entrance animation duration.
    pub duration: Duration,
    /// Scroll offset in pixels before an element animates in.
    pub offset_px: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            offset_px: 120,
        }
    }
}

/// The animation library failed to load or initialize.
///
/// Recoverable: the gate forces animations off and proceeds. Nothing is
/// surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationUnavailable;

impl fmt::Display for AnimationUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("animation driver unavailable")
    }
}

impl Error for AnimationUnavailable {}

/// Seam for the external animation library.
///
/// The runtime consumes the library as a black box: one `init` call with
/// recognized options, success or [`AnimationUnavailable`].
pub trait AnimationDriver {
    /// Initialize the driver. Called at most once per session.
    fn init(&mut self, options: AnimationOptions) -> Result<(), AnimationUnavailable>;
}

/// Driver for hosts without the animation library. Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnimationDriver;

impl AnimationDriver for NullAnimationDriver {
    fn init(&mut self, _options: AnimationOptions) -> Result<(), AnimationUnavailable> {
        Err(AnimationUnavailable)
    }
}

/// Maps device class to an enabled feature set, owning driver lifecycle.
#[derive(Debug, Clone)]
pub struct FeatureGate {
    options: AnimationOptions,
    state: FeatureState,
    driver_initialized: bool,
    driver_failed: bool,
}

impl Default for FeatureGate {
    fn default() -> Self {
        Self::new(AnimationOptions::default())
    }
}

impl FeatureGate {
    /// Create a gate that will init the driver with the given options.
    #[must_use]
    pub const fn new(options: AnimationOptions) -> Self {
        Self {
            options,
            state: FeatureState::all_off(),
            driver_initialized: false,
            driver_failed: false,
        }
    }

    /// The most recently applied feature state.
    #[must_use]
    pub const fn state(&self) -> FeatureState {
        self.state
    }

    /// Whether the driver has been successfully initialized this session.
    #[must_use]
    pub const fn driver_initialized(&self) -> bool {
        self.driver_initialized
    }

    /// Apply the gate policy for a device class.
    ///
    /// Idempotent with respect to the driver: applying the same class twice
    /// yields the same [`FeatureState`] and initializes the driver at most
    /// once. Re-run this on every breakpoint crossing; that call is the
    /// explicit re-check after which a previously gated-off feature may come
    /// back.
    pub fn apply(&mut self, class: DeviceClass, driver: &mut dyn AnimationDriver) -> FeatureState {
        let mut state = match class {
            DeviceClass::Mobile => FeatureState::all_off(),
            DeviceClass::Desktop => FeatureState::all_on(),
        };

        if state.animations() {
            if self.driver_failed {
                state = state.without(Features::ANIMATIONS);
            } else if !self.driver_initialized {
                match driver.init(self.options) {
                    Ok(()) => self.driver_initialized = true,
                    Err(AnimationUnavailable) => {
                        #[cfg(feature = "tracing")]
                        crate::logging::warn!("animation driver unavailable; animations disabled");
                        self.driver_failed = true;
                        state = state.without(Features::ANIMATIONS);
                    }
                }
            }
        }

        self.state = state;
        state
    }
}
