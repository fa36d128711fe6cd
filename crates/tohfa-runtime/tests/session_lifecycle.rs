//! Whole-session scenarios: load, classify, gate, interact, confirm.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use tohfa_core::event::Event;
use tohfa_core::feature_gate::{AnimationDriver, AnimationOptions, AnimationUnavailable};
use tohfa_core::viewport::DeviceClass;
use tohfa_order::{Field, FormStatus, OrderId};
use tohfa_runtime::session::{SessionConfig, SessionRuntime};
use tohfa_runtime::throttle::{SCROLL_INTERVAL, Throttle};

#[derive(Debug, Default)]
struct PresentDriver;

impl AnimationDriver for PresentDriver {
    fn init(&mut self, _options: AnimationOptions) -> Result<(), AnimationUnavailable> {
        Ok(())
    }
}

fn fill_and_submit(session: &mut SessionRuntime<PresentDriver>, now: Instant) {
    for (field, value) in [
        ("name", "Aisha"),
        ("contact", "aisha@example.com"),
        ("product", "Gift Box A"),
    ] {
        session.handle_event(
            Event::Input {
                field: field.to_string(),
                value: value.to_string(),
            },
            now,
        );
    }
    session.handle_event(Event::Submit, now);
}

#[test]
fn mobile_session_gates_features_but_still_confirms_orders() {
    let mut session = SessionRuntime::new(SessionConfig::default(), PresentDriver);
    session.start(400);

    assert_eq!(session.device_class(), Some(DeviceClass::Mobile));
    let features = session.features();
    assert!(!features.animations());
    assert!(!features.hover_effects());
    assert!(!features.decorative_background());

    fill_and_submit(&mut session, Instant::now());

    assert_eq!(session.form().status(), FormStatus::Confirmed);
    let confirmation = session.confirmation().expect("confirmed");
    assert_eq!(confirmation.field_values.get(Field::Name), "Aisha");

    // ORDER-<digits>-<alphanumeric>
    let id = confirmation.order_id;
    assert_eq!(OrderId::parse(id.as_str()).as_ref(), Some(id));
    assert!(id.as_str().starts_with("ORDER-"));
}

#[test]
fn desktop_session_enables_all_features_with_driver_present() {
    let mut session = SessionRuntime::new(SessionConfig::default(), PresentDriver);
    session.start(1024);

    assert_eq!(session.device_class(), Some(DeviceClass::Desktop));
    let features = session.features();
    assert!(features.animations());
    assert!(features.hover_effects());
    assert!(features.decorative_background());
}

#[test]
fn full_lifecycle_with_resize_scroll_and_unload() {
    let mut session = SessionRuntime::new(SessionConfig::default(), PresentDriver);
    let t0 = Instant::now();
    session.start(1024);

    // Rotate to portrait mid-session.
    session.handle_event(Event::Resize { width: 400 }, t0);
    assert!(!session.features().animations());

    // Scroll activity under throttle.
    session.handle_event(Event::Scroll { top: 0 }, t0);
    session.handle_event(Event::Scroll { top: 300 }, t0 + Duration::from_millis(4));
    session.tick(t0 + SCROLL_INTERVAL);
    assert_eq!(session.last_scroll_top(), Some(300));

    fill_and_submit(&mut session, t0 + Duration::from_millis(40));
    assert!(session.confirmation().is_some());

    session.handle_event(Event::Unload, t0 + Duration::from_millis(50));
    assert!(session.is_shut_down());
}

proptest! {
    /// N invocations inside one window produce exactly one immediate
    /// execution and one deferred execution carrying the last payload.
    #[test]
    fn one_execution_per_window_with_last_arguments(
        tops in proptest::collection::vec(0u32..100_000, 2..50),
    ) {
        let mut throttle = Throttle::new(SCROLL_INTERVAL);
        let t0 = Instant::now();
        let mut executed = Vec::new();

        // Spread every offer strictly inside one 16 ms window.
        let step = SCROLL_INTERVAL / (tops.len() as u32 + 1);
        for (i, top) in tops.iter().enumerate() {
            let at = t0 + step * (i as u32);
            if let Some(Event::Scroll { top }) = throttle.offer(Event::Scroll { top: *top }, at) {
                executed.push(top);
            }
        }
        if let Some(Event::Scroll { top }) = throttle.tick(t0 + SCROLL_INTERVAL) {
            executed.push(top);
        }

        // First offer opened the window; the rest coalesced into one release.
        prop_assert_eq!(executed.len(), 2);
        prop_assert_eq!(executed[0], tops[0]);
        prop_assert_eq!(executed[1], *tops.last().expect("non-empty"));
    }
}
