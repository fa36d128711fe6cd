//! End-to-end order form journeys.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tohfa_order::{Field, FormStatus, OrderFormController, OrderId, SubmitOutcome};

#[test]
fn fix_up_and_resubmit_journey() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut form = OrderFormController::new();

    // First attempt: missing contact.
    form.update_field(Field::Name, "Aisha");
    form.update_field(Field::Product, "Gift Box A");
    let outcome = form.submit_at(1_000, &mut rng);
    assert_eq!(outcome, SubmitOutcome::Invalid(vec![Field::Contact]));
    assert_eq!(form.status(), FormStatus::Invalid);

    // Fixing the field returns the form to Idle and allows resubmission.
    form.update_field(Field::Contact, "aisha@example.com");
    assert_eq!(form.status(), FormStatus::Idle);

    let outcome = form.submit_at(2_000, &mut rng);
    let SubmitOutcome::Confirmed(id) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    assert_eq!(id.timestamp_ms(), Some(2_000));

    let confirmation = form.confirmation().expect("confirmed");
    assert_eq!(confirmation.order_id, &id);
    assert_eq!(confirmation.field_values.get(Field::Name), "Aisha");

    // Reset clears everything for a fresh order.
    form.reset();
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.values().is_empty());
    assert_eq!(form.confirmation(), None);

    // The second order gets a fresh id.
    form.update_field(Field::Name, "Bilal");
    form.update_field(Field::Contact, "0300 1234567");
    form.update_field(Field::Product, "Gift Box B");
    let outcome = form.submit_at(3_000, &mut rng);
    let SubmitOutcome::Confirmed(second) = outcome else {
        panic!("expected confirmation, got {outcome:?}");
    };
    assert_ne!(second, id);
}

proptest! {
    /// A submit confirms exactly when all three fields hold acceptable
    /// values, and every synthesized id parses back.
    #[test]
    fn confirmed_iff_fields_acceptable(
        name in "[ a-zA-Z]{0,12}",
        digits in proptest::collection::vec(0u8..10, 0..18),
        product_filled in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let contact: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let mut form = OrderFormController::new();
        form.update_field(Field::Name, name.clone());
        form.update_field(Field::Contact, contact);
        form.update_field(Field::Product, if product_filled { "Gift Box A" } else { "" });

        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = form.submit_at(1, &mut rng);

        let name_ok = !name.trim().is_empty();
        let contact_ok = (7..=15).contains(&digits.len());
        let expect_confirmed = name_ok && contact_ok && product_filled;

        match outcome {
            SubmitOutcome::Confirmed(id) => {
                prop_assert!(expect_confirmed);
                prop_assert_eq!(OrderId::parse(id.as_str()), Some(id));
            }
            SubmitOutcome::Invalid(fields) => {
                prop_assert!(!expect_confirmed);
                prop_assert_eq!(fields.contains(&Field::Name), !name_ok);
                prop_assert_eq!(fields.contains(&Field::Contact), !contact_ok);
                prop_assert_eq!(fields.contains(&Field::Product), !product_filled);
            }
            SubmitOutcome::Rejected(status) => {
                prop_assert!(false, "submit from Idle rejected with {:?}", status);
            }
        }
    }
}
