#![forbid(unsafe_code)]

//! Order-submission state machine.
//!
//! ```text
//! Idle --submit--> Validating
//! Validating --fields valid--> Submitting --> Confirmed
//! Validating --fields invalid--> Invalid --(user edits)--> Idle
//! Confirmed --(terminal for this session)--
//! ```
//!
//! Validation failure is a normal state, not a fault: `Invalid` carries one
//! user-facing message per failing field and further input is never blocked.
//! A valid submit is synchronous and unconditional (there is no backend to
//! fail it) but still passes through `Submitting` so hosts can show a brief
//! processing affordance before `Confirmed`.
//!
//! # Invariants
//!
//! 1. State is mutated only through this controller's operations.
//! 2. An order id exists exactly in the `Confirmed` state.
//! 3. `submit` from any state but `Idle` is a rejected no-op.
//! 4. Clearing the last validation error transitions `Invalid` back to
//!    `Idle`.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::order_id::OrderId;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Required order-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Customer name.
    Name,
    /// Contact value: e-mail address or phone number.
    Contact,
    /// Selected product option.
    Product,
}

impl Field {
    /// All required fields, in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Contact, Self::Product];

    /// The field identifier as the host markup names it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Contact => "contact",
            Self::Product => "product",
        }
    }

    /// Resolve a host-reported field identifier.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "contact" => Some(Self::Contact),
            "product" => Some(Self::Product),
            _ => None,
        }
    }
}

/// Current values of the order-form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValues {
    name: String,
    contact: String,
    product: String,
}

impl FieldValues {
    /// The current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Contact => &self.contact,
            Field::Product => &self.product,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Contact => self.contact = value,
            Field::Product => self.product = value,
        }
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// ---------------------------------------------------------------------------
// Status and outcomes
// ---------------------------------------------------------------------------

/// Order-form status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Waiting for input; submit is allowed.
    #[default]
    Idle,
    /// Transient: validation in progress within a submit call.
    Validating,
    /// Validation failed; per-field messages are populated.
    Invalid,
    /// Transient: validation passed, confirmation pending (processing
    /// affordance).
    Submitting,
    /// Terminal for the session unless reset: the confirmation artifact
    /// exists.
    Confirmed,
}

/// Result of a [`submit`](OrderFormController::submit_at) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the form passed through `Submitting` and is now
    /// `Confirmed` with this id.
    Confirmed(OrderId),
    /// Validation failed on these fields; the form is `Invalid`.
    Invalid(Vec<Field>),
    /// Submit was not allowed from the current status; nothing changed.
    Rejected(FormStatus),
}

/// The confirmation artifact: everything the page displays on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation<'a> {
    /// The synthesized order id.
    pub order_id: &'a OrderId,
    /// The submitted field values.
    pub field_values: &'a FieldValues,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the order-form state machine.
///
/// Created on form mount, discarded on navigation. All mutation goes through
/// [`update_field`](Self::update_field), [`submit_at`](Self::submit_at), and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct OrderFormController {
    status: FormStatus,
    values: FieldValues,
    errors: BTreeMap<Field, String>,
    order_id: Option<OrderId>,
}

impl OrderFormController {
    /// Create a pristine controller in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    /// Current field values.
    #[must_use]
    pub const fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current per-field validation messages.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// The synthesized order id, present only once confirmed.
    #[must_use]
    pub const fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// The confirmation artifact, present only in `Confirmed`.
    #[must_use]
    pub fn confirmation(&self) -> Option<Confirmation<'_>> {
        match (self.status, &self.order_id) {
            (FormStatus::Confirmed, Some(order_id)) => Some(Confirmation {
                order_id,
                field_values: &self.values,
            }),
            _ => None,
        }
    }

    /// Record a field edit.
    ///
    /// Allowed from any non-`Submitting` state. Clears that field's
    /// validation message; once the last message clears, `Invalid` returns
    /// to `Idle`. Returns whether the edit was accepted.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.status == FormStatus::Submitting {
            return false;
        }
        self.values.set(field, value.into());
        self.errors.remove(&field);
        if self.status == FormStatus::Invalid && self.errors.is_empty() {
            self.status = FormStatus::Idle;
        }
        true
    }

    /// Submit with an explicit timestamp, for deterministic callers.
    ///
    /// Allowed only from `Idle`. Runs synchronous validation over all
    /// required fields; on failure transitions to `Invalid` with one message
    /// per failing field and synthesizes nothing. On success transitions
    /// through `Submitting`, synthesizes the order id, and lands in
    /// `Confirmed`.
    pub fn submit_at<R: Rng + ?Sized>(&mut self, timestamp_ms: u64, rng: &mut R) -> SubmitOutcome {
        if self.status != FormStatus::Idle {
            return SubmitOutcome::Rejected(self.status);
        }

        self.status = FormStatus::Validating;
        let errors = validate(&self.values);
        if !errors.is_empty() {
            let fields: Vec<Field> = errors.keys().copied().collect();
            #[cfg(feature = "tracing")]
            tracing::debug!(failing = fields.len(), "order form validation failed");
            self.errors = errors;
            self.status = FormStatus::Invalid;
            return SubmitOutcome::Invalid(fields);
        }

        self.status = FormStatus::Submitting;
        let order_id = OrderId::synthesize(timestamp_ms, rng);
        #[cfg(feature = "tracing")]
        tracing::info!(order_id = %order_id, "order confirmed");
        self.order_id = Some(order_id.clone());
        self.status = FormStatus::Confirmed;
        SubmitOutcome::Confirmed(order_id)
    }

    /// Submit using the host's wall clock.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmitOutcome {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.submit_at(timestamp_ms, rng)
    }

    /// Return to pristine `Idle`: clears fields, messages, and the order id.
    ///
    /// Callable from `Confirmed` or `Invalid` (and harmlessly from `Idle`).
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
        self.values = FieldValues::default();
        self.errors.clear();
        self.order_id = None;
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(values: &FieldValues) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();

    if values.get(Field::Name).trim().is_empty() {
        errors.insert(Field::Name, "Please enter your name.".to_string());
    }

    let contact = values.get(Field::Contact).trim();
    if contact.is_empty() || !(looks_like_email(contact) || looks_like_phone(contact)) {
        errors.insert(
            Field::Contact,
            "Please enter a valid email address or phone number.".to_string(),
        );
    }

    if values.get(Field::Product).trim().is_empty() {
        errors.insert(Field::Product, "Please choose a gift option.".to_string());
    }

    errors
}

/// Minimal e-mail shape: one `@`, non-empty local part, dotted domain, no
/// whitespace. Deliberately loose; there is no server to verify against.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'),
        None => false,
    }
}

/// Phone shape: optional leading `+`, then 7 to 15 digits with spaces or
/// dashes as separators.
fn looks_like_phone(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    let mut count = 0usize;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => count += 1,
            ' ' | '-' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&count)
}
