#![forbid(unsafe_code)]

//! Order form: submission state machine and order-id synthesis.
//!
//! The order flow is entirely client-side. Validation failure is a normal
//! state with per-field messages, not a fault; a successful submit
//! synthesizes an order id and produces the in-memory confirmation artifact
//! that is the whole output of the system.

pub mod controller;
pub mod order_id;

pub use controller::{
    Confirmation, Field, FieldValues, FormStatus, OrderFormController, SubmitOutcome,
};
pub use order_id::{ORDER_ID_PREFIX, OrderId};
