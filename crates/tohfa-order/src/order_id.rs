#![forbid(unsafe_code)]

//! Order-id synthesis.
//!
//! Ids have the shape `ORDER-<epoch-ms>-<suffix>`: a fixed prefix, the
//! submission timestamp in milliseconds, and a short random alphanumeric
//! suffix. With no server authority there is nothing to check collisions
//! against; uniqueness within a session holds with overwhelming probability
//! (a collision needs a same-millisecond submit and a matching 6-character
//! suffix) and that is the documented limit of the guarantee.

use std::fmt;

use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};

/// Fixed prefix for all synthesized order ids.
pub const ORDER_ID_PREFIX: &str = "ORDER";

/// Length of the random alphanumeric suffix.
pub const SUFFIX_LEN: usize = 6;

/// A synthesized order identifier.
///
/// Generated once per successful validation pass; never parsed back except
/// for shape validation in tests and display tooling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Synthesize an id from a submission timestamp and a random suffix.
    pub fn synthesize<R: Rng + ?Sized>(timestamp_ms: u64, rng: &mut R) -> Self {
        let suffix = Alphanumeric.sample_string(rng, SUFFIX_LEN);
        Self(format!("{ORDER_ID_PREFIX}-{timestamp_ms}-{suffix}"))
    }

    /// Validate an id string's shape and wrap it.
    ///
    /// Accepts `ORDER-<digits>-<alphanumeric>` with non-empty digit and
    /// suffix parts. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix(ORDER_ID_PREFIX)?.strip_prefix('-')?;
        let (timestamp, suffix) = rest.split_once('-')?;
        if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The embedded submission timestamp in milliseconds.
    #[must_use]
    pub fn timestamp_ms(&self) -> Option<u64> {
        self.0.split('-').nth(1)?.parse().ok()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
