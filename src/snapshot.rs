//! Snapshot types for serializing incrementor state.
//!
//! # Feature Flag
//!
//! This module requires the `serde` feature:
//!
//! ```toml
//! [dependencies]
//! incrementor = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use incrementor::counters::bounded::Bounded;
//! use incrementor::counters::Incrementor;
//! use incrementor::snapshot::IncrementorSnapshot;
//!
//! let counter = Bounded::new().with_name("requests");
//! counter.increment();
//!
//! let snapshot = IncrementorSnapshot::from_incrementor(&counter);
//! assert_eq!(snapshot.number, 1);
//! ```

use crate::counters::Incrementor;
use serde::{Deserialize, Serialize};

/// Name recorded for counters created without [`with_name`](crate::counters::bounded::Bounded::with_name).
pub const UNNAMED: &str = "(unnamed)";

/// A point-in-time capture of one incrementor.
///
/// The number and the maximum are read separately, so under concurrent
/// updates the pair may come from two different instants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncrementorSnapshot {
    /// The name of the counter.
    pub name: String,
    /// The current value.
    pub number: i64,
    /// The inclusive maximum.
    pub maximum: i64,
}

impl IncrementorSnapshot {
    /// Creates a new snapshot.
    pub fn new(name: impl Into<String>, number: i64, maximum: i64) -> Self {
        Self {
            name: name.into(),
            number,
            maximum,
        }
    }

    /// Creates a snapshot from any incrementor.
    pub fn from_incrementor(counter: &dyn Incrementor) -> Self {
        Self {
            name: if counter.name().is_empty() {
                UNNAMED.to_string()
            } else {
                counter.name().to_string()
            },
            number: counter.number(),
            maximum: counter.maximum(),
        }
    }
}
