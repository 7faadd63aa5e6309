//! JSON observer for serializing incrementors.
//!
//! This module provides [`JsonObserver`], which serializes a collection of
//! [`Incrementor`] trait objects to a JSON array of
//! [`IncrementorSnapshot`].
//!
//! # Examples
//!
//! ```rust
//! use incrementor::counters::bounded::Bounded;
//! use incrementor::counters::Incrementor;
//! use incrementor::observers::json::JsonObserver;
//!
//! let frames = Bounded::new().with_name("frames").with_maximum(255).unwrap();
//! frames.increment();
//!
//! let counters: Vec<&dyn Incrementor> = vec![&frames];
//! let json = JsonObserver::new().to_json(counters.into_iter()).unwrap();
//!
//! assert_eq!(json, r#"[{"name":"frames","number":1,"maximum":255}]"#);
//! ```

use crate::counters::Incrementor;
use crate::observers::Result;
use crate::snapshot::IncrementorSnapshot;

/// An observer that serializes incrementors to JSON.
///
/// Output is compact unless [`pretty`](JsonObserver::pretty) is enabled.
#[derive(Debug, Clone, Default)]
pub struct JsonObserver {
    pretty: bool,
}

impl JsonObserver {
    /// Creates a new JSON observer producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables pretty-printing.
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Collects incrementors into snapshots without serializing them.
    pub fn collect<'a>(
        &self,
        counters: impl Iterator<Item = &'a dyn Incrementor>,
    ) -> Vec<IncrementorSnapshot> {
        counters.map(IncrementorSnapshot::from_incrementor).collect()
    }

    /// Serializes incrementors to a JSON array.
    pub fn to_json<'a>(
        &self,
        counters: impl Iterator<Item = &'a dyn Incrementor>,
    ) -> Result<String> {
        let snapshots = self.collect(counters);
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshots)?
        } else {
            serde_json::to_string(&snapshots)?
        };
        Ok(json)
    }
}
