//! Observers for exporting incrementor state.
//!
//! - [`json`] - Serialize incrementors to JSON format
//!
//! # Feature Flags
//!
//! This module requires the `json` feature (also enabled by `full`).
//!
//! # Example
//!
//! ```rust
//! use incrementor::counters::bounded::Bounded;
//! use incrementor::counters::Incrementor;
//! use incrementor::observers::json::JsonObserver;
//! use incrementor::observers::Result;
//!
//! static SEQUENCE: Bounded = Bounded::new().with_name("sequence");
//!
//! fn export() -> Result<String> {
//!     let counters: &[&dyn Incrementor] = &[&SEQUENCE];
//!     JsonObserver::new().to_json(counters.iter().copied())
//! }
//!
//! SEQUENCE.increment();
//! assert!(export().unwrap().contains("sequence"));
//! ```

mod error;

pub use error::{ObserverError, Result};

pub mod json;
