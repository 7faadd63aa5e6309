//! # Incrementor - Thread-Safe Bounded Counters
//!
//! A Rust library providing counters that increment atomically and wrap back
//! to zero once they pass a configurable maximum. Counters are safe to share
//! across any number of threads with no external synchronization.
//!
//! ## Semantics
//!
//! Each counter holds a `number` and an inclusive `maximum`:
//!
//! - [`increment`](counters::Incrementor::increment) adds one, or resets to
//!   `0` if `number` already equals `maximum`. After `N` increments from zero
//!   the counter reads `N mod (maximum + 1)`.
//! - [`set_maximum`](counters::Incrementor::set_maximum) replaces the bound.
//!   If the current number is above the new maximum it is reset to `0` in the
//!   same atomic step. A negative maximum is rejected with
//!   [`IncrementorError::NegativeMaximum`](error::IncrementorError::NegativeMaximum).
//! - [`number`](counters::Incrementor::number) reads the current value.
//!
//! `0 <= number <= maximum` holds after every operation, and no thread can
//! ever observe it broken.
//!
//! The default maximum is [`MAX_INT`](counters::MAX_INT) (`i64::MAX`), so a
//! counter that is never configured effectively never wraps.
//!
//! ## Available Implementations
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Bounded`](counters::bounded::Bounded) | `AtomicCell` compare-exchange with optimistic reads (default) |
//! | [`Locked`](counters::locked::Locked) | `parking_lot::Mutex` around the pair |
//!
//! ## Quick Start
//!
//! ```rust
//! use incrementor::counters::{new_handle, Incrementor};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = new_handle();
//! counter.set_maximum(1_000_000)?;
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let c = Arc::clone(&counter);
//!         thread::spawn(move || {
//!             for _ in 0..100 {
//!                 c.increment();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(counter.number(), 800);
//! # Ok::<(), incrementor::error::IncrementorError>(())
//! ```
//!
//! ## Logging
//!
//! Wraparounds are reported at `trace` level and resets caused by a lowered
//! maximum at `debug` level through [`tracing`]. No subscriber is installed
//! by this crate.
//!
//! ## Feature Flags
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `serde` | [`snapshot`] | Serializable snapshots of counter state |
//! | `json` | [`observers::json`] | Render counters as JSON |
//! | `full` | All of the above | |

pub mod counters;
pub mod error;

#[cfg(feature = "json")]
pub mod observers;

#[cfg(feature = "serde")]
pub mod snapshot;
