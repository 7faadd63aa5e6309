//! Core module containing the incrementor trait and its implementations.
//!
//! An incrementor is a single integer cell shared across threads. It counts
//! up by one on every [`increment`](Incrementor::increment) and wraps back to
//! zero when the next value would exceed its maximum:
//!
//! ```text
//!   maximum = 3
//!
//!   number:  0 ──► 1 ──► 2 ──► 3 ──┐
//!            ▲                     │
//!            └──────── wrap ───────┘
//! ```
//!
//! The `(number, maximum)` pair is always read and written as one unit, so
//! no caller can ever observe `number > maximum`, even while another thread
//! is lowering the maximum.
//!
//! # Implementations
//!
//! | Type | Synchronization |
//! |------|-----------------|
//! | [`Bounded`](bounded::Bounded) | `AtomicCell` compare-exchange, backed by crossbeam's striped seqlocks |
//! | [`Locked`](locked::Locked) | `parking_lot::Mutex` around the pair |
//!
//! Both implement [`Incrementor`], so callers depend on the capability and
//! not on the representation.
//!
//! # Handles
//!
//! Counters are shared by reference, never by copy. [`new_handle`] returns a
//! [`Handle`] (an `Arc<dyn Incrementor>`): cloning the handle shares the
//! counter, and every clone observes the same mutations.
//!
//! ```rust
//! use incrementor::counters::new_handle;
//! use std::sync::Arc;
//!
//! let first = new_handle();
//! first.increment();
//!
//! let second = Arc::clone(&first);
//! first.increment();
//!
//! assert_eq!(second.number(), 2);
//! ```

pub mod bounded;
pub mod locked;

use std::fmt::{Debug, Display};
use std::sync::Arc;

use crate::error::Result;

/// Default maximum of a freshly constructed counter.
///
/// Counters are 64-bit signed integers, so this is `i64::MAX`. For any
/// realistic number of increments a counter at the default maximum never
/// wraps.
pub const MAX_INT: i64 = i64::MAX;

/// A shared, reference-counted incrementor.
///
/// Cloning a `Handle` does not copy the counter state: all clones refer to
/// the same cell.
pub type Handle = Arc<dyn Incrementor>;

/// Creates a new counter behind a shared [`Handle`].
///
/// The counter starts at `0` with a maximum of [`MAX_INT`]. The default
/// implementation is [`Bounded`](bounded::Bounded).
///
/// # Examples
///
/// ```rust
/// use incrementor::counters::{new_handle, MAX_INT};
///
/// let handle = new_handle();
/// assert_eq!(handle.number(), 0);
/// assert_eq!(handle.maximum(), MAX_INT);
/// ```
pub fn new_handle() -> Handle {
    Arc::new(bounded::Bounded::new())
}

/// A thread-safe counter that wraps to zero past a maximum.
///
/// All methods take `&self` and may be called concurrently from any number
/// of threads. Every operation is linearizable: there is a single total order
/// of increments, reads and maximum changes consistent with what each caller
/// observed, and `0 <= number <= maximum` holds between any two of them.
///
/// # Examples
///
/// ```rust
/// use incrementor::counters::bounded::Bounded;
/// use incrementor::counters::Incrementor;
///
/// let counter = Bounded::new();
/// counter.set_maximum(2).unwrap();
///
/// counter.increment(); // 1
/// counter.increment(); // 2
/// counter.increment(); // wraps
/// assert_eq!(counter.number(), 0);
/// ```
pub trait Incrementor: Debug + Send + Sync {
    /// Returns the name of this counter, or an empty string if unnamed.
    fn name(&self) -> &str;

    /// Increments the counter by one, wrapping to `0` if the result would
    /// exceed the maximum.
    ///
    /// With a maximum of `0` every increment leaves the counter at `0`.
    fn increment(&self);

    /// Returns the current value.
    fn number(&self) -> i64;

    /// Returns the current maximum.
    fn maximum(&self) -> i64;

    /// Sets a new inclusive maximum.
    ///
    /// If the current value is greater than `maximum` it is reset to `0`
    /// in the same atomic step. The value is not clamped to the new maximum.
    ///
    /// # Errors
    ///
    /// Returns [`IncrementorError::NegativeMaximum`](crate::error::IncrementorError::NegativeMaximum)
    /// if `maximum < 0`. The counter is left unchanged.
    fn set_maximum(&self, maximum: i64) -> Result<()>;
}

impl Display for dyn Incrementor + '_ {
    /// Formats the counter as `name:number` if named, or just `number` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.name().is_empty() {
            write!(f, "{}:{}", self.name(), self.number())
        } else {
            write!(f, "{}", self.number())
        }
    }
}

/// The `(number, maximum)` pair shared by every implementation.
///
/// The transitions are pure functions of the pair. Implementations only
/// decide how to apply them atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) number: i64,
    pub(crate) maximum: i64,
}

impl State {
    pub(crate) const INITIAL: State = State {
        number: 0,
        maximum: MAX_INT,
    };

    /// The state after one increment.
    ///
    /// Compares before adding so `maximum == i64::MAX` cannot overflow.
    #[inline]
    pub(crate) const fn incremented(self) -> State {
        let number = if self.number >= self.maximum {
            0
        } else {
            self.number + 1
        };
        State { number, ..self }
    }

    /// The state after replacing the maximum. Callers reject negative values.
    #[inline]
    pub(crate) const fn with_maximum(self, maximum: i64) -> State {
        let number = if self.number > maximum { 0 } else { self.number };
        State { number, maximum }
    }

    #[inline]
    pub(crate) const fn wrapped(self) -> bool {
        self.number == 0
    }
}
