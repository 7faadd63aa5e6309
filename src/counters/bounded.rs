//! Bounded incrementor backed by a single [`AtomicCell`].
//!
//! This module provides [`Bounded`], the default [`Incrementor`]. The
//! `(number, maximum)` pair lives in one [`AtomicCell`], so the bound check
//! and the update always commit together.
//!
//! The pair is 16 bytes, wider than any native atomic `AtomicCell` uses, so
//! crossbeam serves it through its global array of striped seqlocks: loads
//! are optimistic reads validated by a sequence number, and writes take the
//! stripe selected by the cell's address. `Bounded` is therefore not
//! lock-free, and two unrelated counters may share a stripe.

use std::fmt::Debug;

use crossbeam_utils::atomic::AtomicCell;
use tracing::{debug, trace};

use crate::counters::{Incrementor, State};
use crate::error::{IncrementorError, Result};

/// A thread-safe counter that wraps to zero past its maximum.
///
/// `Bounded` starts at `0` with a maximum of [`MAX_INT`](crate::counters::MAX_INT).
/// Each [`increment`](Incrementor::increment) either adds one or, if the
/// counter already sits at the maximum, wraps it back to `0`.
///
/// # Algorithm
///
/// Both fields are stored together in an [`AtomicCell`]. Updates load the
/// current pair, compute the next one and commit it with
/// [`AtomicCell::compare_exchange`], retrying if another thread got there
/// first. A lowered maximum and the reset it causes are therefore a single
/// step, and no reader ever sees `number > maximum`.
///
/// Reads never block writers, unlike [`Locked`](super::locked::Locked),
/// where a read takes the same mutex as an increment.
///
/// # Examples
///
/// ```rust
/// use incrementor::counters::bounded::Bounded;
/// use incrementor::counters::Incrementor;
///
/// let counter = Bounded::new().with_name("sequence");
/// counter.set_maximum(42).unwrap();
///
/// for _ in 0..43 {
///     counter.increment();
/// }
/// assert_eq!(counter.number(), 0);
/// ```
///
/// Counters can be `static`:
///
/// ```rust
/// use incrementor::counters::bounded::Bounded;
/// use incrementor::counters::Incrementor;
///
/// static TICKETS: Bounded = Bounded::new().with_name("tickets");
///
/// TICKETS.increment();
/// assert!(TICKETS.number() >= 1);
/// ```
pub struct Bounded {
    name: &'static str,
    state: AtomicCell<State>,
}

impl Bounded {
    /// Creates a new counter at `0` with the default maximum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use incrementor::counters::bounded::Bounded;
    /// use incrementor::counters::{Incrementor, MAX_INT};
    ///
    /// let counter = Bounded::new();
    /// assert_eq!(counter.number(), 0);
    /// assert_eq!(counter.maximum(), MAX_INT);
    /// ```
    pub const fn new() -> Self {
        Bounded {
            name: "",
            state: AtomicCell::new(State::INITIAL),
        }
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use incrementor::counters::bounded::Bounded;
    /// use incrementor::counters::Incrementor;
    ///
    /// let counter = Bounded::new().with_name("frames");
    /// assert_eq!(counter.name(), "frames");
    /// ```
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the initial maximum, returning `self` for method chaining.
    ///
    /// # Errors
    ///
    /// Returns [`IncrementorError::NegativeMaximum`] if `maximum < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use incrementor::counters::bounded::Bounded;
    /// use incrementor::counters::Incrementor;
    ///
    /// let counter = Bounded::new().with_maximum(7)?;
    /// assert_eq!(counter.maximum(), 7);
    /// # Ok::<(), incrementor::error::IncrementorError>(())
    /// ```
    pub fn with_maximum(self, maximum: i64) -> Result<Self> {
        self.set_maximum(maximum)?;
        Ok(self)
    }

    /// Applies `f` to the current state until the compare-and-swap succeeds.
    ///
    /// Returns the committed `(previous, next)` pair.
    #[inline]
    fn update(&self, f: impl Fn(State) -> State) -> (State, State) {
        let mut current = self.state.load();
        loop {
            let next = f(current);
            match self.state.compare_exchange(current, next) {
                Ok(previous) => return (previous, next),
                Err(actual) => current = actual,
            }
        }
    }
}

impl Incrementor for Bounded {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn increment(&self) {
        let (previous, next) = self.update(State::incremented);
        if next.wrapped() {
            trace!(
                counter = self.name,
                maximum = previous.maximum,
                "incrementor wrapped to zero"
            );
        }
    }

    #[inline]
    fn number(&self) -> i64 {
        self.state.load().number
    }

    #[inline]
    fn maximum(&self) -> i64 {
        self.state.load().maximum
    }

    fn set_maximum(&self, maximum: i64) -> Result<()> {
        if maximum < 0 {
            debug!(counter = self.name, maximum, "rejected negative maximum");
            return Err(IncrementorError::NegativeMaximum(maximum));
        }

        let (previous, next) = self.update(|state| state.with_maximum(maximum));
        if previous.number != next.number {
            debug!(
                counter = self.name,
                number = previous.number,
                maximum,
                "lowered maximum reset incrementor"
            );
        }
        Ok(())
    }
}

impl Debug for Bounded {
    /// Formats the counter as `name{number/maximum}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.load();
        write!(f, "{}{{{}/{}}}", self.name, state.number, state.maximum)
    }
}

impl Default for Bounded {
    /// Creates a new counter at `0` with the default maximum.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::{behavior, MAX_INT};

    #[test]
    fn test_new() {
        let counter = Bounded::new();
        assert_eq!(counter.number(), 0);
        assert_eq!(counter.maximum(), MAX_INT);
    }

    #[test]
    fn test_wraparound() {
        behavior::wraparound(Bounded::new);
    }

    #[test]
    fn test_default_maximum() {
        behavior::default_maximum(Bounded::new);
    }

    #[test]
    fn test_negative_maximum_rejected() {
        behavior::negative_maximum_rejected(Bounded::new);
    }

    #[test]
    fn test_lower_maximum_resets() {
        behavior::lower_maximum_resets(Bounded::new);
    }

    #[test]
    fn test_higher_maximum_keeps_number() {
        behavior::higher_maximum_keeps_number(Bounded::new);
    }

    #[test]
    fn test_zero_maximum() {
        behavior::zero_maximum_stays_zero(Bounded::new);
    }

    #[test]
    fn test_read_is_idempotent() {
        behavior::read_is_idempotent(Bounded::new);
    }

    #[test]
    fn test_multiple_threads() {
        behavior::concurrent_increments(Bounded::new);
    }

    #[test]
    fn test_concurrent_set_maximum() {
        behavior::concurrent_reconfiguration(Bounded::new);
    }

    #[test]
    fn test_with_maximum() {
        let counter = Bounded::new().with_maximum(5).unwrap();
        assert_eq!(counter.maximum(), 5);
        assert_eq!(counter.number(), 0);
    }

    #[test]
    fn test_with_maximum_negative() {
        let err = Bounded::new().with_maximum(-1).unwrap_err();
        assert_eq!(err, IncrementorError::NegativeMaximum(-1));
    }

    #[test]
    fn test_state_cell_uses_seqlock() {
        assert!(!AtomicCell::<State>::is_lock_free());
    }

    #[test]
    fn test_increment_at_max_int() {
        let counter = Bounded::new();
        counter.state.store(State {
            number: MAX_INT,
            maximum: MAX_INT,
        });
        counter.increment();
        assert_eq!(counter.number(), 0);
    }

    #[test]
    fn test_static() {
        static COUNTER: Bounded = Bounded::new().with_name("static_counter");
        COUNTER.increment();
        assert!(COUNTER.number() >= 1);
        assert_eq!(COUNTER.name(), "static_counter");
    }

    #[test]
    fn test_debug() {
        let counter = Bounded::new().with_name("bounded").with_maximum(9).unwrap();
        counter.increment();
        assert_eq!(format!("{:?}", counter), "bounded{1/9}");
    }

    #[test]
    fn test_dyn_debug() {
        let counter = Bounded::new().with_name("bounded");
        counter.increment();
        let debug_str = format!("{:?}", &counter as &dyn Incrementor);
        assert!(debug_str.starts_with("bounded{"));
        assert!(debug_str.ends_with("}"));
    }

    #[test]
    fn test_name_default() {
        let counter = Bounded::default();
        assert_eq!(counter.name(), "");
        assert_eq!(counter.number(), 0);
    }
}
