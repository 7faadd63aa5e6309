//! Bounded incrementor guarded by a mutex.
//!
//! [`Locked`] offers the same contract as [`Bounded`](super::bounded::Bounded)
//! with a plain critical section around the `(number, maximum)` pair. It is
//! the simplest correct implementation and serves as a baseline in the
//! benchmarks.

use std::fmt::Debug;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::counters::{Incrementor, State};
use crate::error::{IncrementorError, Result};

/// A thread-safe counter that wraps to zero past its maximum, using a mutex.
///
/// Every operation takes the lock exactly once and holds it for a bound
/// check and at most two writes. There is one lock and no nested
/// acquisition, so operations never deadlock.
///
/// # Examples
///
/// ```rust
/// use incrementor::counters::locked::Locked;
/// use incrementor::counters::Incrementor;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(Locked::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let c = Arc::clone(&counter);
///         thread::spawn(move || {
///             for _ in 0..1000 {
///                 c.increment();
///             }
///         })
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert_eq!(counter.number(), 4000);
/// ```
pub struct Locked {
    name: &'static str,
    state: Mutex<State>,
}

impl Locked {
    /// Creates a new counter at `0` with the default maximum.
    pub const fn new() -> Self {
        Locked {
            name: "",
            state: Mutex::new(State::INITIAL),
        }
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the initial maximum, returning `self` for method chaining.
    ///
    /// # Errors
    ///
    /// Returns [`IncrementorError::NegativeMaximum`] if `maximum < 0`.
    pub fn with_maximum(self, maximum: i64) -> Result<Self> {
        self.set_maximum(maximum)?;
        Ok(self)
    }
}

impl Incrementor for Locked {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    fn increment(&self) {
        let mut state = self.state.lock();
        *state = state.incremented();
        if state.wrapped() {
            trace!(
                counter = self.name,
                maximum = state.maximum,
                "incrementor wrapped to zero"
            );
        }
    }

    fn number(&self) -> i64 {
        self.state.lock().number
    }

    fn maximum(&self) -> i64 {
        self.state.lock().maximum
    }

    fn set_maximum(&self, maximum: i64) -> Result<()> {
        if maximum < 0 {
            debug!(counter = self.name, maximum, "rejected negative maximum");
            return Err(IncrementorError::NegativeMaximum(maximum));
        }

        let mut state = self.state.lock();
        let previous = *state;
        *state = previous.with_maximum(maximum);
        if previous.number != state.number {
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

impl Debug for Locked {
    /// Formats the counter as `name{number/maximum}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = *self.state.lock();
        write!(f, "{}{{{}/{}}}", self.name, state.number, state.maximum)
    }
}

impl Default for Locked {
    fn default() -> Self {
        Self::new()
    }
}
