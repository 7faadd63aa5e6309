//! Error type for incrementor configuration.
//!
//! Counting itself never fails: wrapping to zero is the normal behavior of
//! [`increment`](crate::counters::Incrementor::increment). The only rejected
//! operation is configuring a negative maximum, which leaves the counter
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use incrementor::counters::bounded::Bounded;
//! use incrementor::counters::Incrementor;
//! use incrementor::error::IncrementorError;
//!
//! let counter = Bounded::new();
//! assert_eq!(counter.set_maximum(-42), Err(IncrementorError::NegativeMaximum(-42)));
//! ```

use thiserror::Error;

/// Errors returned by incrementor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncrementorError {
    /// The requested maximum is below zero.
    #[error("maximum value must be non-negative, got {0}")]
    NegativeMaximum(i64),
}

/// Result type for incrementor operations.
pub type Result<T> = std::result::Result<T, IncrementorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IncrementorError::NegativeMaximum(-42);
        assert_eq!(err.to_string(), "maximum value must be non-negative, got -42");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(IncrementorError::NegativeMaximum(-1));
        assert!(err.to_string().contains("-1"));
    }
}
