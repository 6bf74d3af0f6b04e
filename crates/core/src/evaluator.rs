//! Fibonacci evaluation
//!
//! F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2).
//!
//! # Overflow Behavior
//!
//! The plain functions use **wrapping semantics**: F(93) and beyond wrap
//! around `i64` the same way the seq runtime's `add` does. Because wrapping
//! addition is exact modulo 2^64, the naive and iterative forms agree
//! bit-for-bit for every index. The `checked_*` functions stop at the first
//! term that does not fit. F(92) is the largest term that does.
//!
//! # Negative Indices
//!
//! The base case is `n <= 1 => n`, so any negative index is returned as-is.
//! [`Evaluator`] can be configured to reject them instead.

use crate::config::{EvaluatorConfig, NegativePolicy, OverflowPolicy, Strategy};
use crate::error::EvalError;
use tracing::debug;

/// Index of the largest term representable as an `i64`
pub const MAX_EXACT_INDEX: i64 = 92;

/// Evaluate F(n) the reference way: naive recursion, wrapping, negatives pass through
pub fn evaluate(n: i64) -> i64 {
    fibonacci_naive(n)
}

/// Naive double recursion (deliberately exponential)
pub fn fibonacci_naive(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fibonacci_naive(n - 1).wrapping_add(fibonacci_naive(n - 2))
}

/// Loop carrying the last two terms
pub fn fibonacci_iterative(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 1..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// Naive double recursion, failing at the first overflowing term
pub fn checked_naive(n: i64) -> Result<i64, EvalError> {
    if n <= 1 {
        return Ok(n);
    }
    let a = checked_naive(n - 1)?;
    let b = checked_naive(n - 2)?;
    a.checked_add(b).ok_or(EvalError::Overflow { index: n })
}

/// Iterative evaluation, failing at the first overflowing term
pub fn checked_iterative(n: i64) -> Result<i64, EvalError> {
    if n <= 1 {
        return Ok(n);
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for k in 2..=n {
        let next = a
            .checked_add(b)
            .ok_or(EvalError::Overflow { index: k })?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Configurable evaluator
///
/// ```
/// use fibcore::{Evaluator, EvaluatorConfig, Strategy};
///
/// let evaluator = Evaluator::new(EvaluatorConfig::new().with_strategy(Strategy::Iterative));
/// assert_eq!(evaluator.evaluate(50), Ok(12_586_269_025));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate F(n) under this evaluator's configuration
    pub fn evaluate(&self, n: i64) -> Result<i64, EvalError> {
        if n < 0 && self.config.negative == NegativePolicy::Reject {
            return Err(EvalError::NegativeIndex(n));
        }

        debug!(
            index = n,
            strategy = %self.config.strategy,
            overflow = ?self.config.overflow,
            "evaluating"
        );

        let result = match (self.config.strategy, self.config.overflow) {
            (Strategy::Naive, OverflowPolicy::Wrapping) => Ok(fibonacci_naive(n)),
            (Strategy::Iterative, OverflowPolicy::Wrapping) => Ok(fibonacci_iterative(n)),
            (Strategy::Naive, OverflowPolicy::Checked) => checked_naive(n),
            (Strategy::Iterative, OverflowPolicy::Checked) => checked_iterative(n),
        };

        if let Ok(value) = result {
            debug!(index = n, value, "evaluated");
        }
        result
    }
}
