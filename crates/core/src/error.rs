//! Evaluation error types.

/// Error type for configurable evaluation.
///
/// The reference configuration never produces one of these. They only
/// surface when a caller opts into rejecting negative indices or checked
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A negative index was given under `NegativePolicy::Reject`
    NegativeIndex(i64),
    /// The term at `index` does not fit in an `i64` under `OverflowPolicy::Checked`
    Overflow { index: i64 },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::NegativeIndex(n) => {
                write!(f, "negative index {}: Fibonacci is defined for n >= 0", n)
            }
            EvalError::Overflow { index } => write!(
                f,
                "overflow: Fibonacci({}) does not fit in a 64-bit signed integer",
                index
            ),
        }
    }
}

impl std::error::Error for EvalError {}
