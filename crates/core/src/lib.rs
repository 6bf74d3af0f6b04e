//! Fib Core: the n-th Fibonacci number over 64-bit signed integers
//!
//! The reference behavior is naive double recursion with wrapping overflow
//! and `n <= 1 => n` as the base case. An iterative strategy, negative index
//! rejection and checked overflow are available through [`EvaluatorConfig`].
//!
//! # Modules
//!
//! - `evaluator`: the recursive and iterative evaluators
//! - `config`: strategy and policy selection, loadable from TOML
//! - `error`: errors raised by the opt-in policies

pub mod config;
pub mod error;
pub mod evaluator;

pub use config::{EvaluatorConfig, NegativePolicy, OverflowPolicy, Strategy};
pub use error::EvalError;
pub use evaluator::{
    Evaluator, MAX_EXACT_INDEX, checked_iterative, checked_naive, evaluate, fibonacci_iterative,
    fibonacci_naive,
};
