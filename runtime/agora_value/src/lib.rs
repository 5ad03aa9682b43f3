#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! Agora Value - runtime value model for the Agora scripting runtime.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `ObjectValue`, `FunctionValue`, `CustomValue`)
//! - The arithmetic operator vocabulary (`BinaryOp`, `UnaryOp`, `Metamethod`)
//! - Evaluation error types (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! Operator dispatch itself lives in `agora_arith`; this crate only answers
//! questions about values: what kind is it, and does an object carry a
//! function under a given key.

mod errors;
pub mod ops;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use ops::{BinaryOp, Metamethod, UnaryOp};
pub use value::{
    expect_args, expect_at_least_args, CustomValue, FunctionValue, Heap, NativeFn, ObjectValue,
    Value, BUILTIN_TYPE_NAMES,
};

// Re-export error constructors for use by other crates
pub use errors::{
    binary_type_mismatch, modulo_by_zero, reserved_custom_tag, too_few_args, unary_type_mismatch,
    wrong_arg_count,
};
