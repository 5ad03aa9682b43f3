#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! Agora Arith - arithmetic operator dispatch for the Agora runtime.
//!
//! Decides, for any operands, whether and how `+ - * / %` and unary `-`
//! apply, unifying three strategies into one deterministic order:
//! - native number arithmetic (and string concatenation for `+`)
//! - native arithmetic registered by the host for custom value kinds
//! - operator overloads stored on objects under `__add`, `__sub`, ...
//!
//! # Entry Points
//!
//! - `add`, `sub`, `mul`, `div`, `modulo`, `neg`: free functions using the
//!   shared default dispatcher
//! - `Arithmetic` / `DefaultArithmetic`: the same operations on a configured
//!   dispatcher (custom invoker, custom handlers)
//! - `evaluate_binary` / `evaluate_unary`: opcode-keyed dispatch
//!
//! Every entry point is pure: no state survives a call, errors are returned
//! (never panicked), and overload errors pass through untouched.

mod arithmetic;
mod custom;
mod invoke;
mod numeric;
mod operators;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use arithmetic::{Arithmetic, ArithmeticBuilder, DefaultArithmetic};
pub use custom::{CustomArithmetic, CustomRegistry};
pub use invoke::{
    find_metamethod, invoke_binary_metamethod, invoke_unary_metamethod, Invoker, NativeInvoker,
};
pub use numeric::floor_mod;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

// Re-export value types from agora_value
pub use agora_value::{
    BinaryOp, EvalError, EvalErrorKind, EvalResult, FunctionValue, Metamethod, ObjectValue,
    UnaryOp, Value,
};

use std::sync::Once;

/// `left + right`.
pub fn add(left: &Value, right: &Value) -> EvalResult {
    DefaultArithmetic::shared().add(left, right)
}

/// `left - right`.
pub fn sub(left: &Value, right: &Value) -> EvalResult {
    DefaultArithmetic::shared().sub(left, right)
}

/// `left * right`.
pub fn mul(left: &Value, right: &Value) -> EvalResult {
    DefaultArithmetic::shared().mul(left, right)
}

/// `left / right`. Zero divisors follow IEEE-754 and never fail.
pub fn div(left: &Value, right: &Value) -> EvalResult {
    DefaultArithmetic::shared().div(left, right)
}

/// `left % right` (floor modulo). A zero divisor fails with `DivisionByZero`.
pub fn modulo(left: &Value, right: &Value) -> EvalResult {
    DefaultArithmetic::shared().modulo(left, right)
}

/// `-operand`.
pub fn neg(operand: &Value) -> EvalResult {
    DefaultArithmetic::shared().neg(operand)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
/// Enable with `RUST_LOG=agora_arith=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already have installed a global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
