//! Unary operator dispatch.
//!
//! Numbers negate natively (IEEE-754, so `-0` and `0` swap and NaN stays
//! NaN). Custom values go to their registered handler. Objects use `__unm`,
//! called with no arguments. Anything else is a `TypeMismatch`.

use agora_value::{unary_type_mismatch, EvalResult, UnaryOp, Value};

use crate::arithmetic::DefaultArithmetic;
use crate::invoke::{find_metamethod, invoke_unary_metamethod};

/// Evaluate a unary operation.
pub fn evaluate_unary(operand: &Value, op: UnaryOp, arith: &DefaultArithmetic) -> EvalResult {
    if let Value::Number(n) = operand {
        return Ok(match op {
            UnaryOp::Neg => Value::Number(-n),
        });
    }
    if let Some(result) = arith.custom_handlers().resolve_unary(op, operand) {
        return result;
    }
    if let Some(callee) = find_metamethod(operand, op.metamethod()) {
        tracing::trace!(op = op.name(), "resolved by metamethod");
        return invoke_unary_metamethod(arith.invoker(), op, &callee);
    }
    Err(unary_type_mismatch(op, operand))
}
