//! Binary operator dispatch.
//!
//! Resolution order, first match wins:
//!
//! 1. Native rule: number with number, string `+` string, then a registered
//!    custom handler for the left operand's tag, then the right's.
//! 2. Left overload: the left operand is an object with a function under the
//!    operator's metamethod key; it is called with the right operand.
//! 3. Right overload: the same for the right operand, called with the left.
//! 4. `TypeMismatch`.
//!
//! Nothing is cached between calls.

use agora_value::{binary_type_mismatch, BinaryOp, EvalResult, Value};

use crate::arithmetic::DefaultArithmetic;
use crate::invoke::{find_metamethod, invoke_binary_metamethod};
use crate::numeric::eval_number_binary;

/// Evaluate a binary operation.
pub fn evaluate_binary(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    arith: &DefaultArithmetic,
) -> EvalResult {
    if let Some(result) = eval_native_binary(left, right, op) {
        return result;
    }
    if let Some(result) = arith.custom_handlers().resolve_binary(op, left, right) {
        return result;
    }

    let method = op.metamethod();
    if let Some(callee) = find_metamethod(left, method) {
        tracing::trace!(
            op = op.name(),
            side = "left",
            other = right.type_name(),
            "resolved by metamethod"
        );
        return invoke_binary_metamethod(arith.invoker(), op, &callee, right);
    }
    if let Some(callee) = find_metamethod(right, method) {
        tracing::trace!(
            op = op.name(),
            side = "right",
            other = left.type_name(),
            "resolved by metamethod"
        );
        return invoke_binary_metamethod(arith.invoker(), op, &callee, left);
    }

    Err(binary_type_mismatch(op, left, right))
}

/// Primitive rules. `None` means no rule applies to this pair.
fn eval_native_binary(left: &Value, right: &Value, op: BinaryOp) -> Option<EvalResult> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Some(eval_number_binary(*a, *b, op)),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ => None,
    }
}

/// Strings only support concatenation.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<EvalResult> {
    match op {
        BinaryOp::Add => {
            let mut result = String::with_capacity(a.len() + b.len());
            result.push_str(a);
            result.push_str(b);
            Some(Ok(Value::string(result)))
        }
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => None,
    }
}
