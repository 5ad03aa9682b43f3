//! IEEE-754 number arithmetic.
//!
//! Division by zero follows IEEE-754 (`NaN` or signed infinity) and is never
//! an error. Modulo by zero is always an error.

use agora_value::{modulo_by_zero, BinaryOp, EvalResult, Value};

/// Apply `op` to two numbers.
pub fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div => Ok(Value::Number(a / b)),
        BinaryOp::Mod => floor_mod(a, b)
            .map(Value::Number)
            .ok_or_else(modulo_by_zero),
    }
}

/// Floor modulo: `a - floor(a / b) * b`, with the sign of the divisor.
///
/// Computed from the truncated remainder, which is exact, then shifted by
/// `b` when its sign disagrees with the divisor. Returns `None` when `b` is
/// zero of either sign. NaN operands yield NaN.
///
/// Edge cases:
/// - a zero remainder is a zero with the divisor's sign
/// - an infinite divisor returns a finite dividend of the same sign as is,
///   and the divisor itself for a nonzero dividend of the opposite sign
/// - a remainder too small to survive `r + b` rounds to `b`, so the result
///   magnitude is at most `|b|`
pub fn floor_mod(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        return None;
    }
    let r = a % b;
    if r == 0.0 {
        Some(0.0_f64.copysign(b))
    } else if (r < 0.0) != (b < 0.0) {
        Some(r + b)
    } else {
        Some(r)
    }
}
