//! Dispatcher test suites.
//!
//! Fixtures are built fresh per test: objects are mutable, and a shared
//! fixture would let one test's `set` leak into another.

#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

mod property_tests;

use agora_value::{FunctionValue, Metamethod, ObjectValue, Value};

/// Tolerance for comparing computed numbers against decimal literals.
pub(crate) const FLOAT_TOLERANCE: f64 = 1e-6;

/// Object whose binary overloads return their argument and whose `__unm`
/// returns `-1`.
pub(crate) fn overloading_object() -> ObjectValue {
    let obj = ObjectValue::new();
    let ret_arg = FunctionValue::native_with_arity("ret_arg", 1, |args| {
        Ok(args.first().cloned().unwrap_or(Value::Nil))
    });
    for method in Metamethod::ALL {
        if method == Metamethod::Unm {
            obj.set(
                method.key(),
                Value::native_fn("ret_unm", |_| Ok(Value::number(-1.0))),
            );
        } else {
            obj.set(method.key(), Value::Function(ret_arg.clone()));
        }
    }
    obj
}

/// Function that ignores its arguments and returns `Nil`.
pub(crate) fn plain_fn() -> Value {
    Value::native_fn("plain", |_| Ok(Value::Nil))
}

#[track_caller]
pub(crate) fn assert_number_near(value: &Value, expected: f64) {
    let Some(actual) = value.as_number() else {
        panic!("expected a number near {expected}, got {value:?}");
    };
    assert!(
        (actual - expected).abs() <= FLOAT_TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
