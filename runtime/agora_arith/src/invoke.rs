//! Metamethod invocation protocol.
//!
//! Binary overloads receive exactly one argument, the operand that is not the
//! owning object. `__unm` receives none. Whatever the overload returns is the
//! operator's result, and whatever it fails with is the operator's failure;
//! nothing here inspects or wraps either.

use agora_value::{BinaryOp, EvalResult, FunctionValue, Metamethod, UnaryOp, Value};

/// Calls functions on behalf of the dispatcher.
///
/// The default [`NativeInvoker`] runs the function body directly. A host
/// evaluator supplies its own implementation to route overload calls through
/// its call stack (frames, recursion limits, tracing).
pub trait Invoker: Send + Sync {
    fn invoke(&self, callee: &FunctionValue, args: &[Value]) -> EvalResult;
}

/// Runs the function body directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeInvoker;

impl Invoker for NativeInvoker {
    #[inline]
    fn invoke(&self, callee: &FunctionValue, args: &[Value]) -> EvalResult {
        callee.call(args)
    }
}

/// Find the overload for `method` on `value`.
///
/// Only objects carry overloads, and only function attributes count.
/// Looked up on every call, so attributes installed or removed since the
/// last call are honored.
pub fn find_metamethod(value: &Value, method: Metamethod) -> Option<FunctionValue> {
    match value {
        Value::Object(obj) => obj.metamethod(method),
        _ => None,
    }
}

/// Invoke the overload for `op` with the other operand as its only argument.
#[tracing::instrument(level = "trace", skip_all, fields(op = op.name(), callee = callee.name()))]
pub fn invoke_binary_metamethod(
    invoker: &dyn Invoker,
    op: BinaryOp,
    callee: &FunctionValue,
    other: &Value,
) -> EvalResult {
    let args = std::slice::from_ref(other);
    debug_assert_eq!(args.len(), op.metamethod().arg_count());
    invoker.invoke(callee, args)
}

/// Invoke the overload for `op` with no arguments.
#[tracing::instrument(level = "trace", skip_all, fields(op = op.name(), callee = callee.name()))]
pub fn invoke_unary_metamethod(
    invoker: &dyn Invoker,
    op: UnaryOp,
    callee: &FunctionValue,
) -> EvalResult {
    debug_assert_eq!(op.metamethod().arg_count(), 0);
    invoker.invoke(callee, &[])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use std::sync::Mutex;

    use agora_value::ObjectValue;

    use super::*;

    /// Records the argument count of every call.
    #[derive(Default)]
    struct ArgCounter(Mutex<Vec<usize>>);

    impl Invoker for ArgCounter {
        fn invoke(&self, callee: &FunctionValue, args: &[Value]) -> EvalResult {
            self.0.lock().unwrap().push(args.len());
            callee.call(args)
        }
    }

    fn nil_fn() -> FunctionValue {
        FunctionValue::native("nil", |_| Ok(Value::Nil))
    }

    #[test]
    fn helpers_pass_metamethod_arg_count() {
        let counter = ArgCounter::default();
        for op in BinaryOp::ALL {
            invoke_binary_metamethod(&counter, op, &nil_fn(), &Value::Nil).unwrap();
        }
        invoke_unary_metamethod(&counter, UnaryOp::Neg, &nil_fn()).unwrap();

        let expected: Vec<usize> = BinaryOp::ALL
            .iter()
            .map(|op| op.metamethod())
            .chain([UnaryOp::Neg.metamethod()])
            .map(Metamethod::arg_count)
            .collect();
        assert_eq!(*counter.0.lock().unwrap(), expected);
        assert_eq!(expected, [1, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn find_metamethod_only_inspects_objects() {
        let obj = ObjectValue::new();
        obj.set(Metamethod::Mod.key(), Value::Function(nil_fn()));
        assert!(find_metamethod(&Value::Object(obj), Metamethod::Mod).is_some());
        assert!(find_metamethod(&Value::Function(nil_fn()), Metamethod::Mod).is_none());
        assert!(find_metamethod(&Value::string("__mod"), Metamethod::Mod).is_none());
    }
}
