//! Callable values.
//!
//! The runtime does not distinguish native functions from script functions
//! at this layer: a host evaluator wraps compiled script functions in a
//! closure with the same signature, so both reach the dispatcher as a
//! `FunctionValue`.

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::errors::{too_few_args, wrong_arg_count, EvalResult};
use crate::EvalError;

/// Function body signature.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// Invocable function value.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    /// Exact argument count, checked before the body runs. `None` is variadic.
    arity: Option<usize>,
    body: Arc<NativeFn>,
}

impl FunctionValue {
    /// Create a variadic function. The body validates its own arguments.
    pub fn native<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        FunctionValue {
            name: name.into(),
            arity: None,
            body: Arc::new(body),
        }
    }

    /// Create a function that accepts exactly `arity` arguments.
    pub fn native_with_arity<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        FunctionValue {
            name: name.into(),
            arity: Some(arity),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Call the function.
    ///
    /// Fixed-arity functions fail with `ArityMismatch` before the body runs.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        if let Some(expected) = self.arity {
            expect_args(&self.name, expected, args)?;
        }
        (self.body)(args)
    }

    /// True if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &&*self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Require exactly `n` arguments.
pub fn expect_args(name: &str, n: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() == n {
        Ok(())
    } else {
        Err(wrong_arg_count(name, n, args.len()))
    }
}

/// Require at least `n` arguments.
pub fn expect_at_least_args(name: &str, n: usize, args: &[Value]) -> Result<(), EvalError> {
    if args.len() >= n {
        Ok(())
    } else {
        Err(too_few_args(name, n, args.len()))
    }
}
