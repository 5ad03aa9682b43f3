//! Error types for runtime arithmetic and native calls.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories so hosts can match on the
//! failure instead of parsing messages. Factory functions (e.g.,
//! `modulo_by_zero()`) are the public API; they populate both `kind` and
//! `message`.

use crate::ops::{BinaryOp, UnaryOp};
use crate::value::Value;
use std::fmt;

/// Result of evaluating an operator or calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// No native rule and no overload applies.
    ///
    /// `op` is the operator name (`add`, `neg`, ...). `right` is `None` for
    /// unary operators.
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: Option<&'static str>,
    },
    /// Modulo with a zero divisor. Division never raises this.
    DivisionByZero,

    /// A function with a fixed arity was called with a different count.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// A variadic function received fewer arguments than it needs.
    TooFewArguments {
        name: String,
        min: usize,
        got: usize,
    },

    /// A custom value was built with a built-in type name as its tag.
    ReservedTag { tag: &'static str },

    /// Free-form error raised by native code.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                op,
                left,
                right: Some(right),
            } => write!(f, "cannot apply `{op}` to `{left}` and `{right}`"),
            Self::TypeMismatch {
                op,
                left,
                right: None,
            } => write!(f, "cannot apply `{op}` to `{left}`"),
            Self::DivisionByZero => write!(f, "modulo by zero"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                if name.is_empty() {
                    write!(f, "expected {expected} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects {expected} {arg_word}, got {got}")
                }
            }
            Self::TooFewArguments { name, min, got } => {
                let arg_word = if *min == 1 { "argument" } else { "arguments" };
                if name.is_empty() {
                    write!(f, "expected at least {min} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects at least {min} {arg_word}, got {got}")
                }
            }
            Self::ReservedTag { tag } => {
                write!(f, "custom tag `{tag}` is reserved for a built-in type")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message. For factory-created errors this equals
    /// `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// True for `TypeMismatch` errors.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, EvalErrorKind::TypeMismatch { .. })
    }

    /// True for `DivisionByZero` errors.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.kind, EvalErrorKind::DivisionByZero)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Operator Errors

/// No rule applies to a binary operator for these operand types.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.name(),
        left: left.type_name(),
        right: Some(right.type_name()),
    })
}

/// No rule applies to a unary operator for this operand type.
#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.name(),
        left: operand.type_name(),
        right: None,
    })
}

/// Modulo with a zero divisor.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// A custom value tag collides with a built-in type name.
#[cold]
pub fn reserved_custom_tag(tag: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReservedTag { tag })
}

// Call Errors

/// Wrong argument count for a fixed-arity function.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Too few arguments for a variadic function.
#[cold]
pub fn too_few_args(name: &str, min: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooFewArguments {
        name: name.to_string(),
        min,
        got,
    })
}
