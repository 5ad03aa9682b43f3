//! Runtime values for the Agora runtime.
//!
//! # Variants
//!
//! `Value` is a closed tagged union. Primitives (`Nil`, `Bool`, `Number`) are
//! stored inline; strings are shared immutable heap values; objects and
//! functions are shared handles compared by identity. `Custom` is the seam
//! for host-defined kinds.
//!
//! # Heap Enforcement
//!
//! String allocations go through `Value::string`. The `Heap<T>` wrapper has a
//! private constructor, so external code cannot build `Value::Str` directly.
//!
//! # Thread Safety
//!
//! Every variant is `Send + Sync`. Objects guard their attribute table with a
//! read-write lock; everything else is immutable.

mod custom;
mod function;
mod heap;
mod object;

use std::fmt;

pub use custom::CustomValue;
pub use function::{expect_args, expect_at_least_args, FunctionValue, NativeFn};
pub use heap::Heap;
pub use object::ObjectValue;

use crate::errors::{EvalError, EvalResult};

/// Type names of the built-in variants, as reported by [`Value::type_name`].
///
/// Custom tags may not use these.
pub const BUILTIN_TYPE_NAMES: [&str; 6] =
    ["nil", "bool", "number", "string", "object", "function"];

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// IEEE-754 binary64 number.
    Number(f64),
    /// Immutable string.
    Str(Heap<String>),
    /// Mutable string-keyed object; may carry operator overloads.
    Object(ObjectValue),
    /// Invocable function.
    Function(FunctionValue),
    /// Host-defined value.
    Custom(CustomValue),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("value: {}", x));
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an empty object.
    #[inline]
    pub fn object() -> Self {
        Value::Object(ObjectValue::new())
    }

    /// Create a variadic native function value.
    #[inline]
    pub fn native_fn<F>(name: &str, body: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        Value::Function(FunctionValue::native(name, body))
    }

    /// Create a host-defined value.
    ///
    /// Fails with `ReservedTag` if `tag` is a built-in type name.
    #[inline]
    pub fn custom<T: std::any::Any + Send + Sync>(
        tag: &'static str,
        payload: T,
    ) -> Result<Self, EvalError> {
        CustomValue::new(tag, payload).map(Value::Custom)
    }
}

// Value Methods

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The underlying float of a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomValue> {
        match self {
            Value::Custom(c) => Some(c),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    ///
    /// Custom values report their tag, which never collides with a built-in
    /// name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Custom(c) => c.tag(),
        }
    }
}

// Trait Implementations

/// Primitives compare by value (`Number` by IEEE-754 `==`), handles by
/// identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Custom(a), Value::Custom(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::Object(o) => write!(f, "Object({o:?})"),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Custom(c) => write!(f, "Custom({c:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{}", &***s),
            Value::Object(o) => write!(f, "<object {} entries>", o.len()),
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Custom(c) => write!(f, "<{}>", c.tag()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<ObjectValue> for Value {
    fn from(o: ObjectValue) -> Self {
        Value::Object(o)
    }
}

impl From<FunctionValue> for Value {
    fn from(f: FunctionValue) -> Self {
        Value::Function(f)
    }
}
