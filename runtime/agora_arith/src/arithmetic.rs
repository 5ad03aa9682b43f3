//! The `Arithmetic` interface and its default implementation.
//!
//! An evaluator holds one `Arithmetic` and routes every arithmetic opcode
//! through it. `DefaultArithmetic` implements the standard resolution order;
//! its builder configures how overloads are invoked and which custom value
//! kinds have native arithmetic.

use std::fmt;
use std::sync::{Arc, OnceLock};

use agora_value::{BinaryOp, EvalResult, UnaryOp, Value};

use crate::custom::{CustomArithmetic, CustomRegistry};
use crate::invoke::{Invoker, NativeInvoker};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;

/// Arithmetic on runtime values.
pub trait Arithmetic: Send + Sync {
    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> EvalResult;

    fn unary(&self, op: UnaryOp, operand: &Value) -> EvalResult;

    fn add(&self, left: &Value, right: &Value) -> EvalResult {
        self.binary(BinaryOp::Add, left, right)
    }

    fn sub(&self, left: &Value, right: &Value) -> EvalResult {
        self.binary(BinaryOp::Sub, left, right)
    }

    fn mul(&self, left: &Value, right: &Value) -> EvalResult {
        self.binary(BinaryOp::Mul, left, right)
    }

    fn div(&self, left: &Value, right: &Value) -> EvalResult {
        self.binary(BinaryOp::Div, left, right)
    }

    fn modulo(&self, left: &Value, right: &Value) -> EvalResult {
        self.binary(BinaryOp::Mod, left, right)
    }

    fn neg(&self, operand: &Value) -> EvalResult {
        self.unary(UnaryOp::Neg, operand)
    }
}

/// Standard dispatcher: native rules, then left and right overloads.
#[derive(Clone)]
pub struct DefaultArithmetic {
    invoker: Arc<dyn Invoker>,
    custom: CustomRegistry,
}

impl DefaultArithmetic {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ArithmeticBuilder {
        ArithmeticBuilder::new()
    }

    /// Process-wide dispatcher with default settings, created on first use.
    pub fn shared() -> &'static DefaultArithmetic {
        static SHARED: OnceLock<DefaultArithmetic> = OnceLock::new();
        SHARED.get_or_init(DefaultArithmetic::new)
    }

    pub fn invoker(&self) -> &dyn Invoker {
        &*self.invoker
    }

    pub fn custom_handlers(&self) -> &CustomRegistry {
        &self.custom
    }
}

impl Default for DefaultArithmetic {
    fn default() -> Self {
        Self::new()
    }
}

impl Arithmetic for DefaultArithmetic {
    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
        evaluate_binary(left, right, op, self)
    }

    fn unary(&self, op: UnaryOp, operand: &Value) -> EvalResult {
        evaluate_unary(operand, op, self)
    }
}

impl fmt::Debug for DefaultArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultArithmetic")
            .field("custom", &self.custom)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DefaultArithmetic`].
#[must_use]
pub struct ArithmeticBuilder {
    invoker: Option<Arc<dyn Invoker>>,
    custom: CustomRegistry,
}

impl ArithmeticBuilder {
    pub fn new() -> Self {
        Self {
            invoker: None,
            custom: CustomRegistry::new(),
        }
    }

    /// Set the invoker used to call overloads. Defaults to [`NativeInvoker`].
    pub fn invoker(mut self, invoker: Arc<dyn Invoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Register native arithmetic for custom values tagged `tag`.
    ///
    /// A second registration for the same tag replaces the first.
    pub fn custom(mut self, tag: &'static str, handler: Arc<dyn CustomArithmetic>) -> Self {
        self.custom.register(tag, handler);
        self
    }

    pub fn build(self) -> DefaultArithmetic {
        DefaultArithmetic {
            invoker: self.invoker.unwrap_or_else(|| Arc::new(NativeInvoker)),
            custom: self.custom,
        }
    }
}

impl Default for ArithmeticBuilder {
    fn default() -> Self {
        Self::new()
    }
}
