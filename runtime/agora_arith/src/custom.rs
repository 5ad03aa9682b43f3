//! Native arithmetic for host-defined value kinds.
//!
//! Hosts register a [`CustomArithmetic`] handler per custom tag. Handlers are
//! part of the native rule: they are asked after the number and string rules
//! and before any object overload is looked up.

use std::fmt;
use std::sync::Arc;

use agora_value::{BinaryOp, EvalResult, UnaryOp, Value};
use rustc_hash::FxHashMap;

/// Arithmetic implementation for one custom value kind.
///
/// Returning `None` declines the operation, letting dispatch continue.
/// Returning `Some(Err(..))` is a real failure and is returned unchanged.
pub trait CustomArithmetic: Send + Sync {
    /// Apply `op`. At least one of `left`/`right` carries this handler's tag.
    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> Option<EvalResult>;

    /// Apply a unary `op` to a value carrying this handler's tag.
    fn unary(&self, op: UnaryOp, operand: &Value) -> Option<EvalResult> {
        let _ = (op, operand);
        None
    }
}

/// Handler table keyed by custom tag.
#[derive(Clone, Default)]
pub struct CustomRegistry {
    handlers: FxHashMap<&'static str, Arc<dyn CustomArithmetic>>,
}

impl CustomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `tag`, returning the handler it replaces.
    pub fn register(
        &mut self,
        tag: &'static str,
        handler: Arc<dyn CustomArithmetic>,
    ) -> Option<Arc<dyn CustomArithmetic>> {
        self.handlers.insert(tag, handler)
    }

    pub fn get(&self, tag: &str) -> Option<&Arc<dyn CustomArithmetic>> {
        self.handlers.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Ask the left operand's handler, then the right's.
    ///
    /// A handler is asked at most once, even when both operands share a tag.
    pub(crate) fn resolve_binary(
        &self,
        op: BinaryOp,
        left: &Value,
        right: &Value,
    ) -> Option<EvalResult> {
        if self.handlers.is_empty() {
            return None;
        }
        let left_tag = custom_tag(left);
        let right_tag = custom_tag(right).filter(|tag| Some(*tag) != left_tag);
        [left_tag, right_tag].into_iter().flatten().find_map(|tag| {
            let result = self.handlers.get(tag)?.binary(op, left, right)?;
            tracing::trace!(op = op.name(), tag, "resolved by custom handler");
            Some(result)
        })
    }

    pub(crate) fn resolve_unary(&self, op: UnaryOp, operand: &Value) -> Option<EvalResult> {
        let tag = custom_tag(operand)?;
        let result = self.handlers.get(tag)?.unary(op, operand)?;
        tracing::trace!(op = op.name(), tag, "resolved by custom handler");
        Some(result)
    }
}

fn custom_tag(value: &Value) -> Option<&'static str> {
    value.as_custom().map(agora_value::CustomValue::tag)
}

impl fmt::Debug for CustomRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("CustomRegistry")
            .field("tags", &tags)
            .finish()
    }
}
