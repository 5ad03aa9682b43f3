//! Mutable string-keyed objects.
//!
//! An object is both a general-purpose record and the carrier of operator
//! overloads: a `Function` stored under a [`Metamethod`] key overloads the
//! matching arithmetic operator.
//!
//! Handles are shared. Cloning an `ObjectValue` clones the handle, not the
//! table, so a metamethod installed through one handle is visible through
//! every other.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use super::{FunctionValue, Value};
use crate::ops::Metamethod;

/// Shared, mutable attribute table.
#[derive(Clone, Default)]
pub struct ObjectValue {
    entries: Arc<RwLock<FxHashMap<String, Value>>>,
}

impl ObjectValue {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object from key/value pairs. Later duplicates win.
    pub fn with_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        ObjectValue {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the value stored under `key`. Exact, case-sensitive match.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.write().insert(key.into(), value)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Get the function stored under `key`.
    ///
    /// Returns `None` when the key is unset or holds a non-function value.
    /// The lock is released before returning, so the caller may invoke the
    /// function even if it mutates this object.
    pub fn callable(&self, key: &str) -> Option<FunctionValue> {
        match self.entries.read().get(key) {
            Some(Value::Function(f)) => Some(f.clone()),
            _ => None,
        }
    }

    /// True if a function is stored under `key`.
    pub fn has_callable(&self, key: &str) -> bool {
        matches!(self.entries.read().get(key), Some(Value::Function(_)))
    }

    /// Get the overload installed for `method`, if any.
    #[inline]
    pub fn metamethod(&self, method: Metamethod) -> Option<FunctionValue> {
        self.callable(method.key())
    }

    /// True if both handles refer to the same table.
    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

// Debug lists keys only; values may refer back to this object.
impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests;
