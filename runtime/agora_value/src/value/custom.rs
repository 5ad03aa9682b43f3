//! Host-defined value variants.
//!
//! A custom value carries a static tag naming its kind and an opaque payload.
//! The tag doubles as the value's type name and as the key under which a
//! host registers native arithmetic for the kind, so it may not be one of
//! the built-in type names.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::BUILTIN_TYPE_NAMES;
use crate::errors::{reserved_custom_tag, EvalError};

/// Opaque host value.
#[derive(Clone)]
pub struct CustomValue {
    tag: &'static str,
    payload: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    /// Wrap `payload` under `tag`. Fails with `ReservedTag` if `tag` is a
    /// built-in type name.
    pub fn new<T: Any + Send + Sync>(tag: &'static str, payload: T) -> Result<Self, EvalError> {
        if BUILTIN_TYPE_NAMES.contains(&tag) {
            return Err(reserved_custom_tag(tag));
        }
        Ok(CustomValue {
            tag,
            payload: Arc::new(payload),
        })
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Borrow the payload as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &CustomValue) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::EvalErrorKind;

    #[test]
    fn downcast_matches_payload_type() {
        let v = CustomValue::new("vec2", (1.0f64, 2.0f64)).unwrap();
        assert_eq!(v.tag(), "vec2");
        assert_eq!(v.downcast_ref::<(f64, f64)>(), Some(&(1.0, 2.0)));
        assert!(v.downcast_ref::<String>().is_none());
    }

    #[test]
    fn builtin_type_names_are_rejected_as_tags() {
        for name in BUILTIN_TYPE_NAMES {
            let err = CustomValue::new(name, ()).unwrap_err();
            assert_eq!(err.kind, EvalErrorKind::ReservedTag { tag: name });
        }
        let err = CustomValue::new("number", 1_i64).unwrap_err();
        assert_eq!(
            err.message,
            "custom tag `number` is reserved for a built-in type"
        );
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(CustomValue::new("Number", ()).unwrap().tag(), "Number");
    }
}
