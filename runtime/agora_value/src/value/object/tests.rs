use super::*;
use pretty_assertions::assert_eq;

fn identity_fn() -> Value {
    Value::native_fn("id", |args| Ok(args.first().cloned().unwrap_or(Value::Nil)))
}

#[test]
fn test_get_set_remove() {
    let obj = ObjectValue::new();
    assert!(obj.is_empty());
    assert_eq!(obj.set("x", Value::number(1.0)), None);
    assert_eq!(obj.get("x"), Some(Value::number(1.0)));
    assert_eq!(obj.set("x", Value::number(2.0)), Some(Value::number(1.0)));
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.remove("x"), Some(Value::number(2.0)));
    assert!(obj.get("x").is_none());
}

#[test]
fn test_lookup_is_case_sensitive() {
    let obj = ObjectValue::new();
    obj.set("__add", identity_fn());
    assert!(obj.has_callable("__add"));
    assert!(!obj.has_callable("__ADD"));
    assert!(!obj.has_callable("__add "));
    assert!(obj.callable("__Add").is_none());
}

#[test]
fn test_non_function_attribute_is_not_callable() {
    let obj = ObjectValue::new();
    obj.set("__add", Value::number(5.0));
    assert!(obj.contains_key("__add"));
    assert!(!obj.has_callable("__add"));
    assert!(obj.metamethod(Metamethod::Add).is_none());
}

#[test]
fn test_metamethod_lookup_uses_reserved_key() {
    let obj = ObjectValue::new();
    obj.set("__unm", identity_fn());
    assert!(obj.metamethod(Metamethod::Unm).is_some());
    assert!(obj.metamethod(Metamethod::Sub).is_none());
}

#[test]
fn test_clone_shares_table() {
    let a = ObjectValue::new();
    let b = a.clone();
    b.set("__mul", identity_fn());
    assert!(a.has_callable("__mul"));
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&ObjectValue::new()));
}

#[test]
fn test_with_entries_and_keys() {
    let obj = ObjectValue::with_entries([
        ("b", Value::Bool(true)),
        ("a", Value::Nil),
        ("b", Value::Bool(false)),
    ]);
    assert_eq!(obj.keys(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(obj.get("b"), Some(Value::Bool(false)));
}

#[test]
fn test_debug_does_not_recurse_into_self_reference() {
    let obj = ObjectValue::new();
    obj.set("self", Value::Object(obj.clone()));
    let rendered = format!("{obj:?}");
    assert_eq!(rendered, "ObjectValue { keys: [\"self\"] }");
}
