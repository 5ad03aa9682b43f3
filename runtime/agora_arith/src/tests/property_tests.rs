//! Property tests for the native number rules.

#![allow(
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "Proptest inputs are small integers compared exactly"
)]

use crate::{add, div, floor_mod, modulo, mul, neg, sub, Value};
use proptest::prelude::*;

fn same_number(value: &Value, expected: f64) -> bool {
    match value.as_number() {
        Some(n) if expected.is_nan() => n.is_nan(),
        Some(n) => n.to_bits() == expected.to_bits(),
        None => false,
    }
}

fn nonzero_divisor() -> impl Strategy<Value = i64> {
    (-1000i64..1000).prop_filter("divisor must be nonzero", |b| *b != 0)
}

proptest! {
    #[test]
    fn basic_ops_match_ieee(a in any::<f64>(), b in any::<f64>()) {
        let (l, r) = (Value::number(a), Value::number(b));
        prop_assert!(same_number(&add(&l, &r).unwrap(), a + b));
        prop_assert!(same_number(&sub(&l, &r).unwrap(), a - b));
        prop_assert!(same_number(&mul(&l, &r).unwrap(), a * b));
        prop_assert!(same_number(&div(&l, &r).unwrap(), a / b));
    }

    #[test]
    fn negation_flips_sign(a in any::<f64>()) {
        prop_assert!(same_number(&neg(&Value::number(a)).unwrap(), -a));
    }

    #[test]
    fn integer_modulo_matches_floored_remainder(
        a in -10_000i64..10_000,
        b in nonzero_divisor(),
    ) {
        let expected = ((a % b) + b) % b;
        let result = modulo(&Value::number(a as f64), &Value::number(b as f64)).unwrap();
        prop_assert_eq!(result.as_number(), Some(expected as f64));
    }

    #[test]
    fn modulo_takes_sign_of_divisor(a in -1.0e6f64..1.0e6, b in -1.0e3f64..1.0e3) {
        prop_assume!(b != 0.0);
        let r = floor_mod(a, b).unwrap();
        prop_assert_eq!(r.is_sign_negative(), b.is_sign_negative(), "{} mod {} = {}", a, b, r);
        // A tiny remainder opposite in sign to `b` rounds up to `b` itself.
        prop_assert!(r.abs() <= b.abs());
    }

    #[test]
    fn zero_divisor_always_fails_modulo(a in any::<f64>()) {
        let err = modulo(&Value::number(a), &Value::number(0.0)).unwrap_err();
        prop_assert!(err.is_division_by_zero());
    }

    #[test]
    fn string_concat_appends(a in ".{0,12}", b in ".{0,12}") {
        let result = add(&Value::string(a.as_str()), &Value::string(b.as_str())).unwrap();
        let joined = format!("{a}{b}");
        prop_assert_eq!(result.as_str(), Some(joined.as_str()));
    }
}
