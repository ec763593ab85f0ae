//! Property-based tests for the numeric value family.
//!
//! These use proptest to check the algebraic laws over generated inputs:
//! 1. Unary minus is an involution for every variant
//! 2. Division round-trips through multiplication (exactly for evenly
//!    dividing integers, within relative tolerance for doubles)
//! 3. Compare trichotomy: exactly one of lt/eq/gt for ordered pairs

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use numera_value::{Comparable, DoubleNumber, IntNumber, Number, Scalar};
use proptest::prelude::*;

/// Generate a finite, reasonably sized double.
fn finite_double() -> impl Strategy<Value = f64> {
    -1.0e12..1.0e12
}

proptest! {
    #[test]
    fn int_uminus_is_involution(v in any::<i64>()) {
        let n = IntNumber::new_with_value(v);
        prop_assert_eq!(n.uminus().uminus().scalar(), Scalar::Int(v));
    }

    #[test]
    fn double_uminus_is_involution(v in finite_double()) {
        let n = DoubleNumber::new_with_value(v);
        prop_assert_eq!(n.uminus().uminus().scalar(), Scalar::Double(v));
    }

    #[test]
    fn even_int_division_round_trips(q in -1_000_000i64..1_000_000, b in 1i64..1_000) {
        // Build a dividend that divides evenly so truncation is exact.
        let a = IntNumber::new_with_value(q * b);
        let divisor = IntNumber::new_with_value(b);

        let quotient = a.div(&divisor).expect("nonzero divisor");
        let back = quotient.mul(&divisor).expect("int mul is defined");
        prop_assert_eq!(back.scalar(), a.scalar());
    }

    #[test]
    fn double_division_round_trips(a in finite_double(), b in finite_double()) {
        // Keep the divisor away from zero so the quotient stays finite.
        prop_assume!(b.abs() > 1e-6);
        let lhs = DoubleNumber::new_with_value(a);
        let divisor = DoubleNumber::new_with_value(b);

        let quotient = lhs.div(&divisor).expect("nonzero divisor");
        let back = quotient.mul(&divisor).expect("double mul is defined");
        let round_tripped = back.scalar().as_double();
        let tolerance = 1e-9 * a.abs().max(1.0);
        prop_assert!((round_tripped - a).abs() <= tolerance);
    }

    #[test]
    fn division_by_nonzero_int_is_defined(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let lhs = IntNumber::new_with_value(a);
        let divisor = IntNumber::new_with_value(b);
        prop_assert!(lhs.div(&divisor).is_some());
    }

    #[test]
    fn int_trichotomy(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (IntNumber::new_with_value(a), IntNumber::new_with_value(b));
        let holds = [
            x.lt(&y).unwrap(),
            Comparable::eq(&x, &y).unwrap(),
            x.gt(&y).unwrap(),
        ];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
    }

    #[test]
    fn double_trichotomy(a in finite_double(), b in finite_double()) {
        let (x, y) = (
            DoubleNumber::new_with_value(a),
            DoubleNumber::new_with_value(b),
        );
        let holds = [
            x.lt(&y).unwrap(),
            Comparable::eq(&x, &y).unwrap(),
            x.gt(&y).unwrap(),
        ];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
    }

    #[test]
    fn left_operand_type_wins(a in -1_000i64..1_000, b in finite_double()) {
        let int_led = IntNumber::new_with_value(a)
            .add(&DoubleNumber::new_with_value(b))
            .expect("int add is defined");
        let double_led = DoubleNumber::new_with_value(b)
            .add(&IntNumber::new_with_value(a))
            .expect("double add is defined");
        prop_assert_eq!(int_led.type_name(), "int");
        prop_assert_eq!(double_led.type_name(), "double");
    }
}
