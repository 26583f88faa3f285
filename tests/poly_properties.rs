use proptest::prelude::*;

use intpoly::Poly;

// Small coefficients keep products far from i32 overflow.
fn arb_poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec(-50i32..=50, 1..8).prop_map(Poly::from_coefficients)
}

fn arb_exponent() -> impl Strategy<Value = i32> {
    -10i32..40
}

/// Compare coefficients over the union of both stored ranges.
fn same_coefficients(a: &Poly, b: &Poly) -> bool {
    let top = a.max_exponent().max(b.max_exponent()) as i32;
    (0..=top).all(|e| a.coefficient(e) == b.coefficient(e))
}

// ===== Accessors =====

proptest! {
    #[test]
    fn coefficient_outside_storage_is_zero(p in arb_poly(), e in 1i32..1000) {
        prop_assert_eq!(p.coefficient(-e), 0);
        prop_assert_eq!(p.coefficient(p.max_exponent() as i32 + e), 0);
    }
}

proptest! {
    #[test]
    fn set_then_get(p in arb_poly(), c in any::<i32>(), e in arb_exponent()) {
        let mut q = p.clone();
        q.set_coefficient(c, e);
        if e < 0 {
            prop_assert_eq!(q, p);
        } else {
            prop_assert_eq!(q.coefficient(e), c);
            prop_assert_eq!(q.max_exponent(), p.max_exponent().max(e as usize));
        }
    }
}

proptest! {
    #[test]
    fn growth_never_shrinks(p in arb_poly(), e in arb_exponent()) {
        let mut q = p.clone();
        q.set_coefficient(0, e);
        prop_assert!(q.max_exponent() >= p.max_exponent());
        prop_assert!(q.value_eq(&p));
    }
}

// ===== Addition and subtraction =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert!(same_coefficients(&(&a + &b), &(&b + &a)));
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert!(same_coefficients(&(&(&a + &b) + &c), &(&a + &(&b + &c))));
    }
}

proptest! {
    #[test]
    fn add_then_sub_restores_value(a in arb_poly(), b in arb_poly()) {
        let back = &(&a + &b) - &b;
        prop_assert!(back.value_eq(&a));
        prop_assert!(same_coefficients(&back, &a));
    }
}

proptest! {
    #[test]
    fn sum_storage_is_larger_operand(a in arb_poly(), b in arb_poly()) {
        let sum = &a + &b;
        prop_assert_eq!(sum.max_exponent(), a.max_exponent().max(b.max_exponent()));
    }
}

proptest! {
    #[test]
    fn subtraction_definition(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a - &b, a.clone() + (-b));
    }
}

// ===== Multiplication =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert!(same_coefficients(&(&a * &b), &(&b * &a)));
    }
}

proptest! {
    #[test]
    fn multiplicative_identity(a in arb_poly()) {
        let one = Poly::new(1, 0);
        prop_assert_eq!(&a * &one, a.clone());
        prop_assert_eq!(&one * &a, a);
    }
}

proptest! {
    #[test]
    fn distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        let lhs = &a * &(&b + &c);
        let rhs = &(&a * &b) + &(&a * &c);
        prop_assert!(same_coefficients(&lhs, &rhs));
    }
}

proptest! {
    #[test]
    fn product_storage_is_sum_of_storage(a in arb_poly(), b in arb_poly()) {
        let product = &a * &b;
        prop_assert_eq!(product.max_exponent(), a.max_exponent() + b.max_exponent());
    }
}

proptest! {
    #[test]
    fn product_agrees_with_eval(a in arb_poly(), b in arb_poly(), x in -3i32..=3) {
        prop_assert_eq!((&a * &b).eval(x), a.eval(x).wrapping_mul(b.eval(x)));
    }
}

// ===== Compound assignment =====

proptest! {
    #[test]
    fn compound_matches_binary(a in arb_poly(), b in arb_poly()) {
        let mut sum = a.clone();
        sum += &b;
        prop_assert_eq!(sum, &a + &b);

        let mut diff = a.clone();
        diff -= &b;
        prop_assert_eq!(diff, &a - &b);

        let mut product = a.clone();
        product *= &b;
        prop_assert_eq!(product, &a * &b);
    }
}

// ===== Equality =====

proptest! {
    #[test]
    fn equality_reflexive_and_clone(a in arb_poly()) {
        let b = a.clone();
        prop_assert!(a == b);
        prop_assert!(!(a != b));
    }
}

proptest! {
    #[test]
    fn padding_breaks_structural_equality(a in arb_poly(), extra in 1i32..5) {
        let mut padded = a.clone();
        padded.set_coefficient(0, a.max_exponent() as i32 + extra);
        prop_assert_ne!(&padded, &a);
        prop_assert!(padded.value_eq(&a));
    }
}

// ===== Text form =====

proptest! {
    #[test]
    fn text_round_trip_by_value(a in arb_poly()) {
        let mut input = String::new();
        for (e, c) in a.coefficients().iter().enumerate() {
            input.push_str(&format!("{} {} ", c, e));
        }
        input.push_str("-1 -1");
        let parsed: Poly = input.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), a.to_string());
    }
}

proptest! {
    #[test]
    fn zero_prints_as_zero(len in 1usize..20) {
        let p = Poly::from_coefficients(vec![0; len]);
        prop_assert_eq!(p.to_string(), " 0");
    }
}
