//! Property-based tests for the in-place coefficient primitives.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Values well past a machine word so the heap path is exercised
    fn wide_int() -> impl Strategy<Value = Integer> {
        (small_int(), 0usize..4).prop_map(|(v, k)| Integer::new(v) * Integer::new(10).pow(30 * k))
    }

    proptest! {
        #[test]
        fn add_into_matches_operator(a in wide_int(), b in wide_int()) {
            let mut slot = Integer::new(42);
            slot.add_into(&a, &b);
            prop_assert_eq!(slot, a.clone() + b.clone());
        }

        #[test]
        fn add_into_commutative(a in wide_int(), b in wide_int()) {
            let mut left = Integer::zero();
            let mut right = Integer::zero();
            left.add_into(&a, &b);
            right.add_into(&b, &a);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn add_into_inverse_is_zero(a in wide_int()) {
            let mut slot = Integer::zero();
            slot.add_into(&a, &-&a);
            prop_assert!(slot.is_zero());
        }

        #[test]
        fn set_copies_value(a in wide_int(), b in wide_int()) {
            let mut slot = b;
            slot.set(&a);
            prop_assert_eq!(slot, a);
        }

        #[test]
        fn clear_resets(a in wide_int()) {
            let mut slot = a;
            slot.clear();
            prop_assert!(slot.is_zero());
        }

        #[test]
        fn small_values_round_trip(a in small_int()) {
            prop_assert_eq!(Integer::new(a).to_i64(), Some(a));
        }
    }
}
