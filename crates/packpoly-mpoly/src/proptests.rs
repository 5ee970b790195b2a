//! Property-based tests for packed polynomial addition.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use packpoly_integers::Integer;

    use crate::add::{add_into, Operand};
    use crate::context::{MpolyContext, TermDirection};
    use crate::monomial::pack;
    use crate::ordering::MonomialOrder;
    use crate::poly::Mpoly;

    type Terms = Vec<(i64, Vec<u64>)>;

    fn context() -> impl Strategy<Value = MpolyContext> {
        let order = prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ];
        let direction = prop_oneof![Just(TermDirection::Descending), Just(TermDirection::Ascending)];
        (1usize..=3, order, direction)
            .prop_map(|(n, order, direction)| MpolyContext::new(n, order).with_direction(direction))
    }

    // Mostly tiny exponents so monomials collide; occasionally large ones
    // so operands end up packed at different widths
    fn exponent() -> impl Strategy<Value = u64> {
        prop_oneof![8 => 0u64..4, 1 => 200u64..2000]
    }

    fn terms(nvars: usize) -> impl Strategy<Value = Terms> {
        vec((-20i64..20, vec(exponent(), nvars)), 0..10)
    }

    fn build(terms: &Terms, ctx: &MpolyContext) -> Mpoly {
        Mpoly::from_terms(terms.iter().map(|(c, e)| (Integer::new(*c), e.clone())), ctx).unwrap()
    }

    fn negate(p: &Mpoly, ctx: &MpolyContext) -> Mpoly {
        Mpoly::from_terms(p.terms(ctx).map(|(c, e)| (-c, e)), ctx).unwrap()
    }

    fn operands() -> impl Strategy<Value = (MpolyContext, Terms, Terms, Vec<i64>)> {
        context().prop_flat_map(|ctx| {
            let n = ctx.nvars();
            (Just(ctx), terms(n), terms(n), vec(-3i64..=3, n))
        })
    }

    proptest! {
        #[test]
        fn sum_is_ordered_and_zero_free((ctx, a, b, _) in operands()) {
            let sum = build(&a, &ctx).add(&build(&b, &ctx), &ctx).unwrap();
            prop_assert!(sum.is_canonical(&ctx));
        }

        #[test]
        fn sum_matches_combined_terms((ctx, a, b, _) in operands()) {
            let sum = build(&a, &ctx).add(&build(&b, &ctx), &ctx).unwrap();
            let combined: Terms = a.iter().chain(&b).cloned().collect();
            prop_assert!(sum.equal(&build(&combined, &ctx), &ctx));
        }

        #[test]
        fn sum_evaluates_to_sum_of_values((ctx, a, b, point) in operands()) {
            let (pa, pb) = (build(&a, &ctx), build(&b, &ctx));
            let point: Vec<Integer> = point.into_iter().map(Integer::new).collect();

            let sum = pa.add(&pb, &ctx).unwrap();
            let lhs = sum.evaluate(&point, &ctx).unwrap();
            let rhs = pa.evaluate(&point, &ctx).unwrap() + pb.evaluate(&point, &ctx).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn add_commutative((ctx, a, b, _) in operands()) {
            let (pa, pb) = (build(&a, &ctx), build(&b, &ctx));
            prop_assert_eq!(pa.add(&pb, &ctx).unwrap(), pb.add(&pa, &ctx).unwrap());
        }

        #[test]
        fn add_identity((ctx, a, _, _) in operands()) {
            let pa = build(&a, &ctx);
            let zero = Mpoly::new();
            prop_assert_eq!(pa.add(&zero, &ctx).unwrap(), pa.clone());
            prop_assert_eq!(zero.add(&pa, &ctx).unwrap(), pa);
        }

        #[test]
        fn add_additive_inverse((ctx, a, _, _) in operands()) {
            let pa = build(&a, &ctx);
            let sum = pa.add(&negate(&pa, &ctx), &ctx).unwrap();
            prop_assert!(sum.is_empty());
            prop_assert!(sum.is_canonical(&ctx));
        }

        #[test]
        fn aliased_destination_matches_distinct((ctx, a, b, _) in operands()) {
            let (pa, pb) = (build(&a, &ctx), build(&b, &ctx));
            let expected = pa.add(&pb, &ctx).unwrap();

            let mut dest = pa.clone();
            add_into(&mut dest, Operand::Dest, Operand::Poly(&pb), &ctx).unwrap();
            prop_assert_eq!(&dest, &expected);
            prop_assert!(dest.is_canonical(&ctx));

            let mut dest = pb.clone();
            add_into(&mut dest, Operand::Poly(&pa), Operand::Dest, &ctx).unwrap();
            prop_assert_eq!(&dest, &expected);
            prop_assert!(dest.is_canonical(&ctx));

            // the non-aliased operands are untouched
            prop_assert_eq!(pa, build(&a, &ctx));
            prop_assert_eq!(pb, build(&b, &ctx));
        }

        #[test]
        fn reused_destination_matches_fresh((ctx, a, b, _) in operands(), stale in terms(3)) {
            let (pa, pb) = (build(&a, &ctx), build(&b, &ctx));
            let stale: Terms = stale
                .into_iter()
                .map(|(c, mut e)| {
                    e.truncate(ctx.nvars());
                    (c, e)
                })
                .collect();

            let mut dest = build(&stale, &ctx);
            add_into(&mut dest, Operand::Poly(&pa), Operand::Poly(&pb), &ctx).unwrap();
            prop_assert_eq!(&dest, &pa.add(&pb, &ctx).unwrap());
            prop_assert!(dest.is_canonical(&ctx));
        }

        #[test]
        fn packed_order_is_monomial_order(
            ctx in context(),
            a in vec(0u64..300, 3),
            b in vec(0u64..300, 3),
        ) {
            let n = ctx.nvars();
            let (a, b) = (&a[..n], &b[..n]);
            let pa = pack(a, 12, &ctx).unwrap();
            let pb = pack(b, 12, &ctx).unwrap();
            prop_assert_eq!(pa.cmp(&pb), ctx.order().compare(a, b));
        }
    }
}
