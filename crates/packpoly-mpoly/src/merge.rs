//! Linear merge of two sorted term sequences.
//!
//! This is the inner loop of polynomial addition: both inputs are strictly
//! ordered and zero-free, packed at the same width, and the output buffers
//! are already sized. Equal monomials are combined and dropped when their
//! coefficients cancel.

use num_traits::Zero;
use packpoly_integers::Integer;

use crate::context::TermDirection;

/// Merges `a` and `b` into the output buffers and returns the number of
/// terms written.
///
/// Both inputs must be strictly ordered in `direction` with no zero
/// coefficients, and packed at the same width. The output slots must hold
/// at least `a.len() + b.len()` terms. Only slots below the returned
/// length are meaningful; the slot at the returned index may hold a zero
/// left by a cancellation.
///
/// # Panics
///
/// Panics if the output buffers are too short for the merged terms.
pub fn merge_add(
    out_coeffs: &mut [Integer],
    out_exps: &mut [u64],
    a_coeffs: &[Integer],
    a_exps: &[u64],
    b_coeffs: &[Integer],
    b_exps: &[u64],
    direction: TermDirection,
) -> usize {
    debug_assert_eq!(a_coeffs.len(), a_exps.len());
    debug_assert_eq!(b_coeffs.len(), b_exps.len());
    debug_assert!(out_coeffs.len() >= a_exps.len() + b_exps.len());
    debug_assert!(out_exps.len() >= a_exps.len() + b_exps.len());

    let (len_a, len_b) = (a_exps.len(), b_exps.len());
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < len_a && j < len_b {
        let (ea, eb) = (a_exps[i], b_exps[j]);
        if ea == eb {
            out_coeffs[k].add_into(&a_coeffs[i], &b_coeffs[j]);
            out_exps[k] = ea;
            if !out_coeffs[k].is_zero() {
                k += 1;
            }
            i += 1;
            j += 1;
        } else if direction.precedes(ea, eb) {
            out_coeffs[k].set(&a_coeffs[i]);
            out_exps[k] = ea;
            i += 1;
            k += 1;
        } else {
            out_coeffs[k].set(&b_coeffs[j]);
            out_exps[k] = eb;
            j += 1;
            k += 1;
        }
    }

    for (c, &e) in a_coeffs[i..].iter().zip(&a_exps[i..]) {
        out_coeffs[k].set(c);
        out_exps[k] = e;
        k += 1;
    }

    for (c, &e) in b_coeffs[j..].iter().zip(&b_exps[j..]) {
        out_coeffs[k].set(c);
        out_exps[k] = e;
        k += 1;
    }

    k
}
