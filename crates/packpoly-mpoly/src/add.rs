//! Polynomial addition.
//!
//! The orchestration around [`merge_add`]: bring both operands to a common
//! field width, pick an output buffer that does not overlap the inputs,
//! merge, and fix the final length.

use std::borrow::Cow;

use tracing::{trace, warn};

use crate::context::MpolyContext;
use crate::error::Result;
use crate::merge::merge_add;
use crate::monomial::repack_monomials;
use crate::poly::Mpoly;

/// An addend of [`add_into`].
///
/// `Dest` names the destination polynomial itself, which cannot be passed
/// by shared reference while it is borrowed mutably.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// The destination polynomial.
    Dest,
    /// A polynomial distinct from the destination.
    Poly(&'a Mpoly),
}

impl<'a> Operand<'a> {
    fn resolve<'b>(self, dest: &'b Mpoly) -> &'b Mpoly
    where
        'a: 'b,
    {
        match self {
            Operand::Dest => dest,
            Operand::Poly(p) => p,
        }
    }
}

/// Sets `dest = lhs + rhs`.
///
/// Either operand, or both, may be the destination. In that case the sum
/// is built in a fresh polynomial whose storage is then swapped into
/// `dest`; the previous storage is dropped.
///
/// # Errors
///
/// Returns [`MpolyError::UnsupportedWidth`](crate::MpolyError::UnsupportedWidth)
/// if the common field width needs more than one word. `dest` is left
/// untouched in that case.
pub fn add_into(dest: &mut Mpoly, lhs: Operand<'_>, rhs: Operand<'_>, ctx: &MpolyContext) -> Result<()> {
    if let (Operand::Poly(a), Operand::Poly(b)) = (lhs, rhs) {
        let len = add_terms(dest, a, b, ctx)?;
        dest.set_length(len);
        return Ok(());
    }

    let (a, b) = (lhs.resolve(dest), rhs.resolve(dest));
    trace!(len_a = a.len(), len_b = b.len(), "destination aliases an operand");

    let mut temp = Mpoly::with_capacity(a.len() + b.len());
    let len = add_terms(&mut temp, a, b, ctx)?;

    dest.swap(&mut temp);
    drop(temp);
    dest.set_length(len);
    Ok(())
}

/// Merges `a + b` into the slots of `out` and returns the term count.
///
/// `out` gets the common width and enough slots; its length is left for
/// the caller to set.
fn add_terms(out: &mut Mpoly, a: &Mpoly, b: &Mpoly, ctx: &MpolyContext) -> Result<usize> {
    let bits = a.bits().max(b.bits());
    if let Err(err) = ctx.check_single_word(bits) {
        warn!(bits, fields = ctx.fields(), "addition refused: {err}");
        return Err(err);
    }

    let a_exps = repack_monomials(a.exps(), a.bits(), bits, ctx);
    let b_exps = repack_monomials(b.exps(), b.bits(), bits, ctx);
    trace!(
        bits,
        len_a = a.len(),
        len_b = b.len(),
        repacked_a = matches!(a_exps, Cow::Owned(_)),
        repacked_b = matches!(b_exps, Cow::Owned(_)),
        "merging terms"
    );

    out.fit_length(a.len() + b.len());
    out.reset_bits(bits);

    let (out_coeffs, out_exps) = out.slots_mut();
    let len = merge_add(
        out_coeffs,
        out_exps,
        a.coeffs(),
        &a_exps,
        b.coeffs(),
        &b_exps,
        ctx.direction(),
    );
    Ok(len)
}

impl Mpoly {
    /// Returns `self + other` as a new polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`MpolyError::UnsupportedWidth`](crate::MpolyError::UnsupportedWidth)
    /// if the common field width needs more than one word.
    pub fn add(&self, other: &Self, ctx: &MpolyContext) -> Result<Self> {
        let mut sum = Mpoly::new();
        add_into(&mut sum, Operand::Poly(self), Operand::Poly(other), ctx)?;
        Ok(sum)
    }

    /// Sets `self = self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`MpolyError::UnsupportedWidth`](crate::MpolyError::UnsupportedWidth)
    /// if the common field width needs more than one word; `self` is then
    /// unchanged.
    pub fn add_assign(&mut self, other: &Self, ctx: &MpolyContext) -> Result<()> {
        add_into(self, Operand::Dest, Operand::Poly(other), ctx)
    }
}
