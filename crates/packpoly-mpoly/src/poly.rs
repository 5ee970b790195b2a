//! Term storage for sparse polynomials over Z.
//!
//! A polynomial owns two parallel buffers, coefficients and packed
//! monomials, with an allocated slot count that may exceed its length.
//! Coefficient slots past the length are always zero, so shrinking a
//! polynomial never keeps big-integer limbs alive.

use std::fmt;

use num_traits::Zero;
use packpoly_integers::Integer;

use crate::context::{MpolyContext, TermDirection, MIN_BITS};
use crate::error::{MpolyError, Result};
use crate::monomial::{bits_for, format_monomial, pack, repack_monomials, unpack, Exponents};

/// A sparse multivariate polynomial with integer coefficients.
///
/// Terms are strictly ordered by packed monomial in the direction of the
/// context they were built with, and no stored coefficient is zero.
#[derive(Clone, Debug)]
pub struct Mpoly {
    /// Coefficient slots; `coeffs.len()` is the allocated capacity.
    coeffs: Vec<Integer>,
    /// Packed monomial slots, same capacity as `coeffs`.
    exps: Vec<u64>,
    /// Number of live terms.
    length: usize,
    /// Bits per packed field.
    bits: u32,
}

impl Default for Mpoly {
    fn default() -> Self {
        Self::new()
    }
}

impl Mpoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates the zero polynomial with room for `capacity` terms.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coeffs: vec![Integer::zero(); capacity],
            exps: vec![0; capacity],
            length: 0,
            bits: MIN_BITS,
        }
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs, packed at
    /// the smallest width that holds every monomial.
    ///
    /// Terms may come in any order; equal monomials are combined and zero
    /// coefficients dropped.
    ///
    /// # Errors
    ///
    /// Fails if an exponent vector has the wrong length or the monomials do
    /// not fit in one word.
    pub fn from_terms<I, E>(terms: I, ctx: &MpolyContext) -> Result<Self>
    where
        I: IntoIterator<Item = (Integer, E)>,
        E: AsRef<[u64]>,
    {
        let terms: Vec<(Integer, E)> = terms.into_iter().collect();
        let bits = terms
            .iter()
            .map(|(_, e)| bits_for(e.as_ref(), ctx))
            .max()
            .unwrap_or(MIN_BITS);
        Self::from_terms_with_bits(terms, bits, ctx)
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs packed at
    /// exactly `bits` bits per field.
    ///
    /// # Errors
    ///
    /// Fails if an exponent vector has the wrong length, an exponent does not
    /// fit in `bits`, or the packing needs more than one word.
    pub fn from_terms_with_bits<I, E>(terms: I, bits: u32, ctx: &MpolyContext) -> Result<Self>
    where
        I: IntoIterator<Item = (Integer, E)>,
        E: AsRef<[u64]>,
    {
        ctx.check_single_word(bits)?;

        let mut packed = terms
            .into_iter()
            .map(|(c, e)| Ok((pack(e.as_ref(), bits, ctx)?, c)))
            .collect::<Result<Vec<(u64, Integer)>>>()?;

        match ctx.direction() {
            TermDirection::Descending => packed.sort_by(|a, b| b.0.cmp(&a.0)),
            TermDirection::Ascending => packed.sort_by(|a, b| a.0.cmp(&b.0)),
        }

        // Combine like terms
        let mut merged: Vec<(u64, Integer)> = Vec::with_capacity(packed.len());
        for (word, c) in packed {
            if let Some((last, acc)) = merged.last_mut() {
                if *last == word {
                    *acc = &*acc + &c;
                    continue;
                }
            }
            merged.push((word, c));
        }
        merged.retain(|(_, c)| !c.is_zero());

        let length = merged.len();
        let (exps, coeffs): (Vec<u64>, Vec<Integer>) = merged.into_iter().unzip();
        Ok(Self {
            coeffs,
            exps,
            length,
            bits,
        })
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of allocated term slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the bits per packed field.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns the live coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs[..self.length]
    }

    /// Returns the live packed monomials.
    #[must_use]
    pub fn exps(&self) -> &[u64] {
        &self.exps[..self.length]
    }

    /// Ensures at least `len` term slots are allocated.
    ///
    /// Grows geometrically; new slots hold zero.
    pub fn fit_length(&mut self, len: usize) {
        let capacity = self.capacity();
        if len > capacity {
            let new_capacity = len.max(2 * capacity);
            self.coeffs.resize(new_capacity, Integer::zero());
            self.exps.resize(new_capacity, 0);
        }
    }

    /// Ensures monomials are packed with at least `bits` bits per field,
    /// re-packing the live terms if the width grows.
    ///
    /// # Errors
    ///
    /// Returns [`MpolyError::UnsupportedWidth`] if `bits` needs more than one
    /// word; the polynomial is unchanged in that case.
    ///
    /// Addition does not call this: its destination's old terms are
    /// discarded, so it only takes the new width.
    pub fn fit_bits(&mut self, bits: u32, ctx: &MpolyContext) -> Result<()> {
        if bits <= self.bits {
            return Ok(());
        }
        ctx.check_single_word(bits)?;

        let repacked = repack_monomials(self.exps(), self.bits, bits, ctx).into_owned();
        self.exps[..self.length].copy_from_slice(&repacked);
        self.bits = bits;
        Ok(())
    }

    /// Sets the width of a polynomial whose monomials are about to be
    /// overwritten.
    pub(crate) fn reset_bits(&mut self, bits: u32) {
        self.bits = bits;
    }

    /// Mutable views of every allocated slot, for writers that fill the
    /// buffers before fixing the length.
    pub(crate) fn slots_mut(&mut self) -> (&mut [Integer], &mut [u64]) {
        (&mut self.coeffs, &mut self.exps)
    }

    /// Sets the number of live terms.
    ///
    /// Coefficients between the new and the old length are cleared so
    /// their storage is released.
    pub fn set_length(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        if len < self.length {
            for c in &mut self.coeffs[len..self.length] {
                c.clear();
            }
        }
        self.length = len;
    }

    /// Swaps the storage of two polynomials.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns the coefficient and unpacked exponents of term `i`.
    #[must_use]
    pub fn term(&self, i: usize, ctx: &MpolyContext) -> Option<(&Integer, Exponents)> {
        (i < self.length).then(|| (&self.coeffs[i], unpack(self.exps[i], self.bits, ctx)))
    }

    /// Iterates over `(coefficient, exponents)` in storage order.
    pub fn terms<'a>(
        &'a self,
        ctx: &'a MpolyContext,
    ) -> impl Iterator<Item = (&'a Integer, Exponents)> + 'a {
        self.coeffs()
            .iter()
            .zip(self.exps())
            .map(move |(c, &w)| (c, unpack(w, self.bits, ctx)))
    }

    /// Evaluates the polynomial at `point`, one value per variable.
    ///
    /// # Errors
    ///
    /// Returns [`MpolyError::VariableCount`] if `point` has the wrong length.
    #[allow(clippy::cast_possible_truncation)]
    pub fn evaluate(&self, point: &[Integer], ctx: &MpolyContext) -> Result<Integer> {
        if point.len() != ctx.nvars() {
            return Err(MpolyError::VariableCount {
                expected: ctx.nvars(),
                found: point.len(),
            });
        }

        let mut sum = Integer::zero();
        for (c, exps) in self.terms(ctx) {
            let mut term = c.clone();
            for (x, &e) in point.iter().zip(exps.iter()) {
                term = &term * &x.pow(e as usize);
            }
            sum = sum + term;
        }
        Ok(sum)
    }

    /// Checks the storage invariants: strictly ordered monomials, no zero
    /// coefficients, and zeroed slots past the length.
    #[must_use]
    pub fn is_canonical(&self, ctx: &MpolyContext) -> bool {
        let direction = ctx.direction();
        ctx.check_single_word(self.bits).is_ok()
            && self.coeffs.len() == self.exps.len()
            && self.length <= self.capacity()
            && self.exps().windows(2).all(|w| direction.precedes(w[0], w[1]))
            && self.coeffs().iter().all(|c| !c.is_zero())
            && self.coeffs[self.length..].iter().all(Zero::is_zero)
    }

    /// Compares two polynomials term by term, independent of field width.
    #[must_use]
    pub fn equal(&self, other: &Self, ctx: &MpolyContext) -> bool {
        if self.length != other.length || self.coeffs() != other.coeffs() {
            return false;
        }
        let bits = self.bits.max(other.bits);
        repack_monomials(self.exps(), self.bits, bits, ctx)
            == repack_monomials(other.exps(), other.bits, bits, ctx)
    }

    /// Returns a value that formats the polynomial with the variable
    /// names x, y, z, ...
    #[must_use]
    pub fn display<'a>(&'a self, ctx: &'a MpolyContext) -> MpolyDisplay<'a> {
        MpolyDisplay { poly: self, ctx }
    }
}

impl PartialEq for Mpoly {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.coeffs() == other.coeffs() && self.exps() == other.exps()
    }
}

impl Eq for Mpoly {}

/// Display adapter returned by [`Mpoly::display`].
pub struct MpolyDisplay<'a> {
    poly: &'a Mpoly,
    ctx: &'a MpolyContext,
}

impl fmt::Display for MpolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .poly
            .terms(self.ctx)
            .map(|(c, exps)| {
                let mon = format_monomial(&exps);
                if mon == "1" {
                    format!("{c}")
                } else {
                    format!("{c}*{mon}")
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
