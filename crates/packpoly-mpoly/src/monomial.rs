//! Bit-packed single-word monomials.
//!
//! A monomial is stored as `fields` bit fields of `bits` bits each, most
//! significant field first:
//!
//! - graded orderings put the total degree in the top field;
//! - `Lex`/`Grlex` then store x0, x1, ..., x(n-1);
//! - `Grevlex` stores x(n-1), ..., x0 as field complements `mask - e`,
//!   so a smaller trailing exponent packs to a larger word.
//!
//! With this layout plain `u64` comparison of two words packed at the same
//! width is the monomial ordering of the context.

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::debug;

use crate::context::{MpolyContext, MIN_BITS, WORD_BITS};
use crate::error::{MpolyError, Result};

/// Unpacked exponent vector, one entry per variable.
pub type Exponents = SmallVec<[u64; 8]>;

/// Mask for a single field of `bits` bits.
#[inline]
#[must_use]
pub const fn field_mask(bits: u32) -> u64 {
    if bits >= WORD_BITS {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Number of bits needed to hold `value`.
#[inline]
#[must_use]
pub const fn bits_required(value: u64) -> u32 {
    WORD_BITS - value.leading_zeros()
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn field_shift(fields: usize, f: usize, bits: u32) -> u32 {
    (fields - 1 - f) as u32 * bits
}

fn check_fits(value: u64, bits: u32) -> Result<u64> {
    if value > field_mask(bits) {
        return Err(MpolyError::ExponentOverflow { value, bits });
    }
    Ok(value)
}

fn total_degree(exps: &[u64]) -> u128 {
    exps.iter().map(|&e| u128::from(e)).sum()
}

/// Packs an exponent vector into one word at `bits` bits per field.
///
/// # Errors
///
/// Returns [`MpolyError::VariableCount`] if `exps` does not have one entry
/// per variable, [`MpolyError::UnsupportedWidth`] if the packing needs more
/// than one word, and [`MpolyError::ExponentOverflow`] if an exponent or the
/// total degree does not fit in a field.
pub fn pack(exps: &[u64], bits: u32, ctx: &MpolyContext) -> Result<u64> {
    if exps.len() != ctx.nvars() {
        return Err(MpolyError::VariableCount {
            expected: ctx.nvars(),
            found: exps.len(),
        });
    }
    ctx.check_single_word(bits)?;

    let mask = field_mask(bits);
    let mut values: Exponents = SmallVec::with_capacity(ctx.fields());

    if ctx.order().is_degree() {
        let degree = u64::try_from(total_degree(exps)).unwrap_or(u64::MAX);
        values.push(check_fits(degree, bits)?);
    }
    if ctx.order().is_reversed() {
        for &e in exps.iter().rev() {
            values.push(mask - check_fits(e, bits)?);
        }
    } else {
        for &e in exps {
            values.push(check_fits(e, bits)?);
        }
    }

    let fields = values.len();
    Ok(values
        .iter()
        .enumerate()
        .fold(0, |word, (f, &v)| word | (v << field_shift(fields, f, bits))))
}

/// Unpacks a word packed at `bits` bits per field.
#[must_use]
pub fn unpack(word: u64, bits: u32, ctx: &MpolyContext) -> Exponents {
    debug_assert_eq!(ctx.words_for_bits(bits), 1);
    let fields = ctx.fields();
    let n = ctx.nvars();
    let offset = fields - n;
    let mask = field_mask(bits);
    let field = |f: usize| (word >> field_shift(fields, f, bits)) & mask;

    if ctx.order().is_reversed() {
        (0..n).map(|i| mask - field(offset + n - 1 - i)).collect()
    } else {
        (0..n).map(|i| field(offset + i)).collect()
    }
}

/// Smallest field width, at least [`MIN_BITS`], holding every field of `exps`.
///
/// The result may exceed [`WORD_BITS`] when the total degree overflows a
/// word; packing at that width is then refused.
#[must_use]
pub fn bits_for(exps: &[u64], ctx: &MpolyContext) -> u32 {
    let mut bits = exps.iter().map(|&e| bits_required(e)).max().unwrap_or(0);
    if ctx.order().is_degree() {
        let degree = total_degree(exps);
        bits = bits.max(u128::BITS - degree.leading_zeros());
    }
    bits.max(MIN_BITS)
}

fn repack_word(word: u64, old_bits: u32, new_bits: u32, ctx: &MpolyContext) -> u64 {
    let fields = ctx.fields();
    let offset = fields - ctx.nvars();
    let reversed = ctx.order().is_reversed();
    let old_mask = field_mask(old_bits);
    let new_mask = field_mask(new_bits);

    let mut out = 0;
    for f in 0..fields {
        let mut v = (word >> field_shift(fields, f, old_bits)) & old_mask;
        if reversed && f >= offset {
            v = new_mask - (old_mask - v);
        }
        out |= v << field_shift(fields, f, new_bits);
    }
    out
}

/// Re-encodes a monomial array from `old_bits` to `new_bits` per field.
///
/// Returns the input unchanged when the widths match; otherwise a freshly
/// allocated array that is released when the `Cow` drops. Only widening is
/// supported, and `new_bits` must keep the packing within one word.
#[must_use]
pub fn repack_monomials<'a>(
    exps: &'a [u64],
    old_bits: u32,
    new_bits: u32,
    ctx: &MpolyContext,
) -> Cow<'a, [u64]> {
    if old_bits == new_bits {
        return Cow::Borrowed(exps);
    }
    debug_assert!(old_bits < new_bits, "monomials can only be widened");
    debug_assert_eq!(ctx.words_for_bits(new_bits), 1);

    debug!(
        terms = exps.len(),
        old_bits, new_bits, "repacking monomials"
    );
    Cow::Owned(
        exps.iter()
            .map(|&w| repack_word(w, old_bits, new_bits, ctx))
            .collect(),
    )
}

/// Formats an exponent vector as a product of powers.
#[must_use]
pub fn format_monomial(exps: &[u64]) -> String {
    let vars = ['x', 'y', 'z', 'w', 'u', 'v'];
    let nvars = exps.len();
    let mut parts = Vec::new();

    for (i, &e) in exps.iter().enumerate() {
        if e == 0 {
            continue;
        }
        let name = if nvars <= vars.len() {
            vars[i].to_string()
        } else {
            format!("x{i}")
        };
        if e == 1 {
            parts.push(name);
        } else {
            parts.push(format!("{name}^{e}"));
        }
    }

    if parts.is_empty() {
        "1".to_string()
    } else {
        parts.join("*")
    }
}
