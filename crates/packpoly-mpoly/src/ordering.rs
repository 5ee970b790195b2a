//! Monomial orderings.
//!
//! An ordering is consumed in two ways: as the `deg`/`rev` flags that
//! pick the packing layout, and as a reference comparison on unpacked
//! exponent vectors which the packed `u64` order must agree with.

use std::cmp::Ordering;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then the last variable with the
    /// smaller exponent wins.
    #[default]
    Grevlex,
}

impl MonomialOrder {
    /// Returns true if the total degree is compared first.
    #[must_use]
    pub const fn is_degree(&self) -> bool {
        matches!(self, MonomialOrder::Grlex | MonomialOrder::Grevlex)
    }

    /// Returns true if variables are compared last to first with reversed sense.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        matches!(self, MonomialOrder::Grevlex)
    }

    /// Compares two exponent vectors according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &[u64], b: &[u64]) -> Ordering {
        debug_assert_eq!(a.len(), b.len());

        if self.is_degree() {
            let da: u128 = a.iter().map(|&e| u128::from(e)).sum();
            let db: u128 = b.iter().map(|&e| u128::from(e)).sum();
            match da.cmp(&db) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        if self.is_reversed() {
            for (ea, eb) in a.iter().zip(b).rev() {
                match eb.cmp(ea) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        } else {
            a.cmp(b)
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
