//! Arbitrary precision integer coefficients.
//!
//! `Integer` wraps `dashu::IBig`. Besides the usual operators it offers
//! the destination-passing primitives used when filling polynomial
//! coefficient buffers: a slot is overwritten in place rather than
//! rebuilt, and `clear` gives back any heap storage the slot held.

use dashu::base::BitTest;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Overwrites `self` with a copy of `src`, reusing its buffer when possible.
    pub fn set(&mut self, src: &Integer) {
        self.0.clone_from(&src.0);
    }

    /// Stores `a + b` into `self`.
    pub fn add_into(&mut self, a: &Integer, b: &Integer) {
        self.0 = &a.0 + &b.0;
    }

    /// Resets to zero, dropping any heap limbs.
    pub fn clear(&mut self) {
        self.0 = IBig::ZERO;
    }

    /// Returns the number of bits needed for the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> Integer {
        Integer::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn test_add_into() {
        let mut slot = Integer::new(99);
        slot.add_into(&Integer::new(10), &Integer::new(-3));
        assert_eq!(slot.to_i64(), Some(7));

        slot.add_into(&Integer::new(5), &Integer::new(-5));
        assert!(slot.is_zero());
    }

    #[test]
    fn test_set_and_clear() {
        let src = big("123456789012345678901234567890");
        let mut slot = Integer::new(1);
        slot.set(&src);
        assert_eq!(slot, src);

        slot.clear();
        assert!(slot.is_zero());
        assert_eq!(slot.bit_len(), 0);
    }

    #[test]
    fn test_large_cancellation() {
        let a = big("987654321098765432109876543210");
        let mut slot = Integer::zero();
        slot.add_into(&a, &-&a);
        assert!(slot.is_zero());
    }

    #[test]
    fn test_pow() {
        let x = Integer::new(-3);
        assert_eq!(x.pow(3).to_i64(), Some(-27));
        assert_eq!(x.pow(0), Integer::one());
    }
}
