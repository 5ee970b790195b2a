//! Errors raised by polynomial construction and arithmetic.

use thiserror::Error;

/// Errors that can occur while packing monomials or adding polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MpolyError {
    /// The packed monomial does not fit in a single machine word.
    #[error("monomials of {fields} fields at {bits} bits need {words} words; only single-word monomials are implemented")]
    UnsupportedWidth {
        /// Requested bits per field.
        bits: u32,
        /// Fields per monomial, including a degree field.
        fields: usize,
        /// Words the packing would need.
        words: usize,
    },

    /// A field value does not fit in the requested width.
    #[error("exponent field value {value} does not fit in {bits} bits")]
    ExponentOverflow {
        /// The offending field value.
        value: u64,
        /// Bits per field.
        bits: u32,
    },

    /// An exponent vector or evaluation point has the wrong length.
    #[error("expected {expected} variables, found {found}")]
    VariableCount {
        /// Variables in the context.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, MpolyError>;
