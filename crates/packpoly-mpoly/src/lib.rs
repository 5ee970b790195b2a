//! # packpoly-mpoly
//!
//! Sparse multivariate polynomials over Z with bit-packed monomials.
//!
//! This crate provides:
//! - A polynomial context (variable count, monomial ordering, storage direction)
//! - Single-word packed monomials whose `u64` order is the monomial order
//! - Re-packing of monomial arrays between field widths
//! - Term storage with explicit capacity, length and field width
//! - Linear-time merge addition with coefficient cancellation
//!
//! ## Addition
//!
//! [`add_into`] reconciles the operands' field widths, then merges the two
//! term sequences into the destination. The destination may be one of the
//! operands ([`Operand::Dest`]); the sum is then built in a temporary and
//! swapped in. Monomials wider than one word are refused with
//! [`MpolyError::UnsupportedWidth`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod add;
pub mod context;
pub mod error;
pub mod merge;
pub mod monomial;
pub mod ordering;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use add::{add_into, Operand};
pub use context::{MpolyContext, TermDirection, MIN_BITS, WORD_BITS};
pub use error::MpolyError;
pub use merge::merge_add;
pub use monomial::{repack_monomials, Exponents};
pub use ordering::MonomialOrder;
pub use poly::Mpoly;
