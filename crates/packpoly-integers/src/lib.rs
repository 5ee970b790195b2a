//! # packpoly-integers
//!
//! Arbitrary precision integer coefficients for packpoly.
//!
//! This crate wraps `dashu` to provide the coefficient type of
//! sparse polynomials over Z, together with the in-place primitives
//! the term merge relies on (`set`, `add_into`, `clear`).
//!
//! ## Storage Notes
//!
//! - Values fitting in a double word are stored inline
//! - Larger values own a heap buffer that is released by `clear` or drop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
