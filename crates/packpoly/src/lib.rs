//! # packpoly
//!
//! Addition of sparse multivariate polynomials over Z whose monomials are
//! bit-packed into a single machine word.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: coefficients are `dashu` big integers
//! - **Packed Monomials**: plain `u64` comparison is the monomial order
//! - **Width Reconciliation**: operands packed at different widths are
//!   widened to a common one before merging
//! - **Aliasing**: the destination may be one of the addends
//!
//! ## Quick Start
//!
//! ```rust
//! use packpoly::prelude::*;
//!
//! let ctx = MpolyContext::new(2, MonomialOrder::Grevlex);
//! let a = Mpoly::from_terms(vec![(Integer::new(3), [2, 0]), (Integer::new(1), [0, 1])], &ctx)?;
//! let b = Mpoly::from_terms(vec![(Integer::new(-1), [0, 1]), (Integer::new(4), [0, 0])], &ctx)?;
//!
//! let mut sum = a.clone();
//! sum.add_assign(&b, &ctx)?;
//! assert_eq!(sum.display(&ctx).to_string(), "3*x^2 + 4");
//! # Ok::<(), packpoly::mpoly::MpolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use packpoly_integers as integers;
pub use packpoly_mpoly as mpoly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use packpoly_integers::Integer;
    pub use packpoly_mpoly::{
        add_into, MonomialOrder, Mpoly, MpolyContext, MpolyError, Operand, TermDirection,
    };
}
