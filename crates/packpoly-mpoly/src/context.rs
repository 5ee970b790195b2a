//! Polynomial context: variable count, ordering and storage direction.

use crate::error::{MpolyError, Result};
use crate::ordering::MonomialOrder;

/// Bits in one packed monomial word.
pub const WORD_BITS: u32 = u64::BITS;

/// Smallest field width a polynomial is packed with.
pub const MIN_BITS: u32 = 8;

/// Direction in which terms are stored.
///
/// Every polynomial sharing a context is sorted the same way, so the merge
/// only has to know which packed word comes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TermDirection {
    /// Leading (largest) monomial first.
    #[default]
    Descending,
    /// Smallest monomial first.
    Ascending,
}

impl TermDirection {
    /// Returns true if a term with packed monomial `a` is stored before one with `b`.
    #[inline]
    #[must_use]
    pub const fn precedes(self, a: u64, b: u64) -> bool {
        match self {
            TermDirection::Descending => a > b,
            TermDirection::Ascending => a < b,
        }
    }
}

/// Read-only description shared by all polynomials it is used with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MpolyContext {
    nvars: usize,
    order: MonomialOrder,
    direction: TermDirection,
}

impl MpolyContext {
    /// Creates a context storing terms leading monomial first.
    #[must_use]
    pub fn new(nvars: usize, order: MonomialOrder) -> Self {
        Self {
            nvars,
            order,
            direction: TermDirection::default(),
        }
    }

    /// Returns this context with a different storage direction.
    #[must_use]
    pub fn with_direction(mut self, direction: TermDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the storage direction.
    #[must_use]
    pub fn direction(&self) -> TermDirection {
        self.direction
    }

    /// Number of packed fields per monomial: one per variable, plus the
    /// total degree for graded orderings.
    #[must_use]
    pub fn fields(&self) -> usize {
        self.nvars + usize::from(self.order.is_degree())
    }

    /// Words needed to pack a monomial at `bits` bits per field.
    #[must_use]
    pub fn words_for_bits(&self, bits: u32) -> usize {
        let total = bits as usize * self.fields();
        if total == 0 {
            1
        } else {
            (total - 1) / WORD_BITS as usize + 1
        }
    }

    /// Checks that monomials packed at `bits` fit in one word.
    ///
    /// # Errors
    ///
    /// Returns [`MpolyError::UnsupportedWidth`] for multi-word packings and
    /// for widths outside `1..=WORD_BITS`.
    pub fn check_single_word(&self, bits: u32) -> Result<()> {
        let words = self.words_for_bits(bits);
        if bits == 0 || bits > WORD_BITS || words > 1 {
            return Err(MpolyError::UnsupportedWidth {
                bits,
                fields: self.fields(),
                words,
            });
        }
        Ok(())
    }
}
