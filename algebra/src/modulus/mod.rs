//! Defines the prime modulus used for all `Z_q` arithmetic.

use crate::{arith::is_prime, reduce::Modulus, AlgebraError};

mod ops;

/// A prime modulus `q` over `u64` values.
///
/// Products are computed with a `u128` widening multiplication and then
/// reduced, so any `q < 2^63` works and sums of two residues never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeModulus {
    value: u64,
}

impl PrimeModulus {
    /// The largest supported modulus value.
    pub const MAX_VALUE: u64 = (1 << 63) - 1;

    /// Creates a new [`PrimeModulus`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ModulusOutOfRange`] if `value` is smaller than `2`
    /// or larger than [`PrimeModulus::MAX_VALUE`], and
    /// [`AlgebraError::ModulusNotPrime`] if `value` is composite.
    pub fn new(value: u64) -> Result<Self, AlgebraError> {
        if !(2..=Self::MAX_VALUE).contains(&value) {
            return Err(AlgebraError::ModulusOutOfRange {
                value,
                max: Self::MAX_VALUE,
            });
        }
        if !is_prime(value) {
            return Err(AlgebraError::ModulusNotPrime(value));
        }
        Ok(Self { value })
    }

    /// Returns the value of this [`PrimeModulus`].
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl Modulus<u64> for PrimeModulus {
    #[inline]
    fn value(self) -> u64 {
        self.value
    }

    #[inline]
    fn modulus_minus_one(self) -> u64 {
        self.value - 1
    }
}
