//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when fails to generate the distribution.
    #[error("Fail to generate the desired distribution.")]
    DistributionErr,
    /// Error that occurs when the given modulus value is not a prime.
    #[error("Modulus {0} is not a prime!")]
    ModulusNotPrime(
        /// The rejected modulus value.
        u64,
    ),
    /// Error that occurs when the given modulus value is out of the supported range.
    #[error("Modulus {value} is out of range, it should be in [2, {max}]!")]
    ModulusOutOfRange {
        /// The rejected modulus value.
        value: u64,
        /// The largest supported modulus value.
        max: u64,
    },
}
