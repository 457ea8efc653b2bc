//! The parameters of the LWE public-key encryption scheme.

use algebra::{modulus::PrimeModulus, random::DiscreteGaussian};
use serde::{Deserialize, Serialize};

use crate::{LweSecretKeyType, PkeError};

mod constants;

pub use constants::*;

/// The parameters of the encryption scheme as supplied by the user.
///
/// This type is used for setting some default Parameters,
/// it is checked by [`LweParameters::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityParameters {
    /// **LWE** vector dimension, refers to **n** in the paper.
    pub dimension: usize,
    /// **LWE** cipher modulus, refers to **q** in the paper. Must be a prime larger than **n**.
    pub modulus: u64,
    /// **LWE** noise error's standard deviation, refers to **σ** in the paper.
    pub noise_standard_deviation: f64,
    /// The distribution type of the LWE Secret Key.
    pub secret_key_type: LweSecretKeyType,
}

impl SecurityParameters {
    /// Creates a new [`SecurityParameters`] with the default secret key distribution.
    #[inline]
    pub const fn new(dimension: usize, modulus: u64, noise_standard_deviation: f64) -> Self {
        Self {
            dimension,
            modulus,
            noise_standard_deviation,
            secret_key_type: LweSecretKeyType::Ternary,
        }
    }

    /// Returns a copy of these parameters using `secret_key_type`.
    #[inline]
    pub const fn with_secret_key_type(self, secret_key_type: LweSecretKeyType) -> Self {
        Self {
            secret_key_type,
            ..self
        }
    }
}

/// The smallest modulus with a non-empty decoding interval for bit `0`, `⌊q/4⌋ ≥ 1`.
pub const MIN_MODULUS: u64 = 4;

/// Checked parameters shared by every operation of one engine.
#[derive(Debug, Clone, Copy)]
pub struct LweParameters {
    dimension: usize,
    modulus: PrimeModulus,
    noise_distribution: DiscreteGaussian,
    secret_key_type: LweSecretKeyType,
    noise_standard_deviation: f64,
}

impl LweParameters {
    /// Checks `params` and creates a new [`LweParameters`].
    ///
    /// # Errors
    ///
    /// - [`PkeError::LweDimensionUnValid`] if `n == 0`.
    /// - [`PkeError::NoiseStdDevUnValid`] if `σ` is not finite and positive.
    /// - [`PkeError::ModulusTooSmall`] if `q <= n`.
    /// - [`PkeError::ModulusTooSmallToDecode`] if `q` is below [`MIN_MODULUS`].
    /// - [`PkeError::ModulusUnValid`] if `q` is not a prime below `2^63`.
    pub fn new(params: SecurityParameters) -> Result<Self, PkeError> {
        let SecurityParameters {
            dimension,
            modulus,
            noise_standard_deviation,
            secret_key_type,
        } = params;

        if dimension == 0 {
            return Err(PkeError::LweDimensionUnValid(dimension));
        }

        if !noise_standard_deviation.is_finite() || noise_standard_deviation <= 0.0 {
            return Err(PkeError::NoiseStdDevUnValid(noise_standard_deviation));
        }

        if modulus <= dimension as u64 {
            return Err(PkeError::ModulusTooSmall { modulus, dimension });
        }

        if modulus < MIN_MODULUS {
            return Err(PkeError::ModulusTooSmallToDecode {
                modulus,
                min: MIN_MODULUS,
            });
        }

        let modulus = PrimeModulus::new(modulus)?;
        let noise_distribution = DiscreteGaussian::new(0.0, noise_standard_deviation)
            .map_err(|_| PkeError::NoiseStdDevUnValid(noise_standard_deviation))?;

        Ok(Self {
            dimension,
            modulus,
            noise_distribution,
            secret_key_type,
            noise_standard_deviation,
        })
    }

    /// Returns the dimension **n**.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the modulus **q**.
    #[inline]
    pub fn modulus(&self) -> PrimeModulus {
        self.modulus
    }

    /// Returns the value of the modulus **q**.
    #[inline]
    pub fn modulus_value(&self) -> u64 {
        self.modulus.value()
    }

    /// Returns the noise distribution.
    #[inline]
    pub fn noise_distribution(&self) -> DiscreteGaussian {
        self.noise_distribution
    }

    /// Returns the distribution type of the secret key.
    #[inline]
    pub fn secret_key_type(&self) -> LweSecretKeyType {
        self.secret_key_type
    }

    /// Returns the encoding of bit `1`, `⌊q/2⌋`.
    #[inline]
    pub fn delta(&self) -> u64 {
        self.modulus_value() / 2
    }

    /// Returns `⌊q/4⌋`.
    ///
    /// A ciphertext decrypts correctly while the magnitude of its accumulated noise
    /// stays below this value.
    #[inline]
    pub fn noise_bound(&self) -> u64 {
        self.modulus_value() / 4
    }

    /// Returns the parameters these were checked from.
    #[inline]
    pub fn security_parameters(&self) -> SecurityParameters {
        SecurityParameters {
            dimension: self.dimension,
            modulus: self.modulus_value(),
            noise_standard_deviation: self.noise_standard_deviation,
            secret_key_type: self.secret_key_type,
        }
    }

    /// Checks that `found` equals the dimension.
    #[inline]
    pub(crate) fn check_dimension(&self, what: &'static str, found: usize) -> Result<(), PkeError> {
        if found != self.dimension {
            return Err(PkeError::DimensionMismatch {
                what,
                expected: self.dimension,
                found,
            });
        }
        Ok(())
    }

    /// Checks that every value lies in `[0, q)`.
    #[inline]
    pub(crate) fn check_reduced(&self, what: &'static str, values: &[u64]) -> Result<(), PkeError> {
        let modulus = self.modulus_value();
        match values.iter().find(|&&v| v >= modulus) {
            Some(&value) => Err(PkeError::ValueOutOfRange {
                what,
                value,
                modulus,
            }),
            None => Ok(()),
        }
    }
}

/// Encodes a bit as `bit · ⌊q/2⌋`.
///
/// # Errors
///
/// Returns [`PkeError::InvalidBit`] if `bit` is neither `0` nor `1`.
#[inline]
pub fn encode_bit(bit: u8, q: u64) -> Result<u64, PkeError> {
    match bit {
        0 => Ok(0),
        1 => Ok(q / 2),
        _ => Err(PkeError::InvalidBit(bit)),
    }
}

/// Decodes a phase `raw ∈ [0, q)` back to a bit.
///
/// With integer division, `raw < ⌊q/4⌋` or `raw > ⌊3q/4⌋` decodes to `0`,
/// every `raw` in `[⌊q/4⌋, ⌊3q/4⌋]` decodes to `1`.
/// For `q` not divisible by `4` the two sides tolerate slightly different noise.
#[inline]
pub fn decode_bit(raw: u64, q: u64) -> u8 {
    let lower = q / 4;
    let upper = (3 * q as u128 / 4) as u64;
    if raw < lower || raw > upper {
        0
    } else {
        1
    }
}
