use std::fmt;

use algebra::{
    random::{sample_binary_values, sample_ternary_values},
    reduce::{Modulus, ReduceSub},
};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{decode_bit, encode_bit, Ciphertext, LweParameters, PkeError};

/// The distribution type of the LWE Secret Key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LweSecretKeyType {
    /// Binary SecretKey Distribution.
    Binary,
    /// Ternary SecretKey Distribution.
    #[default]
    Ternary,
}

/// The private key `s`, a length-**n** vector over `[0, q)`.
///
/// Only used for decryption.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    s: Vec<u64>,
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("dimension", &self.s.len())
            .finish_non_exhaustive()
    }
}

impl PrivateKey {
    /// Creates a new [`PrivateKey`] from the secret vector.
    #[inline]
    pub fn new(s: Vec<u64>) -> Self {
        Self { s }
    }

    /// Samples a fresh secret vector according to `params`.
    pub(crate) fn generate<R>(params: &LweParameters, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let dimension = params.dimension();
        let s = match params.secret_key_type() {
            LweSecretKeyType::Binary => sample_binary_values(dimension, rng),
            LweSecretKeyType::Ternary => {
                sample_ternary_values(params.modulus().modulus_minus_one(), dimension, rng)
            }
        };
        Self { s }
    }

    /// Returns the secret vector `s`.
    #[inline]
    pub fn s(&self) -> &[u64] {
        &self.s
    }

    /// Returns the dimension of this [`PrivateKey`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.s.len()
    }

    /// Checks that this key fits `params`.
    pub(crate) fn check(&self, params: &LweParameters) -> Result<(), PkeError> {
        params.check_dimension("private key s", self.s.len())?;
        params.check_reduced("private key s", &self.s)
    }

    /// Computes the phase `v - s·u (mod q)` of `ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput) error
    /// if the key or the ciphertext does not match `params`.
    pub fn phase(&self, ciphertext: &Ciphertext, params: &LweParameters) -> Result<u64, PkeError> {
        self.check(params)?;
        ciphertext.check(params)?;
        Ok(ciphertext.as_lwe().phase(&self.s, params.modulus()))
    }

    /// Decrypts the [`Ciphertext`] back to a bit.
    ///
    /// A ciphertext whose noise exceeds the budget decrypts to the wrong bit,
    /// this is not detected.
    #[inline]
    pub fn decrypt(&self, ciphertext: &Ciphertext, params: &LweParameters) -> Result<u8, PkeError> {
        let raw = self.phase(ciphertext, params)?;
        Ok(decode_bit(raw, params.modulus_value()))
    }

    /// Decrypts the [`Ciphertext`] back to a bit and the noise magnitude.
    ///
    /// The noise is the distance between the phase and the encoding of the decoded bit.
    pub fn decrypt_with_noise(
        &self,
        ciphertext: &Ciphertext,
        params: &LweParameters,
    ) -> Result<(u8, u64), PkeError> {
        let modulus = params.modulus();
        let q = params.modulus_value();

        let raw = self.phase(ciphertext, params)?;
        let bit = decode_bit(raw, q);
        let fresh = encode_bit(bit, q)?;

        let noise = modulus
            .reduce_sub(raw, fresh)
            .min(modulus.reduce_sub(fresh, raw));
        Ok((bit, noise))
    }
}
