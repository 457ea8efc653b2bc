use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::{
    codec, Ciphertext, KeyGen, LweParameters, PkeError, PrivateKey, PublicKey, SecurityParameters,
};

/// An encryption engine bound to one checked parameter set.
///
/// The engine holds no mutable state. All randomness comes from the `rng`
/// handed to each call, so one engine can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    params: LweParameters,
}

impl Engine {
    /// Creates a new [`Engine`].
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Config`](crate::ErrorKind::Config) error
    /// if `params` can not be used, see [`LweParameters::new`].
    pub fn new(params: SecurityParameters) -> Result<Self, PkeError> {
        let params = LweParameters::new(params)?;
        debug!(
            dimension = params.dimension(),
            modulus = params.modulus_value(),
            noise_standard_deviation = params.noise_distribution().std_dev(),
            "engine ready"
        );
        Ok(Self { params })
    }

    /// Creates a new [`Engine`] with dimension `n`, modulus `q` and noise
    /// standard deviation `sigma`, using the default secret key distribution.
    #[inline]
    pub fn from_values(n: usize, q: u64, sigma: f64) -> Result<Self, PkeError> {
        Self::new(SecurityParameters::new(n, q, sigma))
    }

    /// Returns the parameters of this [`Engine`].
    #[inline]
    pub fn params(&self) -> &LweParameters {
        &self.params
    }

    /// Generates a fresh key pair.
    #[inline]
    pub fn generate_keypair<R>(&self, rng: &mut R) -> (PublicKey, PrivateKey)
    where
        R: Rng + CryptoRng,
    {
        KeyGen::generate_keypair(&self.params, rng)
    }

    /// Encrypts a single bit.
    #[inline]
    pub fn encrypt<R>(
        &self,
        bit: u8,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<Ciphertext, PkeError>
    where
        R: Rng + CryptoRng,
    {
        public_key.encrypt(bit, &self.params, rng)
    }

    /// Decrypts a single bit.
    #[inline]
    pub fn decrypt(&self, ciphertext: &Ciphertext, secret_key: &PrivateKey) -> Result<u8, PkeError> {
        secret_key.decrypt(ciphertext, &self.params)
    }

    /// Decrypts a single bit and reports the magnitude of its noise.
    #[inline]
    pub fn decrypt_with_noise(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &PrivateKey,
    ) -> Result<(u8, u64), PkeError> {
        secret_key.decrypt_with_noise(ciphertext, &self.params)
    }

    /// Encrypts a byte sequence, eight ciphertexts per byte,
    /// least-significant bit first.
    #[inline]
    pub fn encrypt_bytes<R>(
        &self,
        data: &[u8],
        public_key: &PublicKey,
        rng: &mut R,
    ) -> Result<Vec<Ciphertext>, PkeError>
    where
        R: Rng + CryptoRng,
    {
        codec::encrypt_bytes(data, public_key, &self.params, rng)
    }

    /// Decrypts the output of [`Engine::encrypt_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`PkeError::CiphertextCountUnValid`] if the number of ciphertexts
    /// is not a multiple of [`BITS_PER_BYTE`](crate::BITS_PER_BYTE).
    #[inline]
    pub fn decrypt_bytes(
        &self,
        ciphertexts: &[Ciphertext],
        secret_key: &PrivateKey,
    ) -> Result<Vec<u8>, PkeError> {
        codec::decrypt_bytes(ciphertexts, secret_key, &self.params)
    }
}
