use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::{LweParameters, PrivateKey, PublicKey};

/// Struct of key generation.
pub struct KeyGen;

impl KeyGen {
    /// Generates a fresh key pair.
    ///
    /// The secret `s` follows the parameters' secret key distribution,
    /// `A` is uniform over `[0, q)` and `b = A·s + e (mod q)` with gaussian `e`.
    #[inline]
    pub fn generate_keypair<R>(params: &LweParameters, rng: &mut R) -> (PublicKey, PrivateKey)
    where
        R: Rng + CryptoRng,
    {
        let secret_key = PrivateKey::generate(params, rng);
        let public_key = PublicKey::generate(&secret_key, params, rng);
        debug!(
            dimension = params.dimension(),
            modulus = params.modulus_value(),
            secret_key_type = ?params.secret_key_type(),
            "generated key pair"
        );
        (public_key, secret_key)
    }
}
