use rand::{CryptoRng, Rng};
use rayon::prelude::*;
use tracing::trace;

use crate::{encode_bit, Ciphertext, LweParameters, PkeError, PrivateKey, PublicKey};

/// Number of ciphertexts that make up one encrypted byte.
pub const BITS_PER_BYTE: usize = 8;

/// Encrypts every byte of `data` as eight bit ciphertexts, least-significant bit first.
pub(crate) fn encrypt_bytes<R>(
    data: &[u8],
    public_key: &PublicKey,
    params: &LweParameters,
    rng: &mut R,
) -> Result<Vec<Ciphertext>, PkeError>
where
    R: Rng + CryptoRng,
{
    public_key.check(params)?;
    let q = params.modulus_value();

    let mut ciphertexts = Vec::with_capacity(data.len() * BITS_PER_BYTE);
    for &byte in data {
        for i in 0..BITS_PER_BYTE {
            let encoded = encode_bit((byte >> i) & 1, q)?;
            ciphertexts.push(public_key.encrypt_encoded(encoded, params, rng));
        }
    }

    trace!(
        bytes = data.len(),
        ciphertexts = ciphertexts.len(),
        "encrypted bytes"
    );
    Ok(ciphertexts)
}

/// Decrypts consecutive groups of eight ciphertexts back to bytes.
///
/// The groups are independent and decrypted in parallel.
pub(crate) fn decrypt_bytes(
    ciphertexts: &[Ciphertext],
    secret_key: &PrivateKey,
    params: &LweParameters,
) -> Result<Vec<u8>, PkeError> {
    if ciphertexts.len() % BITS_PER_BYTE != 0 {
        return Err(PkeError::CiphertextCountUnValid(ciphertexts.len()));
    }
    secret_key.check(params)?;

    let bytes = ciphertexts
        .par_chunks_exact(BITS_PER_BYTE)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .try_fold(0u8, |byte, (i, c)| {
                    Ok::<u8, PkeError>(byte | (secret_key.decrypt(c, params)? << i))
                })
        })
        .collect::<Result<Vec<u8>, PkeError>>()?;

    trace!(
        ciphertexts = ciphertexts.len(),
        bytes = bytes.len(),
        "decrypted bytes"
    );
    Ok(bytes)
}
