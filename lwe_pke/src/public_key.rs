use algebra::{
    random::sample_binary_values,
    reduce::{ReduceAdd, ReduceDotProduct},
};
use lattice::{Lwe, Matrix};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{encode_bit, Ciphertext, LweParameters, PkeError, PrivateKey};

/// The public key `(A, b)` with `b = A·s + e (mod q)`.
///
/// `A` is an **n×n** matrix and `b` a length-**n** vector, both over `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    a: Matrix<u64>,
    b: Vec<u64>,
}

impl PublicKey {
    /// Creates a new [`PublicKey`] from `A` and `b`.
    #[inline]
    pub fn new(a: Matrix<u64>, b: Vec<u64>) -> Self {
        Self { a, b }
    }

    /// Derives the public key of `secret_key`.
    pub(crate) fn generate<R>(secret_key: &PrivateKey, params: &LweParameters, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let dimension = params.dimension();
        let modulus = params.modulus();

        let a = Matrix::random(dimension, dimension, modulus, rng);
        let e = params
            .noise_distribution()
            .sample_reduced_values(modulus, dimension, rng);

        let mut b = a.mul_vector_reduce(secret_key.s(), modulus);
        b.iter_mut()
            .zip(e)
            .for_each(|(v, e)| *v = modulus.reduce_add(*v, e));

        Self { a, b }
    }

    /// Returns the matrix `A`.
    #[inline]
    pub fn a(&self) -> &Matrix<u64> {
        &self.a
    }

    /// Returns the vector `b`.
    #[inline]
    pub fn b(&self) -> &[u64] {
        &self.b
    }

    /// Returns the dimension of this [`PublicKey`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.b.len()
    }

    /// Checks that this key fits `params`.
    pub(crate) fn check(&self, params: &LweParameters) -> Result<(), PkeError> {
        let (rows, cols) = self.a.shape();
        params.check_dimension("public key A rows", rows)?;
        params.check_dimension("public key A columns", cols)?;
        params.check_dimension("public key b", self.b.len())?;
        params.check_reduced("public key A", self.a.as_slice())?;
        params.check_reduced("public key b", &self.b)
    }

    /// Encrypts a bit into a [`Ciphertext`].
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidInput`](crate::ErrorKind::InvalidInput) error
    /// if `bit` is not `0` or `1`, or if the key does not match `params`.
    pub fn encrypt<R>(
        &self,
        bit: u8,
        params: &LweParameters,
        rng: &mut R,
    ) -> Result<Ciphertext, PkeError>
    where
        R: Rng + CryptoRng,
    {
        let encoded = encode_bit(bit, params.modulus_value())?;
        self.check(params)?;
        Ok(self.encrypt_encoded(encoded, params, rng))
    }

    /// Encrypts an already encoded message with a key known to fit `params`.
    ///
    /// `u = Aᵗ·r + e1`, `v = b·r + e2 + encoded`, with `r` binary.
    pub(crate) fn encrypt_encoded<R>(
        &self,
        encoded: u64,
        params: &LweParameters,
        rng: &mut R,
    ) -> Ciphertext
    where
        R: Rng + CryptoRng,
    {
        let dimension = params.dimension();
        let modulus = params.modulus();
        let gaussian = params.noise_distribution();

        let r = sample_binary_values(dimension, rng);
        let e1 = gaussian.sample_reduced_values(modulus, dimension, rng);
        let e2 = gaussian.sample_reduced(modulus, rng);

        let u = self.a.transpose_mul_vector_reduce(&r, modulus);
        let v = modulus.reduce_dot_product(&self.b, &r);

        let noisy_message = Lwe::new(e1, modulus.reduce_add(e2, encoded));
        Lwe::new(u, v)
            .add_reduce_component_wise(&noisy_message, modulus)
            .into()
    }
}
