use lattice::Lwe;
use serde::{Deserialize, Serialize};

use crate::{LweParameters, PkeError};

/// The encryption `(u, v)` of a single bit.
///
/// `u` is a length-**n** vector and `v` a scalar, both over `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext {
    inner: Lwe<u64>,
}

impl Ciphertext {
    /// Creates a new [`Ciphertext`] from `u` and `v`.
    #[inline]
    pub fn new(u: Vec<u64>, v: u64) -> Self {
        Self {
            inner: Lwe::new(u, v),
        }
    }

    /// Returns the vector part `u`.
    #[inline]
    pub fn u(&self) -> &[u64] {
        self.inner.a()
    }

    /// Returns the scalar part `v`.
    #[inline]
    pub fn v(&self) -> u64 {
        self.inner.b()
    }

    /// Returns the dimension of this [`Ciphertext`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Returns the underlying [`Lwe`] sample.
    #[inline]
    pub fn as_lwe(&self) -> &Lwe<u64> {
        &self.inner
    }

    /// Checks that this ciphertext fits `params`.
    pub(crate) fn check(&self, params: &LweParameters) -> Result<(), PkeError> {
        params.check_dimension("ciphertext u", self.dimension())?;
        params.check_reduced("ciphertext u", self.u())?;
        params.check_reduced("ciphertext v", &[self.v()])
    }
}

impl From<Lwe<u64>> for Ciphertext {
    #[inline]
    fn from(inner: Lwe<u64>) -> Self {
        Self { inner }
    }
}
