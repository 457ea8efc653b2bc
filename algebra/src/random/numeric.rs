use rand::{distributions::Uniform, CryptoRng, Rng};
use rand_distr::{Distribution, Normal};

use crate::{
    modulus::PrimeModulus,
    reduce::{Modulus, ReduceSigned},
    AlgebraError,
};

/// Sample a vector of `length` values uniformly distributed in `[0, modulus)`.
pub fn sample_uniform_values<R>(modulus: PrimeModulus, length: usize, rng: &mut R) -> Vec<u64>
where
    R: Rng + CryptoRng,
{
    let uniform = Uniform::new_inclusive(0, modulus.modulus_minus_one());
    uniform.sample_iter(rng).take(length).collect()
}

/// Sample a binary vector whose values are `0` or `1`.
pub fn sample_binary_values<R>(length: usize, rng: &mut R) -> Vec<u64>
where
    R: Rng + CryptoRng,
{
    let mut v = vec![0; length];
    let mut iter = v.chunks_exact_mut(32);
    for chunk in &mut iter {
        let mut r = rng.next_u32();
        for elem in chunk.iter_mut() {
            *elem = (r & 0b1) as u64;
            r >>= 1;
        }
    }
    let mut r = rng.next_u32();
    for elem in iter.into_remainder() {
        *elem = (r & 0b1) as u64;
        r >>= 1;
    }
    v
}

/// Sample a ternary vector whose values are `0`, `1` or `minus_one`.
///
/// prob\[1] = prob\[-1] = 0.25, prob\[0] = 0.5
pub fn sample_ternary_values<R>(minus_one: u64, length: usize, rng: &mut R) -> Vec<u64>
where
    R: Rng + CryptoRng,
{
    let s = [0, 0, 1, minus_one];
    let mut v = vec![0; length];
    let mut iter = v.chunks_exact_mut(16);
    for chunk in &mut iter {
        let mut r = rng.next_u32();
        for elem in chunk.iter_mut() {
            *elem = s[(r & 0b11) as usize];
            r >>= 2;
        }
    }
    let mut r = rng.next_u32();
    for elem in iter.into_remainder() {
        *elem = s[(r & 0b11) as usize];
        r >>= 2;
    }
    v
}

/// The rounded gaussian distribution `N(mean, std_dev**2)`.
///
/// Samples farther than `max_std_dev` from the mean are rejected and drawn again.
#[derive(Clone, Copy, Debug)]
pub struct DiscreteGaussian {
    normal: Normal<f64>,
    max_std_dev: f64,
}

impl DiscreteGaussian {
    /// Construct, from mean and standard deviation.
    /// The tail is cut at `6σ`.
    ///
    /// Parameters:
    ///
    /// -   mean (`μ`, finite)
    /// -   standard deviation (`σ`, finite and positive)
    #[inline]
    pub fn new(mean: f64, std_dev: f64) -> Result<DiscreteGaussian, AlgebraError> {
        Self::new_with_max_limit(mean, std_dev, std_dev * 6.0)
    }

    /// Construct, from mean, standard deviation and the max deviation.
    ///
    /// Parameters:
    ///
    /// -   mean (`μ`, finite)
    /// -   standard deviation (`σ`, finite and positive)
    /// -   max deviation (must be larger than `σ`)
    #[inline]
    pub fn new_with_max_limit(
        mean: f64,
        std_dev: f64,
        max_std_dev: f64,
    ) -> Result<DiscreteGaussian, AlgebraError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0. || max_std_dev <= std_dev
        {
            return Err(AlgebraError::DistributionErr);
        }
        match Normal::new(mean, std_dev) {
            Ok(normal) => Ok(DiscreteGaussian {
                normal,
                max_std_dev,
            }),
            Err(_) => Err(AlgebraError::DistributionErr),
        }
    }

    /// Returns the mean (`μ`) of the distribution.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    /// Returns the standard deviation (`σ`) of the distribution.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Returns the max deviation of the distribution.
    #[inline]
    pub fn max_std_dev(&self) -> f64 {
        self.max_std_dev
    }

    /// Samples a value and maps it into `[0, modulus)`.
    #[inline]
    pub fn sample_reduced<R: Rng + ?Sized>(&self, modulus: PrimeModulus, rng: &mut R) -> u64 {
        let e: i64 = self.sample(rng);
        modulus.reduce_signed(e)
    }

    /// Samples `length` values, each mapped into `[0, modulus)`.
    #[inline]
    pub fn sample_reduced_values<R: Rng + ?Sized>(
        &self,
        modulus: PrimeModulus,
        length: usize,
        rng: &mut R,
    ) -> Vec<u64> {
        (0..length)
            .map(|_| self.sample_reduced(modulus, &mut *rng))
            .collect()
    }
}

impl Distribution<i64> for DiscreteGaussian {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let mean = self.normal.mean();
        loop {
            let value = self.normal.sample(rng);
            if (value - mean).abs() < self.max_std_dev {
                return value.round() as i64;
            }
        }
    }
}
