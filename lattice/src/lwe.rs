use algebra::reduce::{
    ReduceAdd, ReduceAddAssign, ReduceDotProduct, ReduceNeg, ReduceNegAssign, ReduceSub,
    ReduceSubAssign,
};
use num_traits::ConstZero;
use serde::{Deserialize, Serialize};

/// Represents a cryptographic structure based on the Learning with Errors (LWE) problem.
/// The LWE problem is a fundamental component in modern cryptography, often used to build
/// secure cryptographic systems that are considered hard to crack by quantum computers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lwe<T: Copy> {
    /// A vector of elements of `T`, representing the public vector part of the LWE instance.
    a: Vec<T>,
    /// An element of `T`, representing the value which is computed as
    /// the dot product of `a` with a secret vector, plus message and some noise.
    b: T,
}

impl<T: Copy> Lwe<T> {
    /// Creates a new [`Lwe<T>`].
    #[inline]
    pub fn new(a: Vec<T>, b: T) -> Self {
        Self { a, b }
    }

    /// Returns a reference to the `a` of this [`Lwe<T>`].
    #[inline]
    pub fn a(&self) -> &[T] {
        self.a.as_ref()
    }

    /// Returns the `b` of this [`Lwe<T>`].
    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    /// Returns the dimension of this [`Lwe<T>`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.a.len()
    }

    /// Consumes this [`Lwe<T>`], returns `(a, b)`.
    #[inline]
    pub fn into_inner(self) -> (Vec<T>, T) {
        (self.a, self.b)
    }
}

impl<T: Copy + ConstZero> Lwe<T> {
    /// Generates a [`Lwe<T>`] with all values are `0`.
    #[inline]
    pub fn zero(dimension: usize) -> Self {
        Self {
            a: vec![T::ZERO; dimension],
            b: T::ZERO,
        }
    }

    /// Perform component-wise reduce addition of two [`Lwe<T>`].
    ///
    /// # Attention
    ///
    /// In this function, `self` is a reference.
    /// If your `self` is not a reference, you can use function `add_reduce_component_wise`.
    #[inline]
    pub fn add_reduce_component_wise_ref<M>(&self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceAdd<T, Output = T>,
    {
        debug_assert_eq!(self.a.len(), rhs.a.len());
        Self::new(
            self.a
                .iter()
                .zip(rhs.a())
                .map(|(&a, &b)| modulus.reduce_add(a, b))
                .collect(),
            modulus.reduce_add(self.b, rhs.b),
        )
    }

    /// Perform component-wise reduce addition of two [`Lwe<T>`].
    ///
    /// # Attention
    ///
    /// In this function, `self` is not a reference.
    /// If your `self` is a reference, you can use function `add_reduce_component_wise_ref`.
    #[inline]
    pub fn add_reduce_component_wise<M>(mut self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceAddAssign<T>,
    {
        self.add_reduce_assign_component_wise(rhs, modulus);
        self
    }

    /// Performs an in-place component-wise reduce addition
    /// on the `self` [`Lwe<T>`] with another `rhs` [`Lwe<T>`].
    #[inline]
    pub fn add_reduce_assign_component_wise<M>(&mut self, rhs: &Self, modulus: M)
    where
        M: Copy + ReduceAddAssign<T>,
    {
        debug_assert_eq!(self.a.len(), rhs.a.len());
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| modulus.reduce_add_assign(a, b));
        modulus.reduce_add_assign(&mut self.b, rhs.b);
    }

    /// Perform component-wise subtraction of two [`Lwe<T>`].
    ///
    /// # Attention
    ///
    /// In this function, `self` is a reference.
    /// If your `self` is not a reference, you can use function `sub_reduce_component_wise`.
    #[inline]
    pub fn sub_reduce_component_wise_ref<M>(&self, rhs: &Self, modulus: M) -> Self
    where
        M: Copy + ReduceSub<T, Output = T>,
    {
        debug_assert_eq!(self.a.len(), rhs.a.len());
        Self::new(
            self.a
                .iter()
                .zip(rhs.a())
                .map(|(&a, &b)| modulus.reduce_sub(a, b))
                .collect(),
            modulus.reduce_sub(self.b, rhs.b),
        )
    }

    /// Performs an in-place component-wise subtraction
    /// on the `self` [`Lwe<T>`] with another `rhs` [`Lwe<T>`].
    #[inline]
    pub fn sub_reduce_assign_component_wise<M>(&mut self, rhs: &Self, modulus: M)
    where
        M: Copy + ReduceSubAssign<T>,
    {
        debug_assert_eq!(self.a.len(), rhs.a.len());
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| modulus.reduce_sub_assign(a, b));
        modulus.reduce_sub_assign(&mut self.b, rhs.b);
    }

    /// Performs an negation on the `self` [`Lwe<T>`].
    #[inline]
    pub fn neg_reduce<M>(&self, modulus: M) -> Self
    where
        M: Copy + ReduceNeg<T, Output = T>,
    {
        let a = self.a.iter().map(|&v| modulus.reduce_neg(v)).collect();
        Self::new(a, modulus.reduce_neg(self.b))
    }

    /// Performs an in-place negation on the `self` [`Lwe<T>`].
    #[inline]
    pub fn neg_reduce_assign<M>(&mut self, modulus: M)
    where
        M: Copy + ReduceNegAssign<T>,
    {
        self.a.iter_mut().for_each(|v| modulus.reduce_neg_assign(v));
        modulus.reduce_neg_assign(&mut self.b)
    }

    /// Computes the phase `b - <a, s>` of this [`Lwe<T>`] under the secret `s`.
    ///
    /// For a sample that encrypts `m`, the phase is the encoded `m` plus noise.
    #[inline]
    pub fn phase<M>(&self, secret: &[T], modulus: M) -> T
    where
        M: Copy + ReduceDotProduct<T, Output = T> + ReduceSub<T, Output = T>,
    {
        debug_assert_eq!(self.a.len(), secret.len());
        let a_mul_s = modulus.reduce_dot_product(self.a.as_slice(), secret);
        modulus.reduce_sub(self.b, a_mul_s)
    }
}
