/// A modulus which could be used to reduce values of type `T`.
pub trait Modulus<T> {
    /// Returns the value of the modulus.
    fn value(self) -> T;

    /// Returns `modulus - 1`, the largest value of the residue class.
    fn modulus_minus_one(self) -> T;
}

/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// Maps a signed value into the residue class.
pub trait ReduceSigned<S> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` in `[0, modulus)` where `self` is modulus.
    ///
    /// Negative values wrap around, `-1` becomes `modulus - 1`.
    fn reduce_signed(self, value: S) -> Self::Output;
}

/// The modular addition.
pub trait ReduceAdd<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a + b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add(self, a: T, b: B) -> Self::Output;
}

/// The modular addition assignment.
pub trait ReduceAddAssign<T, B = T> {
    /// Calculates `a += b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add_assign(self, a: &mut T, b: B);
}

/// The modular subtraction.
pub trait ReduceSub<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a - b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_sub(self, a: T, b: B) -> Self::Output;
}

/// The modular subtraction assignment.
pub trait ReduceSubAssign<T, B = T> {
    /// Calculates `a -= b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_sub_assign(self, a: &mut T, b: B);
}

/// The modular negation.
pub trait ReduceNeg<T> {
    /// Output type.
    type Output;

    /// Calculates `-value (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `value < modulus`
    fn reduce_neg(self, value: T) -> Self::Output;
}

/// The modular negation assignment.
pub trait ReduceNegAssign<T> {
    /// Calculates `-value (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `value < modulus`
    fn reduce_neg_assign(self, value: &mut T);
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}

/// The modular multiply-add.
pub trait ReduceMulAdd<T, B = T, C = T> {
    /// Output type.
    type Output;

    /// Calculates `(a * b) + c (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    /// - `c < modulus`
    fn reduce_mul_add(self, a: T, b: B, c: C) -> Self::Output;
}

/// The modular dot product.
///
/// This is always used for slice. For example, `u64` slice `[u64]`.
///
/// For two same length slice `a = (a₀, a₁, ..., an)` and `b = (b₀, b₁, ..., bn)`.
///
/// This trait will calculate `a₀×b₀ + a₁×b₁ + ... + an×bn mod modulus`.
pub trait ReduceDotProduct<T> {
    /// Output type.
    type Output;

    /// Calculate `∑a_i×b_i (mod modulus)` where `self` is modulus.
    fn reduce_dot_product(self, a: impl AsRef<[T]>, b: impl AsRef<[T]>) -> Self::Output;
}
