use crate::reduce::*;

use super::PrimeModulus;

impl Reduce<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u64) -> Self::Output {
        value % self.value
    }
}

impl Reduce<u128> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u128) -> Self::Output {
        (value % self.value as u128) as u64
    }
}

impl ReduceSigned<i64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_signed(self, value: i64) -> Self::Output {
        // `self.value < 2^63`, the cast is lossless.
        value.rem_euclid(self.value as i64) as u64
    }
}

impl ReduceAdd<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_add(self, a: u64, b: u64) -> Self::Output {
        let r = a + b;
        if r >= self.value {
            r - self.value
        } else {
            r
        }
    }
}

impl ReduceAddAssign<u64> for PrimeModulus {
    #[inline]
    fn reduce_add_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_add(*a, b);
    }
}

impl ReduceSub<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_sub(self, a: u64, b: u64) -> Self::Output {
        if a >= b {
            a - b
        } else {
            a + self.value - b
        }
    }
}

impl ReduceSubAssign<u64> for PrimeModulus {
    #[inline]
    fn reduce_sub_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_sub(*a, b);
    }
}

impl ReduceNeg<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_neg(self, value: u64) -> Self::Output {
        if value == 0 {
            0
        } else {
            self.value - value
        }
    }
}

impl ReduceNegAssign<u64> for PrimeModulus {
    #[inline]
    fn reduce_neg_assign(self, value: &mut u64) {
        *value = self.reduce_neg(*value);
    }
}

impl ReduceMul<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_mul(self, a: u64, b: u64) -> Self::Output {
        self.reduce(a as u128 * b as u128)
    }
}

impl ReduceMulAdd<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_mul_add(self, a: u64, b: u64, c: u64) -> Self::Output {
        self.reduce(a as u128 * b as u128 + c as u128)
    }
}

impl ReduceDotProduct<u64> for PrimeModulus {
    type Output = u64;

    #[inline]
    fn reduce_dot_product(self, a: impl AsRef<[u64]>, b: impl AsRef<[u64]>) -> Self::Output {
        let a = a.as_ref();
        let b = b.as_ref();
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(0, |acc, (&x, &y)| self.reduce_mul_add(x, y, acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: u64 = 1009;

    fn modulus() -> PrimeModulus {
        PrimeModulus::new(Q).unwrap()
    }

    #[test]
    fn test_add_sub_neg() {
        let m = modulus();
        assert_eq!(m.reduce_add(1000, 100), 91);
        assert_eq!(m.reduce_sub(5, 10), Q - 5);
        assert_eq!(m.reduce_neg(0), 0);
        assert_eq!(m.reduce_neg(1), Q - 1);
        assert_eq!(m.reduce_add(m.reduce_neg(17), 17), 0);
    }

    #[test]
    fn test_signed_wraps_into_range() {
        let m = modulus();
        assert_eq!(m.reduce_signed(-1), Q - 1);
        assert_eq!(m.reduce_signed(-(Q as i64) - 3), Q - 3);
        assert_eq!(m.reduce_signed(Q as i64 + 2), 2);
        assert_eq!(m.reduce_signed(0), 0);
    }

    #[test]
    fn test_mul_and_dot_product() {
        let m = modulus();
        assert_eq!(m.reduce_mul(Q - 1, Q - 1), 1);
        assert_eq!(m.reduce_mul_add(2, 3, Q - 6), 0);

        let a = [1, 2, 3, Q - 1];
        let b = [4, 5, 6, 1];
        assert_eq!(m.reduce_dot_product(a, b), (4 + 10 + 18 + Q - 1) % Q);
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        // 2^61 - 1 is a Mersenne prime.
        let q = (1u64 << 61) - 1;
        let m = PrimeModulus::new(q).unwrap();
        assert_eq!(m.reduce_mul(q - 1, q - 1), 1);
        assert_eq!(m.reduce_add(q - 1, q - 1), q - 2);
    }
}
