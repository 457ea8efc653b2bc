/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// These witnesses make Miller-Rabin deterministic for every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (a as u128 * b as u128 % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Check whether `value` is a prime number through Miller-Rabin primality test algorithm.
///
/// With the fixed witness set this is exact for all 64-bit inputs.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_prime(value: u64) -> bool {
    if value < 64 {
        return (PRIME_BIT_MASK & (1 << value)) != 0;
    }

    // even
    if value & 0x1 == 0 {
        return false;
    }

    if WITNESSES[1..].iter().any(|&p| value % p == 0) {
        return false;
    }

    let value_sub_one = value - 1;
    let r = value_sub_one.trailing_zeros();
    let d = value_sub_one >> r;

    'next_witness: for &a in WITNESSES.iter() {
        let mut x = pow_mod(a, d, value);
        if x == 1 || x == value_sub_one {
            continue;
        }

        for _ in 1..r {
            x = mul_mod(x, x, value);
            if x == value_sub_one {
                continue 'next_witness;
            }
            if x == 1 {
                return false;
            }
        }
        return false;
    }
    true
}
