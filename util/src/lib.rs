//! Integer number theory used to parameterise finite fields and cyclic codes.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use num_integer::Integer;

/// Computes `gcd(a, b)`, with `gcd(0, 0) = 0`.
#[must_use]
#[inline]
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Computes `a * b mod m` without overflowing.
#[must_use]
#[inline]
pub const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Computes `base^exp mod m` by square and multiply.
#[must_use]
pub const fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut acc = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Returns the prime factorisation of `n` as `(prime, multiplicity)` pairs,
/// sorted by prime. `factorize(1)` is empty.
///
/// # Panics
/// Panics if `n == 0`.
#[must_use]
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    assert_ne!(n, 0, "cannot factorize zero");
    let mut factors = Vec::new();
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            let mut multiplicity = 0;
            while n % d == 0 {
                n /= d;
                multiplicity += 1;
            }
            factors.push((d, multiplicity));
        }
        d += 1;
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

/// If `q = p^t` for a prime `p` and `t >= 1`, returns `(p, t)`.
#[must_use]
pub fn prime_power(q: u64) -> Option<(u64, u32)> {
    if q < 2 {
        return None;
    }
    match factorize(q).as_slice() {
        &[(p, t)] => Some((p, t)),
        _ => None,
    }
}

/// All positive divisors of `n`, ascending.
#[must_use]
pub fn divisors(n: u64) -> Vec<u64> {
    let mut divs = vec![1];
    for (p, t) in factorize(n) {
        let current = divs.clone();
        let mut power = 1;
        for _ in 0..t {
            power *= p;
            divs.extend(current.iter().map(|d| d * power));
        }
    }
    divs.sort_unstable();
    divs
}

/// The multiplicative order of `q` modulo `n`: the least `d >= 1` with
/// `q^d = 1 (mod n)`. Returns `None` when `gcd(q, n) != 1`.
///
/// # Panics
/// Panics if `n == 0`.
#[must_use]
pub fn multiplicative_order(q: u64, n: u64) -> Option<u32> {
    assert_ne!(n, 0, "modulus must be positive");
    if n == 1 {
        return Some(1);
    }
    if gcd(q, n) != 1 {
        return None;
    }
    let base = q % n;
    let mut x = base;
    let mut order = 1;
    while x != 1 {
        x = mul_mod(x, base, n);
        order += 1;
    }
    Some(order)
}
