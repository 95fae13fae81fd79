//! Search for primitive polynomials over a prime field.
//!
//! Residues modulo a monic `f` of degree `m` are coefficient vectors of
//! length `m`, lowest degree first, with entries in `0..p`.

use ctk_util::factorize;

use crate::{FieldError, FieldResult};

/// Returns the first monic primitive polynomial of degree `m` over `GF(p)`,
/// coefficients lowest degree first (so the last entry is `1`).
///
/// Candidates are enumerated by the integer whose base-`p` digits are the
/// non-leading coefficients, which makes the choice deterministic: `x^4 + x + 1`
/// for `GF(16)`, `x^3 + x + 1` for `GF(8)`.
pub(crate) fn find_primitive_polynomial(p: u64, m: u32, order: u64) -> FieldResult<Vec<u64>> {
    let group_order = order - 1;
    let prime_factors: Vec<u64> = factorize(group_order)
        .into_iter()
        .map(|(r, _)| r)
        .collect();

    let m = m as usize;
    for candidate in 1..order {
        let mut coeffs = Vec::with_capacity(m + 1);
        let mut rest = candidate;
        for _ in 0..m {
            coeffs.push(rest % p);
            rest /= p;
        }
        coeffs.push(1);

        if is_primitive(&coeffs, p, group_order, &prime_factors) {
            return Ok(coeffs);
        }
    }

    Err(FieldError::NoPrimitivePolynomial {
        characteristic: p,
        degree: m as u32,
    })
}

/// `f` is primitive iff `x` has multiplicative order exactly `p^m - 1` in
/// `GF(p)[x] / f`. A reducible `f` has a smaller unit group, so this also
/// certifies irreducibility.
fn is_primitive(f: &[u64], p: u64, group_order: u64, prime_factors: &[u64]) -> bool {
    if f[0] == 0 {
        return false;
    }
    if !is_one(&x_pow_mod(group_order, f, p)) {
        return false;
    }
    prime_factors
        .iter()
        .all(|&r| !is_one(&x_pow_mod(group_order / r, f, p)))
}

fn is_one(residue: &[u64]) -> bool {
    residue[0] == 1 && residue[1..].iter().all(|&c| c == 0)
}

/// The residue of `x` itself.
fn x_mod(f: &[u64], p: u64) -> Vec<u64> {
    let m = f.len() - 1;
    let mut x = vec![0; m];
    if m == 1 {
        x[0] = (p - f[0]) % p;
    } else {
        x[1] = 1;
    }
    x
}

fn x_pow_mod(mut exp: u64, f: &[u64], p: u64) -> Vec<u64> {
    let m = f.len() - 1;
    let mut acc = vec![0; m];
    acc[0] = 1;
    let mut base = x_mod(f, p);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(&acc, &base, f, p);
        }
        base = mul_mod(&base, &base, f, p);
        exp >>= 1;
    }
    acc
}

pub(crate) fn mul_mod(a: &[u64], b: &[u64], f: &[u64], p: u64) -> Vec<u64> {
    let m = f.len() - 1;
    let mut product = vec![0; 2 * m - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            product[i + j] = (product[i + j] + ai * bj) % p;
        }
    }

    // x^m = -(f_0 + f_1 x + ... + f_{m-1} x^{m-1})
    for top in (m..product.len()).rev() {
        let c = product[top];
        if c == 0 {
            continue;
        }
        product[top] = 0;
        for (j, &fj) in f[..m].iter().enumerate() {
            let idx = top - m + j;
            product[idx] = (product[idx] + (p - c) * fj) % p;
        }
    }

    product.truncate(m);
    product
}
