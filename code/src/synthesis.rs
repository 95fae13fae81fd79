//! The defining polynomials of a cyclic code.
//!
//! With `β` a primitive `n`-th root of unity in the splitting field and `D`
//! the defining set, the code is generated by `g = ∏_{i ∈ D} (x - β^i)`, and
//! `h = ∏_{i ∉ D} (x - β^i)` is the matching parity-check polynomial, so that
//! `g·h = x^n - 1`.

use ctk_field::GfElement;
use ctk_poly::{Polynomial, PolynomialRing};

use crate::{CodeError, CodeResult};

fn vanishing_on_powers(
    ring: &PolynomialRing,
    beta: GfElement,
    exponents: impl IntoIterator<Item = usize>,
) -> Polynomial {
    let field = ring.field();
    ring.vanishing_polynomial(
        exponents
            .into_iter()
            .map(|i| field.exp_u64(beta, i as u64)),
    )
}

/// Returns `∏_{i ∈ defining_set} (x - β^i)`.
pub fn generator_polynomial(
    ring: &PolynomialRing,
    beta: GfElement,
    defining_set: &[usize],
) -> Polynomial {
    vanishing_on_powers(ring, beta, defining_set.iter().copied())
}

/// Returns `∏ (x - β^i)` over the residues `i` mod `n` outside `defining_set`.
pub fn parity_check_polynomial(
    ring: &PolynomialRing,
    beta: GfElement,
    n: usize,
    defining_set: &[usize],
) -> Polynomial {
    vanishing_on_powers(ring, beta, (0..n).filter(|i| !defining_set.contains(i)))
}

/// The generating idempotent `e = a·g mod (x^n - 1)`, where `a·g + b·h = 1`.
///
/// `e` vanishes at the zeros of the code and is one at its nonzeros.
pub fn idempotent(
    ring: &PolynomialRing,
    g: &Polynomial,
    h: &Polynomial,
    n: usize,
) -> CodeResult<Polynomial> {
    let (d, a, _) = ring.xgcd(g, h);
    if !d.is_one() {
        return Err(CodeError::NotCoprime);
    }
    Ok(ring.mul_mod(&a, g, &ring.x_pow_n_minus_one(n))?)
}
