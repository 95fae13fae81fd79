//! Consistency checks run on every constructed code. Any failure aborts the
//! construction.

use ctk_field::{GaloisField, GfElement};
use ctk_matrix::Matrix;
use ctk_matrix::dense::RowMajorMatrix;
use ctk_matrix::linalg::first_non_orthogonal_pair;
use ctk_matrix::standard::StandardForm;
use ctk_poly::{PolyError, Polynomial, PolynomialRing};
use tracing::warn;

use crate::{CodeError, CodeResult};

/// Checks that `g` divides `x^n - 1` with quotient exactly `h`.
pub fn verify_factorization(
    ring: &PolynomialRing,
    g: &Polynomial,
    h: &Polynomial,
    n: usize,
) -> CodeResult<()> {
    let x_n_minus_one = ring.x_pow_n_minus_one(n);
    let quotient = match ring.exact_div(&x_n_minus_one, g) {
        Ok(quotient) => quotient,
        Err(PolyError::NonZeroRemainder { .. } | PolyError::DivisionByZero) => {
            return Err(CodeError::GeneratorDoesNotDivide { n });
        }
        Err(err) => return Err(err.into()),
    };
    if &quotient != h || ring.mul(g, h) != x_n_minus_one {
        return Err(CodeError::ParityCheckMismatch { n });
    }
    Ok(())
}

/// Checks `G·H^t = 0` and returns `H`.
///
/// An `n x (n - k)` matrix passed for `H` is taken to be `H^t`; it is
/// transposed back before the check.
pub fn verify_orthogonality(
    field: &GaloisField,
    g: &RowMajorMatrix<GfElement>,
    h: RowMajorMatrix<GfElement>,
    n: usize,
) -> CodeResult<RowMajorMatrix<GfElement>> {
    let h = if h.width() != n && h.height() == n {
        warn!(
            height = h.height(),
            width = h.width(),
            "parity-check matrix arrived transposed"
        );
        h.transpose()
    } else {
        h
    };
    match first_non_orthogonal_pair(field, g, &h)? {
        Some((row, col)) => Err(CodeError::NotOrthogonal { row, col }),
        None => Ok(h),
    }
}

/// Checks that the standard form needed no column permutation and has rank `k`.
pub fn verify_standard_form(standard: &StandardForm, k: usize) -> CodeResult<()> {
    if standard.permutation.is_some() {
        return Err(CodeError::UnexpectedPermutation);
    }
    if standard.rank != k {
        return Err(CodeError::RankMismatch {
            rank: standard.rank,
            k,
        });
    }
    Ok(())
}

/// Checks `e^2 = e mod x^n - 1`.
pub fn verify_idempotent(ring: &PolynomialRing, e: &Polynomial, n: usize) -> CodeResult<()> {
    let square = ring.mul_mod(e, e, &ring.x_pow_n_minus_one(n))?;
    if &square != e {
        return Err(CodeError::NotIdempotent { n });
    }
    Ok(())
}
