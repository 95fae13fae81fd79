//! Generator and parity-check matrices of a cyclic code, built from shifts of
//! its defining polynomials.

use ctk_field::GfElement;
use ctk_matrix::dense::RowMajorMatrix;
use ctk_poly::Polynomial;

use crate::{CodeError, CodeResult};

/// `rows x n` matrix whose row `i` holds the coefficients of `x^i · p`.
fn shifted_rows(n: usize, rows: usize, p: &Polynomial) -> CodeResult<RowMajorMatrix<GfElement>> {
    let degree = p.degree().unwrap_or(0);
    if rows + degree > n {
        return Err(CodeError::GeneratorTooLong {
            k: rows,
            degree,
            n,
        });
    }
    Ok(RowMajorMatrix::from_rows(
        (0..rows).map(|i| p.shift(i).to_padded_coeffs(n)),
        n,
    ))
}

/// The `k x n` matrix with row `i` equal to the coefficients of `x^i · g`.
pub fn generator_matrix(n: usize, k: usize, g: &Polynomial) -> CodeResult<RowMajorMatrix<GfElement>> {
    shifted_rows(n, k, g)
}

/// The `(n - k) x n` matrix with row `i` equal to the coefficients of
/// `x^i · reverse(h)`.
pub fn parity_check_matrix(
    n: usize,
    k: usize,
    h: &Polynomial,
) -> CodeResult<RowMajorMatrix<GfElement>> {
    shifted_rows(n, n.saturating_sub(k), &h.reverse())
}

#[cfg(test)]
mod tests {
    use ctk_field::GaloisField;
    use ctk_matrix::Matrix;
    use ctk_matrix::linalg::first_non_orthogonal_pair;
    use ctk_poly::PolynomialRing;

    use super::*;

    #[test]
    fn test_hamming_matrices() {
        let gf2 = GaloisField::new(2).unwrap();
        let ring = PolynomialRing::new(gf2.clone());
        let g = ring.poly(&[1, 1, 0, 1]);
        let h = ring.exact_div(&ring.x_pow_n_minus_one(7), &g).unwrap();

        let gm = generator_matrix(7, 4, &g).unwrap();
        let hm = parity_check_matrix(7, 4, &h).unwrap();
        assert_eq!(gm.dimensions(), (4, 7));
        assert_eq!(hm.dimensions(), (3, 7));
        assert_eq!(gm.row_slice(1), ring.poly(&[0, 1, 1, 0, 1]).to_padded_coeffs(7));
        assert_eq!(first_non_orthogonal_pair(&gf2, &gm, &hm).unwrap(), None);
    }

    #[test]
    fn test_generator_too_long() {
        let gf2 = GaloisField::new(2).unwrap();
        let ring = PolynomialRing::new(gf2);
        let g = ring.poly(&[1, 1, 0, 1]);
        assert_eq!(
            generator_matrix(7, 5, &g),
            Err(CodeError::GeneratorTooLong {
                k: 5,
                degree: 3,
                n: 7
            })
        );
    }

    #[test]
    fn test_full_space() {
        let gm = generator_matrix(5, 5, &Polynomial::one()).unwrap();
        assert_eq!(gm.dimensions(), (5, 5));
        let hm = parity_check_matrix(5, 5, &Polynomial::one()).unwrap();
        assert_eq!(hm.dimensions(), (0, 5));
    }
}
