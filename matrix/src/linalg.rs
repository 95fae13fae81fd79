//! Linear algebra over a [`GaloisField`].

use alloc::vec;
use alloc::vec::Vec;

use ctk_field::{
    GaloisField, GfElement, add_scaled_slice_in_place, dot_product, scale_slice_in_place,
};
use tracing::instrument;

use crate::dense::RowMajorMatrix;
use crate::{Matrix, MatrixError, MatrixResult};

/// The reduced row echelon form of a matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowReduction {
    /// Same shape as the input; the first `rank` rows are nonzero.
    pub reduced: RowMajorMatrix<GfElement>,
    /// Pivot column of each nonzero row, strictly increasing.
    pub pivots: Vec<usize>,
}

impl RowReduction {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

#[must_use]
pub fn identity(n: usize) -> RowMajorMatrix<GfElement> {
    let mut m = RowMajorMatrix::filled(GfElement::ZERO, n, n);
    for i in 0..n {
        m.set(i, i, GfElement::ONE);
    }
    m
}

/// Compute `C = A * B`.
pub fn mul(
    field: &GaloisField,
    a: &RowMajorMatrix<GfElement>,
    b: &RowMajorMatrix<GfElement>,
) -> MatrixResult<RowMajorMatrix<GfElement>> {
    if a.width() != b.height() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    let c_width = b.width();
    let mut c_values = Vec::with_capacity(a.height() * c_width);
    for a_row in a.rows() {
        let mut c_row = vec![GfElement::ZERO; c_width];
        for (b_row_idx, &a_val) in a_row.iter().enumerate() {
            add_scaled_slice_in_place(field, &mut c_row, b.row_slice(b_row_idx), a_val);
        }
        c_values.extend(c_row);
    }
    Ok(RowMajorMatrix::new(c_values, c_width))
}

/// Compute `A * v` for a column vector `v`.
pub fn mul_vec(
    field: &GaloisField,
    a: &RowMajorMatrix<GfElement>,
    v: &[GfElement],
) -> MatrixResult<Vec<GfElement>> {
    if a.width() != v.len() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: a.dimensions(),
            right: (v.len(), 1),
        });
    }
    Ok(a.rows().map(|row| dot_product(field, row, v)).collect())
}

/// Compute `v * A` for a row vector `v`.
pub fn vec_mul(
    field: &GaloisField,
    v: &[GfElement],
    a: &RowMajorMatrix<GfElement>,
) -> MatrixResult<Vec<GfElement>> {
    if v.len() != a.height() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: (1, v.len()),
            right: a.dimensions(),
        });
    }
    let mut out = vec![GfElement::ZERO; a.width()];
    for (row, &s) in a.rows().zip(v) {
        add_scaled_slice_in_place(field, &mut out, row, s);
    }
    Ok(out)
}

/// Checks `A * B^t = 0` row pair by row pair, returning the first pair of
/// rows `(i, j)` with `<a_i, b_j> != 0`.
pub fn first_non_orthogonal_pair(
    field: &GaloisField,
    a: &RowMajorMatrix<GfElement>,
    b: &RowMajorMatrix<GfElement>,
) -> MatrixResult<Option<(usize, usize)>> {
    if a.height() > 0 && b.height() > 0 && a.width() != b.width() {
        return Err(MatrixError::DimensionMismatch {
            op: "compare rows of",
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    for (i, a_row) in a.rows().enumerate() {
        for (j, b_row) in b.rows().enumerate() {
            if !dot_product(field, a_row, b_row).is_zero() {
                return Ok(Some((i, j)));
            }
        }
    }
    Ok(None)
}

/// Gauss-Jordan elimination using row swaps, row scaling and row additions
/// only. Every pivot is scaled to one and cleared above and below.
#[instrument(level = "debug", skip_all, fields(height = m.height(), width = m.width()))]
pub fn row_reduce(field: &GaloisField, m: &RowMajorMatrix<GfElement>) -> RowReduction {
    let mut reduced = m.clone();
    let (height, width) = m.dimensions();
    let mut pivots = Vec::new();

    for col in 0..width {
        let row = pivots.len();
        if row == height {
            break;
        }
        let Some(pivot_row) = (row..height).find(|&r| !reduced.get(r, col).is_zero()) else {
            continue;
        };
        reduced.swap_rows(row, pivot_row);

        let Some(inv) = field.try_inverse(reduced.get(row, col)) else {
            continue;
        };
        scale_slice_in_place(field, reduced.row_mut(row), inv);

        for other in 0..height {
            if other == row {
                continue;
            }
            let factor = reduced.get(other, col);
            if factor.is_zero() {
                continue;
            }
            let (target, pivot) = reduced.two_rows_mut(other, row);
            add_scaled_slice_in_place(field, target, pivot, field.neg(factor));
        }
        pivots.push(col);
    }

    RowReduction { reduced, pivots }
}

pub fn rank(field: &GaloisField, m: &RowMajorMatrix<GfElement>) -> usize {
    row_reduce(field, m).rank()
}

/// Inverts a square matrix by reducing `[M | I]`.
pub fn inverse(
    field: &GaloisField,
    m: &RowMajorMatrix<GfElement>,
) -> MatrixResult<RowMajorMatrix<GfElement>> {
    let n = m.height();
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            height: n,
            width: m.width(),
        });
    }
    let id = identity(n);
    let augmented = RowMajorMatrix::from_rows(
        m.rows()
            .zip(id.rows())
            .map(|(row, id_row)| [row, id_row].concat()),
        2 * n,
    );

    let RowReduction { reduced, pivots } = row_reduce(field, &augmented);
    if pivots.len() < n || pivots.last().is_some_and(|&p| p >= n) {
        return Err(MatrixError::Singular);
    }

    Ok(RowMajorMatrix::from_rows(
        reduced.rows().map(|row| row[n..].to_vec()),
        n,
    ))
}
