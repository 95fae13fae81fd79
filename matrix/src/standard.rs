//! Systematic (standard) forms of generator matrices.

use alloc::vec;
use alloc::vec::Vec;

use ctk_field::{GaloisField, GfElement};
use tracing::{debug, instrument};

use crate::dense::RowMajorMatrix;
use crate::linalg::{RowReduction, row_reduce};
use crate::Matrix;

/// A generator matrix brought to the shape `[I_r | A]`, together with the
/// matching parity-check matrix `[-A^t | I_{n-r}]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardForm {
    /// `r x n`, with the identity in the leading columns.
    pub generator: RowMajorMatrix<GfElement>,
    /// `(n - r) x n`, orthogonal to `generator`.
    pub parity_check: RowMajorMatrix<GfElement>,
    /// The `n x n` column permutation `P` with `rref(G) * P = generator`, or
    /// `None` when the pivots already sit in the leading columns.
    pub permutation: Option<RowMajorMatrix<GfElement>>,
    pub rank: usize,
}

impl StandardForm {
    /// The column order applied by the permutation: column `j` of the
    /// standard generator is column `order[j]` of the row-reduced input.
    pub fn column_order(&self) -> Vec<usize> {
        match &self.permutation {
            None => (0..self.generator.width()).collect(),
            Some(p) => (0..p.width())
                .map(|j| (0..p.height()).find(|&i| p.get(i, j).is_one()).unwrap_or(j))
                .collect(),
        }
    }
}

/// Reduces `g` to standard form using exact row operations, then moves the
/// pivot columns to the front if they are not already there. Zero rows are
/// dropped, so the result has `rank` rows.
#[instrument(level = "debug", skip_all, fields(height = g.height(), width = g.width()))]
pub fn standard_form(field: &GaloisField, g: &RowMajorMatrix<GfElement>) -> StandardForm {
    let n = g.width();
    let RowReduction { reduced, pivots } = row_reduce(field, g);
    let rank = pivots.len();

    let free: Vec<usize> = (0..n).filter(|c| !pivots.contains(c)).collect();
    let order: Vec<usize> = pivots.iter().chain(&free).copied().collect();
    let systematic = pivots.iter().copied().eq(0..rank);

    let generator = RowMajorMatrix::from_rows(
        reduced
            .rows()
            .take(rank)
            .map(|row| order.iter().map(|&c| row[c]).collect()),
        n,
    );

    // Row i of the parity check is (-A[.., i], e_i), where A occupies the
    // trailing n - r columns of the standard generator.
    let parity_check = RowMajorMatrix::from_rows(
        (0..n - rank).map(|i| {
            let mut row = vec![GfElement::ZERO; n];
            for (j, entry) in row.iter_mut().take(rank).enumerate() {
                *entry = field.neg(generator.get(j, rank + i));
            }
            row[rank + i] = GfElement::ONE;
            row
        }),
        n,
    );

    let permutation = (!systematic).then(|| {
        debug!(?pivots, "pivot columns are not leading");
        let mut p = RowMajorMatrix::filled(GfElement::ZERO, n, n);
        for (j, &c) in order.iter().enumerate() {
            p.set(c, j, GfElement::ONE);
        }
        p
    });

    StandardForm {
        generator,
        parity_check,
        permutation,
        rank,
    }
}
