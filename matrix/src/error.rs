use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cannot {op} a {}x{} matrix with a {}x{} matrix", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("expected a square matrix, got {height}x{width}")]
    NotSquare { height: usize, width: usize },

    #[error("matrix is singular")]
    Singular,
}

pub type MatrixResult<T> = core::result::Result<T, MatrixError>;
