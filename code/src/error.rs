use ctk_coset::CosetError;
use ctk_field::FieldError;
use ctk_matrix::MatrixError;
use ctk_poly::PolyError;
use thiserror::Error;

/// Broad classes of [`CodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested parameters do not describe a code we can build.
    Domain,
    /// An algebraic invariant failed while building the code.
    Construction,
    /// Two inputs that must agree do not.
    Argument,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Coset(#[from] CosetError),

    #[error("code length must be at least 2, got {0}")]
    InvalidLength(usize),

    #[error("design distance {delta} is outside 2..={n}")]
    InvalidDesignDistance { delta: usize, n: usize },

    #[error("GF({q}) is too small for a Reed-Solomon code of distance {distance}")]
    FieldTooSmall { q: u32, distance: usize },

    #[error("the defining set covers every residue mod {n}, leaving a zero-dimensional code")]
    TrivialCode { n: usize },

    #[error("generator polynomial has coefficients outside the base field")]
    NotOverBaseField,

    #[error("generator polynomial does not divide x^{n} - 1")]
    GeneratorDoesNotDivide { n: usize },

    #[error("parity-check polynomial disagrees with (x^{n} - 1) / g")]
    ParityCheckMismatch { n: usize },

    #[error("row {row} of G is not orthogonal to row {col} of H")]
    NotOrthogonal { row: usize, col: usize },

    #[error("standard form of the generator matrix needed a column permutation")]
    UnexpectedPermutation,

    #[error("generator matrix has rank {rank}, expected {k}")]
    RankMismatch { rank: usize, k: usize },

    #[error("generator and parity-check polynomials are not coprime")]
    NotCoprime,

    #[error("idempotent does not square to itself modulo x^{n} - 1")]
    NotIdempotent { n: usize },

    #[error("{k} shifts of a degree {degree} polynomial do not fit in length {n}")]
    GeneratorTooLong { k: usize, degree: usize, n: usize },

    #[error(transparent)]
    Poly(#[from] PolyError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("codes over GF({left}) and GF({right}) cannot be combined")]
    FieldMismatch { left: u32, right: u32 },

    #[error("expected length {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("argument is not a proper subcode")]
    NotProperSubcode,
}

impl CodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Field(_)
            | Self::Coset(_)
            | Self::InvalidLength(_)
            | Self::InvalidDesignDistance { .. }
            | Self::FieldTooSmall { .. }
            | Self::TrivialCode { .. }
            | Self::NotOverBaseField => ErrorKind::Domain,
            Self::GeneratorDoesNotDivide { .. }
            | Self::ParityCheckMismatch { .. }
            | Self::NotOrthogonal { .. }
            | Self::UnexpectedPermutation
            | Self::RankMismatch { .. }
            | Self::NotCoprime
            | Self::NotIdempotent { .. }
            | Self::GeneratorTooLong { .. }
            | Self::Poly(_)
            | Self::Matrix(_) => ErrorKind::Construction,
            Self::FieldMismatch { .. } | Self::LengthMismatch { .. } | Self::NotProperSubcode => {
                ErrorKind::Argument
            }
        }
    }
}

pub type CodeResult<T> = core::result::Result<T, CodeError>;
