use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("division leaves a nonzero remainder of degree {remainder_degree}")]
    NonZeroRemainder { remainder_degree: usize },

    #[error("polynomial ring over {expected} cannot operate on data over {found}")]
    FieldMismatch { expected: u32, found: u32 },
}

pub type PolyResult<T> = core::result::Result<T, PolyError>;
