//! Error types for field construction.

use thiserror::Error;

use crate::MAX_FIELD_ORDER;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no finite field of order {0}")]
    NotPrimePower(u64),

    #[error("{0} is not a prime and cannot be a field characteristic")]
    InvalidCharacteristic(u64),

    #[error("extension degree must be at least 1")]
    ZeroDegree,

    #[error(
        "GF({characteristic}^{degree}) exceeds the largest supported field order {max}",
        max = MAX_FIELD_ORDER
    )]
    OrderTooLarge { characteristic: u64, degree: u32 },

    #[error("no primitive polynomial of degree {degree} over GF({characteristic})")]
    NoPrimitivePolynomial { characteristic: u64, degree: u32 },

    #[error("GF({base}) does not embed into GF({ext})")]
    NoEmbedding { base: u32, ext: u32 },
}

pub type FieldResult<T> = core::result::Result<T, FieldError>;
