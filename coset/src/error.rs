use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CosetError {
    #[error("cyclotomic cosets need a length of at least 1")]
    ZeroLength,

    #[error("cyclotomic cosets need a base of at least 2, got {0}")]
    InvalidBase(u64),

    #[error("gcd({q}, {n}) != 1, so multiplication by {q} does not permute the residues mod {n}")]
    NotCoprime { q: u64, n: usize },

    #[error("residue {residue} is out of range for length {n}")]
    ResidueOutOfRange { residue: usize, n: usize },

    #[error("the coset of {residue} is only partially contained in the exponent set")]
    NotUnionOfCosets { residue: usize },
}

pub type CosetResult<T> = core::result::Result<T, CosetError>;
