use alloc::vec::Vec;

use ctk_field::{GaloisField, GfElement};
use ctk_matrix::Matrix;
use ctk_matrix::dense::RowMajorMatrix;
use ctk_matrix::linalg::{mul_vec, vec_mul};

use crate::{CodeError, CodeResult};

/// A code (in the coding theory sense).
pub trait Code {
    /// The input length of this code's encoder. In other words, the dimension of the code.
    fn message_len(&self) -> usize;

    fn codeword_len(&self) -> usize;
}

/// A linear code over a finite field, described by its generator and
/// parity-check matrices.
pub trait LinearCode: Code {
    fn field(&self) -> &GaloisField;

    /// `message_len x codeword_len`.
    fn generator_matrix(&self) -> &RowMajorMatrix<GfElement>;

    /// `(codeword_len - message_len) x codeword_len`.
    fn parity_check_matrix(&self) -> &RowMajorMatrix<GfElement>;

    /// Returns `m·G`.
    fn encode(&self, message: &[GfElement]) -> CodeResult<Vec<GfElement>> {
        check_len(self.message_len(), message.len())?;
        Ok(vec_mul(self.field(), message, self.generator_matrix())?)
    }

    /// Returns `H·c^t`.
    fn syndrome(&self, word: &[GfElement]) -> CodeResult<Vec<GfElement>> {
        check_len(self.codeword_len(), word.len())?;
        if self.parity_check_matrix().height() == 0 {
            return Ok(Vec::new());
        }
        Ok(mul_vec(self.field(), self.parity_check_matrix(), word)?)
    }

    fn is_codeword(&self, word: &[GfElement]) -> CodeResult<bool> {
        Ok(self.syndrome(word)?.iter().all(|s| s.is_zero()))
    }
}

/// A linear code with an encoder that copies the message into the leading
/// positions of the codeword.
pub trait SystematicCode: LinearCode {
    /// The generator matrix in the form `[I | A]`.
    fn systematic_generator_matrix(&self) -> &RowMajorMatrix<GfElement>;

    fn parity_len(&self) -> usize {
        self.codeword_len()
            .checked_sub(self.message_len())
            .unwrap_or_else(|| {
                panic!(
                    "SystematicCode::parity_len underflow, codeword_len = {} < message_len = {}",
                    self.codeword_len(),
                    self.message_len()
                );
            })
    }

    fn encode_systematic(&self, message: &[GfElement]) -> CodeResult<Vec<GfElement>> {
        check_len(self.message_len(), message.len())?;
        Ok(vec_mul(self.field(), message, self.systematic_generator_matrix())?)
    }
}

fn check_len(expected: usize, found: usize) -> CodeResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CodeError::LengthMismatch { expected, found })
    }
}
