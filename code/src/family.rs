use alloc::vec::Vec;
use core::ops::RangeInclusive;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{Code, CodeError, CodeResult, ConstructionConfig, CyclicCode};

/// BCH codes of one length over one field, for various message sizes.
#[derive(Clone, Debug)]
pub struct BchFamily {
    q: u64,
    n: usize,
    offset: usize,
    /// Ordered by message length, ascending, one code per length.
    codes: Vec<CyclicCode>,
}

impl BchFamily {
    pub fn new(q: u64, n: usize, offset: usize, deltas: RangeInclusive<usize>) -> CodeResult<Self> {
        Self::with_config(q, n, offset, deltas, ConstructionConfig::default())
    }

    /// Builds the BCH code for every design distance in `deltas`. Design
    /// distances whose zeros cover all of `Z_n` are skipped, and distances
    /// that produce the same code keep only the first.
    #[instrument(level = "debug", skip(config))]
    pub fn with_config(
        q: u64,
        n: usize,
        offset: usize,
        deltas: RangeInclusive<usize>,
        config: ConstructionConfig,
    ) -> CodeResult<Self> {
        let build = |delta| CyclicCode::bch_with_config(q, n, delta, offset, config);

        #[cfg(feature = "parallel")]
        let results: Vec<_> = deltas.into_par_iter().map(build).collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = deltas.map(build).collect();

        let mut codes = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(code) => codes.push(code),
                Err(CodeError::TrivialCode { .. }) => {}
                Err(err) => return Err(err),
            }
        }
        // Stable, so among equal dimensions the smallest design distance wins.
        codes.sort_by_key(|c| c.message_len());
        codes.dedup_by_key(|c| c.message_len());
        debug!(codes = codes.len(), "built family");

        Ok(Self {
            q,
            n,
            offset,
            codes,
        })
    }

    pub fn field_order(&self) -> u64 {
        self.q
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn codeword_len(&self) -> usize {
        self.n
    }

    pub fn for_message_len(&self, message_len: usize) -> Option<&CyclicCode> {
        self.codes
            .binary_search_by_key(&message_len, |c| c.message_len())
            .ok()
            .map(|i| &self.codes[i])
    }

    /// The next supported message length that is at least `min`.
    pub fn next_message_len(&self, min: usize) -> Option<usize> {
        self.codes
            .iter()
            .map(|c| c.message_len())
            .find(|&len| len >= min)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CyclicCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_binary_length_15() {
        // Binary BCH codes of length 15 with b = 1: [15, 11], [15, 7],
        // [15, 5], [15, 1]. Every δ from 8 on gives k = 1 again.
        let family = BchFamily::new(2, 15, 1, 2..=15).unwrap();
        let dims: Vec<usize> = family.iter().map(|c| c.message_len()).collect();
        assert_eq!(dims, vec![1, 5, 7, 11]);
        assert_eq!(family.codeword_len(), 15);
        assert_eq!(family.for_message_len(7).unwrap().design_distance(), 5);
        assert!(family.for_message_len(6).is_none());
        assert_eq!(family.next_message_len(6), Some(7));
        assert_eq!(family.next_message_len(12), None);
    }

    #[test]
    fn test_trivial_codes_skipped() {
        // Over GF(2) the zeros {0, 1, 2, 3} close up to all of Z_7 from δ = 5 on.
        let family = BchFamily::new(2, 7, 0, 2..=7).unwrap();
        let dims: Vec<usize> = family.iter().map(|c| c.message_len()).collect();
        assert_eq!(dims, vec![3, 6]);
    }

    #[test]
    fn test_reed_solomon_lengths() {
        let family = BchFamily::new(8, 7, 0, 2..=7).unwrap();
        assert_eq!(family.len(), 6);
        assert!(
            family
                .iter()
                .all(|c| c.message_len() == 8 - c.design_distance())
        );
    }

    #[test]
    fn test_invalid_distance_propagates() {
        assert_eq!(
            BchFamily::new(2, 15, 1, 1..=3).unwrap_err(),
            CodeError::InvalidDesignDistance { delta: 1, n: 15 }
        );
    }
}
