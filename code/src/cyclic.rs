use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use ctk_coset::{
    Coset, CosetError, DistanceBound, cosets_of_exponents, defining_cosets, dual_defining_set,
    negated,
};
use ctk_field::{FieldExtension, GaloisField, GfElement};
use ctk_matrix::dense::RowMajorMatrix;
use ctk_matrix::standard::StandardForm;
use ctk_poly::{Polynomial, PolynomialRing};
use ctk_util::{divisors, multiplicative_order};
use itertools::Itertools;
use tracing::instrument;

use crate::dispatch::{Request, consecutive_seeds, construct};
use crate::{Code, CodeError, CodeResult, ConstructionConfig, LinearCode, SystematicCode};

/// The most specific family a [`CyclicCode`] was recognised as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Cyclic,
    /// The defining set is the closure of a consecutive range of residues.
    Bch,
    /// A BCH code of length `q - 1` over `GF(q)` itself, hence MDS.
    ReedSolomon,
}

impl Display for CodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cyclic => write!(f, "cyclic"),
            Self::Bch => write!(f, "BCH"),
            Self::ReedSolomon => write!(f, "Reed-Solomon"),
        }
    }
}

/// A cyclic code of length `n` over `GF(q)`, with everything derived while
/// building it.
///
/// Codes are immutable. Operations such as [`CyclicCode::dual`] build a new
/// record from scratch, running the same checks as the constructors.
#[derive(Clone, Debug)]
pub struct CyclicCode {
    pub(crate) kind: CodeKind,
    pub(crate) field: GaloisField,
    pub(crate) extension: FieldExtension,
    pub(crate) ring: PolynomialRing,
    pub(crate) beta: GfElement,
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) distance: Option<usize>,
    pub(crate) offset: usize,
    pub(crate) design_distance: usize,
    pub(crate) upper_bound: usize,
    pub(crate) bound: DistanceBound,
    pub(crate) representatives: Vec<usize>,
    pub(crate) cosets: Vec<Coset>,
    pub(crate) defining_set: Vec<usize>,
    pub(crate) generator_polynomial: Polynomial,
    pub(crate) parity_check_polynomial: Polynomial,
    pub(crate) base_generator_polynomial: Polynomial,
    pub(crate) base_parity_check_polynomial: Polynomial,
    pub(crate) idempotent: Polynomial,
    pub(crate) generator_matrix: RowMajorMatrix<GfElement>,
    pub(crate) parity_check_matrix: RowMajorMatrix<GfElement>,
    pub(crate) standard_form: StandardForm,
    pub(crate) config: ConstructionConfig,
}

fn check_length(n: usize) -> CodeResult<()> {
    if n < 2 {
        return Err(CodeError::InvalidLength(n));
    }
    Ok(())
}

fn check_design_distance(delta: usize, n: usize) -> CodeResult<()> {
    if !(2..=n).contains(&delta) {
        return Err(CodeError::InvalidDesignDistance { delta, n });
    }
    Ok(())
}

impl CyclicCode {
    /// The cyclic code of length `n` over `GF(q)` whose defining set is the
    /// union of the cyclotomic cosets of `seeds`.
    pub fn new(q: u64, n: usize, seeds: &[usize]) -> CodeResult<Self> {
        Self::new_with_config(q, n, seeds, ConstructionConfig::default())
    }

    #[instrument(level = "debug", skip(seeds, config))]
    pub fn new_with_config(
        q: u64,
        n: usize,
        seeds: &[usize],
        config: ConstructionConfig,
    ) -> CodeResult<Self> {
        check_length(n)?;
        let field = GaloisField::cached(q)?;
        let cosets = defining_cosets(seeds, q, n)?;
        construct(field, n, cosets, Request::Cyclic, config)
    }

    /// The BCH code with zeros `β^b, β^(b+1), ..., β^(b+δ-2)` and their
    /// conjugates. The offset `b` is reduced modulo `n`.
    pub fn bch(q: u64, n: usize, delta: usize, offset: usize) -> CodeResult<Self> {
        Self::bch_with_config(q, n, delta, offset, ConstructionConfig::default())
    }

    #[instrument(level = "debug", skip(config))]
    pub fn bch_with_config(
        q: u64,
        n: usize,
        delta: usize,
        offset: usize,
        config: ConstructionConfig,
    ) -> CodeResult<Self> {
        check_length(n)?;
        check_design_distance(delta, n)?;
        let offset = offset % n;
        let field = GaloisField::cached(q)?;
        let seeds = consecutive_seeds(n, delta, offset);
        let cosets = defining_cosets(&seeds, q, n)?;
        construct(field, n, cosets, Request::Bch { delta, offset }, config)
    }

    /// The Reed-Solomon code of length `q - 1` and minimum distance `d` over
    /// `GF(q)`.
    pub fn reed_solomon(q: u64, d: usize, offset: usize) -> CodeResult<Self> {
        Self::reed_solomon_with_config(q, d, offset, ConstructionConfig::default())
    }

    #[instrument(level = "debug", skip(config))]
    pub fn reed_solomon_with_config(
        q: u64,
        d: usize,
        offset: usize,
        config: ConstructionConfig,
    ) -> CodeResult<Self> {
        let field = GaloisField::cached(q)?;
        let n = field.order() as usize - 1;
        if n < 2 || d > n {
            return Err(CodeError::FieldTooSmall {
                q: field.order(),
                distance: d,
            });
        }
        check_design_distance(d, n)?;
        let offset = offset % n;
        let seeds = consecutive_seeds(n, d, offset);
        let cosets = defining_cosets(&seeds, q, n)?;
        construct(
            field,
            n,
            cosets,
            Request::ReedSolomon { delta: d, offset },
            config,
        )
    }

    /// The cyclic code generated by `g`, a polynomial over `GF(q)` dividing
    /// `x^n - 1`. Its defining set is read off the roots of `g`.
    pub fn from_generator_polynomial(q: u64, n: usize, g: &Polynomial) -> CodeResult<Self> {
        Self::from_generator_polynomial_with_config(q, n, g, ConstructionConfig::default())
    }

    #[instrument(level = "debug", skip(g, config), fields(degree = ?g.degree()))]
    pub fn from_generator_polynomial_with_config(
        q: u64,
        n: usize,
        g: &Polynomial,
        config: ConstructionConfig,
    ) -> CodeResult<Self> {
        check_length(n)?;
        let field = GaloisField::cached(q)?;
        if g.coeffs().iter().any(|c| c.value() >= field.order()) {
            return Err(CodeError::NotOverBaseField);
        }

        let base_ring = PolynomialRing::new(field.clone());
        if g.is_zero() || !base_ring.divides(g, &base_ring.x_pow_n_minus_one(n)) {
            return Err(CodeError::GeneratorDoesNotDivide { n });
        }

        let degree = multiplicative_order(q, n as u64).ok_or(CosetError::NotCoprime { q, n })?;
        let extension = FieldExtension::cached(&field, degree)?;
        let ext = extension.ext();
        let beta = ext
            .root_of_unity(n as u64)
            .ok_or(CodeError::InvalidLength(n))?;
        let ring = PolynomialRing::new(ext.clone());
        let g_ext = ring.embed(g, &extension)?;

        let exponents: Vec<usize> = (0..n)
            .filter(|&i| ring.evaluate(&g_ext, ext.exp_u64(beta, i as u64)).is_zero())
            .collect();
        let cosets = cosets_of_exponents(&exponents, q, n)?;
        construct(field, n, cosets, Request::Cyclic, config)
    }

    /// Builds the code with the given defining set over the field and
    /// length of `self`.
    fn with_defining_set(&self, defining_set: &[usize]) -> CodeResult<Self> {
        let cosets = cosets_of_exponents(defining_set, self.q(), self.n)?;
        construct(
            self.field.clone(),
            self.n,
            cosets,
            Request::Cyclic,
            self.config,
        )
    }

    fn check_compatible(&self, other: &Self) -> CodeResult<()> {
        if self.field != other.field {
            return Err(CodeError::FieldMismatch {
                left: self.field.order(),
                right: other.field.order(),
            });
        }
        if self.n != other.n {
            return Err(CodeError::LengthMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        Ok(())
    }

    fn q(&self) -> u64 {
        self.field.order() as u64
    }

    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// The base field `GF(q)`.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// `GF(q^m)` with `m = ord_n(q)`, where `x^n - 1` splits.
    pub fn splitting_field(&self) -> &FieldExtension {
        &self.extension
    }

    /// The polynomial ring over the splitting field.
    pub fn ring(&self) -> &PolynomialRing {
        &self.ring
    }

    /// The primitive `n`-th root of unity `β` the defining set refers to.
    pub fn primitive_root(&self) -> GfElement {
        self.beta
    }

    pub fn length(&self) -> usize {
        self.n
    }

    pub fn dimension(&self) -> usize {
        self.k
    }

    /// The exact minimum distance, when known.
    pub fn minimum_distance(&self) -> Option<usize> {
        self.distance
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn design_distance(&self) -> usize {
        self.design_distance
    }

    pub fn hartmann_tzeng_bound(&self) -> usize {
        self.bound.hartmann_tzeng
    }

    /// The smaller of the Singleton bound `n - k + 1` and the weight of `g`.
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// The best certified lower bound on the minimum distance.
    pub fn lower_bound(&self) -> usize {
        self.distance.unwrap_or_else(|| self.bound.certified())
    }

    /// `(lower, upper)`, equal when the distance is known.
    pub fn minimum_distance_bounds(&self) -> (usize, usize) {
        match self.distance {
            Some(d) => (d, d),
            None => (self.lower_bound(), self.upper_bound),
        }
    }

    pub fn bound(&self) -> &DistanceBound {
        &self.bound
    }

    pub fn cosets(&self) -> &[Coset] {
        &self.cosets
    }

    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    pub fn defining_set(&self) -> &[usize] {
        &self.defining_set
    }

    /// `β^i` for each `i` in the defining set.
    pub fn zeros(&self) -> Vec<GfElement> {
        let ext = self.extension.ext();
        self.defining_set
            .iter()
            .map(|&i| ext.exp_u64(self.beta, i as u64))
            .collect()
    }

    /// `β^i` for each `i` outside the defining set.
    pub fn nonzeros(&self) -> Vec<GfElement> {
        let ext = self.extension.ext();
        (0..self.n)
            .filter(|i| self.defining_set.binary_search(i).is_err())
            .map(|i| ext.exp_u64(self.beta, i as u64))
            .collect()
    }

    /// `g` over the splitting field.
    pub fn generator_polynomial(&self) -> &Polynomial {
        &self.generator_polynomial
    }

    /// `h = (x^n - 1) / g` over the splitting field.
    pub fn parity_check_polynomial(&self) -> &Polynomial {
        &self.parity_check_polynomial
    }

    /// `g` with its coefficients mapped back to `GF(q)`.
    pub fn base_generator_polynomial(&self) -> &Polynomial {
        &self.base_generator_polynomial
    }

    pub fn base_parity_check_polynomial(&self) -> &Polynomial {
        &self.base_parity_check_polynomial
    }

    /// The generating idempotent, over the splitting field.
    pub fn idempotent(&self) -> &Polynomial {
        &self.idempotent
    }

    pub fn standard_form(&self) -> &StandardForm {
        &self.standard_form
    }

    /// Always `None` for a constructed code; kept for callers that treat
    /// cyclic codes like any other linear code.
    pub fn permutation(&self) -> Option<&RowMajorMatrix<GfElement>> {
        self.standard_form.permutation.as_ref()
    }

    pub fn config(&self) -> &ConstructionConfig {
        &self.config
    }

    /// A BCH code whose consecutive zeros start at `β^0`.
    pub fn is_narrow_sense(&self) -> bool {
        self.kind != CodeKind::Cyclic && self.offset == 0
    }

    /// `n = q^m - 1`, i.e. `β` generates the whole splitting field.
    pub fn is_primitive(&self) -> bool {
        self.n as u64 == self.extension.ext().order() as u64 - 1
    }

    /// `n = q^(m/2) + 1` for even `m`.
    pub fn is_antiprimitive(&self) -> bool {
        let m = self.extension.degree();
        m % 2 == 0 && self.n as u64 == self.q().pow(m / 2) + 1
    }

    /// The code is closed under reversing codewords, which happens exactly
    /// when `D = -D`.
    pub fn is_reversible(&self) -> bool {
        negated(&self.defining_set, self.n) == self.defining_set
    }

    /// Every codeword is a repetition of a shorter word, i.e. `h` divides
    /// `x^r - 1` for some proper divisor `r` of `n`.
    pub fn is_degenerate(&self) -> bool {
        divisors(self.n as u64)
            .into_iter()
            .map(|r| r as usize)
            .filter(|&r| r < self.n)
            .any(|r| {
                self.ring
                    .divides(&self.parity_check_polynomial, &self.ring.x_pow_n_minus_one(r))
            })
    }

    /// The dual code, with defining set `-(Z_n \ D)`.
    pub fn dual(&self) -> CodeResult<Self> {
        self.with_defining_set(&dual_defining_set(&self.defining_set, self.n))
    }

    /// The code generated by `h`, with defining set `Z_n \ D`.
    pub fn complement(&self) -> CodeResult<Self> {
        self.with_defining_set(&self.nonzero_exponents())
    }

    /// The intersection of two codes, with defining set `D_1 ∪ D_2`.
    pub fn intersection(&self, other: &Self) -> CodeResult<Self> {
        self.check_compatible(other)?;
        let union = self
            .defining_set
            .iter()
            .merge(&other.defining_set)
            .copied()
            .dedup()
            .collect_vec();
        self.with_defining_set(&union)
    }

    /// The smallest code containing both, with defining set `D_1 ∩ D_2`.
    pub fn sum(&self, other: &Self) -> CodeResult<Self> {
        self.check_compatible(other)?;
        let common = self
            .defining_set
            .iter()
            .copied()
            .filter(|i| other.defining_set.binary_search(i).is_ok())
            .collect_vec();
        self.with_defining_set(&common)
    }

    /// Whether every codeword of `self` lies in `other`, i.e. whether
    /// `D_other ⊆ D_self`.
    pub fn is_subcode_of(&self, other: &Self) -> CodeResult<bool> {
        self.check_compatible(other)?;
        Ok(other
            .defining_set
            .iter()
            .all(|i| self.defining_set.binary_search(i).is_ok()))
    }

    /// For a proper subcode `sub` of `self`, the cyclic code `C'` with
    /// `self = sub ⊕ C'`. Its defining set is `D_self ∪ (Z_n \ D_sub)`.
    pub fn subcode_complement(&self, sub: &Self) -> CodeResult<Self> {
        if !sub.is_subcode_of(self)? || sub.k == self.k {
            return Err(CodeError::NotProperSubcode);
        }
        let defining_set = (0..self.n)
            .filter(|i| {
                self.defining_set.binary_search(i).is_ok()
                    || sub.defining_set.binary_search(i).is_err()
            })
            .collect_vec();
        self.with_defining_set(&defining_set)
    }

    /// Non-systematic polynomial encoding `c(x) = m(x)·g(x)` over `GF(q)`.
    /// The message must have degree below `k`.
    pub fn encode_polynomial(&self, message: &Polynomial) -> CodeResult<Polynomial> {
        let len = message.coeffs().len();
        if len > self.k {
            return Err(CodeError::LengthMismatch {
                expected: self.k,
                found: len,
            });
        }
        if message.coeffs().iter().any(|c| c.value() >= self.field.order()) {
            return Err(CodeError::NotOverBaseField);
        }
        let base_ring = PolynomialRing::new(self.field.clone());
        Ok(base_ring.mul(message, &self.base_generator_polynomial))
    }

    fn nonzero_exponents(&self) -> Vec<usize> {
        (0..self.n)
            .filter(|i| self.defining_set.binary_search(i).is_err())
            .collect()
    }
}

impl Code for CyclicCode {
    fn message_len(&self) -> usize {
        self.k
    }

    fn codeword_len(&self) -> usize {
        self.n
    }
}

impl LinearCode for CyclicCode {
    fn field(&self) -> &GaloisField {
        &self.field
    }

    fn generator_matrix(&self) -> &RowMajorMatrix<GfElement> {
        &self.generator_matrix
    }

    fn parity_check_matrix(&self) -> &RowMajorMatrix<GfElement> {
        &self.parity_check_matrix
    }
}

impl SystematicCode for CyclicCode {
    fn systematic_generator_matrix(&self) -> &RowMajorMatrix<GfElement> {
        &self.standard_form.generator
    }
}

impl Display for CyclicCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(d) => write!(f, "[{}, {}, {d}]", self.n, self.k)?,
            None => write!(f, "[{}, {}, >={}]", self.n, self.k, self.lower_bound())?,
        }
        write!(f, " {} code over {}", self.kind, self.field)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_hamming_from_seed() {
        let code = CyclicCode::new(2, 7, &[1]).unwrap();
        assert_eq!(code.kind(), CodeKind::Bch);
        assert_eq!((code.length(), code.dimension()), (7, 4));
        assert_eq!(code.defining_set(), &[1, 2, 4]);
        assert_eq!(code.minimum_distance(), Some(3));
        assert_eq!(code.to_string(), "[7, 4, 3] BCH code over GF(2)");
        assert!(code.is_primitive());
        assert!(!code.is_reversible());
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(CyclicCode::new(2, 1, &[0]).unwrap_err(), CodeError::InvalidLength(1));
        assert_eq!(
            CyclicCode::bch(2, 15, 16, 0).unwrap_err(),
            CodeError::InvalidDesignDistance { delta: 16, n: 15 }
        );
        assert_eq!(
            CyclicCode::reed_solomon(2, 2, 0).unwrap_err(),
            CodeError::FieldTooSmall { q: 2, distance: 2 }
        );
        assert_eq!(
            CyclicCode::reed_solomon(8, 8, 0).unwrap_err(),
            CodeError::FieldTooSmall { q: 8, distance: 8 }
        );
        assert_eq!(
            CyclicCode::new(2, 7, &[0, 1, 3]).unwrap_err(),
            CodeError::TrivialCode { n: 7 }
        );
    }

    #[test]
    fn test_narrow_sense() {
        let rs = CyclicCode::reed_solomon(8, 3, 0).unwrap();
        assert!(rs.is_narrow_sense());
        let shifted = CyclicCode::reed_solomon(8, 3, 1).unwrap();
        assert!(!shifted.is_narrow_sense());
    }

    #[test]
    fn test_antiprimitive_and_degenerate() {
        // ord_5(2) = 4 and 5 = 2^2 + 1.
        let code = CyclicCode::new(2, 5, &[0]).unwrap();
        assert!(code.is_antiprimitive());
        assert!(!code.is_primitive());
        assert!(code.is_reversible());

        // D = {1, 2, 4, 3, 6, 5} leaves h = x - 1, which divides x - 1.
        let repetition = CyclicCode::new(2, 7, &[1, 3]).unwrap();
        assert_eq!(repetition.dimension(), 1);
        assert!(repetition.is_degenerate());
        assert!(!CyclicCode::new(2, 7, &[1]).unwrap().is_degenerate());
    }
}
