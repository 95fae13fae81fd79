//! Univariate polynomials over the runtime fields of `ctk-field`.
//!
//! A [`Polynomial`] is only a coefficient vector; it does not know which field
//! its coefficients belong to. All arithmetic goes through a
//! [`PolynomialRing`], which carries the field.

#![no_std]

extern crate alloc;

mod error;
mod ring;


use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use ctk_field::GfElement;
pub use error::*;
pub use ring::*;

/// Polynomial stored as a list of coefficients
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Polynomial {
    // The coefficient of `x^i` is stored at location `i` in `self.coeffs`,
    // and the last stored coefficient is never zero.
    coeffs: Vec<GfElement>,
}

impl Polynomial {
    pub fn coeffs(&self) -> &[GfElement] {
        &self.coeffs
    }

    /// Returns the zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: vec![] }
    }

    /// Returns the constant polynomial 1
    pub fn one() -> Self {
        Self::constant(GfElement::ONE)
    }

    // Returns the constant polynomial with the given constant term
    pub fn constant(constant: GfElement) -> Self {
        Self::from_coeffs(vec![constant])
    }

    /// Returns the monic polynomial of degree 1 with no constant term
    pub fn x() -> Self {
        Self::monomial(1)
    }

    /// Returns `x^degree`.
    pub fn monomial(degree: usize) -> Self {
        let mut coeffs = vec![GfElement::ZERO; degree + 1];
        coeffs[degree] = GfElement::ONE;
        Self { coeffs }
    }

    pub fn from_coeffs(coeffs: Vec<GfElement>) -> Self {
        Self { coeffs }.truncate_leading_zeros()
    }

    pub fn constant_term(&self) -> GfElement {
        self.coeffs.first().copied().unwrap_or(GfElement::ZERO)
    }

    /// The coefficient of the highest power of `x`, or zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> GfElement {
        self.coeffs.last().copied().unwrap_or(GfElement::ZERO)
    }

    /// The coefficient of `x^i`, which is zero past the degree.
    pub fn coeff(&self, i: usize) -> GfElement {
        self.coeffs.get(i).copied().unwrap_or(GfElement::ZERO)
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    pub fn is_one(&self) -> bool {
        self.coeffs == [GfElement::ONE]
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().is_one()
    }

    /// The reciprocal polynomial `x^deg f · f(1/x)`.
    ///
    /// Low-order zero coefficients become high-order zeros and are dropped, so
    /// `reverse` is an involution only on polynomials with a nonzero constant term.
    pub fn reverse(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::from_coeffs(coeffs)
    }

    /// The number of nonzero coefficients.
    pub fn weight(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }

    /// Returns `x^k · self`.
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![GfElement::ZERO; k];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// The coefficient vector padded with zeros to length `len`.
    ///
    /// # Panics
    /// Panics if the polynomial has more than `len` coefficients.
    pub fn to_padded_coeffs(&self, len: usize) -> Vec<GfElement> {
        assert!(
            self.coeffs.len() <= len,
            "polynomial of degree {:?} does not fit in {len} coefficients",
            self.degree()
        );
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(len, GfElement::ZERO);
        coeffs
    }

    fn truncate_leading_zeros(mut self) -> Self {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
        self
    }
}

impl Display for Polynomial {
    /// Writes the polynomial highest degree first, e.g. `x^4 + 3x + 1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match (i, c.is_one()) {
                (0, _) => write!(f, "{c}")?,
                (1, true) => f.write_str("x")?,
                (1, false) => write!(f, "{c}x")?,
                (_, true) => write!(f, "x^{i}")?,
                (_, false) => write!(f, "{c}x^{i}")?,
            }
        }
        Ok(())
    }
}
