use alloc::vec;
use alloc::vec::Vec;

use ctk_field::{FieldExtension, GaloisField, GfElement};
use itertools::Itertools;

use crate::{PolyError, PolyResult, Polynomial};

/// The ring `F[x]` for a runtime field `F`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialRing {
    field: GaloisField,
}

impl PolynomialRing {
    pub fn new(field: GaloisField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Builds a polynomial from integer-encoded coefficients, lowest degree first.
    ///
    /// # Panics
    /// Panics if a value is not an element of the field.
    pub fn poly(&self, coeffs: &[u32]) -> Polynomial {
        Polynomial::from_coeffs(coeffs.iter().map(|&c| self.field.element(c)).collect())
    }

    pub fn add(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        let (high, low) = if a.coeffs().len() >= b.coeffs().len() {
            (a, b)
        } else {
            (b, a)
        };
        let mut coeffs = high.coeffs().to_vec();
        coeffs
            .iter_mut()
            .zip(low.coeffs())
            .for_each(|(x, &y)| *x = self.field.add(*x, y));
        Polynomial::from_coeffs(coeffs)
    }

    pub fn neg(&self, a: &Polynomial) -> Polynomial {
        Polynomial::from_coeffs(a.coeffs().iter().map(|&c| self.field.neg(c)).collect())
    }

    pub fn sub(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        self.add(a, &self.neg(b))
    }

    pub fn scale(&self, a: &Polynomial, s: GfElement) -> Polynomial {
        Polynomial::from_coeffs(a.coeffs().iter().map(|&c| self.field.mul(c, s)).collect())
    }

    /// Schoolbook multiplication.
    pub fn mul(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        if a.is_zero() || b.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![GfElement::ZERO; a.coeffs().len() + b.coeffs().len() - 1];
        for (i, &ai) in a.coeffs().iter().enumerate() {
            if ai.is_zero() {
                continue;
            }
            for (j, &bj) in b.coeffs().iter().enumerate() {
                coeffs[i + j] = self.field.add(coeffs[i + j], self.field.mul(ai, bj));
            }
        }
        Polynomial::from_coeffs(coeffs)
    }

    pub fn product<'a>(&self, factors: impl IntoIterator<Item = &'a Polynomial>) -> Polynomial {
        factors
            .into_iter()
            .fold(Polynomial::one(), |acc, f| self.mul(&acc, f))
    }

    /// Returns `(q, r)` with `a = q·b + r` and `deg r < deg b`.
    pub fn divide_with_q_and_r(
        &self,
        a: &Polynomial,
        b: &Polynomial,
    ) -> PolyResult<(Polynomial, Polynomial)> {
        let lc_inv = self
            .field
            .try_inverse(b.leading_coefficient())
            .ok_or(PolyError::DivisionByZero)?;
        Ok(self.div_rem(a, b, lc_inv))
    }

    /// Long division by a nonzero `b` whose leading coefficient has inverse `lc_inv`.
    fn div_rem(&self, a: &Polynomial, b: &Polynomial, lc_inv: GfElement) -> (Polynomial, Polynomial) {
        let d_deg = b.coeffs().len() - 1;
        let Some(a_deg) = a.degree().filter(|&a_deg| a_deg >= d_deg) else {
            return (Polynomial::zero(), a.clone());
        };

        let mut quotient = vec![GfElement::ZERO; a_deg - d_deg + 1];
        let mut remainder = a.coeffs().to_vec();
        for top in (d_deg..=a_deg).rev() {
            let c = remainder[top];
            if c.is_zero() {
                continue;
            }
            let q_coeff = self.field.mul(c, lc_inv);
            let q_degree = top - d_deg;
            quotient[q_degree] = q_coeff;
            for (i, &b_i) in b.coeffs().iter().enumerate() {
                let idx = q_degree + i;
                remainder[idx] = self.field.sub(remainder[idx], self.field.mul(q_coeff, b_i));
            }
        }
        remainder.truncate(d_deg);

        (
            Polynomial::from_coeffs(quotient),
            Polynomial::from_coeffs(remainder),
        )
    }

    pub fn rem(&self, a: &Polynomial, b: &Polynomial) -> PolyResult<Polynomial> {
        self.divide_with_q_and_r(a, b).map(|(_, r)| r)
    }

    /// Returns `a / b`, failing unless `b` divides `a`.
    pub fn exact_div(&self, a: &Polynomial, b: &Polynomial) -> PolyResult<Polynomial> {
        let (q, r) = self.divide_with_q_and_r(a, b)?;
        match r.degree() {
            None => Ok(q),
            Some(remainder_degree) => Err(PolyError::NonZeroRemainder { remainder_degree }),
        }
    }

    pub fn divides(&self, divisor: &Polynomial, a: &Polynomial) -> bool {
        self.rem(a, divisor).is_ok_and(|r| r.is_zero())
    }

    /// Scales `a` so that its leading coefficient is one. The zero
    /// polynomial is returned unchanged.
    pub fn make_monic(&self, a: &Polynomial) -> Polynomial {
        match self.field.try_inverse(a.leading_coefficient()) {
            Some(inv) => self.scale(a, inv),
            None => Polynomial::zero(),
        }
    }

    /// The monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        self.xgcd(a, b).0
    }

    /// Extended Euclid: returns `(d, s, t)` with `d = gcd(a, b)` monic and
    /// `s·a + t·b = d`.
    pub fn xgcd(&self, a: &Polynomial, b: &Polynomial) -> (Polynomial, Polynomial, Polynomial) {
        let (mut r0, mut r1) = (a.clone(), b.clone());
        let (mut s0, mut s1) = (Polynomial::one(), Polynomial::zero());
        let (mut t0, mut t1) = (Polynomial::zero(), Polynomial::one());

        while let Some(lc_inv) = self.field.try_inverse(r1.leading_coefficient()) {
            let (q, r) = self.div_rem(&r0, &r1, lc_inv);
            (r0, r1) = (r1, r);
            let s2 = self.sub(&s0, &self.mul(&q, &s1));
            (s0, s1) = (s1, s2);
            let t2 = self.sub(&t0, &self.mul(&q, &t1));
            (t0, t1) = (t1, t2);
        }

        match self.field.try_inverse(r0.leading_coefficient()) {
            Some(inv) => (
                self.scale(&r0, inv),
                self.scale(&s0, inv),
                self.scale(&t0, inv),
            ),
            None => (Polynomial::zero(), Polynomial::zero(), Polynomial::zero()),
        }
    }

    // Horner's method for polynomial evaluation
    pub fn evaluate(&self, a: &Polynomial, point: GfElement) -> GfElement {
        a.coeffs().iter().rfold(GfElement::ZERO, |acc, &c| {
            self.field.add(self.field.mul(acc, point), c)
        })
    }

    /// Returns `a·b mod m`.
    pub fn mul_mod(&self, a: &Polynomial, b: &Polynomial, m: &Polynomial) -> PolyResult<Polynomial> {
        self.rem(&self.mul(a, b), m)
    }

    /// Returns `x^n - 1`.
    pub fn x_pow_n_minus_one(&self, n: usize) -> Polynomial {
        if n == 0 {
            return Polynomial::zero();
        }
        let mut coeffs = vec![GfElement::ZERO; n + 1];
        coeffs[0] = self.field.neg(GfElement::ONE);
        coeffs[n] = GfElement::ONE;
        Polynomial::from_coeffs(coeffs)
    }

    /// Returns `∏ (x - p)` over the distinct points. The empty product is one.
    pub fn vanishing_polynomial(&self, points: impl IntoIterator<Item = GfElement>) -> Polynomial {
        let points = points.into_iter().unique().collect_vec();
        let mut coeffs = Vec::with_capacity(points.len() + 1);
        coeffs.push(GfElement::ONE);

        for point in points {
            // (x - p)·f = x·f - p·f
            let mut prev_coeff = GfElement::ZERO;
            for coeff in coeffs.iter_mut() {
                let current_coeff = *coeff;
                *coeff = self.field.sub(prev_coeff, self.field.mul(current_coeff, point));
                prev_coeff = current_coeff;
            }
            coeffs.push(prev_coeff);
        }

        Polynomial::from_coeffs(coeffs)
    }

    /// The elements of `candidates` at which `a` vanishes, in the order given.
    pub fn roots_among(
        &self,
        a: &Polynomial,
        candidates: impl IntoIterator<Item = GfElement>,
    ) -> Vec<GfElement> {
        candidates
            .into_iter()
            .filter(|&c| self.evaluate(a, c).is_zero())
            .collect()
    }

    /// Maps a polynomial over `extension.base()` into this ring, which must be
    /// the ring over `extension.ext()`.
    pub fn embed(&self, a: &Polynomial, extension: &FieldExtension) -> PolyResult<Polynomial> {
        self.check_field(extension.ext())?;
        Ok(Polynomial::from_coeffs(
            a.coeffs().iter().map(|&c| extension.embed(c)).collect(),
        ))
    }

    /// Maps a polynomial over `extension.ext()` back to the base field, or
    /// `None` if some coefficient lies outside it.
    pub fn restrict(
        &self,
        a: &Polynomial,
        extension: &FieldExtension,
    ) -> PolyResult<Option<Polynomial>> {
        self.check_field(extension.ext())?;
        Ok(a
            .coeffs()
            .iter()
            .map(|&c| extension.restrict(c))
            .collect::<Option<Vec<_>>>()
            .map(Polynomial::from_coeffs))
    }

    fn check_field(&self, field: &GaloisField) -> PolyResult<()> {
        if &self.field == field {
            Ok(())
        } else {
            Err(PolyError::FieldMismatch {
                expected: self.field.order(),
                found: field.order(),
            })
        }
    }
}
