use core::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use ctk_util::{factorize, gcd, is_prime, mul_mod, prime_power};
use hashbrown::HashMap;
use tracing::{debug, instrument};

use crate::primitive::{self, find_primitive_polynomial};
use crate::{FieldError, FieldResult, GfElement};

/// Largest field order for which log/exp tables are built. Bigger fields
/// multiply in the polynomial basis instead.
pub const TABLE_LIMIT: u64 = 1 << 20;

/// Largest supported field order. Element encodings are `u32`.
pub const MAX_FIELD_ORDER: u64 = u32::MAX as u64;

static FIELDS: LazyLock<Mutex<HashMap<(u64, u32), GaloisField>>> =
    LazyLock::new(Default::default);

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct LogTables {
    /// `exp[i] = α^i`, stored twice over so that `log a + log b` needs no reduction.
    exp: Vec<u32>,
    /// `log[α^i] = i`; `log[0]` is unused.
    log: Vec<u32>,
}

struct FieldTables {
    characteristic: u32,
    degree: u32,
    order: u32,
    /// Monic primitive polynomial over `GF(p)`, lowest degree first.
    modulus: Vec<u32>,
    reduction: Vec<u64>,
    /// Encoding of `α`.
    primitive: u32,
    /// Distinct primes dividing `order - 1`.
    group_factors: Vec<u64>,
    /// Present iff `order <= TABLE_LIMIT`.
    logs: Option<LogTables>,
}

/// The finite field `GF(p^m)`.
///
/// Cloning is cheap: the tables live behind an `Arc`. Fields up to
/// [`TABLE_LIMIT`] elements use log/exp tables; larger ones multiply
/// residues modulo the primitive polynomial.
#[derive(Clone)]
pub struct GaloisField {
    tables: Arc<FieldTables>,
}

impl GaloisField {
    /// Builds the field with `order` elements.
    ///
    /// Fails with [`FieldError::NotPrimePower`] unless `order = p^t`.
    pub fn new(order: u64) -> FieldResult<Self> {
        let (p, m) = prime_power(order).ok_or(FieldError::NotPrimePower(order))?;
        Self::from_parts(p, m)
    }

    /// Builds `GF(p^m)`. The modulus is the first primitive polynomial of
    /// degree `m` in the search order, so two calls with the same parameters
    /// produce identical fields.
    #[instrument(level = "debug", name = "build galois field")]
    pub fn from_parts(p: u64, m: u32) -> FieldResult<Self> {
        if !is_prime(p) {
            return Err(FieldError::InvalidCharacteristic(p));
        }
        if m == 0 {
            return Err(FieldError::ZeroDegree);
        }
        let order = p
            .checked_pow(m)
            .filter(|&order| order <= MAX_FIELD_ORDER)
            .ok_or(FieldError::OrderTooLarge {
                characteristic: p,
                degree: m,
            })?;

        let modulus = find_primitive_polynomial(p, m, order)?;
        debug!(?modulus, "found primitive modulus");

        let tables = FieldTables::new(p, m, order, &modulus);
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Like [`GaloisField::new`], but memoised for the lifetime of the process.
    pub fn cached(order: u64) -> FieldResult<Self> {
        let (p, m) = prime_power(order).ok_or(FieldError::NotPrimePower(order))?;
        Self::cached_parts(p, m)
    }

    /// Like [`GaloisField::from_parts`], but memoised for the lifetime of the
    /// process. Entries are created on first use and never evicted.
    pub fn cached_parts(p: u64, m: u32) -> FieldResult<Self> {
        if let Some(field) = lock(&FIELDS).get(&(p, m)) {
            return Ok(field.clone());
        }
        // Built outside the lock; a racing builder produces an identical field.
        let field = Self::from_parts(p, m)?;
        Ok(lock(&FIELDS).entry((p, m)).or_insert(field).clone())
    }

    #[must_use]
    #[inline]
    pub fn characteristic(&self) -> u32 {
        self.tables.characteristic
    }

    /// The degree `m` of this field over its prime subfield.
    #[must_use]
    #[inline]
    pub fn degree(&self) -> u32 {
        self.tables.degree
    }

    #[must_use]
    #[inline]
    pub fn order(&self) -> u32 {
        self.tables.order
    }

    /// The primitive polynomial defining this field, lowest degree first.
    #[must_use]
    pub fn modulus(&self) -> &[u32] {
        &self.tables.modulus
    }

    /// Returns `true` if products are looked up in log/exp tables, which is
    /// the case for fields of at most [`TABLE_LIMIT`] elements.
    #[must_use]
    pub fn has_tables(&self) -> bool {
        self.tables.logs.is_some()
    }

    /// Returns `true` if both handles describe the same table set.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }

    /// The element with integer encoding `value`.
    ///
    /// # Panics
    /// Panics if `value` is not below the field order.
    #[must_use]
    pub fn element(&self, value: u32) -> GfElement {
        self.try_element(value)
            .unwrap_or_else(|| panic!("{value} is not an element of {self}"))
    }

    #[must_use]
    pub fn try_element(&self, value: u32) -> Option<GfElement> {
        (value < self.order()).then_some(GfElement(value))
    }

    /// The image of the integer `value` in the prime subfield.
    #[must_use]
    pub fn from_u64(&self, value: u64) -> GfElement {
        GfElement((value % self.characteristic() as u64) as u32)
    }

    /// The image of the integer `value` in the prime subfield.
    #[must_use]
    pub fn from_i64(&self, value: i64) -> GfElement {
        GfElement(value.rem_euclid(self.characteristic() as i64) as u32)
    }

    /// The generator `α` of the multiplicative group, a root of [`Self::modulus`].
    #[must_use]
    #[inline]
    pub fn primitive_element(&self) -> GfElement {
        self.pow_primitive(1)
    }

    /// Returns `α^exp`.
    #[must_use]
    #[inline]
    pub fn pow_primitive(&self, exp: u64) -> GfElement {
        let group_order = self.order() as u64 - 1;
        match &self.tables.logs {
            Some(logs) => GfElement(logs.exp[(exp % group_order) as usize]),
            None => self.exp_u64(GfElement(self.tables.primitive), exp % group_order),
        }
    }

    /// The discrete logarithm of `a` to the base `α`, or `None` for zero.
    ///
    /// Untabulated fields answer by baby-step giant-step, in time and memory
    /// proportional to the square root of the field order.
    #[must_use]
    #[inline]
    pub fn log(&self, a: GfElement) -> Option<u32> {
        if a.is_zero() {
            return None;
        }
        match &self.tables.logs {
            Some(logs) => Some(logs.log[a.0 as usize]),
            None => self.baby_step_giant_step(a),
        }
    }

    /// A primitive `n`-th root of unity, `α^((q - 1) / n)`, if `n` divides `q - 1`.
    #[must_use]
    pub fn root_of_unity(&self, n: u64) -> Option<GfElement> {
        let group_order = self.order() as u64 - 1;
        (n != 0 && group_order % n == 0).then(|| self.pow_primitive(group_order / n))
    }

    /// The multiplicative order of a nonzero element.
    #[must_use]
    pub fn multiplicative_order(&self, a: GfElement) -> Option<u64> {
        if a.is_zero() {
            return None;
        }
        let group_order = self.order() as u64 - 1;
        if let Some(logs) = &self.tables.logs {
            let log = logs.log[a.0 as usize] as u64;
            return Some(group_order / gcd(log, group_order));
        }
        let mut order = group_order;
        for &r in &self.tables.group_factors {
            while order % r == 0 && self.exp_u64(a, order / r).is_one() {
                order /= r;
            }
        }
        Some(order)
    }

    #[must_use]
    pub fn add(&self, a: GfElement, b: GfElement) -> GfElement {
        let p = self.characteristic();
        if p == 2 {
            return GfElement(a.0 ^ b.0);
        }
        if self.degree() == 1 {
            return GfElement((a.0 + b.0) % p);
        }
        self.digitwise(a, b, |x, y| (x + y) % p)
    }

    #[must_use]
    pub fn neg(&self, a: GfElement) -> GfElement {
        let p = self.characteristic();
        if p == 2 || a.is_zero() {
            return a;
        }
        if self.degree() == 1 {
            return GfElement(p - a.0);
        }
        self.digitwise(a, GfElement::ZERO, |x, _| (p - x) % p)
    }

    #[must_use]
    pub fn sub(&self, a: GfElement, b: GfElement) -> GfElement {
        let p = self.characteristic();
        if p == 2 {
            return GfElement(a.0 ^ b.0);
        }
        if self.degree() == 1 {
            return GfElement((a.0 + p - b.0) % p);
        }
        self.digitwise(a, b, |x, y| (x + p - y) % p)
    }

    #[must_use]
    #[inline]
    pub fn mul(&self, a: GfElement, b: GfElement) -> GfElement {
        if a.is_zero() || b.is_zero() {
            return GfElement::ZERO;
        }
        match &self.tables.logs {
            Some(t) => GfElement(t.exp[(t.log[a.0 as usize] + t.log[b.0 as usize]) as usize]),
            None => self.tables.residue_mul(a, b),
        }
    }

    #[must_use]
    pub fn square(&self, a: GfElement) -> GfElement {
        self.mul(a, a)
    }

    #[must_use]
    pub fn try_inverse(&self, a: GfElement) -> Option<GfElement> {
        if a.is_zero() {
            return None;
        }
        let group_order = self.order() - 1;
        match &self.tables.logs {
            Some(logs) => {
                let log = logs.log[a.0 as usize];
                Some(GfElement(logs.exp[((group_order - log) % group_order) as usize]))
            }
            None => Some(self.exp_u64(a, group_order as u64 - 1)),
        }
    }

    /// Returns `a / b`, or `None` if `b` is zero.
    #[must_use]
    pub fn try_div(&self, a: GfElement, b: GfElement) -> Option<GfElement> {
        self.try_inverse(b).map(|b_inv| self.mul(a, b_inv))
    }

    /// Returns `a^power`, with `0^0 = 1`.
    #[must_use]
    pub fn exp_u64(&self, a: GfElement, power: u64) -> GfElement {
        if power == 0 {
            return GfElement::ONE;
        }
        if a.is_zero() {
            return GfElement::ZERO;
        }
        let group_order = self.order() as u64 - 1;
        if let Some(logs) = &self.tables.logs {
            let log = logs.log[a.0 as usize] as u64;
            return GfElement(logs.exp[mul_mod(log, power % group_order, group_order) as usize]);
        }
        let (mut base, mut exp) = (a, power % group_order);
        let mut acc = GfElement::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.tables.residue_mul(acc, base);
            }
            base = self.tables.residue_mul(base, base);
            exp >>= 1;
        }
        acc
    }

    /// The Frobenius endomorphism `a ↦ a^p`.
    #[must_use]
    pub fn frobenius(&self, a: GfElement) -> GfElement {
        self.exp_u64(a, self.characteristic() as u64)
    }

    /// Returns `true` if `a` lies in the subfield `GF(p^d)`.
    ///
    /// # Panics
    /// Panics if `d` does not divide the degree of this field.
    #[must_use]
    pub fn is_in_subfield(&self, a: GfElement, d: u32) -> bool {
        assert!(
            d != 0 && self.degree() % d == 0,
            "GF({}^{d}) is not a subfield of {self}",
            self.characteristic()
        );
        self.exp_u64(a, (self.characteristic() as u64).pow(d)) == a
    }

    /// All elements, in increasing encoding order.
    pub fn elements(&self) -> impl Iterator<Item = GfElement> + use<> {
        (0..self.order()).map(GfElement)
    }

    /// All nonzero elements, in increasing encoding order.
    pub fn units(&self) -> impl Iterator<Item = GfElement> + use<> {
        (1..self.order()).map(GfElement)
    }

    /// Applies `op` to the base-`p` digits of `a` and `b` position by position.
    fn digitwise(&self, a: GfElement, b: GfElement, op: impl Fn(u32, u32) -> u32) -> GfElement {
        let p = self.characteristic();
        let (mut a, mut b) = (a.0, b.0);
        let mut place = 1;
        let mut result = 0;
        for _ in 0..self.degree() {
            result += op(a % p, b % p) * place;
            a /= p;
            b /= p;
            place *= p;
        }
        GfElement(result)
    }

    fn baby_step_giant_step(&self, a: GfElement) -> Option<u32> {
        let group_order = self.order() as u64 - 1;
        let step = group_order.isqrt() + 1;
        let alpha = GfElement(self.tables.primitive);

        let mut baby = HashMap::with_capacity(step as usize);
        let mut power = GfElement::ONE;
        for j in 0..step {
            baby.entry(power).or_insert(j);
            power = self.mul(power, alpha);
        }
        // `power` is now α^step.
        let giant = self.try_inverse(power)?;
        let mut gamma = a;
        for i in 0..step {
            if let Some(&j) = baby.get(&gamma) {
                return Some(((i * step + j) % group_order) as u32);
            }
            gamma = self.mul(gamma, giant);
        }
        None
    }
}

impl FieldTables {
    fn new(p: u64, m: u32, order: u64, modulus: &[u64]) -> Self {
        let primitive = if m == 1 { (p - modulus[0]) % p } else { p };
        let mut tables = Self {
            characteristic: p as u32,
            degree: m,
            order: order as u32,
            modulus: modulus.iter().map(|&c| c as u32).collect(),
            reduction: modulus.to_vec(),
            primitive: primitive as u32,
            group_factors: factorize(order - 1).into_iter().map(|(r, _)| r).collect(),
            logs: None,
        };
        if order <= TABLE_LIMIT {
            tables.logs = Some(LogTables::new(p, m, order, modulus));
        }
        tables
    }

    /// The base-`p` digits of `a`, lowest first.
    fn digits(&self, a: GfElement) -> Vec<u64> {
        let p = self.characteristic as u64;
        let mut rest = a.0 as u64;
        (0..self.degree)
            .map(|_| {
                let digit = rest % p;
                rest /= p;
                digit
            })
            .collect()
    }

    /// Multiplies two residues modulo the primitive polynomial.
    fn residue_mul(&self, a: GfElement, b: GfElement) -> GfElement {
        let p = self.characteristic as u64;
        if self.degree == 1 {
            return GfElement(mul_mod(a.0 as u64, b.0 as u64, p) as u32);
        }
        let product = primitive::mul_mod(&self.digits(a), &self.digits(b), &self.reduction, p);
        GfElement(product.iter().rev().fold(0, |acc, &d| acc * p + d) as u32)
    }
}

impl LogTables {
    fn new(p: u64, m: u32, order: u64, modulus: &[u64]) -> Self {
        let q = order as usize;
        let m = m as usize;
        let mut exp = Vec::with_capacity(2 * (q - 1));
        let mut log = vec![0; q];

        // Coordinates of α^i in the basis 1, α, ..., α^(m-1).
        let mut digits = vec![0u64; m];
        digits[0] = 1;
        for i in 0..q - 1 {
            let value = digits.iter().rev().fold(0, |acc, &d| acc * p + d) as u32;
            exp.push(value);
            log[value as usize] = i as u32;

            let top = digits[m - 1];
            for j in (1..m).rev() {
                digits[j] = (digits[j - 1] + p - (top * modulus[j]) % p) % p;
            }
            digits[0] = (p - (top * modulus[0]) % p) % p;
        }
        exp.extend_from_within(..);

        Self { exp, log }
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.characteristic() == other.characteristic()
                && self.degree() == other.degree()
                && self.modulus() == other.modulus())
    }
}

impl Eq for GaloisField {}

impl Debug for GaloisField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("characteristic", &self.characteristic())
            .field("degree", &self.degree())
            .field("modulus", &self.modulus())
            .finish()
    }
}

impl Display for GaloisField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_prime_power() {
        assert_eq!(GaloisField::new(6), Err(FieldError::NotPrimePower(6)));
        assert_eq!(GaloisField::new(1), Err(FieldError::NotPrimePower(1)));
        assert_eq!(
            GaloisField::new(6).unwrap_err().to_string(),
            "no finite field of order 6"
        );
        assert_eq!(
            GaloisField::from_parts(4, 2),
            Err(FieldError::InvalidCharacteristic(4))
        );
    }

    #[test]
    fn test_too_large() {
        assert_eq!(
            GaloisField::from_parts(2, 32),
            Err(FieldError::OrderTooLarge {
                characteristic: 2,
                degree: 32
            })
        );
        assert!(GaloisField::from_parts(3, 40).is_err());
        assert!(GaloisField::from_parts(2, 20).unwrap().has_tables());
    }

    #[test]
    fn test_residue_mul_matches_tables() {
        for order in [64, 81, 125] {
            let field = GaloisField::new(order).unwrap();
            for a in field.units() {
                for b in field.units() {
                    assert_eq!(field.tables.residue_mul(a, b), field.mul(a, b));
                }
            }
        }
    }

    #[test]
    fn test_untabulated_binary_field() {
        // GF(2^23) is the splitting field of x^47 - 1 over GF(2).
        let field = GaloisField::from_parts(2, 23).unwrap();
        assert!(!field.has_tables());
        assert_eq!(field.order(), 1 << 23);
        let group_order = (1u64 << 23) - 1;

        let alpha = field.primitive_element();
        assert_eq!(alpha, GfElement(2));
        assert_eq!(field.multiplicative_order(alpha), Some(group_order));
        assert_eq!(field.exp_u64(alpha, group_order), GfElement::ONE);

        let beta = field.root_of_unity(47).unwrap();
        assert_eq!(field.multiplicative_order(beta), Some(47));
        assert_eq!(field.root_of_unity(3), None);

        let a = field.pow_primitive(123_456);
        assert_eq!(field.log(a), Some(123_456));
        assert_eq!(field.log(GfElement::ZERO), None);
        let a_inv = field.try_inverse(a).unwrap();
        assert_eq!(field.mul(a, a_inv), GfElement::ONE);
        assert_eq!(field.mul(a, field.pow_primitive(5)), field.pow_primitive(123_461));
        assert_eq!(
            field.frobenius(field.add(a, beta)),
            field.add(field.frobenius(a), field.frobenius(beta))
        );
        assert!(field.is_in_subfield(GfElement::ONE, 1));
        assert!(!field.is_in_subfield(alpha, 1));
    }

    #[test]
    fn test_untabulated_prime_field() {
        let p = (1u64 << 31) - 1;
        let field = GaloisField::new(p).unwrap();
        assert!(!field.has_tables());
        let a = field.from_u64(1 << 30);
        let b = field.from_u64(123_456_789);
        assert_eq!(
            field.mul(a, b).value() as u64,
            (1u64 << 30) * 123_456_789 % p
        );
        assert_eq!(field.mul(a, field.try_inverse(a).unwrap()), GfElement::ONE);
        assert_eq!(
            field.multiplicative_order(field.primitive_element()),
            Some(p - 1)
        );
        assert_eq!(field.multiplicative_order(field.from_i64(-1)), Some(2));
    }

    #[test]
    fn test_gf16_tables() {
        let gf16 = GaloisField::new(16).unwrap();
        assert_eq!(gf16.modulus(), &[1, 1, 0, 0, 1]);
        // α = x, α^4 = α + 1.
        assert_eq!(gf16.primitive_element(), GfElement(2));
        assert_eq!(gf16.pow_primitive(4), GfElement(3));
        assert_eq!(gf16.pow_primitive(15), GfElement::ONE);
    }

    #[test]
    fn test_prime_field_arithmetic() {
        let gf13 = GaloisField::new(13).unwrap();
        let a = gf13.element(5);
        let b = gf13.element(11);
        assert_eq!(gf13.add(a, b), gf13.element(3));
        assert_eq!(gf13.sub(a, b), gf13.element(7));
        assert_eq!(gf13.mul(a, b), gf13.element(3));
        assert_eq!(gf13.neg(a), gf13.element(8));
        assert_eq!(gf13.from_i64(-1), gf13.element(12));
        assert_eq!(gf13.try_inverse(GfElement::ZERO), None);
    }

    #[test]
    fn test_gf9_digitwise() {
        let gf9 = GaloisField::new(9).unwrap();
        // (2 + α) + (2 + 2α) = 1 + 0α in base-3 encoding: 5 + 8 -> 1.
        assert_eq!(gf9.add(gf9.element(5), gf9.element(8)), gf9.element(1));
        assert_eq!(gf9.neg(gf9.element(5)), gf9.element(7));
        assert_eq!(gf9.sub(gf9.element(5), gf9.element(5)), GfElement::ZERO);
    }

    #[test]
    fn test_roots_of_unity() {
        let gf16 = GaloisField::new(16).unwrap();
        let beta = gf16.root_of_unity(5).unwrap();
        assert_eq!(gf16.multiplicative_order(beta), Some(5));
        assert_eq!(gf16.root_of_unity(7), None);
        assert_eq!(gf16.root_of_unity(1), Some(GfElement::ONE));
    }

    #[test]
    fn test_cache_shares_tables() {
        let a = GaloisField::cached(27).unwrap();
        let b = GaloisField::cached_parts(3, 3).unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(a, GaloisField::new(27).unwrap());
    }

    #[test]
    fn test_subfield_membership() {
        let gf16 = GaloisField::new(16).unwrap();
        let subfield: Vec<_> = gf16
            .elements()
            .filter(|&a| gf16.is_in_subfield(a, 2))
            .collect();
        assert_eq!(subfield.len(), 4);
        assert!(subfield.contains(&GfElement::ZERO));
        assert!(subfield.contains(&GfElement::ONE));
    }
}
