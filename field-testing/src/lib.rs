//! Utilities for testing field implementations.

#![no_std]

extern crate alloc;

use ctk_field::{GaloisField, GfElement};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A uniformly random element of `field`.
pub fn random_element<R: Rng>(field: &GaloisField, rng: &mut R) -> GfElement {
    field.element(rng.random_range(0..field.order()))
}

/// A uniformly random nonzero element of `field`.
pub fn random_unit<R: Rng>(field: &GaloisField, rng: &mut R) -> GfElement {
    field.element(rng.random_range(1..field.order()))
}

pub fn test_inverse(field: &GaloisField) {
    assert_eq!(None, field.try_inverse(GfElement::ZERO));
    assert_eq!(Some(GfElement::ONE), field.try_inverse(GfElement::ONE));

    for a in field.units() {
        let a_inv = field.try_inverse(a).unwrap();
        assert_eq!(field.mul(a, a_inv), GfElement::ONE, "{a} in {field}");
    }
}

pub fn test_field_axioms(field: &GaloisField) {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..200 {
        let x = random_element(field, &mut rng);
        let y = random_element(field, &mut rng);
        let z = random_element(field, &mut rng);

        assert_eq!(field.add(x, GfElement::ZERO), x);
        assert_eq!(field.mul(x, GfElement::ONE), x);
        assert_eq!(field.mul(x, GfElement::ZERO), GfElement::ZERO);
        assert_eq!(field.add(x, field.neg(x)), GfElement::ZERO);
        assert_eq!(field.sub(x, y), field.add(x, field.neg(y)));

        assert_eq!(field.add(x, y), field.add(y, x));
        assert_eq!(field.mul(x, y), field.mul(y, x));
        assert_eq!(
            field.add(field.add(x, y), z),
            field.add(x, field.add(y, z))
        );
        assert_eq!(
            field.mul(field.mul(x, y), z),
            field.mul(x, field.mul(y, z))
        );
        assert_eq!(
            field.mul(x, field.add(y, z)),
            field.add(field.mul(x, y), field.mul(x, z))
        );
    }
}

/// The Frobenius map is additive and fixes exactly the prime subfield.
pub fn test_frobenius(field: &GaloisField) {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..100 {
        let x = random_element(field, &mut rng);
        let y = random_element(field, &mut rng);
        assert_eq!(
            field.frobenius(field.add(x, y)),
            field.add(field.frobenius(x), field.frobenius(y))
        );
    }

    let fixed = field
        .elements()
        .filter(|&a| field.frobenius(a) == a)
        .count();
    assert_eq!(fixed, field.characteristic() as usize);

    let mut x = random_unit(field, &mut rng);
    let start = x;
    for _ in 0..field.degree() {
        x = field.frobenius(x);
    }
    assert_eq!(x, start);
}

/// The primitive element generates the whole multiplicative group, and
/// `log` inverts exponentiation.
pub fn test_primitive_element(field: &GaloisField) {
    let alpha = field.primitive_element();
    let group_order = field.order() as u64 - 1;
    assert_eq!(field.multiplicative_order(alpha), Some(group_order));
    assert_eq!(field.exp_u64(alpha, group_order), GfElement::ONE);

    for a in field.units() {
        let log = field.log(a).unwrap();
        assert_eq!(field.pow_primitive(log as u64), a);
    }
    assert_eq!(field.log(GfElement::ZERO), None);
}
