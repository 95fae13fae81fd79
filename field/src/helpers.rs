use itertools::Itertools;

use crate::{GaloisField, GfElement};

/// Computes `Σ u_i v_i`.
///
/// # Panics
/// Panics if the slices have different lengths.
#[must_use]
pub fn dot_product(field: &GaloisField, u: &[GfElement], v: &[GfElement]) -> GfElement {
    u.iter()
        .zip_eq(v)
        .fold(GfElement::ZERO, |acc, (&a, &b)| field.add(acc, field.mul(a, b)))
}

/// `x += s * y`, elementwise.
pub fn add_scaled_slice_in_place(
    field: &GaloisField,
    x: &mut [GfElement],
    y: &[GfElement],
    s: GfElement,
) {
    if s.is_zero() {
        assert_eq!(x.len(), y.len());
        return;
    }
    x.iter_mut()
        .zip_eq(y)
        .for_each(|(x_i, &y_i)| *x_i = field.add(*x_i, field.mul(y_i, s)));
}

/// `x *= s`, elementwise.
pub fn scale_slice_in_place(field: &GaloisField, x: &mut [GfElement], s: GfElement) {
    x.iter_mut().for_each(|x_i| *x_i = field.mul(*x_i, s));
}

/// The powers `1, a, a^2, ...` of `a`, lazily.
pub fn powers(field: &GaloisField, a: GfElement) -> impl Iterator<Item = GfElement> + '_ {
    core::iter::successors(Some(GfElement::ONE), move |&acc| Some(field.mul(acc, a)))
}
