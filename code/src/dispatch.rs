//! The construction pipeline: cosets, bound, polynomials, matrices,
//! verification, and finally classification into the most specific kind of
//! code.

use alloc::vec::Vec;

use ctk_coset::{Coset, CosetError, bound, defining_set, flatten, representatives};
use ctk_field::{FieldExtension, GaloisField};
use ctk_matrix::standard::standard_form;
use ctk_poly::PolynomialRing;
use ctk_util::multiplicative_order;
use tracing::{debug, info, instrument};

use crate::matrices::{generator_matrix, parity_check_matrix};
use crate::synthesis::{generator_polynomial, idempotent, parity_check_polynomial};
use crate::verify::{
    verify_factorization, verify_idempotent, verify_orthogonality, verify_standard_form,
};
use crate::{CodeError, CodeKind, CodeResult, ConstructionConfig, CyclicCode};

/// What the caller asked for. BCH and Reed-Solomon requests carry their
/// `(δ, b)` as a second classification candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Request {
    Cyclic,
    Bch { delta: usize, offset: usize },
    ReedSolomon { delta: usize, offset: usize },
}

/// The seeds `b, b + 1, ..., b + δ - 2` reduced mod `n`.
pub(crate) fn consecutive_seeds(n: usize, delta: usize, offset: usize) -> Vec<usize> {
    let offset = offset % n;
    (0..delta.saturating_sub(1)).map(|i| (offset + i % n) % n).collect()
}

#[instrument(level = "debug", skip_all, fields(q = field.order(), n = n, request = ?request))]
pub(crate) fn construct(
    field: GaloisField,
    n: usize,
    cosets: Vec<Coset>,
    request: Request,
    config: ConstructionConfig,
) -> CodeResult<CyclicCode> {
    let q = field.order() as u64;
    let degree = multiplicative_order(q, n as u64).ok_or(CosetError::NotCoprime { q, n })?;
    let extension = FieldExtension::cached(&field, degree)?;
    let ext = extension.ext().clone();
    let beta = ext
        .root_of_unity(n as u64)
        .ok_or(CodeError::InvalidLength(n))?;

    let defining = flatten(&cosets);
    let k = n - defining.len();
    if k == 0 {
        return Err(CodeError::TrivialCode { n });
    }
    debug!(degree, defining_set_len = defining.len(), k, "defining set");

    let distance_bound = bound(n, &cosets, config.bound);

    let ring = PolynomialRing::new(ext);
    let g = generator_polynomial(&ring, beta, &defining);
    let h = parity_check_polynomial(&ring, beta, n, &defining);
    verify_factorization(&ring, &g, &h, n)?;

    let e = idempotent(&ring, &g, &h, n)?;
    if config.verify_idempotent {
        verify_idempotent(&ring, &e, n)?;
    }

    let base_g = ring
        .restrict(&g, &extension)?
        .ok_or(CodeError::NotOverBaseField)?;
    let base_h = ring
        .restrict(&h, &extension)?
        .ok_or(CodeError::NotOverBaseField)?;

    let g_matrix = generator_matrix(n, k, &base_g)?;
    let h_matrix = parity_check_matrix(n, k, &base_h)?;
    let h_matrix = verify_orthogonality(&field, &g_matrix, h_matrix, n)?;

    let standard = standard_form(&field, &g_matrix);
    verify_standard_form(&standard, k)?;

    let (kind, design_distance, offset) = classify(
        &field,
        n,
        degree,
        &defining,
        request,
        (distance_bound.design_distance, distance_bound.offset),
    )?;

    let upper_bound = (n - k + 1).min(base_g.weight());
    let distance = match kind {
        CodeKind::ReedSolomon => Some(n - k + 1),
        _ => (distance_bound.certified() == upper_bound).then_some(upper_bound),
    };
    info!(%kind, n, k, ?distance, design_distance, "constructed code");

    Ok(CyclicCode {
        kind,
        field,
        extension,
        ring,
        beta,
        n,
        k,
        distance,
        offset,
        design_distance,
        upper_bound,
        bound: distance_bound,
        representatives: representatives(&cosets),
        cosets,
        defining_set: defining,
        generator_polynomial: g,
        parity_check_polynomial: h,
        base_generator_polynomial: base_g,
        base_parity_check_polynomial: base_h,
        idempotent: e,
        generator_matrix: g_matrix,
        parity_check_matrix: h_matrix,
        standard_form: standard,
        config,
    })
}

/// Tries the estimator's `(δ, b)` and then the requested one. The first
/// candidate with `δ >= 2` whose consecutive range regenerates the defining
/// set makes the code BCH, and Reed-Solomon if it also lives in `GF(q)`
/// itself with `n = q - 1`.
fn classify(
    field: &GaloisField,
    n: usize,
    degree: u32,
    defining: &[usize],
    request: Request,
    estimated: (usize, usize),
) -> CodeResult<(CodeKind, usize, usize)> {
    let requested = match request {
        Request::Cyclic => None,
        Request::Bch { delta, offset } | Request::ReedSolomon { delta, offset } => {
            Some((delta, offset))
        }
    };
    let q = field.order() as u64;

    for (delta, offset) in core::iter::once(estimated).chain(requested) {
        if delta < 2 {
            continue;
        }
        let seeds = consecutive_seeds(n, delta, offset);
        if defining_set(&seeds, q, n)? != defining {
            continue;
        }
        let kind = if degree == 1 && n as u64 == q - 1 {
            CodeKind::ReedSolomon
        } else {
            CodeKind::Bch
        };
        return Ok((kind, delta, offset));
    }

    Ok((CodeKind::Cyclic, estimated.0, estimated.1))
}
