//! Cyclotomic cosets of `q` modulo `n` and the defining sets built from them.
//!
//! For `gcd(q, n) = 1`, multiplication by `q` permutes `Z_n`; its orbits are
//! the cyclotomic cosets. The roots `β^i` of a cyclic code's generator
//! polynomial are closed under the Frobenius map exactly when the exponents
//! `i` form a union of cosets, so every defining set here is built coset by
//! coset.

#![no_std]

extern crate alloc;

mod bound;
mod error;


use alloc::vec;
use alloc::vec::Vec;

pub use bound::*;
use ctk_util::{gcd, mul_mod};
pub use error::*;
use itertools::Itertools;

/// A cyclotomic coset, in first-visit order starting from the seed.
pub type Coset = Vec<usize>;

fn check_params(q: u64, n: usize) -> CosetResult<()> {
    if n == 0 {
        return Err(CosetError::ZeroLength);
    }
    if q < 2 {
        return Err(CosetError::InvalidBase(q));
    }
    if gcd(q, n as u64) != 1 {
        return Err(CosetError::NotCoprime { q, n });
    }
    Ok(())
}

/// Orbit of `x` under multiplication by `q`, without parameter checks.
fn orbit(x: usize, q: u64, n: usize) -> Coset {
    let (q, n64) = (q % n as u64, n as u64);
    let start = x % n;
    let mut coset = vec![start];
    let mut y = mul_mod(start as u64, q, n64) as usize;
    while y != start {
        coset.push(y);
        y = mul_mod(y as u64, q, n64) as usize;
    }
    coset
}

/// Returns `{x, xq, xq^2, ...} mod n` in first-visit order.
pub fn coset(x: usize, q: u64, n: usize) -> CosetResult<Coset> {
    check_params(q, n)?;
    Ok(orbit(x, q, n))
}

/// The cosets of the given seeds, skipping seeds already covered by an
/// earlier coset. Seeds are reduced modulo `n`.
pub fn defining_cosets(seeds: &[usize], q: u64, n: usize) -> CosetResult<Vec<Coset>> {
    check_params(q, n)?;
    let mut covered = vec![false; n];
    let mut cosets = Vec::new();
    for &seed in seeds {
        if covered[seed % n] {
            continue;
        }
        let coset = orbit(seed, q, n);
        coset.iter().for_each(|&y| covered[y] = true);
        cosets.push(coset);
    }
    Ok(cosets)
}

/// The sorted union of the cosets of the given seeds.
pub fn defining_set(seeds: &[usize], q: u64, n: usize) -> CosetResult<Vec<usize>> {
    defining_cosets(seeds, q, n).map(|cosets| flatten(&cosets))
}

/// Sorted, deduplicated union of `cosets`.
pub fn flatten(cosets: &[Coset]) -> Vec<usize> {
    cosets.iter().flatten().copied().sorted_unstable().dedup().collect()
}

/// The full partition of `Z_n` into cyclotomic cosets, ordered by representative.
pub fn all_cyclotomic_cosets(q: u64, n: usize) -> CosetResult<Vec<Coset>> {
    let seeds: Vec<usize> = (0..n).collect();
    defining_cosets(&seeds, q, n)
}

/// The minimum of each coset.
pub fn representatives(cosets: &[Coset]) -> Vec<usize> {
    cosets
        .iter()
        .filter_map(|coset| coset.iter().min().copied())
        .collect()
}

/// The cosets disjoint from `defining_set`, ordered by representative.
pub fn complement_cosets(defining_set: &[usize], q: u64, n: usize) -> CosetResult<Vec<Coset>> {
    let mut in_set = vec![false; n];
    for &x in defining_set {
        if x >= n {
            return Err(CosetError::ResidueOutOfRange { residue: x, n });
        }
        in_set[x] = true;
    }
    let seeds: Vec<usize> = (0..n).filter(|&x| !in_set[x]).collect();
    defining_cosets(&seeds, q, n)
}

/// Returns `{-x mod n : x in set}`, sorted.
pub fn negated(set: &[usize], n: usize) -> Vec<usize> {
    set.iter()
        .map(|&x| (n - x % n) % n)
        .sorted_unstable()
        .dedup()
        .collect()
}

/// The defining set `-(Z_n \ D)` of the dual of the code with defining set `D`.
pub fn dual_defining_set(defining_set: &[usize], n: usize) -> Vec<usize> {
    let complement: Vec<usize> = (0..n).filter(|x| !defining_set.contains(x)).collect();
    negated(&complement, n)
}

/// Splits an exponent set into whole cyclotomic cosets, ordered by
/// representative, or reports the first residue whose coset is cut.
pub fn cosets_of_exponents(exponents: &[usize], q: u64, n: usize) -> CosetResult<Vec<Coset>> {
    check_params(q, n)?;
    let mut in_set = vec![false; n];
    for &x in exponents {
        if x >= n {
            return Err(CosetError::ResidueOutOfRange { residue: x, n });
        }
        in_set[x] = true;
    }

    let mut covered = vec![false; n];
    let mut cosets = Vec::new();
    for x in 0..n {
        if !in_set[x] || covered[x] {
            continue;
        }
        let coset = orbit(x, q, n);
        if let Some(&missing) = coset.iter().find(|&&y| !in_set[y]) {
            return Err(CosetError::NotUnionOfCosets { residue: missing });
        }
        coset.iter().for_each(|&y| covered[y] = true);
        cosets.push(coset);
    }
    Ok(cosets)
}

pub fn is_union_of_cosets(set: &[usize], q: u64, n: usize) -> CosetResult<bool> {
    match cosets_of_exponents(set, q, n) {
        Ok(_) => Ok(true),
        Err(CosetError::NotUnionOfCosets { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}
