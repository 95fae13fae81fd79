use alloc::vec;
use alloc::vec::Vec;

use ctk_util::gcd;
use tracing::{debug, instrument};

use crate::{Coset, flatten};

/// Options for [`bound`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundConfig {
    /// Also search for a Hartmann-Tzeng refinement of the BCH bound. The
    /// search is polynomial but several orders slower than the run scan.
    pub hartmann_tzeng: bool,
}

/// Lower bounds on the minimum distance of a cyclic code, read off its
/// defining set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceBound {
    /// One more than the longest run of consecutive residues (mod `n`) in the
    /// defining set.
    pub design_distance: usize,
    /// The start of the first longest run.
    pub offset: usize,
    /// The Hartmann-Tzeng bound, equal to `design_distance` when the
    /// refinement is disabled or finds nothing better.
    pub hartmann_tzeng: usize,
    /// The residues of the longest run, in order.
    pub run: Vec<usize>,
    /// Indices into the input cosets, in the order they first contribute to
    /// the longest run.
    pub contributing_cosets: Vec<usize>,
}

impl DistanceBound {
    /// The best certified lower bound.
    pub fn certified(&self) -> usize {
        self.design_distance.max(self.hartmann_tzeng)
    }
}

/// Scans the union of `cosets` for runs `b, b+1, ..., b+δ-2` (wrapping mod
/// `n`), giving the BCH bound `d >= δ`. Ties go to the lowest start. An empty
/// defining set gives `δ = 1, b = 0`.
///
/// # Panics
/// Panics if a coset contains a residue `>= n`.
#[instrument(level = "debug", skip_all, fields(n = n, cosets = cosets.len()))]
pub fn bound(n: usize, cosets: &[Coset], config: BoundConfig) -> DistanceBound {
    let mut owner = vec![None; n];
    for (idx, coset) in cosets.iter().enumerate() {
        for &y in coset {
            assert!(y < n, "residue {y} is out of range for length {n}");
            owner[y] = Some(idx);
        }
    }
    let in_set = |y: usize| owner[y % n].is_some();

    let mut best_len = 0;
    let mut offset = 0;
    for x in flatten(cosets) {
        let len = run_length(x, n, in_set);
        if len > best_len {
            best_len = len;
            offset = x;
        }
    }

    let run: Vec<usize> = (0..best_len).map(|i| (offset + i) % n).collect();
    let mut contributing_cosets = Vec::new();
    for idx in run.iter().filter_map(|&y| owner[y]) {
        if !contributing_cosets.contains(&idx) {
            contributing_cosets.push(idx);
        }
    }

    let design_distance = best_len + 1;
    let hartmann_tzeng = if config.hartmann_tzeng {
        hartmann_tzeng(n, in_set).max(design_distance)
    } else {
        design_distance
    };
    debug!(design_distance, offset, hartmann_tzeng, "distance bound");

    DistanceBound {
        design_distance,
        offset,
        hartmann_tzeng,
        run,
        contributing_cosets,
    }
}

/// Length of the run of members starting at `x`, capped at `n`.
fn run_length(x: usize, n: usize, in_set: impl Fn(usize) -> bool) -> usize {
    (0..n).take_while(|&i| in_set(x + i)).count()
}

/// Searches `A + {0, c, ..., s c} ⊆ D` with `A` a run of `r` consecutive
/// members and `gcd(n, c) <= r`, which certifies `d >= r + 1 + s`.
fn hartmann_tzeng(n: usize, in_set: impl Fn(usize) -> bool + Copy) -> usize {
    let mut best = 0;
    for a in (0..n).filter(|&a| in_set(a)) {
        let max_r = run_length(a, n, in_set);
        for r in 1..=max_r {
            for c in 2..n {
                let g = gcd(n as u64, c as u64) as usize;
                if g > r {
                    continue;
                }
                // j·c cycles with period n / g.
                let s = (1..n / g)
                    .take_while(|&j| (0..r).all(|i| in_set(a + i + j * c)))
                    .count();
                best = best.max(r + 1 + s);
            }
        }
    }
    best
}
