use ctk_coset::BoundConfig;

/// Options for the `_with_config` constructors of
/// [`CyclicCode`](crate::CyclicCode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstructionConfig {
    pub bound: BoundConfig,
    /// Re-check `e^2 = e mod x^n - 1` after computing the idempotent.
    pub verify_idempotent: bool,
}

impl ConstructionConfig {
    /// Every optional check and refinement turned on.
    pub const fn thorough() -> Self {
        Self {
            bound: BoundConfig {
                hartmann_tzeng: true,
            },
            verify_idempotent: true,
        }
    }
}
