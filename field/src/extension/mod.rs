//! Splitting fields and the embedding of a field into its extensions.

use std::sync::{Arc, LazyLock, Mutex};

use ctk_util::gcd;
use hashbrown::HashMap;
use tracing::{debug, instrument};

use crate::field::lock;
use crate::{FieldError, FieldResult, GaloisField, GfElement};

static EXTENSIONS: LazyLock<Mutex<HashMap<(u32, u32, u32), FieldExtension>>> =
    LazyLock::new(Default::default);

struct Embedding {
    /// `images[a]` is the image of the base element with encoding `a`.
    images: Vec<GfElement>,
    preimages: HashMap<GfElement, GfElement>,
}

/// A degree-`d` extension `GF(q^d)` of a base field `GF(q)`, together with
/// the field embedding `GF(q) → GF(q^d)` and its partial inverse.
///
/// The image of the base primitive element is a root of the base modulus,
/// so polynomials over the base field keep their roots when embedded.
#[derive(Clone)]
pub struct FieldExtension {
    base: GaloisField,
    ext: GaloisField,
    degree: u32,
    embedding: Arc<Embedding>,
}

impl FieldExtension {
    #[instrument(level = "debug", skip_all, fields(base = %base, degree = degree))]
    pub fn new(base: &GaloisField, degree: u32) -> FieldResult<Self> {
        if degree == 0 {
            return Err(FieldError::ZeroDegree);
        }
        let p = base.characteristic() as u64;
        let ext = GaloisField::cached_parts(p, base.degree() * degree)?;

        let q = base.order() as u64;
        let ratio = (ext.order() as u64 - 1) / (q - 1);
        let modulus: Vec<GfElement> = base
            .modulus()
            .iter()
            .map(|&c| ext.from_u64(c as u64))
            .collect();

        // The roots of a primitive polynomial of GF(q) are the generators of
        // the order-(q-1) subgroup of GF(q^d)*.
        let gamma = (1..=q - 1)
            .filter(|&j| gcd(j, q - 1) == 1)
            .map(|j| ext.pow_primitive(j * ratio))
            .find(|&gamma| {
                let value = modulus
                    .iter()
                    .rev()
                    .fold(GfElement::ZERO, |acc, &c| ext.add(ext.mul(acc, gamma), c));
                value.is_zero()
            })
            .ok_or(FieldError::NoEmbedding {
                base: base.order(),
                ext: ext.order(),
            })?;
        debug!(%gamma, "embedding base primitive element");

        let mut images = vec![GfElement::ZERO; base.order() as usize];
        for i in 0..q - 1 {
            images[base.pow_primitive(i).value() as usize] = ext.exp_u64(gamma, i);
        }
        let preimages = images
            .iter()
            .enumerate()
            .map(|(a, &image)| (image, GfElement(a as u32)))
            .collect();

        Ok(Self {
            base: base.clone(),
            ext,
            degree,
            embedding: Arc::new(Embedding { images, preimages }),
        })
    }

    /// Like [`FieldExtension::new`], but memoised for the lifetime of the
    /// process under the key `(p, t, degree)`.
    pub fn cached(base: &GaloisField, degree: u32) -> FieldResult<Self> {
        let key = (base.characteristic(), base.degree(), degree);
        if let Some(extension) = lock(&EXTENSIONS).get(&key) {
            return Ok(extension.clone());
        }
        let extension = Self::new(base, degree)?;
        Ok(lock(&EXTENSIONS).entry(key).or_insert(extension).clone())
    }

    #[must_use]
    pub fn base(&self) -> &GaloisField {
        &self.base
    }

    #[must_use]
    pub fn ext(&self) -> &GaloisField {
        &self.ext
    }

    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Maps an element of the base field into the extension.
    #[must_use]
    #[inline]
    pub fn embed(&self, a: GfElement) -> GfElement {
        self.embedding.images[a.value() as usize]
    }

    /// Maps an element of the extension back to the base field, if it lies
    /// in the image of the embedding.
    #[must_use]
    pub fn restrict(&self, a: GfElement) -> Option<GfElement> {
        self.embedding.preimages.get(&a).copied()
    }

    #[must_use]
    pub fn contains(&self, a: GfElement) -> bool {
        self.embedding.preimages.contains_key(&a)
    }
}

impl PartialEq for FieldExtension {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.degree == other.degree
    }
}

impl Eq for FieldExtension {}

impl core::fmt::Debug for FieldExtension {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldExtension")
            .field("base", &self.base)
            .field("ext", &self.ext)
            .finish()
    }
}
