//! Finite fields `GF(p^m)` whose order is chosen at runtime.
//!
//! Elements are plain [`GfElement`] handles; all arithmetic goes through the
//! [`GaloisField`] descriptor that owns the log/exp tables, or multiplies in
//! the polynomial basis for fields too large to tabulate. Descriptors are
//! immutable and cheap to clone, so they can be shared across threads.

mod element;
mod error;
pub mod extension;
mod field;
mod helpers;
mod primitive;

pub use element::*;
pub use error::*;
pub use extension::FieldExtension;
pub use field::*;
pub use helpers::*;
