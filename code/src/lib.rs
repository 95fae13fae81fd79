//! Construction and verification of cyclic codes over finite fields.
//!
//! [`CyclicCode`] is the entry point. Its constructors take the base field
//! order and either seed residues, a design distance, or a generator
//! polynomial, and return a fully verified record classified as a general
//! cyclic, BCH or Reed-Solomon code.

#![no_std]

extern crate alloc;

mod code;
mod config;
mod cyclic;
mod dispatch;
mod error;
mod family;
pub mod matrices;
pub mod synthesis;
pub mod verify;

pub use code::*;
pub use config::*;
pub use cyclic::*;
pub use error::*;
pub use family::*;
