//! Matrix library.

#![no_std]

extern crate alloc;

pub mod dense;
mod error;
pub mod linalg;
pub mod standard;

pub use error::*;

pub trait Matrix<T> {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    fn is_square(&self) -> bool {
        self.height() == self.width()
    }
}
