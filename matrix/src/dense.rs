use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::Matrix;

/// A dense matrix stored in row-major form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RowMajorMatrix<T> {
    /// All values, stored in row-major order.
    pub values: Vec<T>,
    pub width: usize,
}

impl<T> RowMajorMatrix<T> {
    #[must_use]
    pub fn new(values: Vec<T>, width: usize) -> Self {
        debug_assert!(
            (width == 0 && values.is_empty()) || (width != 0 && values.len() % width == 0)
        );
        Self { values, width }
    }

    /// Stacks equally long rows.
    ///
    /// # Panics
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<T>>, width: usize) -> Self {
        let mut values = Vec::new();
        for row in rows {
            assert_eq!(row.len(), width, "row length does not match matrix width");
            values.extend(row);
        }
        Self::new(values, width)
    }

    #[inline]
    pub fn row_slice(&self, r: usize) -> &[T] {
        debug_assert!(r < self.height());
        &self.values[r * self.width..(r + 1) * self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        debug_assert!(r < self.height());
        &mut self.values[r * self.width..(r + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.width.max(1))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.values.chunks_exact_mut(self.width.max(1))
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.values.split_at_mut(hi * self.width);
        head[lo * self.width..(lo + 1) * self.width].swap_with_slice(&mut tail[..self.width]);
    }

    /// Mutable access to two distinct rows at once.
    pub fn two_rows_mut(&mut self, a: usize, b: usize) -> (&mut [T], &mut [T]) {
        assert_ne!(a, b);
        let w = self.width;
        if a < b {
            let (head, tail) = self.values.split_at_mut(b * w);
            (&mut head[a * w..(a + 1) * w], &mut tail[..w])
        } else {
            let (head, tail) = self.values.split_at_mut(a * w);
            (&mut tail[..w], &mut head[b * w..(b + 1) * w])
        }
    }

    pub fn map<U, F: Fn(&T) -> U>(&self, f: F) -> RowMajorMatrix<U> {
        RowMajorMatrix {
            values: self.values.iter().map(f).collect(),
            width: self.width,
        }
    }
}

impl<T: Clone> RowMajorMatrix<T> {
    #[must_use]
    pub fn filled(value: T, height: usize, width: usize) -> Self {
        Self::new(vec![value; height * width], width)
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.values[r * self.width + c].clone()
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        self.values[r * self.width + c] = value;
    }

    pub fn column(&self, c: usize) -> impl Iterator<Item = T> + '_ {
        self.rows().map(move |row| row[c].clone())
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let (height, width) = (self.height(), self.width);
        let values = (0..width)
            .flat_map(|c| (0..height).map(move |r| (r, c)))
            .map(|(r, c)| self.get(r, c))
            .collect();
        Self::new(values, height)
    }
}

impl<T> Matrix<T> for RowMajorMatrix<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }
}

impl<T: Display> Display for RowMajorMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "[{}]", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_transpose() {
        let m = RowMajorMatrix::new(vec![1, 2, 3, 4, 5, 6], 3);
        let t = m.transpose();
        assert_eq!(t.dimensions(), (3, 2));
        assert_eq!(t.values, vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_swap_rows() {
        let mut m = RowMajorMatrix::new(vec![1, 2, 3, 4, 5, 6], 2);
        m.swap_rows(2, 0);
        assert_eq!(m.values, vec![5, 6, 3, 4, 1, 2]);
        m.swap_rows(1, 1);
        assert_eq!(m.values, vec![5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn test_two_rows_mut() {
        let mut m = RowMajorMatrix::new(vec![1, 2, 3, 4], 2);
        let (a, b) = m.two_rows_mut(1, 0);
        a[0] += b[0];
        assert_eq!(m.values, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_empty_matrix() {
        let m: RowMajorMatrix<u32> = RowMajorMatrix::new(vec![], 5);
        assert_eq!(m.dimensions(), (0, 5));
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.transpose().dimensions(), (0, 0));
    }

    #[test]
    fn test_display() {
        let m = RowMajorMatrix::new(vec![1, 0, 0, 1], 2);
        assert_eq!(m.to_string(), "[1 0]\n[0 1]\n");
    }
}
