mod linalg;
mod ops;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::ShapeError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};
use crate::Matrix;

/// Heap-backed matrix whose shape is chosen at run time.
///
/// The shape is fixed once built; there is no resize or reshape. Elements
/// are stored column by column, as in [`Matrix`]. Shape mismatches in the
/// operators panic with the [`ShapeError`] text, and the `checked_*` forms
/// return it instead.
///
/// `==` compares shapes before contents, and `clone` copies the storage.
///
/// ```
/// use densekit::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
/// let mut b = a.clone();
/// b[(1, 2)] = 0;
/// assert_eq!(a[(1, 2)], 6);
/// assert_eq!(a.shape(), b.shape());
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

fn check_len(what: &str, len: usize, nrows: usize, ncols: usize) {
    assert_eq!(
        len,
        nrows * ncols,
        "{} length {} does not match {}x{} matrix",
        what,
        len,
        nrows,
        ncols,
    );
}

impl<T: Scalar> DynMatrix<T> {
    /// `nrows x ncols` zeros; `_zero` only pins down `T`.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::zeros(2, 3, 0_i32);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m, DynMatrix::fill(2, 3, 0));
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Every element set to `value`.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self::from_vec(nrows, ncols, vec![value; nrows * ncols])
    }

    /// `n x n` identity; `_zero` only pins down `T`.
    pub fn eye(n: usize, _zero: T) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Build from elements listed row by row.
    ///
    /// Panics unless `row_major.len() == nrows * ncols`.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        check_len("slice", row_major.len(), nrows, ncols);
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }

    /// Take ownership of column-major storage.
    ///
    /// Panics unless `data.len() == nrows * ncols`.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::from_vec(2, 2, vec![1, 3, 2, 4]);
    /// assert_eq!(m, DynMatrix::from_rows(2, 2, &[1, 2, 3, 4]));
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        check_len("vec", data.len(), nrows, ncols);
        Self { data, nrows, ncols }
    }
}

impl<T> DynMatrix<T> {
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Build by evaluating `f(row, col)`, one column at a time.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let data = (0..ncols)
            .flat_map(|j| (0..nrows).map(move |i| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { data, nrows, ncols }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        col * self.nrows + row
    }

    pub(crate) fn require_square(&self) -> Result<(), ShapeError> {
        if self.is_square() {
            return Ok(());
        }
        Err(ShapeError::NotSquare {
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }
}

impl<T> MatrixRef<T> for DynMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}

impl<T: Scalar, const M: usize, const N: usize> From<Matrix<T, M, N>> for DynMatrix<T> {
    /// Both types share column-major order, so the columns are copied as is.
    ///
    /// ```
    /// use densekit::{DynMatrix, Matrix};
    /// let d = DynMatrix::from(Matrix::new([[1, 2, 3]]));
    /// assert_eq!(d.shape(), (1, 3));
    /// assert_eq!(d[(0, 2)], 3);
    /// ```
    fn from(m: Matrix<T, M, N>) -> Self {
        Self {
            data: m.data.iter().flatten().copied().collect(),
            nrows: M,
            ncols: N,
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> TryFrom<&DynMatrix<T>> for Matrix<T, M, N> {
    type Error = ShapeError;

    /// Fails with `ShapeError::Incompatible` unless the shape is `M x N`.
    fn try_from(d: &DynMatrix<T>) -> Result<Self, Self::Error> {
        if d.shape() != (M, N) {
            return Err(ShapeError::Incompatible {
                op: "convert",
                lhs: (M, N),
                rhs: d.shape(),
            });
        }
        Ok(Matrix::from_fn(|i, j| d[(i, j)]))
    }
}
