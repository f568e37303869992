mod norm;
mod ops;
mod square;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense `M x N` matrix whose shape is part of its type.
///
/// Elements live inline in a column-major `[[T; M]; N]`, so the type is
/// `Copy` whenever `T` is and a copy never shares storage with its source.
/// The shape is fixed for the life of the value: operands of `+`, `-`, `*`
/// and `inverse` that do not fit are rejected by the compiler rather than
/// at run time.
///
/// ```
/// use densekit::Matrix;
///
/// let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!((a.nrows(), a.ncols()), (2, 3));
/// assert_eq!(a[(1, 0)], 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; M]; N],
}

/// 2x2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3x3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4x4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Build from `M` rows of `N` elements each.
    pub fn new(rows: [[T; N]; M]) -> Self
    where
        T: Copy,
    {
        Self {
            data: core::array::from_fn(|j| core::array::from_fn(|i| rows[i][j])),
        }
    }

    pub const fn nrows(&self) -> usize {
        M
    }

    pub const fn ncols(&self) -> usize {
        N
    }

    pub const fn is_square(&self) -> bool {
        M == N
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Every element equal to `value`.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m: Matrix<f32, 2, 4> = Matrix::fill(-0.5);
    /// assert!((0..2).all(|i| (0..4).all(|j| m[(i, j)] == -0.5)));
    /// ```
    pub fn fill(value: T) -> Self {
        Self {
            data: [[value; M]; N],
        }
    }

    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Identity. Only square shapes have one.
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        (0..N).for_each(|k| m.data[k][k] = T::one());
        m
    }
}

impl<T, const M: usize, const N: usize> MatrixRef<T> for Matrix<T, M, N> {
    fn nrows(&self) -> usize {
        M
    }

    fn ncols(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col][row]
    }
}

impl<T, const M: usize, const N: usize> MatrixMut<T> for Matrix<T, M, N> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col][row]
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_land_in_place() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let mut seen = [0; 6];
        for i in 0..2 {
            for j in 0..3 {
                seen[i * 3 + j] = m[(i, j)];
            }
        }
        assert_eq!(seen, [1, 2, 3, 4, 5, 6]);
        // column-major underneath
        assert_eq!(m.data, [[1, 4], [2, 5], [3, 6]]);
    }

    #[test]
    fn zero_sized_shapes() {
        let e: Matrix<f64, 0, 0> = Matrix::eye();
        assert!(e.is_square());
        let w: Matrix<i32, 0, 3> = Matrix::new([]);
        assert_eq!((w.nrows(), w.ncols()), (0, 3));
    }

    #[test]
    fn eye_has_ones_on_diagonal_only() {
        let id: Matrix4<i64> = Matrix::eye();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(id[(i, j)], i64::from(i == j));
            }
        }
    }

    #[test]
    fn fill_and_zeros() {
        let m: Matrix<u8, 3, 2> = Matrix::fill(9);
        assert_eq!(m.data, [[9; 3]; 2]);
        assert_eq!(Matrix::<f64, 2, 2>::zeros(), Matrix::fill(0.0));
    }

    #[test]
    fn copies_do_not_alias() {
        let a = Matrix3::fill(1.0_f64);
        let mut b = a;
        b[(2, 1)] = 7.0;
        assert_eq!(a[(2, 1)], 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn write_through_trait_and_index() {
        let mut m = Matrix2::fill(0);
        *m.get_mut(0, 1) = 3;
        m[(1, 0)] += 4;
        assert_eq!(m, Matrix::new([[0, 3], [4, 0]]));
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::new([[4, 0], [0, 3]]));
    }
}
