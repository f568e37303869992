use core::fmt;

use num_traits::{NumCast, ToPrimitive};

use crate::traits::{LinalgScalar, Scalar};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(|col| core::array::from_fn(|row| f(row, col))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m = Matrix::new([[1, 4], [9, 16]]);
    /// let r = m.map(|x| x * 2);
    /// assert_eq!(r, Matrix::new([[2, 8], [18, 32]]));
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, M, N>
    where
        T: Copy,
    {
        Matrix {
            data: core::array::from_fn(|col| core::array::from_fn(|row| f(self.data[col][row]))),
        }
    }
}

impl<T: Scalar + ToPrimitive, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Numeric conversion of every element, e.g. `i64` to `f64`.
    ///
    /// `None` if any element has no value in `U`.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m = Matrix::new([[1_i64 << 40, -3]]);
    /// assert_eq!(m.try_cast::<f64>(), Some(Matrix::new([[1_099_511_627_776.0, -3.0]])));
    /// assert_eq!(m.try_cast::<i16>(), None);
    /// ```
    pub fn try_cast<U: Scalar + NumCast>(&self) -> Option<Matrix<U, M, N>> {
        let mut out = Matrix::<U, M, N>::zeros();
        for (dst, &src) in out.data.iter_mut().flatten().zip(self.data.iter().flatten()) {
            *dst = <U as NumCast>::from(src)?;
        }
        Some(out)
    }
}

// ── Comparison ──────────────────────────────────────────────────────

impl<T: LinalgScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Element-wise comparison within an absolute tolerance on the modulus
    /// of the difference.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = a + Matrix::fill(1e-13);
    /// assert!(a.approx_eq(&b, 1e-12));
    /// assert!(!a.approx_eq(&b, 1e-14));
    /// ```
    pub fn approx_eq(&self, other: &Self, tol: T::Real) -> bool {
        for j in 0..N {
            for i in 0..M {
                if (self.data[j][i] - other.data[j][i]).modulus() > tol {
                    return false;
                }
            }
        }
        true
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-major, elements separated by a single space, one row per line.
///
/// ```
/// use densekit::Matrix;
/// let m = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(m.to_string(), "1 2\n3 4");
/// ```
impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..M {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..N {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn() {
        let m: Matrix<usize, 2, 3> = Matrix::from_fn(|i, j| i * 3 + j);
        assert_eq!(m, Matrix::new([[0, 1, 2], [3, 4, 5]]));
    }

    #[test]
    fn try_cast_wide_integers() {
        let m = Matrix::new([[i64::MAX, 0], [-7, 1]]);
        let f: Matrix<f64, 2, 2> = m.try_cast().unwrap();
        assert_eq!(f[(0, 0)], 9.223372036854775807e18);
        assert_eq!(f[(1, 0)], -7.0);
        assert!(Matrix::new([[u64::MAX]]).try_cast::<f64>().is_some());
    }

    #[test]
    fn try_cast_out_of_range() {
        assert_eq!(Matrix::new([[12, 300]]).try_cast::<u8>(), None);
        assert_eq!(Matrix::new([[1.0, f64::NAN]]).try_cast::<i32>(), None);
    }

    #[test]
    fn approx_eq_detects_difference() {
        let a = Matrix::new([[1.0_f64, 2.0]]);
        let b = Matrix::new([[1.0_f64, 2.1]]);
        assert!(!a.approx_eq(&b, 0.05));
        assert!(a.approx_eq(&b, 0.2));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn display() {
        use alloc::string::ToString;
        let m = Matrix::new([[1.5, -2.0, 3.0], [4.0, 5.0, 6.25]]);
        assert_eq!(m.to_string(), "1.5 -2 3\n4 5 6.25");
    }
}
