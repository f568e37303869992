use core::fmt;

use crate::traits::LinalgScalar;

use super::DynMatrix;

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::from_rows(1, 3, &[1, 2, 3]);
    /// assert_eq!(m.map(|x| x * x), DynMatrix::from_rows(1, 3, &[1, 4, 9]));
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        DynMatrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: LinalgScalar> DynMatrix<T> {
    /// Element-wise comparison within an absolute tolerance.
    ///
    /// Matrices of different shapes are never approximately equal.
    pub fn approx_eq(&self, other: &Self, tol: T::Real) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).modulus() <= tol)
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-major, elements separated by a single space, one row per line.
impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}
