use alloc::vec::Vec;

use num_traits::{NumCast, ToPrimitive};

use crate::linalg::{det_in_place, gauss_jordan_in_place, LinalgError, ShapeError};
use crate::traits::{LinalgScalar, Scalar};

use super::DynMatrix;

impl<T: Scalar + ToPrimitive> DynMatrix<T> {
    fn try_cast<U: Scalar + NumCast>(&self) -> Result<DynMatrix<U>, LinalgError> {
        let data = self
            .data
            .iter()
            .map(|&x| <U as NumCast>::from(x))
            .collect::<Option<Vec<U>>>()
            .ok_or(LinalgError::Unrepresentable)?;
        Ok(DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Determinant with elimination carried out in `U`.
    ///
    /// A degenerate matrix has determinant zero. Errors are a non-square
    /// matrix or an element with no value in `U`.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[2_i64, 1, 7, 4]);
    /// assert_eq!(m.det_as::<f64>().unwrap(), 1.0);
    /// assert!(DynMatrix::zeros(2, 3, 0).det_as::<f64>().is_err());
    /// ```
    pub fn det_as<U: LinalgScalar + NumCast>(&self) -> Result<U, LinalgError> {
        self.require_square()?;
        let mut w = self.try_cast::<U>()?;
        Ok(det_in_place(&mut w))
    }

    /// Inverse computed in `U` via Gauss-Jordan elimination.
    pub fn inverse_as<U: LinalgScalar + NumCast>(&self) -> Result<DynMatrix<U>, LinalgError> {
        self.try_cast::<U>()?.inverse()
    }

    /// Solve `AX = B` in `U`. `B` may have any number of columns.
    pub fn solve_as<U: LinalgScalar + NumCast>(
        &self,
        b: &DynMatrix<T>,
    ) -> Result<DynMatrix<U>, LinalgError> {
        self.try_cast::<U>()?.solve_matrix(&b.try_cast::<U>()?)
    }
}

impl<T: LinalgScalar> DynMatrix<T> {
    /// Determinant via Gaussian elimination.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert_eq!(m.det().unwrap(), 0.0);
    /// ```
    pub fn det(&self) -> Result<T, ShapeError> {
        self.require_square()?;
        let mut w = self.clone();
        Ok(det_in_place(&mut w))
    }

    /// Matrix inverse via Gauss-Jordan elimination.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// use densekit::linalg::LinalgError;
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 2.0]);
    /// let a_inv = a.inverse().unwrap();
    /// assert_eq!(a_inv, DynMatrix::from_rows(2, 2, &[0.5, 0.0, 0.0, 0.5]));
    ///
    /// let singular = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Degenerate);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        self.require_square()?;
        let mut w = self.clone();
        let mut inv = DynMatrix::eye(self.nrows, T::zero());
        gauss_jordan_in_place(&mut w, &mut inv)?;
        Ok(inv)
    }

    /// Solve `AX = B`. `B` may have any number of columns.
    pub fn solve_matrix(&self, b: &DynMatrix<T>) -> Result<Self, LinalgError> {
        self.require_square()?;
        let mut w = self.clone();
        let mut x = b.clone();
        gauss_jordan_in_place(&mut w, &mut x)?;
        Ok(x)
    }

    /// Solve `Ax = b` for a right-hand side given as a slice.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let x = a.solve(&[4.0, 11.0]).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        let rhs = DynMatrix::from_vec(b.len(), 1, b.to_vec());
        Ok(self.solve_matrix(&rhs)?.data)
    }
}
