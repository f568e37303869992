use num_traits::{NumCast, ToPrimitive};

use crate::linalg::{det_in_place, gauss_jordan_in_place, LinalgError};
use crate::matrix::vector::Vector;
use crate::traits::{LinalgScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self[(i, i)])
    }
}

impl<T: Scalar + ToPrimitive, const N: usize> Matrix<T, N, N> {
    fn promote<U: LinalgScalar + NumCast>(&self) -> Result<Matrix<U, N, N>, LinalgError> {
        self.try_cast().ok_or(LinalgError::Unrepresentable)
    }

    /// Determinant, with elimination carried out in `U`.
    ///
    /// Integer matrices of any width reach the engine this way; the only
    /// failure is an element with no value in `U`.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m = Matrix::new([[2_i64, 1], [7, 4]]);
    /// assert_eq!(m.det_as::<f64>(), Ok(1.0));
    /// ```
    pub fn det_as<U: LinalgScalar + NumCast>(&self) -> Result<U, LinalgError> {
        let mut w = self.promote::<U>()?;
        Ok(det_in_place(&mut w))
    }

    /// Inverse computed in `U` via Gauss-Jordan elimination.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m = Matrix::new([[2, 0], [0, 4]]);
    /// let inv = m.inverse_as::<f64>().unwrap();
    /// assert_eq!(inv, Matrix::new([[0.5, 0.0], [0.0, 0.25]]));
    /// ```
    pub fn inverse_as<U: LinalgScalar + NumCast>(&self) -> Result<Matrix<U, N, N>, LinalgError> {
        self.promote::<U>()?.inverse()
    }

    /// Solve `Ax = b` in `U` via Gauss-Jordan elimination on `[A | b]`.
    pub fn solve_as<U: LinalgScalar + NumCast>(
        &self,
        b: &Vector<T, N>,
    ) -> Result<Vector<U, N>, LinalgError> {
        let b = b.try_cast::<U>().ok_or(LinalgError::Unrepresentable)?;
        self.promote::<U>()?.solve(&b)
    }
}

impl<T: LinalgScalar, const N: usize> Matrix<T, N, N> {
    /// Determinant via Gaussian elimination.
    ///
    /// The pivot is the first row with an exactly nonzero entry in the
    /// current column. A degenerate matrix yields exactly zero.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let m = Matrix::new([[2.0_f64, 0.0], [0.0, 2.0]]);
    /// assert_eq!(m.det(), 4.0);
    /// ```
    pub fn det(&self) -> T {
        let mut w = *self;
        det_in_place(&mut w)
    }

    /// Matrix inverse via Gauss-Jordan elimination.
    ///
    /// Returns `LinalgError::Degenerate` if a column has no nonzero pivot.
    ///
    /// ```
    /// use densekit::Matrix;
    /// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = a * a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((id[(0, 1)]).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let mut w = *self;
        let mut inv = Self::eye();
        gauss_jordan_in_place(&mut w, &mut inv)?;
        Ok(inv)
    }

    /// Solve `Ax = b` for `x`.
    ///
    /// ```
    /// use densekit::{Matrix, Vector};
    /// let a = Matrix::new([
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]);
    /// let b = Vector::from_array([8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Vector<T, N>, LinalgError> {
        let mut w = *self;
        let mut x = b.transpose();
        gauss_jordan_in_place(&mut w, &mut x)?;
        Ok(x.transpose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn trace_integer() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn det_2x2() {
        let m = Matrix::new([[3.0_f64, 8.0], [4.0, 6.0]]);
        assert!((m.det() - (-14.0)).abs() < 1e-12);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert!((m.det() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_integer_promoted() {
        let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert!((m.det_as::<f64>().unwrap() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_f32_promoted_to_f64() {
        let m = Matrix::new([[1.0_f32, 2.0], [3.0, 4.0]]);
        let d: f64 = m.det_as().unwrap();
        assert!((d - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn inverse_3x3() {
        let a = Matrix::new([
            [1.0_f64, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        let a_inv = a.inverse().unwrap();
        let expected = Matrix::new([
            [-24.0, 18.0, 5.0],
            [20.0, -15.0, -4.0],
            [-5.0, 4.0, 1.0],
        ]);
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a_inv[(i, j)] - expected[(i, j)]).abs() < 1e-10,
                    "inv[({},{})] = {}, expected {}",
                    i,
                    j,
                    a_inv[(i, j)],
                    expected[(i, j)]
                );
            }
        }
    }

    #[test]
    fn inverse_integer_promoted() {
        let a = Matrix::new([[4, 7], [2, 6]]);
        let a_inv = a.inverse_as::<f64>().unwrap();
        assert!((a_inv[(0, 0)] - 0.6).abs() < 1e-12);
        assert!((a_inv[(0, 1)] + 0.7).abs() < 1e-12);
        assert!((a_inv[(1, 0)] + 0.2).abs() < 1e-12);
        assert!((a_inv[(1, 1)] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn i64_promoted() {
        let m = Matrix::new([[2_i64, 1], [7, 4]]);
        assert_eq!(m.det_as::<f64>(), Ok(1.0));
        let inv = m.inverse_as::<f64>().unwrap();
        assert!(inv.approx_eq(&Matrix::new([[4.0, -1.0], [-7.0, 2.0]]), 1e-12));

        let b = Vector::from_array([3_i64, 11]);
        let x = m.solve_as::<f64>(&b).unwrap();
        assert!(x.approx_eq(&Vector::from_array([1.0, 1.0]), 1e-12));
    }

    #[test]
    fn inverse_singular() {
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.inverse().unwrap_err(), LinalgError::Degenerate);
        assert_eq!(a.det(), 0.0);
    }

    #[test]
    fn solve_2x2() {
        // 3x + 2y = 7
        // x + 4y = 9
        let a = Matrix::new([[3.0_f64, 2.0], [1.0, 4.0]]);
        let b = Vector::from_array([7.0, 9.0]);

        let x = a.solve(&b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_needs_pivot_swap() {
        let a = Matrix::new([[0, 1], [1, 1]]);
        let b = Vector::from_array([3, 5]);
        let x = a.solve_as::<f64>(&b).unwrap();
        assert_eq!(x[0], 2.0);
        assert_eq!(x[1], 3.0);
    }

    #[test]
    fn solve_singular() {
        let a = Matrix::new([[1.0_f64, 1.0], [1.0, 1.0]]);
        let b = Vector::from_array([1.0, 2.0]);
        assert_eq!(a.solve(&b).unwrap_err(), LinalgError::Degenerate);
    }
}
