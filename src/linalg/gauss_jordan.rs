use log::{debug, trace};

use crate::linalg::{LinalgError, ShapeError};
use crate::traits::{LinalgScalar, MatrixMut};

/// Forward elimination over the first `pivots` columns of the square `w`.
///
/// For each pivot column `i` the pivot is the *first* row `j >= i` whose
/// entry is not exactly zero. No tolerance is applied, so a tiny but
/// nonzero pivot is accepted as is.
///
/// Every row operation applied to `w` is mirrored on `rhs` (when given),
/// across all of its columns.
///
/// Returns `Ok(true)` if an even number of row swaps was performed, or
/// `Err(col)` with the first column that had no nonzero pivot.
fn forward_eliminate<T, W, R>(
    w: &mut W,
    mut rhs: Option<&mut R>,
    pivots: usize,
) -> Result<bool, usize>
where
    T: LinalgScalar,
    W: MatrixMut<T>,
    R: MatrixMut<T>,
{
    let n = w.nrows();
    let mut even = true;

    for i in 0..pivots {
        let pivot_row = match (i..n).find(|&j| !w.get(j, i).is_zero()) {
            Some(j) => j,
            None => return Err(i),
        };

        if pivot_row != i {
            trace!("pivot column {}: swapping rows {} and {}", i, i, pivot_row);
            w.swap_rows(i, pivot_row);
            if let Some(r) = rhs.as_deref_mut() {
                r.swap_rows(i, pivot_row);
            }
            even = !even;
        }

        let pivot = *w.get(i, i);
        for j in (i + 1)..n {
            // Captured before row j changes.
            let factor = *w.get(j, i) / pivot;
            for k in (i + 1)..n {
                let val = *w.get(i, k);
                *w.get_mut(j, k) = *w.get(j, k) - factor * val;
            }
            *w.get_mut(j, i) = T::zero();

            if let Some(r) = rhs.as_deref_mut() {
                for k in 0..r.ncols() {
                    let val = *r.get(i, k);
                    *r.get_mut(j, k) = *r.get(j, k) - factor * val;
                }
            }
        }
    }

    Ok(even)
}

/// Gauss-Jordan elimination in place.
///
/// Reduces the square matrix `w` to the identity and applies the same row
/// operations to `rhs`, which may have any number of columns but must have
/// as many rows as `w`. On success `rhs` holds `w⁻¹ · rhs_original`:
///
/// - with `rhs = I` it becomes the inverse of `w`,
/// - with a column `b` it becomes the solution of `w x = b`.
///
/// Returns `LinalgError::Degenerate` if some column has no nonzero pivot;
/// `w` and `rhs` are left partially reduced in that case.
///
/// ```
/// use densekit::Matrix;
/// use densekit::linalg::gauss_jordan_in_place;
///
/// let mut w = Matrix::new([[2.0_f64, 0.0], [0.0, 4.0]]);
/// let mut acc: Matrix<f64, 2, 2> = Matrix::eye();
/// gauss_jordan_in_place(&mut w, &mut acc).unwrap();
/// assert_eq!(acc, Matrix::new([[0.5, 0.0], [0.0, 0.25]]));
/// assert_eq!(w, Matrix::eye());
/// ```
pub fn gauss_jordan_in_place<T, W, R>(w: &mut W, rhs: &mut R) -> Result<(), LinalgError>
where
    T: LinalgScalar,
    W: MatrixMut<T>,
    R: MatrixMut<T>,
{
    let n = w.nrows();
    if n != w.ncols() {
        return Err(ShapeError::NotSquare {
            nrows: n,
            ncols: w.ncols(),
        }
        .into());
    }
    if rhs.nrows() != n {
        return Err(ShapeError::Incompatible {
            op: "solve",
            lhs: (n, n),
            rhs: (rhs.nrows(), rhs.ncols()),
        }
        .into());
    }

    if let Err(col) = forward_eliminate(w, Some(&mut *rhs), n) {
        debug!("gauss-jordan: no nonzero pivot in column {} of {}x{} matrix", col, n, n);
        return Err(LinalgError::Degenerate);
    }

    // Back substitution: w is upper triangular with a nonzero diagonal.
    // Rows below i are already reduced, so row i only has its diagonal left.
    let m = rhs.ncols();
    for i in (0..n).rev() {
        let inv_pivot = T::one() / *w.get(i, i);
        *w.get_mut(i, i) = T::one();
        for k in 0..m {
            *rhs.get_mut(i, k) = *rhs.get(i, k) * inv_pivot;
        }

        for j in 0..i {
            let factor = *w.get(j, i);
            if factor.is_zero() {
                continue;
            }
            *w.get_mut(j, i) = T::zero();
            for k in 0..m {
                let val = *rhs.get(i, k);
                *rhs.get_mut(j, k) = *rhs.get(j, k) - factor * val;
            }
        }
    }

    Ok(())
}

/// Determinant by forward elimination, in place.
///
/// Uses the same pivot search as [`gauss_jordan_in_place`] but stops one
/// column early, since the last diagonal entry needs no reduction. A
/// column without a nonzero pivot is not an error here: the determinant
/// is exactly zero. The result is negated once per odd number of row swaps.
///
/// `w` is left in row-echelon form. The determinant of a 0×0 matrix is 1.
///
/// Panics if `w` is not square.
///
/// ```
/// use densekit::Matrix;
/// use densekit::linalg::det_in_place;
///
/// let mut w = Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]);
/// assert_eq!(det_in_place(&mut w), -1.0);
/// ```
pub fn det_in_place<T, W>(w: &mut W) -> T
where
    T: LinalgScalar,
    W: MatrixMut<T>,
{
    let n = w.nrows();
    assert_eq!(n, w.ncols(), "determinant requires a square matrix");
    if n == 0 {
        return T::one();
    }

    let even = match forward_eliminate::<T, W, W>(w, None, n - 1) {
        Ok(even) => even,
        Err(col) => {
            debug!("determinant: no nonzero pivot in column {} of {}x{} matrix", col, n, n);
            return T::zero();
        }
    };

    let mut det = T::one();
    for i in 0..n {
        det = det * *w.get(i, i);
    }
    if !even {
        det = T::zero() - det;
    }
    det
}
