pub(crate) mod gauss_jordan;


pub use gauss_jordan::{det_in_place, gauss_jordan_in_place};

/// Operand shapes that the requested operation cannot accept.
///
/// Only run-time sized matrices produce this; the fixed-size `Matrix`
/// rejects the same mistakes at compile time.
///
/// ```
/// use densekit::DynMatrix;
/// use densekit::linalg::ShapeError;
///
/// let a = DynMatrix::zeros(2, 3, 0.0_f64);
/// let b = DynMatrix::zeros(3, 2, 0.0_f64);
/// assert_eq!(
///     a.checked_add(&b).unwrap_err(),
///     ShapeError::Incompatible { op: "add", lhs: (2, 3), rhs: (3, 2) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Binary operation on operands of incompatible `(rows, cols)`.
    Incompatible {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Square-only operation on a rectangular matrix.
    NotSquare { nrows: usize, ncols: usize },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::Incompatible { op, lhs, rhs } => write!(
                f,
                "incompatible shapes for {}: {}x{} and {}x{}",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ShapeError::NotSquare { nrows, ncols } => {
                write!(f, "expected a square matrix, got {}x{}", nrows, ncols)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

/// Errors from inversion and linear solves.
///
/// The determinant never returns this: a degenerate matrix simply has
/// determinant zero.
///
/// ```
/// use densekit::Matrix;
/// use densekit::linalg::LinalgError;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Degenerate);
/// assert_eq!(singular.det(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Some column has no nonzero pivot; the matrix has no inverse.
    Degenerate,
    /// Operand shape is unsuitable (non-square, mismatched right-hand side).
    Shape(ShapeError),
    /// An element has no value in the requested target type, e.g. a NaN
    /// promoted to an integer or a complex number with nonzero imaginary
    /// part promoted to a real.
    Unrepresentable,
}

impl From<ShapeError> for LinalgError {
    fn from(e: ShapeError) -> Self {
        LinalgError::Shape(e)
    }
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Degenerate => write!(f, "matrix is degenerate (no nonzero pivot)"),
            LinalgError::Shape(e) => write!(f, "{}", e),
            LinalgError::Unrepresentable => {
                write!(f, "element not representable in the target type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinalgError::Shape(e) => Some(e),
            LinalgError::Degenerate | LinalgError::Unrepresentable => None,
        }
    }
}
