use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements.
///
/// Required by operations that need `sqrt` or trigonometric functions
/// (vector normalization, FFT roots of unity).
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Elements of a field: the target type of Gauss-Jordan elimination.
///
/// Covers real floats (`f32`, `f64`) and, with the `complex` feature,
/// `Complex<f32>` / `Complex<f64>`. Division must be exact up to rounding,
/// which is why integers are excluded; integer matrices are inverted by
/// promoting into one of these types (see `inverse_as`).
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.re.hypot(self.im)
    }
}

/// Read-only access to a matrix-like type.
///
/// Lets the elimination routines in [`crate::linalg`] operate on both
/// fixed-size `Matrix` and heap-allocated `DynMatrix`.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Exchange rows `a` and `b` across every column.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}
