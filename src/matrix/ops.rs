use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: core::array::from_fn(|j| {
                core::array::from_fn(|i| f(self.data[j][i], rhs.data[j][i]))
            }),
        }
    }

    /// Multiply every element by `t`. Same as `self * t`.
    pub fn scale(&self, t: T) -> Self {
        self.map(|x| x * t)
    }

    pub fn transpose(&self) -> Matrix<T, N, M> {
        Matrix::from_fn(|i, j| self[(j, i)])
    }
}

// `+` and `-`: one kernel on borrowed operands, the other receiver forms
// and the compound assignments forward to it.
macro_rules! elementwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $f:expr) => {
        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>> for &Matrix<T, M, N> {
            type Output = Matrix<T, M, N>;

            fn $op(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                self.zip_with(rhs, $f)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op for Matrix<T, M, N> {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                $Op::$op(&self, &rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>> for Matrix<T, M, N> {
            type Output = Self;

            fn $op(self, rhs: &Self) -> Self {
                $Op::$op(&self, rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<Matrix<T, M, N>> for &Matrix<T, M, N> {
            type Output = Matrix<T, M, N>;

            fn $op(self, rhs: Matrix<T, M, N>) -> Matrix<T, M, N> {
                $Op::$op(self, &rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $OpAssign for Matrix<T, M, N> {
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.zip_with(&rhs, $f);
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $OpAssign<&Matrix<T, M, N>> for Matrix<T, M, N> {
            fn $op_assign(&mut self, rhs: &Self) {
                *self = self.zip_with(rhs, $f);
            }
        }
    };
}

elementwise!(Add, add, AddAssign, add_assign, |a, b| a + b);
elementwise!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);

impl<T: Scalar, const M: usize, const N: usize> Neg for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Matrix<T, M, N> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Product: (M x K) * (K x N) ──────────────────────────────────────

impl<T: Scalar, const M: usize, const K: usize, const N: usize> Mul<&Matrix<T, K, N>>
    for &Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: &Matrix<T, K, N>) -> Matrix<T, M, N> {
        Matrix::from_fn(|i, j| {
            (0..K).fold(T::zero(), |acc, k| acc + self.data[k][i] * rhs.data[j][k])
        })
    }
}

impl<T: Scalar, const M: usize, const K: usize, const N: usize> Mul<Matrix<T, K, N>>
    for Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Matrix<T, M, N> {
        Mul::mul(&self, &rhs)
    }
}

impl<T: Scalar, const M: usize, const K: usize, const N: usize> Mul<&Matrix<T, K, N>>
    for Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: &Matrix<T, K, N>) -> Matrix<T, M, N> {
        Mul::mul(&self, rhs)
    }
}

impl<T: Scalar, const M: usize, const K: usize, const N: usize> Mul<Matrix<T, K, N>>
    for &Matrix<T, M, K>
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Matrix<T, M, N> {
        Mul::mul(self, &rhs)
    }
}

// ── Scalar factor ───────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, t: T) -> Self {
        self.scale(t)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn mul(self, t: T) -> Matrix<T, M, N> {
        self.scale(t)
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, t: T) {
        *self = self.scale(t);
    }
}

// `t * A` needs a concrete left-hand type.
macro_rules! scalar_lhs {
    ($($t:ty)*) => {$(
        impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
            type Output = Matrix<$t, M, N>;

            fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                rhs.scale(self)
            }
        }
    )*};
}

scalar_lhs!(f32 f64 i8 i16 i32 i64 i128 u8 u16 u32 u64 u128);
