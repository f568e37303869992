use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::linalg::ShapeError;
use crate::traits::Scalar;

use super::DynMatrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    fn same_shape(&self, rhs: &Self, op: &'static str) -> Result<(), ShapeError> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(ShapeError::Incompatible {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            })
        }
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        DynMatrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise sum; both operands must have the same shape.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let a = DynMatrix::from_rows(1, 2, &[1, 2]);
    /// let b = DynMatrix::from_rows(1, 2, &[10, 20]);
    /// assert_eq!(a.checked_add(&b).unwrap(), DynMatrix::from_rows(1, 2, &[11, 22]));
    /// assert!(a.checked_add(&DynMatrix::zeros(2, 1, 0)).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.same_shape(rhs, "add")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference; both operands must have the same shape.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.same_shape(rhs, "sub")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product `(M×N) * (N×P) → (M×P)`.
    ///
    /// ```
    /// use densekit::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let b = DynMatrix::from_rows(3, 1, &[1, 0, -1]);
    /// assert_eq!(a.checked_mul(&b).unwrap(), DynMatrix::from_rows(2, 1, &[-2, -2]));
    /// assert!(b.checked_mul(&a).is_err());
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.ncols != rhs.nrows {
            return Err(ShapeError::Incompatible {
                op: "mul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut out = DynMatrix::zeros(m, p, T::zero());
        for j in 0..p {
            for k in 0..n {
                let b_kj = rhs[(k, j)];
                for i in 0..m {
                    out[(i, j)] = out[(i, j)] + self[(i, k)] * b_kj;
                }
            }
        }
        Ok(out)
    }

    /// Multiply every element by `t`. Same as `self * t`.
    pub fn scale(&self, t: T) -> Self {
        DynMatrix {
            data: self.data.iter().map(|&x| x * t).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

fn or_panic<T>(r: Result<T, ShapeError>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// ── Operators ───────────────────────────────────────────────────────
// Panic on shape mismatch; use the checked_* forms to handle it.

macro_rules! impl_binop {
    ($Op:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $Op<&DynMatrix<T>> for &DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $Op<DynMatrix<T>> for &DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<T: Scalar> $Op<&DynMatrix<T>> for DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $Op for DynMatrix<T> {
            type Output = DynMatrix<T>;
            fn $method(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);
impl_binop!(Mul, mul, checked_mul);

impl<T: Scalar> AddAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        or_panic(self.same_shape(rhs, "add"));
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        or_panic(self.same_shape(rhs, "sub"));
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        DynMatrix {
            data: self.data.iter().map(|&x| T::zero() - x).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        -&self
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn mul(self, rhs: T) -> DynMatrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn mul(mut self, rhs: T) -> DynMatrix<T> {
        self *= rhs;
        self
    }
}

impl<T: Scalar> MulAssign<T> for DynMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: &DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
