use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    ///
    /// ```
    /// use densekit::Vector3;
    /// assert_eq!(Vector3::from_xyz(1, 2, 2).norm_squared(), 9);
    /// ```
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// The zero vector has no direction; its components come back NaN.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        *self * (T::one() / n)
    }
}
