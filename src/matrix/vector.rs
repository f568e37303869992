use core::ops::{Index, IndexMut};

use crate::traits::Scalar;
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Vectors reuse all matrix arithmetic (`+`, `-`, unary `-`, `* t`) and add
/// single-index access (`v[i]`), dot products, norms, and the cross product
/// for 3-element vectors.
///
/// # Examples
///
/// ```
/// use densekit::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use densekit::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use densekit::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(0, i)] * rhs[(0, i)];
        }
        sum
    }
}

/// A 2-element row vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element row vector.
///
/// Adds `cross()` and component constructors on top of all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar> Vector3<T> {
    /// Build `[x, y, z]`.
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Build `[x, y, 0]`: a planar vector embedded in 3D.
    ///
    /// ```
    /// use densekit::Vector3;
    /// let v = Vector3::from_xy(1, 2);
    /// assert_eq!(v, Vector3::from_xyz(1, 2, 0));
    /// ```
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::from_array([x, y, T::zero()])
    }

    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use densekit::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(0, i)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(0, i)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_index() {
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64, 3>::zeros();
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    fn from_xy_defaults_z_to_zero() {
        let v = Vector3::from_xy(1.5, -2.0);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
        assert_eq!(v.z(), 0.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector3::from_xyz(1, 2, 3);
        let b = Vector3::from_xyz(4, 5, 6);
        assert_eq!(a.dot(&b), 32);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector3::from_xyz(1.0, 2.0, 3.0);
        let b = Vector3::from_xyz(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::from_xyz(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::from_xyz(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector3::from_xyz(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::from_xyz(2.0, 4.0, 6.0));
    }

    #[test]
    fn cross_product() {
        let x = Vector3::from_xyz(1.0, 0.0, 0.0);
        let y = Vector3::from_xyz(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::from_xyz(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::from_xyz(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_product_is_orthogonal() {
        let a = Vector3::from_xyz(1, 2, 3);
        let b = Vector3::from_xyz(-4, 0, 6);
        let c = a.cross(&b);
        assert_eq!(c.dot(&a), 0);
        assert_eq!(c.dot(&b), 0);
    }

    #[test]
    fn cross_product_self_is_zero() {
        let a = Vector3::from_xyz(3.0, -1.0, 4.0);
        assert_eq!(a.cross(&a), Vector3::zeros());
    }
}
