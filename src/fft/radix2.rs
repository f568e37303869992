use alloc::vec::Vec;

use log::debug;
use num_complex::Complex;
use num_traits::NumCast;

use super::{Direction, FftError};
use crate::traits::FloatScalar;

fn check_len(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength(n))
    }
}

/// `x` in the element type, blaming sequence length `n` on failure.
pub(super) fn to_float<T: FloatScalar>(x: usize, n: usize) -> Result<T, FftError> {
    <T as NumCast>::from(x).ok_or(FftError::Unrepresentable(n))
}

/// Roots `exp(i·sign·2π·k/n)` for `k < n/2`.
fn roots_of_unity<T: FloatScalar>(n: usize, dir: Direction) -> Result<Vec<Complex<T>>, FftError> {
    let to_t = |x: usize| to_float::<T>(x, n);
    let nf = to_t(n)?;
    let tau = <T as NumCast>::from(core::f64::consts::TAU).ok_or(FftError::Unrepresentable(n))?;
    let theta = match dir {
        Direction::Forward => tau / nf,
        Direction::Inverse => -tau / nf,
    };
    (0..n / 2)
        .map(|k| -> Result<Complex<T>, FftError> {
            Ok(Complex::from_polar(T::one(), theta * to_t(k)?))
        })
        .collect()
}

fn bit_reverse_permute<T: Copy>(seq: &mut [T]) {
    let n = seq.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            seq.swap(i, j);
        }
    }
}

/// Butterfly passes over a bit-reversed sequence. `roots` must hold the
/// `n/2` roots for `seq.len() == n`.
fn butterflies<T: FloatScalar>(seq: &mut [Complex<T>], roots: &[Complex<T>]) {
    let n = seq.len();
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let u = seq[start + k];
                let v = seq[start + k + half] * roots[k * stride];
                seq[start + k] = u + v;
                seq[start + k + half] = u - v;
            }
        }
        len <<= 1;
    }
}

fn run<T: FloatScalar>(
    seq: &mut [Complex<T>],
    roots: &[Complex<T>],
    dir: Direction,
) -> Result<(), FftError> {
    let n = seq.len();
    bit_reverse_permute(seq);
    butterflies(seq, roots);
    if dir == Direction::Inverse {
        let nf = to_float::<T>(n, n)?;
        for z in seq.iter_mut() {
            *z = z.unscale(nf);
        }
    }
    Ok(())
}

/// In-place FFT of `seq`, recomputing the roots of unity each call.
///
/// Fails with [`FftError::InvalidLength`] unless `seq.len()` is a power of
/// two. A length-1 sequence is its own transform.
///
/// ```
/// use densekit::Complex;
/// use densekit::fft::{fft, Direction, FftError};
///
/// let mut x = [Complex::new(1.0_f64, 0.0); 3];
/// assert_eq!(fft(&mut x, Direction::Forward), Err(FftError::InvalidLength(3)));
/// ```
pub fn fft<T: FloatScalar>(seq: &mut [Complex<T>], dir: Direction) -> Result<(), FftError> {
    let n = seq.len();
    check_len(n)?;
    let roots = roots_of_unity(n, dir)?;
    run(seq, &roots, dir)
}

/// Caller-owned cache of the roots of unity for one `(length, direction)`.
///
/// Reusing a cache across calls of the same length and direction skips the
/// trigonometry. A call with a different length or direction rebuilds the
/// cache before transforming.
///
/// ```
/// use densekit::Complex;
/// use densekit::fft::{Direction, RootCache};
///
/// let mut cache = RootCache::<f64>::new();
/// let mut x = [Complex::new(1.0, 0.0); 8];
/// cache.forward(&mut x).unwrap();
/// assert_eq!(cache.cached(), Some((8, Direction::Forward)));
/// cache.inverse(&mut x).unwrap();
/// assert_eq!(cache.cached(), Some((8, Direction::Inverse)));
/// assert!((x[0].re - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct RootCache<T> {
    len: usize,
    direction: Direction,
    roots: Vec<Complex<T>>,
}

impl<T: FloatScalar> RootCache<T> {
    /// Empty cache; the first transform fills it.
    pub fn new() -> Self {
        Self {
            len: 0,
            direction: Direction::Forward,
            roots: Vec::new(),
        }
    }

    /// Length and direction the cached roots belong to, if any.
    pub fn cached(&self) -> Option<(usize, Direction)> {
        if self.len == 0 {
            None
        } else {
            Some((self.len, self.direction))
        }
    }

    /// In-place FFT of `seq` in the given direction.
    pub fn transform(&mut self, seq: &mut [Complex<T>], dir: Direction) -> Result<(), FftError> {
        let n = seq.len();
        check_len(n)?;
        if n != self.len || dir != self.direction {
            debug!(
                "rebuilding FFT roots: length {} -> {}, direction {:?} -> {:?}",
                self.len, n, self.direction, dir
            );
            self.roots = roots_of_unity(n, dir)?;
            self.len = n;
            self.direction = dir;
        }
        run(seq, &self.roots, dir)
    }

    /// Forward transform, unnormalized.
    pub fn forward(&mut self, seq: &mut [Complex<T>]) -> Result<(), FftError> {
        self.transform(seq, Direction::Forward)
    }

    /// Inverse transform, normalized by `1/n`.
    pub fn inverse(&mut self, seq: &mut [Complex<T>]) -> Result<(), FftError> {
        self.transform(seq, Direction::Inverse)
    }
}

impl<T: FloatScalar> Default for RootCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_reverse_8() {
        let mut x = [0, 1, 2, 3, 4, 5, 6, 7];
        bit_reverse_permute(&mut x);
        assert_eq!(x, [0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn roots_4_forward() {
        let r = roots_of_unity::<f64>(4, Direction::Forward).unwrap();
        assert_eq!(r.len(), 2);
        assert!((r[0] - Complex::new(1.0, 0.0)).norm() < 1e-15);
        assert!((r[1] - Complex::new(0.0, 1.0)).norm() < 1e-15);
    }

    #[test]
    fn roots_4_inverse_are_conjugates() {
        let f = roots_of_unity::<f64>(4, Direction::Forward).unwrap();
        let i = roots_of_unity::<f64>(4, Direction::Inverse).unwrap();
        for (a, b) in f.iter().zip(i.iter()) {
            assert!((a.conj() - b).norm() < 1e-15);
        }
    }

    #[test]
    fn check_len_rejects() {
        assert_eq!(check_len(0), Err(FftError::InvalidLength(0)));
        assert_eq!(check_len(12), Err(FftError::InvalidLength(12)));
        assert!(check_len(1).is_ok());
        assert!(check_len(1024).is_ok());
    }
}
