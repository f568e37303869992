//! Radix-2 fast Fourier transform over complex sequences.
//!
//! Transforms run in place on a `&mut [Complex<T>]` whose length is a power
//! of two. Two entry points:
//!
//! - [`fft`] recomputes the roots of unity on every call and holds no state.
//! - [`RootCache`] keeps the roots for the last `(length, direction)` pair
//!   and rebuilds them only when a call asks for something else. The cache
//!   is an ordinary value owned by the caller; there is no global state.
//!
//! The forward transform uses `exp(+2πi·k/n)` as its roots and the inverse
//! uses `exp(-2πi·k/n)` followed by division by `n`, so
//! `inverse(forward(x)) == x` up to rounding.
//!
//! ```
//! use densekit::Complex;
//! use densekit::fft::{fft, Direction};
//!
//! let mut x = [
//!     Complex::new(1.0_f64, 0.0),
//!     Complex::new(0.0, 0.0),
//!     Complex::new(0.0, 0.0),
//!     Complex::new(0.0, 0.0),
//! ];
//! fft(&mut x, Direction::Forward).unwrap();
//! assert!(x.iter().all(|z| (z - Complex::new(1.0, 0.0)).norm() < 1e-12));
//! ```

mod radix2;


pub use radix2::{fft, RootCache};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward transform, unnormalized, roots `exp(+2πi·k/n)`.
    Forward,
    /// Inverse transform, normalized by `1/n`.
    Inverse,
}

impl Direction {
    /// Sign of the exponent in the roots of unity: `+1` forward, `-1` inverse.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }
}

/// Accepts the sign convention `+1` (forward) / `-1` (inverse).
///
/// ```
/// use densekit::fft::{Direction, FftError};
/// assert_eq!(Direction::try_from(-1), Ok(Direction::Inverse));
/// assert_eq!(Direction::try_from(0), Err(FftError::InvalidDirection(0)));
/// ```
impl TryFrom<i32> for Direction {
    type Error = FftError;

    fn try_from(sign: i32) -> Result<Self, FftError> {
        match sign {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Inverse),
            other => Err(FftError::InvalidDirection(other)),
        }
    }
}

/// Errors from FFT operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Sequence length is not a power of two (zero included).
    InvalidLength(usize),
    /// Sequence length or an angle has no value in the element type.
    Unrepresentable(usize),
    /// Direction sign other than `+1` or `-1`.
    InvalidDirection(i32),
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidLength(n) => {
                write!(f, "sequence length {} is not a power of two", n)
            }
            FftError::Unrepresentable(n) => {
                write!(f, "sequence length {} is not representable in the element type", n)
            }
            FftError::InvalidDirection(s) => {
                write!(f, "direction must be 1 or -1, got {}", s)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
