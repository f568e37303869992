//! # densekit
//!
//! Dense numeric kernels, no-std compatible: fixed and run-time sized
//! matrices, Gauss-Jordan inversion and determinants with row
//! pivoting, a small 3-vector, and a radix-2 FFT.
//!
//! ## Quick start
//!
//! ```
//! use densekit::{Matrix, Vector};
//!
//! let a = Matrix::new([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Vector::from_array([8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[1] - 3.0).abs() < 1e-12);
//!
//! let a_inv = a.inverse().unwrap();
//! assert!((a * a_inv).approx_eq(&Matrix::eye(), 1e-12));
//! assert!((a.det() - (-1.0)).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Fixed-size `Matrix<T, M, N>` with const-generic dimensions,
//!   stack-allocated. Shapes are checked at compile time. [`Vector<T, N>`]
//!   is the 1-row alias; [`Vector3`] adds `cross`, `norm`, and `normalize`.
//!
//! - [`dynmatrix`]: Heap-allocated `DynMatrix<T>` with run-time dimensions
//!   (requires `alloc`). Shape mismatches surface as [`ShapeError`] from the
//!   `checked_*` methods, or as panics from the operators.
//!
//! - [`linalg`]: The elimination engine. [`linalg::gauss_jordan_in_place`]
//!   and [`linalg::det_in_place`] operate on any `&mut impl MatrixMut<T>`;
//!   both containers wrap them as `inverse()`, `solve()`, and `det()`.
//!   Pivots are the first exactly-nonzero entry in each column.
//!
//! - [`fft`]: In-place radix-2 FFT over `Complex<T>` slices, with a
//!   caller-owned root cache (requires `fft`).
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`LinalgScalar`]: field elements elimination runs in: real floats and complex numbers
//!   - [`FloatScalar`]: real floats, for norms and roots of unity
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! Integer matrices are inverted by promoting them: `m.inverse_as::<f64>()`.
//! The `_as` forms go through `NumCast` and report
//! [`LinalgError::Unrepresentable`] for an element the target cannot hold.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc`   | via std  | `DynMatrix` (heap-allocated, runtime-sized) |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |
//! | `complex` | via fft  | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `fft`     | yes      | Radix-2 FFT (implies `alloc` and `complex`) |
//! | `all`     | no       | All features |
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug!`
//! when elimination finds a degenerate column or an FFT root cache is
//! rebuilt, `trace!` for each row swap. Nothing is printed unless the
//! application installs a logger.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
#[cfg(feature = "fft")]
pub mod fft;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{LinalgError, ShapeError};
pub use matrix::vector::{Vector, Vector2, Vector3};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
#[cfg(feature = "alloc")]
pub use dynmatrix::DynMatrix;
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
