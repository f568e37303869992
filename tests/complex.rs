#![cfg(all(feature = "complex", feature = "alloc"))]

use num_complex::Complex;
use densekit::{DynMatrix, LinalgError, Matrix, Vector};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── Gauss-Jordan tests ──────────────────────────────────────────────

#[test]
fn complex_solve() {
    let a = Matrix::new([
        [c(2.0, 1.0), c(1.0, -1.0)],
        [c(1.0, 0.0), c(3.0, 2.0)],
    ]);
    let b = Vector::from_array([c(5.0, 3.0), c(7.0, 4.0)]);

    let x = a.solve(&b).unwrap();

    for i in 0..2 {
        let mut sum = C::default();
        for j in 0..2 {
            sum = sum + a[(i, j)] * x[j];
        }
        assert_complex_near(sum, b[i], TOL, &format!("row {}", i));
    }
}

#[test]
fn complex_det() {
    let a = Matrix::new([
        [c(1.0, 1.0), c(2.0, 0.0)],
        [c(0.0, 1.0), c(1.0, -1.0)],
    ]);
    // (1+i)(1-i) - 2i = 2 - 2i
    assert_complex_near(a.det(), c(2.0, -2.0), TOL, "det");
}

#[test]
fn complex_det_with_swap() {
    // Zero in the leading position forces a row swap.
    let a = Matrix::new([
        [c(0.0, 0.0), c(0.0, 1.0)],
        [c(2.0, 0.0), c(1.0, 1.0)],
    ]);
    // 0·(1+i) - i·2 = -2i
    assert_complex_near(a.det(), c(0.0, -2.0), TOL, "det");
}

#[test]
fn complex_inverse() {
    let a = Matrix::new([
        [c(1.0, 2.0), c(3.0, -1.0), c(0.0, 1.0)],
        [c(2.0, 0.0), c(1.0, 1.0), c(-1.0, 0.0)],
        [c(0.0, -1.0), c(2.0, 2.0), c(4.0, 0.5)],
    ]);
    let a_inv = a.inverse().unwrap();
    let id = a * a_inv;

    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
            assert_complex_near(id[(i, j)], expected, TOL, &format!("({},{})", i, j));
        }
    }
    assert!(id.approx_eq(&Matrix::eye(), TOL));
}

#[test]
fn complex_singular() {
    // Second row is i times the first.
    let a = Matrix::new([
        [c(1.0, 0.0), c(2.0, 1.0)],
        [c(0.0, 1.0), c(-1.0, 2.0)],
    ]);
    assert_eq!(a.det(), c(0.0, 0.0));
    assert_eq!(a.inverse().unwrap_err(), LinalgError::Degenerate);
}

#[test]
fn complex_dyn_inverse() {
    let a = DynMatrix::from_rows(
        2,
        2,
        &[c(4.0, 0.0), c(0.0, 1.0), c(0.0, -1.0), c(2.0, 0.0)],
    );
    let a_inv = a.inverse().unwrap();
    assert!((&a * &a_inv).approx_eq(&DynMatrix::eye(2, C::default()), TOL));
    // Hermitian matrix: real determinant 8 - 1
    assert_complex_near(a.det().unwrap(), c(7.0, 0.0), TOL, "det");
}

#[test]
fn complex_promoted_from_real() {
    let a = Matrix::new([[2.0_f64, 0.0], [0.0, 4.0]]);
    let inv = a.inverse_as::<C>().unwrap();
    assert_complex_near(inv[(0, 0)], c(0.5, 0.0), TOL, "(0,0)");
    assert_complex_near(inv[(1, 1)], c(0.25, 0.0), TOL, "(1,1)");
}

#[test]
fn complex_to_real_needs_zero_imaginary_parts() {
    let real_valued = Matrix::new([[c(2.0, 0.0), c(1.0, 0.0)], [c(7.0, 0.0), c(4.0, 0.0)]]);
    assert_eq!(real_valued.det_as::<f64>(), Ok(1.0));

    let a = Matrix::new([[c(2.0, 1.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]]);
    assert_eq!(a.inverse_as::<f64>().unwrap_err(), LinalgError::Unrepresentable);

    let d = DynMatrix::from(a);
    assert_eq!(d.det_as::<f64>().unwrap_err(), LinalgError::Unrepresentable);
    assert_eq!(
        d.solve_as::<f64>(&DynMatrix::zeros(2, 1, C::default()))
            .unwrap_err(),
        LinalgError::Unrepresentable
    );
}

// ── FFT tests ───────────────────────────────────────────────────────

#[cfg(feature = "fft")]
#[test]
fn fft_round_trip_with_cache() {
    use densekit::fft::RootCache;

    let x: Vec<C> = (0..64).map(|k| c(k as f64, -(k as f64) / 2.0)).collect();
    let mut y = x.clone();
    let mut cache = RootCache::new();
    cache.forward(&mut y).unwrap();
    cache.inverse(&mut y).unwrap();
    for (k, (a, b)) in x.iter().zip(y.iter()).enumerate() {
        assert_complex_near(*a, *b, 1e-9, &format!("k={}", k));
    }
}

#[cfg(feature = "fft")]
#[test]
fn fft_parseval() {
    use densekit::fft::{fft, Direction};

    let x: Vec<C> = (0..16).map(|k| c((k as f64).sin(), (k as f64 * 0.3).cos())).collect();
    let mut y = x.clone();
    fft(&mut y, Direction::Forward).unwrap();
    let time: f64 = x.iter().map(|z| z.norm_sqr()).sum();
    let freq: f64 = y.iter().map(|z| z.norm_sqr()).sum::<f64>() / 16.0;
    assert!((time - freq).abs() < 1e-9);
}
