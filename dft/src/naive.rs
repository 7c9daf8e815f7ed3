use core::f64::consts::TAU;

use num_complex::Complex64;

use crate::FourierDft;

/// Direct O(n²) evaluation of the DFT sum. Slow, but simple enough to serve as a reference.
#[derive(Default, Clone, Debug)]
pub struct NaiveDft;

impl FourierDft for NaiveDft {
    fn dft(&self, vec: Vec<Complex64>) -> Vec<Complex64> {
        let n = vec.len();
        (0..n)
            .map(|k| {
                vec.iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        // Reduce jk mod n first so the twiddle angle stays within one period.
                        let angle = -TAU * ((j * k) % n) as f64 / n as f64;
                        x * Complex64::from_polar(1.0, angle)
                    })
                    .sum()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    use crate::{FourierDft, NaiveDft};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn assert_close(a: &[Complex64], b: &[Complex64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_abs_diff_eq!(x.re, y.re, epsilon = 1e-12);
            assert_abs_diff_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn basic() {
        // Evaluations of 1 + 2x on {1, -1}: 3, -1
        let dft = NaiveDft.dft(vec![c(1.0, 0.0), c(2.0, 0.0)]);
        assert_close(&dft, &[c(3.0, 0.0), c(-1.0, 0.0)]);
    }

    #[test]
    fn size_4() {
        // With ω = exp(-iπ/2) = -i, the rows of the DFT matrix are
        //   [1,  1,  1,  1]
        //   [1, -i, -1,  i]
        //   [1, -1,  1, -1]
        //   [1,  i, -1, -i]
        let x = vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0), c(4.0, 0.0)];
        let expected = [c(10.0, 0.0), c(-2.0, 2.0), c(-2.0, 0.0), c(-2.0, -2.0)];
        assert_close(&NaiveDft.dft(x), &expected);
    }

    #[test]
    fn single_frequency_has_single_peak() {
        // x_j = exp(2πi·2j/5) concentrates all energy in bin 2.
        let n = 5;
        let x: Vec<_> = (0..n)
            .map(|j| Complex64::from_polar(1.0, core::f64::consts::TAU * (2 * j) as f64 / n as f64))
            .collect();
        let dft = NaiveDft.dft(x);
        for (k, v) in dft.iter().enumerate() {
            let expected = if k == 2 { n as f64 } else { 0.0 };
            assert_abs_diff_eq!(v.re, expected, epsilon = 1e-12);
            assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn dft_idft_consistency() {
        let original = vec![c(0.5, -1.0), c(2.0, 0.25), c(-3.0, 1.5)];
        let idft = NaiveDft.idft(NaiveDft.dft(original.clone()));
        assert_close(&original, &idft);
    }

    #[test]
    fn empty() {
        assert!(NaiveDft.dft(vec![]).is_empty());
        assert!(NaiveDft.idft(vec![]).is_empty());
    }
}
