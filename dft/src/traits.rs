use num_complex::Complex64;

use crate::util::{divide_by_len, negate_indices};

/// A discrete Fourier transform over complex samples.
///
/// Transforms are defined for every length, including zero (which maps an empty vector to an
/// empty vector). Frequencies are returned in natural order: `0, 1, ..., -2, -1`.
pub trait FourierDft: Clone + Default {
    /// Compute the discrete Fourier transform (DFT) of `vec`:
    ///
    /// ```text
    ///   X_k = Σ_j x_j · exp(-2πi · jk / n)
    /// ```
    ///
    /// No normalisation is applied. This is the only method an implementer needs to define, all
    /// other methods can be derived from this one.
    fn dft(&self, vec: Vec<Complex64>) -> Vec<Complex64>;

    /// Compute the DFT of each column in `cols`.
    fn dft_batch(&self, cols: Vec<Vec<Complex64>>) -> Vec<Vec<Complex64>> {
        cols.into_iter().map(|col| self.dft(col)).collect()
    }

    /// Compute the inverse DFT of `vec`, normalised so that `idft(dft(v)) == v`:
    ///
    /// ```text
    ///   x_j = (1/n) Σ_k X_k · exp(2πi · jk / n)
    /// ```
    fn idft(&self, vec: Vec<Complex64>) -> Vec<Complex64> {
        let mut dft = self.dft(vec);
        divide_by_len(&mut dft);
        negate_indices(&mut dft);
        dft
    }

    /// Compute the inverse DFT of each column in `cols`.
    fn idft_batch(&self, cols: Vec<Vec<Complex64>>) -> Vec<Vec<Complex64>> {
        cols.into_iter().map(|col| self.idft(col)).collect()
    }
}
