//! Moving between coefficients and samples on the uniform Fourier grid.

use num_complex::Complex64;
use tp_dft::{FourierDft, RustFftDft};
use tp_util::{from_canonical, node, to_canonical};
use tracing::instrument;

use crate::{TrigPoly, TrigPolyError, TrigPolyResult};

impl TrigPoly {
    /// Interpolates `f` from its values at the `n` Fourier nodes `2πk/n`.
    ///
    /// The result has exactly `n` coefficients. Frequencies outside the representable range alias
    /// onto it, as with any sampled interpolation.
    pub fn from_fn<F, V>(f: F, n: usize) -> Self
    where
        F: FnMut(f64) -> V,
        V: Into<Complex64>,
    {
        Self::from_fn_with(&RustFftDft::default(), f, n)
    }

    /// Like [`TrigPoly::from_fn`], for a signed sample count.
    ///
    /// # Errors
    /// Returns [`TrigPolyError::NegativeSampleCount`] if `n < 0`. `f` is not called in that case.
    pub fn try_from_fn<F, V>(f: F, n: i64) -> TrigPolyResult<Self>
    where
        F: FnMut(f64) -> V,
        V: Into<Complex64>,
    {
        let n = usize::try_from(n).map_err(|_| TrigPolyError::NegativeSampleCount(n))?;
        Ok(Self::from_fn(f, n))
    }

    /// Like [`TrigPoly::from_fn`], using the given DFT.
    pub fn from_fn_with<Dft, F, V>(dft: &Dft, mut f: F, n: usize) -> Self
    where
        Dft: FourierDft,
        F: FnMut(f64) -> V,
        V: Into<Complex64>,
    {
        let values: Vec<Complex64> = (0..n).map(|k| f(node(k, n)).into()).collect();
        Self::interpolate_with(dft, &values)
    }

    /// Interpolates samples taken at the `values.len()` Fourier nodes.
    ///
    /// Inverse of [`TrigPoly::sample`].
    pub fn interpolate(values: &[Complex64]) -> Self {
        Self::interpolate_with(&RustFftDft::default(), values)
    }

    /// Like [`TrigPoly::interpolate`], using the given DFT.
    #[instrument(level = "debug", skip_all, fields(len = values.len()))]
    pub fn interpolate_with<Dft: FourierDft>(dft: &Dft, values: &[Complex64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self::zero();
        }
        let mut natural = dft.dft(values.to_vec());
        let n_inv = 1.0 / n as f64;
        natural.iter_mut().for_each(|c| *c *= n_inv);
        Self::new(to_canonical(&natural))
    }

    /// The values of the polynomial at its own `len()` Fourier nodes.
    ///
    /// This is the O(n log n) evaluation route; use [`TrigPoly::eval`] for arbitrary points.
    pub fn sample(&self) -> Vec<Complex64> {
        self.sample_with(&RustFftDft::default())
    }

    /// Like [`TrigPoly::sample`], using the given DFT.
    #[instrument(level = "debug", skip_all, fields(len = self.len()))]
    pub fn sample_with<Dft: FourierDft>(&self, dft: &Dft) -> Vec<Complex64> {
        dft.idft(self.sample_column())
    }

    /// The coefficients scaled by `len()` and put in natural order: the column whose inverse
    /// DFT is [`TrigPoly::sample`].
    pub(crate) fn sample_column(&self) -> Vec<Complex64> {
        let n = self.len() as f64;
        let scaled: Vec<Complex64> = self.coeffs.iter().map(|&c| c * n).collect();
        from_canonical(&scaled)
    }

    /// Evaluates at the implicit uniform grid. Same as [`TrigPoly::sample`].
    pub fn evaluate(&self) -> Vec<Complex64> {
        self.sample()
    }
}
