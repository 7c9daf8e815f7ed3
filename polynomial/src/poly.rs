use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tp_util::{frequency_of, max_negative_frequency, max_positive_frequency, position_of};

pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const I: Complex64 = Complex64::new(0.0, 1.0);

/// A trigonometric polynomial `f(θ) = Σ_k c_k · exp(i·k·θ)`.
///
/// `coeffs[0]` is the constant term, and for `k ≥ 1` positions `2k - 1` and `2k` hold the
/// coefficients of frequencies `-k` and `+k`. A length-`n` polynomial therefore covers
/// frequencies `-⌊n/2⌋..=⌊(n-1)/2⌋`.
///
/// Every operator returns a fresh polynomial; operands borrowed by an operator are never
/// modified. Trailing zero-padding (see [`TrigPoly::zero_padded`]) is the only operation that
/// changes the length without changing the represented function, and nothing truncates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrigPoly {
    pub(crate) coeffs: Vec<Complex64>,
}

impl TrigPoly {
    /// Wraps canonical-order coefficients as they are.
    #[must_use]
    pub const fn new(coeffs: Vec<Complex64>) -> Self {
        Self { coeffs }
    }

    /// The zero polynomial, with no coefficients.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// The constant function `c`.
    #[must_use]
    pub fn constant(c: impl Into<Complex64>) -> Self {
        Self::new(vec![c.into()])
    }

    /// A polynomial of `len` coefficients whose real and imaginary parts are drawn uniformly
    /// from `[-1, 1)`.
    pub fn rand<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let coeffs = (0..len)
            .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect();
        Self::new(coeffs)
    }

    /// The coefficients, in canonical order.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    #[must_use]
    pub fn into_coeffs(self) -> Vec<Complex64> {
        self.coeffs
    }

    /// The number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The coefficient of `exp(i·freq·θ)`, or zero if `freq` lies outside the stored range.
    #[must_use]
    pub fn coeff(&self, freq: i64) -> Complex64 {
        position_of(freq)
            .and_then(|pos| self.coeffs.get(pos))
            .copied()
            .unwrap_or(ZERO)
    }

    /// The frequency carried by each stored coefficient, in storage order.
    pub fn frequencies(&self) -> impl Iterator<Item = i64> + use<> {
        (0..self.len()).map(frequency_of)
    }

    /// The representable frequency range `(lowest, highest)`, i.e. `(-⌊n/2⌋, ⌊(n-1)/2⌋)`.
    #[must_use]
    pub fn frequency_range(&self) -> (i64, i64) {
        let n = self.coeffs.len();
        (
            -(max_negative_frequency(n) as i64),
            max_positive_frequency(n) as i64,
        )
    }

    /// Returns a copy extended with zero coefficients to `len` entries. The represented function
    /// is unchanged. A `len` shorter than the current length leaves the length as is.
    #[must_use]
    pub fn zero_padded(&self, len: usize) -> Self {
        let mut coeffs = self.coeffs.clone();
        if len > coeffs.len() {
            coeffs.resize(len, ZERO);
        }
        Self::new(coeffs)
    }

    /// The polynomial representing `conj(f(θ))` for real `θ`.
    ///
    /// The coefficient of frequency `k` becomes `conj(c_{-k})`. When the length is even, the
    /// lowest frequency `-n/2` has no positive partner, so the result gains one coefficient.
    #[must_use]
    pub fn conj(&self) -> Self {
        let n = self.len();
        let len = if n % 2 == 0 && n > 0 { n + 1 } else { n };
        let coeffs = (0..len)
            .map(|pos| self.coeff(-frequency_of(pos)).conj())
            .collect();
        Self::new(coeffs)
    }
}

impl From<Vec<Complex64>> for TrigPoly {
    fn from(coeffs: Vec<Complex64>) -> Self {
        Self::new(coeffs)
    }
}
