use num_complex::Complex64;
use tp_util::frequency_of;

use crate::poly::I;
use crate::{TrigPoly, TrigPolyError, TrigPolyResult};

impl TrigPoly {
    /// The derivative `f'(θ)`.
    ///
    /// The term `c_k · exp(i·k·θ)` differentiates to `i·k·c_k · exp(i·k·θ)`, so each coefficient
    /// is scaled by `i` times the frequency stored at its position. The length is unchanged.
    #[must_use]
    pub fn diff(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(pos, &c)| c * derivative_factor(pos))
            .collect();
        Self::new(coeffs)
    }

    /// The `k`-th derivative. `diff_n(0)` is a copy of `self`.
    #[must_use]
    pub fn diff_n(&self, k: usize) -> Self {
        (0..k).fold(self.clone(), |acc, _| acc.diff())
    }

    /// Like [`TrigPoly::diff_n`], for a signed order.
    ///
    /// # Errors
    /// Returns [`TrigPolyError::NegativeDerivativeOrder`] if `k < 0`.
    pub fn try_diff_n(&self, k: i64) -> TrigPolyResult<Self> {
        let k = usize::try_from(k).map_err(|_| TrigPolyError::NegativeDerivativeOrder(k))?;
        Ok(self.diff_n(k))
    }
}

/// The factor `diff` applies at canonical position `pos`: `i·k` for the frequency `k` stored
/// there.
fn derivative_factor(pos: usize) -> Complex64 {
    I * frequency_of(pos) as f64
}
