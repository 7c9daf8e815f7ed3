use core::cell::RefCell;
use core::fmt;

use num_complex::Complex64;
use rustfft::FftPlanner;
use tracing::instrument;

use crate::FourierDft;
use crate::util::divide_by_len;

/// An O(n log n) DFT for any length, planned by `rustfft`.
///
/// Lengths with large prime factors fall back to Rader's or Bluestein's algorithm inside the
/// planner, so there is no power-of-two restriction. Plans are memoized per length and
/// direction, so repeated transforms of one length (as in a product of two polynomials) plan
/// only once.
///
/// TODO: The use of RefCell means this can't be shared across threads; a `RwLock` around the
/// planner would allow it.
pub struct RustFftDft {
    planner: RefCell<FftPlanner<f64>>,
}

impl RustFftDft {
    pub fn new() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }

    fn process(&self, vec: &mut [Complex64], inverse: bool) {
        let mut planner = self.planner.borrow_mut();
        let fft = if inverse {
            planner.plan_fft_inverse(vec.len())
        } else {
            planner.plan_fft_forward(vec.len())
        };
        // Release the planner before running, the plan is an independent `Arc`.
        drop(planner);
        fft.process(vec);
    }
}

impl Default for RustFftDft {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones start with an empty plan cache.
impl Clone for RustFftDft {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for RustFftDft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustFftDft").finish_non_exhaustive()
    }
}

impl FourierDft for RustFftDft {
    #[instrument(level = "debug", skip_all, fields(len = vec.len()))]
    fn dft(&self, mut vec: Vec<Complex64>) -> Vec<Complex64> {
        if !vec.is_empty() {
            self.process(&mut vec, false);
        }
        vec
    }

    #[instrument(level = "debug", skip_all, fields(len = vec.len()))]
    fn idft(&self, mut vec: Vec<Complex64>) -> Vec<Complex64> {
        if !vec.is_empty() {
            self.process(&mut vec, true);
            divide_by_len(&mut vec);
        }
        vec
    }
}
