use num_complex::Complex64;

use crate::TrigPoly;
use crate::poly::ZERO;

impl TrigPoly {
    /// Evaluates the polynomial at an arbitrary angle `x`.
    ///
    /// The positive and negative frequencies are each a power series in `z = exp(ix)` and
    /// `conj(z) = exp(-ix)`, evaluated by Horner's rule from the highest frequency down. Costs
    /// O(n) per point and needs no table of exponentials.
    #[must_use]
    pub fn eval(&self, x: f64) -> Complex64 {
        let Some((&constant, rest)) = self.coeffs.split_first() else {
            return ZERO;
        };
        let z = Complex64::cis(x);
        // rest[0], rest[2], ... carry frequencies -1, -2, ...; rest[1], rest[3], ... carry 1, 2, ...
        let negative = horner(rest.iter().step_by(2), z.conj());
        let positive = horner(rest.iter().skip(1).step_by(2), z);
        constant + negative + positive
    }

    /// Evaluates the polynomial at each of `xs`.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64]) -> Vec<Complex64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

/// Computes `Σ_{k≥1} c_k z^k` for coefficients `c_1, c_2, ...`.
fn horner<'a, I>(coeffs: I, z: Complex64) -> Complex64
where
    I: DoubleEndedIterator<Item = &'a Complex64>,
{
    coeffs.rev().fold(ZERO, |acc, &c| (acc + c) * z)
}
