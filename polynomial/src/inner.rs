use core::f64::consts::TAU;

use num_complex::Complex64;

use crate::TrigPoly;

impl TrigPoly {
    /// The L² inner product `∫₀^{2π} f(θ) · conj(g(θ)) dθ`.
    ///
    /// The exponentials `exp(i·k·θ)` are orthogonal over one period with squared norm `2π`, so
    /// this reduces to `2π · Σ c_k · conj(d_k)` over the positions both operands store.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> Complex64 {
        let sum: Complex64 = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a * b.conj())
            .sum();
        sum * TAU
    }

    /// The L² norm `sqrt(<f, f>)`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.inner_product(self).re.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::nodes;

    #[test]
    fn exponentials_are_orthogonal() {
        let n = 9;
        let exps: Vec<_> = (-4..=4)
            .map(|k| TrigPoly::from_fn(|theta| Complex64::cis(k as f64 * theta), n))
            .collect();
        for (j, f) in exps.iter().enumerate() {
            for (k, g) in exps.iter().enumerate() {
                let ip = f.inner_product(g);
                let expected = if j == k { TAU } else { 0.0 };
                assert_abs_diff_eq!(ip.re, expected, epsilon = 1e-12);
                assert_abs_diff_eq!(ip.im, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn norm_of_sine() {
        // ∫ sin² = π over one period.
        let f = TrigPoly::from_fn(f64::sin, 7);
        assert_abs_diff_eq!(f.norm(), PI.sqrt(), epsilon = 1e-12);
        assert_eq!(TrigPoly::zero().norm(), 0.0);
    }

    #[test]
    fn matches_quadrature() {
        // The trapezoidal rule on m > deg nodes integrates trigonometric polynomials exactly.
        let mut rng = SmallRng::seed_from_u64(1);
        let f = TrigPoly::rand(&mut rng, 5);
        let g = TrigPoly::rand(&mut rng, 8);
        let m = 32;
        let quad: Complex64 = nodes(m)
            .into_iter()
            .map(|x| f.eval(x) * g.eval(x).conj())
            .sum::<Complex64>()
            * (TAU / m as f64);
        let ip = f.inner_product(&g);
        assert_abs_diff_eq!(ip.re, quad.re, epsilon = 1e-10);
        assert_abs_diff_eq!(ip.im, quad.im, epsilon = 1e-10);
    }

    #[test]
    fn hermitian_symmetry() {
        let mut rng = SmallRng::seed_from_u64(2);
        let f = TrigPoly::rand(&mut rng, 6);
        let g = TrigPoly::rand(&mut rng, 3);
        let fg = f.inner_product(&g);
        let gf = g.inner_product(&f);
        assert_abs_diff_eq!(fg.re, gf.re, epsilon = 1e-12);
        assert_abs_diff_eq!(fg.im, -gf.im, epsilon = 1e-12);
    }
}
