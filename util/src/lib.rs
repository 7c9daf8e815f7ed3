//! Index bookkeeping and sampling grids shared by the trigonometric polynomial crates.

use core::f64::consts::TAU;

mod order;

pub use order::*;

/// Returns the `n` Fourier nodes `2πk/n` for `k = 0..n`.
///
/// These are the uniform angles at which a length-`n` polynomial is sampled and interpolated.
#[must_use]
pub fn nodes(n: usize) -> Vec<f64> {
    (0..n).map(|k| node(k, n)).collect()
}

/// The `k`-th of `n` Fourier nodes.
#[must_use]
#[inline]
pub fn node(k: usize, n: usize) -> f64 {
    TAU * k as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn nodes_are_uniform_over_one_period() {
        assert!(nodes(0).is_empty());
        assert_eq!(nodes(1), vec![0.0]);

        let grid = nodes(8);
        assert_eq!(grid.len(), 8);
        for (k, theta) in grid.iter().enumerate() {
            assert_abs_diff_eq!(*theta, k as f64 * TAU / 8.0, epsilon = 1e-15);
        }
        // The grid is half-open: 2π itself is never a node.
        assert!(grid.iter().all(|&theta| theta < TAU));
    }
}
