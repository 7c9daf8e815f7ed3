use num_complex::Complex64;

/// Divide each entry of `vals` by its length.
pub(crate) fn divide_by_len(vals: &mut [Complex64]) {
    let n = vals.len();
    if n == 0 {
        return;
    }
    let n_inv = 1.0 / n as f64;
    vals.iter_mut().for_each(|v| *v *= n_inv);
}

/// Maps index `j` to `n - j` for every `j` in `1..n`, leaving index 0 in place.
///
/// Applying a forward DFT to a forward DFT yields `n * x[-j mod n]`; this undoes the negation.
pub(crate) fn negate_indices(vals: &mut [Complex64]) {
    if vals.len() > 1 {
        vals[1..].reverse();
    }
}
