//! Conversions between the natural DFT coefficient order and the canonical interleaved order.
//!
//! A DFT of length `n` produces coefficients in *natural* order
//!
//! ```text
//!   0, 1, 2, ..., ⌈n/2⌉ - 1, -⌊n/2⌋, ..., -2, -1
//! ```
//!
//! whereas polynomials store them in *canonical* order
//!
//! ```text
//!   0, -1, 1, -2, 2, -3, 3, ...
//! ```
//!
//! The canonical order makes addition of two polynomials a positional sum (the shorter one is
//! zero-extended) and turns "the coefficient of frequency `k`" into a direct index lookup. Both
//! orders hold exactly the same set of frequencies for a given `n`, so the conversions below are
//! permutations.

/// The frequency stored at canonical position `pos`.
#[must_use]
#[inline]
pub const fn frequency_of(pos: usize) -> i64 {
    if pos % 2 == 0 {
        (pos / 2) as i64
    } else {
        -(pos.div_ceil(2) as i64)
    }
}

/// The canonical position holding frequency `freq`. Inverse of [`frequency_of`].
///
/// Returns `None` when the position does not fit in a `usize`, which happens for frequencies
/// near `i64::MIN` or `i64::MAX`.
#[must_use]
#[inline]
pub fn position_of(freq: i64) -> Option<usize> {
    let magnitude = usize::try_from(freq.unsigned_abs()).ok()?;
    let doubled = magnitude.checked_mul(2)?;
    if freq >= 0 {
        Some(doubled)
    } else {
        // `freq < 0` means `doubled >= 2`.
        Some(doubled - 1)
    }
}

/// The index of frequency `freq` in a natural-order sequence of length `n`.
///
/// Negative frequencies wrap around to the tail of the sequence. `freq` must be one of the
/// frequencies a length-`n` sequence holds, `-⌊n/2⌋..=⌊(n-1)/2⌋`.
#[must_use]
#[inline]
pub const fn natural_index(freq: i64, n: usize) -> usize {
    debug_assert!(
        freq <= max_positive_frequency(n) as i64
            && freq.unsigned_abs() <= max_negative_frequency(n) as u64,
        "frequency out of range for this length"
    );
    if freq >= 0 {
        freq as usize
    } else {
        n - freq.unsigned_abs() as usize
    }
}

/// The frequency stored at index `i` of a natural-order sequence of length `n`.
#[must_use]
#[inline]
pub const fn natural_frequency(i: usize, n: usize) -> i64 {
    if i < n - n / 2 {
        i as i64
    } else {
        i as i64 - n as i64
    }
}

/// The largest positive frequency representable by `n` canonical coefficients.
#[must_use]
#[inline]
pub const fn max_positive_frequency(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

/// The largest magnitude of a negative frequency representable by `n` canonical coefficients.
#[must_use]
#[inline]
pub const fn max_negative_frequency(n: usize) -> usize {
    n / 2
}

/// Reorders a natural-order coefficient sequence into canonical order.
#[must_use]
pub fn to_canonical<T: Clone>(natural: &[T]) -> Vec<T> {
    let n = natural.len();
    (0..n)
        .map(|pos| natural[natural_index(frequency_of(pos), n)].clone())
        .collect()
}

/// Reorders a canonical-order coefficient sequence into natural order. Inverse of
/// [`to_canonical`].
#[must_use]
pub fn from_canonical<T: Clone>(canonical: &[T]) -> Vec<T> {
    let n = canonical.len();
    (0..n)
        .map(|i| {
            // Frequencies of a length-`n` sequence sit at positions below `n`.
            let pos = 2 * natural_frequency(i, n).unsigned_abs() as usize;
            let pos = if i < n - n / 2 { pos } else { pos - 1 };
            canonical[pos].clone()
        })
        .collect()
}
