//! Trigonometric polynomials (truncated Fourier series) and their algebra.
//!
//! A [`TrigPoly`] represents
//!
//! ```text
//!   f(θ) = Σ_k c_k · exp(i·k·θ)
//! ```
//!
//! over a bounded range of integer frequencies `k`. Coefficients are stored in *canonical* order
//! `0, -1, 1, -2, 2, ...` (see [`tp_util::to_canonical`]). Every operation in this crate keeps
//! that ordering consistent: addition is a positional sum, multiplication round-trips through
//! sample space with enough zero-padding to avoid aliasing, and differentiation scales each
//! coefficient by `i·k`.

mod arith;
mod calculus;
mod curve;
mod error;
mod eval;
mod inner;
mod interpolate;
mod poly;

pub use curve::*;
pub use error::*;
pub use poly::*;
pub use tp_util::nodes;
