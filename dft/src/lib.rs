//! This crate contains some DFT implementations over `Complex<f64>` samples of any length.

mod naive;
mod planner;
mod traits;
mod util;

pub use naive::*;
pub use planner::*;
pub use traits::*;
