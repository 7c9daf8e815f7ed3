//! Dense samples handed to a plotting backend.
//!
//! Rendering lives outside this crate. A [`Plotter`] receives labelled [`Curve`]s and returns
//! whatever figure handle it likes; nothing here looks inside that handle.

use core::f64::consts::TAU;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::TrigPoly;

/// A function sampled on a closed grid over one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: Option<String>,
    pub points: Vec<f64>,
    pub values: Vec<Complex64>,
}

impl Curve {
    /// Evaluates `poly` at `samples` evenly spaced points of `[0, 2π]`, both ends included.
    pub fn of_poly(poly: &TrigPoly, samples: usize, label: Option<&str>) -> Self {
        let points = closed_grid(samples);
        let values = poly.eval_many(&points);
        Self {
            label: label.map(str::to_owned),
            points,
            values,
        }
    }

    /// Evaluates `f` on the same grid as [`Curve::of_poly`].
    pub fn of_fn<F, V>(mut f: F, samples: usize, label: Option<&str>) -> Self
    where
        F: FnMut(f64) -> V,
        V: Into<Complex64>,
    {
        let points = closed_grid(samples);
        let values = points.iter().map(|&x| f(x).into()).collect();
        Self {
            label: label.map(str::to_owned),
            points,
            values,
        }
    }

    /// The largest absolute difference between the values of two curves on a shared grid.
    ///
    /// Returns `None` if the grids differ.
    #[must_use]
    pub fn max_deviation(&self, other: &Self) -> Option<f64> {
        (self.points == other.points).then(|| {
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| (a - b).norm())
                .fold(0.0, f64::max)
        })
    }
}

/// A rendering backend for curves.
pub trait Plotter {
    type Figure;

    /// Draws `curves` in order, labelling those that carry a label.
    fn plot(&mut self, curves: &[Curve]) -> Self::Figure;
}

fn closed_grid(samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = TAU / (samples - 1) as f64;
            (0..samples).map(|k| k as f64 * step).collect()
        }
    }
}
