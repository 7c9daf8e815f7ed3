//! Interpolates two smooth periodic functions, multiplies and differentiates the interpolants,
//! and reports how closely they track the exact results.
//!
//! Run with `RUST_LOG=debug` to see the DFT spans.

use num_complex::Complex64;
use tp_polynomial::{Curve, TrigPoly};
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const NUM_NODES: usize = 33;
const CURVE_SAMPLES: usize = 1000;

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let f = |x: f64| x.sin().exp();
    let g = |x: f64| Complex64::new(x.cos(), (2.0 * x).sin());

    let pf = TrigPoly::from_fn(f, NUM_NODES);
    let pg = TrigPoly::from_fn(g, NUM_NODES);
    let product = &pf * &pg;
    let derivative = pf.diff();

    let checks = [
        (
            Curve::of_poly(&pf, CURVE_SAMPLES, Some("exp(sin x)")),
            Curve::of_fn(f, CURVE_SAMPLES, None),
        ),
        (
            Curve::of_poly(&product, CURVE_SAMPLES, Some("exp(sin x) * g(x)")),
            Curve::of_fn(|x| Complex64::from(f(x)) * g(x), CURVE_SAMPLES, None),
        ),
        (
            Curve::of_poly(&derivative, CURVE_SAMPLES, Some("d/dx exp(sin x)")),
            Curve::of_fn(|x: f64| x.cos() * f(x), CURVE_SAMPLES, None),
        ),
    ];

    for (approx, exact) in &checks {
        let label = approx.label.as_deref().unwrap_or_default();
        match approx.max_deviation(exact) {
            Some(err) => info!(label, err, "max deviation"),
            None => info!(label, "grids differ"),
        }
    }
    info!(norm = pf.norm(), len = product.len(), "summary");
}
