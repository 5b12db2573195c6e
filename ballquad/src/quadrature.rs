//! The quadrature evaluator shared by the grid and the Monte Carlo samplers.
//!
//! Both samplers attribute the same volume to every point, so an estimate is
//! always `cell_volume * sum(f(p))`. The evaluator does not know, and does not
//! need to know, which sampler produced its input.

use rayon::prelude::*;
use tracing::trace;

use crate::error::{QuadratureError, Result};
use crate::integrand::Integrand;
use crate::point::PointSet;

/// Computes `cell_volume * sum(f(p))` over every point of `points`.
///
/// Every point is checked against the declared dimensionality before the
/// integrand is evaluated, so a failing call never evaluates `f`.
///
/// # Errors
///
/// * [`QuadratureError::DimensionMismatch`] if a point's length differs from
///   `points.dim()`, or if the integrand declares a different dimension.
/// * [`QuadratureError::InvalidParameter`] if `cell_volume` is negative or
///   not finite.
///
/// # Examples
///
/// ```
/// use ballquad::point::PointSet;
/// use ballquad::quadrature::evaluate;
///
/// let points = PointSet::new(1, vec![vec![0.25], vec![0.75]]);
/// let estimate = evaluate(&points, 0.5, &|x: &[f64]| x[0]).unwrap();
/// assert_eq!(estimate, 0.5);
/// ```
pub fn evaluate<F>(points: &PointSet, cell_volume: f64, integrand: &F) -> Result<f64>
where
    F: Integrand + ?Sized,
{
    check_inputs(points, cell_volume, integrand)?;

    let sum: f64 = points.iter().map(|x| integrand.eval(x)).sum();
    let estimate = cell_volume * sum;
    trace!(n_points = points.len(), cell_volume, estimate, "evaluated point set");
    Ok(estimate)
}

/// Parallel version of [`evaluate`].
///
/// The map and the reduction run on the rayon thread pool. The result only
/// differs from [`evaluate`] by floating-point summation order.
pub fn evaluate_par<F>(points: &PointSet, cell_volume: f64, integrand: &F) -> Result<f64>
where
    F: Integrand + Sync + ?Sized,
{
    check_inputs(points, cell_volume, integrand)?;

    let sum: f64 = points
        .as_slice()
        .par_iter()
        .map(|x| integrand.eval(x))
        .sum();
    let estimate = cell_volume * sum;
    trace!(n_points = points.len(), cell_volume, estimate, "evaluated point set in parallel");
    Ok(estimate)
}

fn check_inputs<F>(points: &PointSet, cell_volume: f64, integrand: &F) -> Result<()>
where
    F: Integrand + ?Sized,
{
    if !cell_volume.is_finite() || cell_volume < 0.0 {
        return Err(QuadratureError::invalid(
            "cell_volume",
            format!("must be finite and non-negative, got {cell_volume}"),
        ));
    }

    let dim = points.dim();
    if let Some(expected) = integrand.dim() {
        if expected != dim {
            return Err(QuadratureError::DimensionMismatch {
                index: None,
                expected,
                found: dim,
            });
        }
    }

    match points.iter().position(|x| x.len() != dim) {
        Some(index) => Err(QuadratureError::DimensionMismatch {
            index: Some(index),
            expected: dim,
            found: points.as_slice()[index].len(),
        }),
        None => Ok(()),
    }
}
