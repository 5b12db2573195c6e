//! Side-by-side comparison of the grid and Monte Carlo estimates of the unit
//! ball volume against the closed-form value.

use tracing::debug;

use crate::ball::{analytic_unit_ball_volume, BallIndicator};
use crate::cube::Hypercube;
use crate::error::{QuadratureError, Result};
use crate::grid::RegularGrid;
use crate::random::RandomSampler;

/// Returns the largest per-axis resolution `nx` with `nx^dim <= n_max`.
///
/// This is `floor(n_max^(1/dim))`, corrected in integer arithmetic so that
/// perfect powers are not lost to rounding.
pub fn grid_resolution(n_max: usize, dim: usize) -> Result<usize> {
    if dim == 0 {
        return Err(QuadratureError::invalid("dim", "must be at least 1"));
    }
    if n_max == 0 {
        return Err(QuadratureError::invalid("n_max", "must be at least 1"));
    }
    let exp = u32::try_from(dim).unwrap_or(u32::MAX);
    let fits = |nx: usize| nx.checked_pow(exp).is_some_and(|n| n <= n_max);

    let mut nx = (n_max as f64).powf(1.0 / dim as f64).floor() as usize;
    while nx.checked_add(1).is_some_and(fits) {
        nx += 1;
    }
    while nx > 1 && !fits(nx) {
        nx -= 1;
    }
    Ok(nx.max(1))
}

/// Grid and Monte Carlo estimates for one dimension, sharing the same number
/// of points and therefore the same cell volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub dim: usize,
    /// Grid resolution along each axis.
    pub nx: usize,
    /// Number of points used by each method, `nx^dim`.
    pub n_points: usize,
    pub cell_volume: f64,
    pub grid: f64,
    pub monte_carlo: f64,
    pub analytic: f64,
}

impl Comparison {
    pub fn grid_error(&self) -> f64 {
        (self.grid - self.analytic).abs()
    }

    pub fn monte_carlo_error(&self) -> f64 {
        (self.monte_carlo - self.analytic).abs()
    }

    pub fn grid_relative_error(&self) -> f64 {
        self.grid_error() / self.analytic
    }

    pub fn monte_carlo_relative_error(&self) -> f64 {
        self.monte_carlo_error() / self.analytic
    }
}

/// Estimates the volume of the `dim`-dimensional unit ball with both methods
/// over `[-1, 1]^dim`, using at most `n_max` points each.
///
/// Both integrators stream their points, so memory use does not grow with
/// `n_max`.
pub fn compare_unit_ball(dim: usize, n_max: usize, seed: Option<u64>) -> Result<Comparison> {
    let cube = Hypercube::new(dim, -1.0, 1.0)?;
    let nx = grid_resolution(n_max, dim)?;
    let grid = RegularGrid::new(nx, cube)?;
    let indicator = BallIndicator::unit();

    let n_points = grid.n_points();
    let grid_estimate = grid.integrate(&indicator);

    let mut sampler = match seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::new(),
    };
    let monte_carlo = sampler.integrate(n_points, &cube, &indicator)?;

    let comparison = Comparison {
        dim,
        nx,
        n_points,
        cell_volume: grid.cell_volume(),
        grid: grid_estimate,
        monte_carlo,
        analytic: analytic_unit_ball_volume(dim),
    };
    debug!(
        dim,
        nx,
        n_points,
        grid = comparison.grid,
        monte_carlo = comparison.monte_carlo,
        analytic = comparison.analytic,
        "compared unit ball estimates"
    );
    Ok(comparison)
}

/// Runs [`compare_unit_ball`] for every dimension in `dims`.
///
/// With a seed, dimension `d` uses `seed + d` so that every dimension draws
/// an independent but reproducible stream.
pub fn compare_dimensions<I>(dims: I, n_max: usize, seed: Option<u64>) -> Result<Vec<Comparison>>
where
    I: IntoIterator<Item = usize>,
{
    dims.into_iter()
        .map(|dim| compare_unit_ball(dim, n_max, seed.map(|s| s.wrapping_add(dim as u64))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_resolution() {
        assert_eq!(grid_resolution(1_000_000, 1).unwrap(), 1_000_000);
        assert_eq!(grid_resolution(1_000_000, 2).unwrap(), 1000);
        assert_eq!(grid_resolution(1_000_000, 3).unwrap(), 100);
        assert_eq!(grid_resolution(999_999, 3).unwrap(), 99);
        assert_eq!(grid_resolution(1_000_000, 6).unwrap(), 10);
        assert_eq!(grid_resolution(1_000_000, 30).unwrap(), 1);
        assert_eq!(grid_resolution(1, 4).unwrap(), 1);
    }

    #[test]
    fn test_grid_resolution_rejects_zero() {
        assert!(grid_resolution(0, 2).is_err());
        assert!(grid_resolution(100, 0).is_err());
    }

    #[test]
    fn test_compare_two_dimensions() {
        let comparison = compare_unit_ball(2, 10_000, Some(1234)).unwrap();
        assert_eq!(comparison.nx, 100);
        assert_eq!(comparison.n_points, 10_000);
        approx::assert_relative_eq!(comparison.cell_volume, 4e-4, max_relative = 1e-12);
        assert!(comparison.grid_error() < 0.05);
        assert!(comparison.monte_carlo_error() < 0.1);
    }

    #[test]
    fn test_compare_dimensions_is_reproducible() {
        let first = compare_dimensions(1..=4, 20_000, Some(7)).unwrap();
        let second = compare_dimensions(1..=4, 20_000, Some(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|c| c.dim).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(compare_dimensions([2, 0], 100, None).is_err());
    }
}
