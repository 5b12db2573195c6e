//! The regular cell-centred grid used by the Riemann-sum integrator.

use rayon::prelude::*;
use tracing::debug;

use crate::cube::Hypercube;
use crate::error::{QuadratureError, Result};
use crate::integrand::Integrand;
use crate::point::PointSet;

/// A regular grid of `resolution^dim` cell centres over a hyper-cube.
#[derive(Debug, Clone)]
pub struct RegularGrid {
    /// The number of cells along each axis.
    resolution: usize,
    /// The integration domain.
    cube: Hypercube,
    /// The cell width along each axis.
    spacing: f64,
    /// The cell centres along a single axis, of size `resolution`.
    /// No centre lies on the boundary of the domain.
    centers: Vec<f64>,
    /// The total number of grid points, `resolution^dim`.
    n_points: usize,
}

impl RegularGrid {
    /// Creates a new grid with `resolution` cells along each axis of `cube`.
    ///
    /// Fails with [`QuadratureError::InvalidParameter`] when `resolution` is
    /// zero or when `resolution^dim` does not fit in a `usize`.
    pub fn new(resolution: usize, cube: Hypercube) -> Result<Self> {
        if resolution == 0 {
            return Err(QuadratureError::invalid("nx", "must be at least 1"));
        }
        let n_points = u32::try_from(cube.dim())
            .ok()
            .and_then(|dim| resolution.checked_pow(dim))
            .ok_or_else(|| {
                QuadratureError::invalid(
                    "nx",
                    format!("{resolution}^{} grid points overflow usize", cube.dim()),
                )
            })?;

        let spacing = cube.width() / resolution as f64;
        let centers = (0..resolution)
            .map(|k| cube.start() + spacing / 2.0 + k as f64 * spacing)
            .collect();

        debug!(resolution, dim = cube.dim(), n_points, spacing, "built regular grid");

        Ok(RegularGrid {
            resolution,
            cube,
            spacing,
            centers,
            n_points,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cube(&self) -> &Hypercube {
        &self.cube
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the cell centres along a single axis.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Returns the number of grid points, `resolution^dim`.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns the volume of one cell, `spacing^dim`.
    pub fn cell_volume(&self) -> f64 {
        self.spacing.powi(self.cube.dim() as i32)
    }

    /// Lazily enumerates every grid point exactly once, the last axis
    /// varying fastest.
    pub fn points(&self) -> GridPoints<'_> {
        GridPoints {
            grid: self,
            index: vec![0; self.cube.dim()],
            remaining: self.n_points,
        }
    }

    /// Materialises every grid point into a [`PointSet`].
    pub fn sample(&self) -> PointSet {
        let mut set = PointSet::with_capacity(self.cube.dim(), self.n_points);
        for point in self.points() {
            set.push(point);
        }
        set
    }

    /// Computes the Riemann sum of `integrand` without materialising the grid.
    ///
    /// Memory use is `O(dim)` regardless of the number of grid points.
    pub fn integrate<F>(&self, integrand: &F) -> f64
    where
        F: Integrand + ?Sized,
    {
        self.cell_volume() * self.sum_block(&[], integrand)
    }

    /// Parallel version of [`RegularGrid::integrate`], splitting the work
    /// along the first axis.
    pub fn integrate_par<F>(&self, integrand: &F) -> f64
    where
        F: Integrand + Sync + ?Sized,
    {
        let sum: f64 = (0..self.resolution)
            .into_par_iter()
            .map(|i| self.sum_block(&[i], integrand))
            .sum();
        self.cell_volume() * sum
    }

    /// Sums the integrand over every grid point whose leading indices are
    /// `prefix`.
    fn sum_block<F>(&self, prefix: &[usize], integrand: &F) -> f64
    where
        F: Integrand + ?Sized,
    {
        let dim = self.cube.dim();
        let fixed = prefix.len();

        let mut index = vec![0; dim];
        index[..fixed].copy_from_slice(prefix);
        let mut point: Vec<f64> = index.iter().map(|&i| self.centers[i]).collect();

        let mut sum = 0.0;
        loop {
            sum += integrand.eval(&point);
            match advance(&mut index, self.resolution, fixed) {
                Some(changed) => {
                    for axis in changed..dim {
                        point[axis] = self.centers[index[axis]];
                    }
                }
                None => return sum,
            }
        }
    }
}

/// Steps the odometer `index` over the axes `fixed..`, last axis fastest.
///
/// Returns the lowest axis whose index changed, or `None` once every
/// combination has been visited.
fn advance(index: &mut [usize], resolution: usize, fixed: usize) -> Option<usize> {
    for axis in (fixed..index.len()).rev() {
        index[axis] += 1;
        if index[axis] < resolution {
            return Some(axis);
        }
        index[axis] = 0;
    }
    None
}

/// Iterator over the points of a [`RegularGrid`].
#[derive(Debug, Clone)]
pub struct GridPoints<'a> {
    grid: &'a RegularGrid,
    index: Vec<usize>,
    remaining: usize,
}

impl Iterator for GridPoints<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = self.index.iter().map(|&i| self.grid.centers[i]).collect();
        self.remaining -= 1;
        if self.remaining > 0 {
            advance(&mut self.index, self.grid.resolution, 0);
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridPoints<'_> {}

/// Builds the regular grid point set over `[start, stop]^dim` together with
/// its cell volume.
///
/// # Errors
///
/// [`QuadratureError::InvalidParameter`] when `nx` or `dim` is zero, or when
/// `stop <= start`.
///
/// # Examples
///
/// ```
/// use ballquad::grid::grid_sample;
///
/// let (points, cell_volume) = grid_sample(4, 1, -1.0, 1.0).unwrap();
/// let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
/// assert_eq!(xs, vec![-0.75, -0.25, 0.25, 0.75]);
/// assert_eq!(cell_volume, 0.5);
/// ```
pub fn grid_sample(nx: usize, dim: usize, start: f64, stop: f64) -> Result<(PointSet, f64)> {
    let grid = RegularGrid::new(nx, Hypercube::new(dim, start, stop)?)?;
    Ok((grid.sample(), grid.cell_volume()))
}
