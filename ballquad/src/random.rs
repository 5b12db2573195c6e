//! The uniform-random sampler used by the Monte Carlo integrator.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

use crate::cube::Hypercube;
use crate::error::{QuadratureError, Result};
use crate::integrand::Integrand;
use crate::point::PointSet;

/// Draws points independently and uniformly from a hyper-cube.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    /// The random number generator.
    rng: Pcg64,
}

impl RandomSampler {
    /// Creates a sampler seeded from system entropy.
    pub fn new() -> Self {
        RandomSampler {
            rng: Pcg64::from_entropy(),
        }
    }

    /// Creates a sampler whose stream is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomSampler {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Sets the seed for the random number generator.
    ///
    /// # Arguments
    ///
    /// * `seed`: The seed to use.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Pcg64::seed_from_u64(seed);
    }

    /// Draws `n_points` points from `cube`, each coordinate uniform in
    /// `[start, stop)`.
    ///
    /// Coordinates are drawn point by point, axis by axis, so a given seed
    /// always yields the same points in the same order.
    pub fn sample(&mut self, n_points: usize, cube: &Hypercube) -> Result<PointSet> {
        check_points(n_points)?;

        let dim = cube.dim();
        let mut set = PointSet::with_capacity(dim, n_points);
        let mut point = vec![0.0; dim];
        for _ in 0..n_points {
            self.fill(&mut point, cube);
            set.push(point.clone());
        }

        debug!(n_points, dim, "drew uniform random points");
        Ok(set)
    }

    /// Computes the Monte Carlo estimate of `integrand` over `cube` from
    /// `n_points` draws, without materialising the point set.
    ///
    /// For the same generator state this consumes exactly the draws that
    /// [`RandomSampler::sample`] would, so both paths agree on the points.
    pub fn integrate<F>(&mut self, n_points: usize, cube: &Hypercube, integrand: &F) -> Result<f64>
    where
        F: Integrand + ?Sized,
    {
        check_points(n_points)?;
        if let Some(expected) = integrand.dim() {
            if expected != cube.dim() {
                return Err(QuadratureError::DimensionMismatch {
                    index: None,
                    expected,
                    found: cube.dim(),
                });
            }
        }

        let mut point = vec![0.0; cube.dim()];
        let mut sum = 0.0;
        for _ in 0..n_points {
            self.fill(&mut point, cube);
            sum += integrand.eval(&point);
        }

        let estimate = cube.cell_volume(n_points) * sum;
        debug!(n_points, dim = cube.dim(), estimate, "streamed Monte Carlo estimate");
        Ok(estimate)
    }

    fn fill(&mut self, point: &mut [f64], cube: &Hypercube) {
        for x in point.iter_mut() {
            *x = self.rng.gen_range(cube.start()..cube.stop());
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn check_points(n_points: usize) -> Result<()> {
    if n_points == 0 {
        return Err(QuadratureError::invalid("n", "must be at least 1"));
    }
    Ok(())
}

/// Draws `n` uniform random points from `[start, stop]^dim` together with
/// the per-point volume `(stop - start)^dim / n`.
///
/// With `seed` set the result is reproducible; with `None` the generator is
/// seeded from system entropy.
///
/// # Errors
///
/// [`QuadratureError::InvalidParameter`] when `n` or `dim` is zero, or when
/// `stop <= start`.
///
/// # Examples
///
/// ```
/// use ballquad::random::random_sample;
///
/// let (a, cell_volume) = random_sample(100, 3, -1.0, 1.0, Some(7)).unwrap();
/// let (b, _) = random_sample(100, 3, -1.0, 1.0, Some(7)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(cell_volume, 0.08);
/// ```
pub fn random_sample(
    n: usize,
    dim: usize,
    start: f64,
    stop: f64,
    seed: Option<u64>,
) -> Result<(PointSet, f64)> {
    let cube = Hypercube::new(dim, start, stop)?;
    let mut sampler = match seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::new(),
    };
    let points = sampler.sample(n, &cube)?;
    Ok((points, cube.cell_volume(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::evaluate;

    #[test]
    fn test_points_inside_domain() {
        let cube = Hypercube::new(4, -2.0, 5.0).unwrap();
        let points = RandomSampler::seeded(42).sample(500, &cube).unwrap();
        assert_eq!(points.len(), 500);
        assert_eq!(points.dim(), 4);
        for p in points.iter() {
            assert_eq!(p.len(), 4);
            assert!(p.iter().all(|&x| (-2.0..5.0).contains(&x)));
        }
    }

    #[test]
    fn test_set_seed_restarts_stream() {
        let cube = Hypercube::new(2, 0.0, 1.0).unwrap();
        let mut sampler = RandomSampler::seeded(1234);
        let first = sampler.sample(10, &cube).unwrap();
        let second = sampler.sample(10, &cube).unwrap();
        assert_ne!(first, second);

        sampler.set_seed(1234);
        assert_eq!(sampler.sample(10, &cube).unwrap(), first);
    }

    #[test]
    fn test_streaming_matches_materialised() {
        let cube = Hypercube::new(3, -1.0, 1.0).unwrap();
        let f = |x: &[f64]| x[0] * x[0] + x[1] - x[2];

        let points = RandomSampler::seeded(99).sample(2_000, &cube).unwrap();
        let materialised = evaluate(&points, cube.cell_volume(2_000), &f).unwrap();
        let streamed = RandomSampler::seeded(99).integrate(2_000, &cube, &f).unwrap();
        assert_eq!(materialised, streamed);
    }

    #[test]
    fn test_constant_integrand_gives_cube_volume() {
        let cube = Hypercube::new(3, 0.0, 2.0).unwrap();
        let estimate = RandomSampler::seeded(5)
            .integrate(1_000, &cube, &|_: &[f64]| 1.0)
            .unwrap();
        approx::assert_relative_eq!(estimate, 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(random_sample(0, 2, -1.0, 1.0, Some(1)).is_err());
        assert!(random_sample(10, 0, -1.0, 1.0, Some(1)).is_err());
        assert!(random_sample(10, 2, 1.0, 1.0, Some(1)).is_err());
    }
}
