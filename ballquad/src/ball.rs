//! The ball indicator integrand and its closed-form volume.

use std::f64::consts::PI;

use libm::tgamma;

use crate::error::{QuadratureError, Result};
use crate::integrand::Integrand;

/// Returns `1.0` if `x` lies strictly inside the unit ball, `0.0` otherwise.
///
/// Defined for points of any dimension.
pub fn unit_ball_indicator(x: &[f64]) -> f64 {
    BallIndicator::unit().eval(x)
}

/// Indicator function of the open ball of a given radius centred at the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallIndicator {
    radius: f64,
}

impl BallIndicator {
    /// Creates the indicator of the ball of radius `radius`.
    ///
    /// Fails with [`QuadratureError::InvalidParameter`] when `radius` is
    /// negative or not finite.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(QuadratureError::invalid(
                "radius",
                format!("must be finite and non-negative, got {radius}"),
            ));
        }
        Ok(BallIndicator { radius })
    }

    /// The indicator of the unit ball.
    pub fn unit() -> Self {
        BallIndicator { radius: 1.0 }
    }

    /// Returns the radius of the ball.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the exact volume of this ball in `dim` dimensions.
    pub fn analytic_volume(&self, dim: usize) -> f64 {
        ball_volume(dim, self.radius)
    }
}

impl Integrand for BallIndicator {
    fn eval(&self, x: &[f64]) -> f64 {
        // Compare squared norms; the boundary itself is outside.
        let norm_sq: f64 = x.iter().map(|xi| xi * xi).sum();
        if norm_sq < self.radius * self.radius {
            1.0
        } else {
            0.0
        }
    }
}

/// Volume of the `dim`-dimensional ball of radius `radius`,
/// `pi^(dim/2) / gamma(dim/2 + 1) * radius^dim`.
///
/// For `dim = 0` this is `1`, the volume of a point. Fails with
/// [`QuadratureError::InvalidParameter`] when `radius` is negative or not
/// finite.
pub fn analytic_ball_volume(dim: usize, radius: f64) -> Result<f64> {
    Ok(BallIndicator::new(radius)?.analytic_volume(dim))
}

fn ball_volume(dim: usize, radius: f64) -> f64 {
    let half = dim as f64 / 2.0;
    PI.powf(half) / tgamma(half + 1.0) * radius.powi(dim as i32)
}

/// Volume of the `dim`-dimensional unit ball.
///
/// ```
/// use ballquad::ball::analytic_unit_ball_volume;
///
/// assert!((analytic_unit_ball_volume(2) - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn analytic_unit_ball_volume(dim: usize) -> f64 {
    BallIndicator::unit().analytic_volume(dim)
}
