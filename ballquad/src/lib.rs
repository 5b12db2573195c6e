//! `ballquad` estimates the volume of the D-dimensional unit ball by
//! numerical integration of its indicator function.
//!
//! Two strategies share a single quadrature evaluator:
//!
//! * a regular cell-centred grid (a Riemann sum), see [`grid`];
//! * uniform random sampling (plain Monte Carlo), see [`random`].
//!
//! Both attribute the same volume to every point, so with the same number of
//! points their estimates differ only by where the points are placed. The
//! closed-form volume in [`ball`] is the reference both are judged against.
//!
//! ```
//! use ballquad::{analytic_unit_ball_volume, evaluate, grid_sample, unit_ball_indicator};
//!
//! let (points, cell_volume) = grid_sample(100, 2, -1.0, 1.0)?;
//! let estimate = evaluate(&points, cell_volume, &unit_ball_indicator)?;
//! assert!((estimate - analytic_unit_ball_volume(2)).abs() < 0.05);
//! # Ok::<(), ballquad::QuadratureError>(())
//! ```

pub mod ball;
pub mod compare;
pub mod cube;
pub mod error;
pub mod grid;
pub mod integrand;
pub mod point;
pub mod quadrature;
pub mod random;

pub use ball::{analytic_ball_volume, analytic_unit_ball_volume, unit_ball_indicator, BallIndicator};
pub use compare::{compare_dimensions, compare_unit_ball, grid_resolution, Comparison};
pub use cube::Hypercube;
pub use error::{QuadratureError, Result};
pub use grid::{grid_sample, RegularGrid};
pub use integrand::Integrand;
pub use point::PointSet;
pub use quadrature::{evaluate, evaluate_par};
pub use random::{random_sample, RandomSampler};
