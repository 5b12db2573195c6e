//! The axis-aligned integration domain `[start, stop]^dim`.

use crate::error::{QuadratureError, Result};

/// An axis-aligned hyper-cube with identical bounds on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypercube {
    dim: usize,
    start: f64,
    stop: f64,
}

impl Hypercube {
    /// Creates a new hyper-cube, validating the dimension and the bounds.
    ///
    /// Fails with [`QuadratureError::InvalidParameter`] when `dim` is zero,
    /// when either bound or the width `stop - start` is not finite, or when
    /// `stop <= start`.
    pub fn new(dim: usize, start: f64, stop: f64) -> Result<Self> {
        if dim == 0 {
            return Err(QuadratureError::invalid("dim", "must be at least 1"));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(QuadratureError::invalid(
                "start/stop",
                format!("bounds must be finite, got [{start}, {stop}]"),
            ));
        }
        if stop <= start {
            return Err(QuadratureError::invalid(
                "start/stop",
                format!("interval [{start}, {stop}] must satisfy start < stop"),
            ));
        }
        if !(stop - start).is_finite() {
            return Err(QuadratureError::invalid(
                "start/stop",
                format!("width of [{start}, {stop}] overflows f64"),
            ));
        }
        Ok(Hypercube { dim, start, stop })
    }

    /// Returns the number of dimensions.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the lower bound shared by every axis.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound shared by every axis.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Returns the edge length `stop - start`.
    pub fn width(&self) -> f64 {
        self.stop - self.start
    }

    /// Returns the hyper-volume `(stop - start)^dim`.
    pub fn volume(&self) -> f64 {
        self.width().powi(self.dim as i32)
    }

    /// Returns the volume attributed to each of `n_points` samples.
    pub fn cell_volume(&self, n_points: usize) -> f64 {
        self.volume() / n_points as f64
    }
}
