//! The `Integrand` trait, which defines the function to be integrated.

/// A trait representing a function to be integrated.
///
/// An integrand is a pure function of a single point. The samplers and the
/// evaluator own the iteration over points and the reduction, so an
/// implementation only ever sees one point at a time.
///
/// Every closure `Fn(&[f64]) -> f64` is an integrand:
///
/// ```
/// use ballquad::integrand::Integrand;
///
/// let f = |x: &[f64]| x.iter().sum::<f64>();
/// assert_eq!(f.eval(&[1.0, 2.0]), 3.0);
/// assert_eq!(f.dim(), None);
/// ```
pub trait Integrand {
    /// Evaluates the function at a given point `x`.
    ///
    /// # Arguments
    ///
    /// * `x`: A slice of `f64` representing the point in the integration space.
    ///
    /// # Returns
    ///
    /// The value of the function `f(x)`.
    fn eval(&self, x: &[f64]) -> f64;

    /// Returns the number of dimensions the function is defined on, or
    /// `None` when it accepts points of any dimension.
    fn dim(&self) -> Option<usize> {
        None
    }
}

impl<F> Integrand for F
where
    F: Fn(&[f64]) -> f64,
{
    fn eval(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Paraboloid;

    impl Integrand for Paraboloid {
        fn eval(&self, x: &[f64]) -> f64 {
            x[0].powi(2) + x[1].powi(2)
        }

        fn dim(&self) -> Option<usize> {
            Some(2)
        }
    }

    #[test]
    fn test_closure_integrand() {
        let constant = |_: &[f64]| 1.5;
        assert_eq!(constant.eval(&[0.0; 7]), 1.5);
        assert_eq!(constant.dim(), None);
    }

    #[test]
    fn test_declared_dimension() {
        assert_eq!(Paraboloid.dim(), Some(2));
        assert_eq!(Paraboloid.eval(&[1.0, 2.0]), 5.0);
    }
}
