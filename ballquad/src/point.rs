//! Point sets consumed by the quadrature evaluator.

/// A finite, ordered collection of points with a declared dimensionality.
///
/// The samplers always produce consistent sets. Sets assembled by hand with
/// [`PointSet::new`] or [`PointSet::push`] are not checked here; the
/// evaluator rejects any point whose length differs from [`PointSet::dim`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dim: usize,
    points: Vec<Vec<f64>>,
}

impl PointSet {
    /// Creates a point set from raw coordinate vectors.
    pub fn new(dim: usize, points: Vec<Vec<f64>>) -> Self {
        PointSet { dim, points }
    }

    /// Creates an empty point set with room for `capacity` points.
    pub fn with_capacity(dim: usize, capacity: usize) -> Self {
        PointSet {
            dim,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Returns the declared number of coordinates per point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point.
    pub fn push(&mut self, point: Vec<f64>) {
        self.points.push(point);
    }

    /// Returns the point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.points.get(index).map(Vec::as_slice)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.points.iter().map(Vec::as_slice)
    }

    pub(crate) fn as_slice(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Consumes the set and returns its coordinate vectors.
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }
}
