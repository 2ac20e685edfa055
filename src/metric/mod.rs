mod diameter;
mod interior;
mod travel;


pub use diameter::find_diameter;
pub use interior::InteriorDistanceMetric;
pub use travel::TravelDistanceMetric;

use crate::error::Result;
use crate::math::Point2;

/// Distances and paths between the input points of a closed polyline.
///
/// All queries are keyed by input point index.
pub trait DistanceMetric {
    /// Number of input points.
    fn point_count(&self) -> usize;

    /// Distance between input points `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::PointIndexOutOfRange` for an invalid index.
    fn distance(&self, i: usize, j: usize) -> Result<f64>;

    /// Points along the path from input point `i` to `j`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::PointIndexOutOfRange` for an invalid index.
    fn path(&self, i: usize, j: usize) -> Result<Vec<Point2>>;

    /// The closed boundary the metric is measured against.
    fn boundary_for_display(&self) -> BoundaryDisplay;

    /// The pair of input points farthest apart under this metric.
    ///
    /// # Errors
    ///
    /// Propagates query errors; none occur for a successfully built metric.
    fn diameter(&self) -> Result<Diameter> {
        find_diameter(self)
    }
}

/// Closed boundary for rendering: the first point is repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryDisplay {
    pub points: Vec<Point2>,
    /// Parallel to `points`; `true` where the point is synthetic.
    pub synthetic: Vec<bool>,
}

/// Farthest pair of input points and the path between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Diameter {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
    pub path: Vec<Point2>,
}
