use super::{BoundaryDisplay, DistanceMetric};
use crate::error::{OperationError, Result};
use crate::geometry::validate_points;
use crate::math::{distance, Point2};

/// Distances measured by walking along the closed polyline itself.
///
/// The distance between two input points is the shorter of the forward and
/// backward walks; self-intersections are ignored.
#[derive(Debug, Clone)]
pub struct TravelDistanceMetric {
    points: Vec<Point2>,
    /// `prefix[k]` is the walked length from point 0 to point `k`;
    /// `prefix[n]` is the perimeter.
    prefix: Vec<f64>,
}

impl TravelDistanceMetric {
    /// Builds the metric for the closed polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` under the same conditions as
    /// [`crate::InteriorDistanceMetric::build`].
    pub fn build(points: &[Point2]) -> Result<Self> {
        validate_points(points)?;

        let n = points.len();
        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0.0);
        let mut walked = 0.0;
        for (i, point) in points.iter().enumerate() {
            walked += distance(point, &points[(i + 1) % n]);
            prefix.push(walked);
        }

        Ok(Self {
            points: points.to_vec(),
            prefix,
        })
    }

    /// Length of the closed polyline.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.prefix[self.points.len()]
    }

    /// Walked length from `i` forward (increasing index, wrapping) to `j`.
    fn forward(&self, i: usize, j: usize) -> f64 {
        if j >= i {
            self.prefix[j] - self.prefix[i]
        } else {
            self.perimeter() - (self.prefix[i] - self.prefix[j])
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(OperationError::PointIndexOutOfRange {
                index,
                count: self.points.len(),
            }
            .into())
        }
    }
}

impl DistanceMetric for TravelDistanceMetric {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.forward(i, j).min(self.forward(j, i)))
    }

    fn path(&self, i: usize, j: usize) -> Result<Vec<Point2>> {
        self.check(i)?;
        self.check(j)?;

        let n = self.points.len();
        let step = if self.forward(i, j) <= self.forward(j, i) {
            1
        } else {
            n - 1
        };

        let mut path = vec![self.points[i]];
        let mut k = i;
        while k != j {
            k = (k + step) % n;
            path.push(self.points[k]);
        }
        Ok(path)
    }

    fn boundary_for_display(&self) -> BoundaryDisplay {
        let points: Vec<Point2> = self
            .points
            .iter()
            .chain(self.points.first())
            .copied()
            .collect();
        let synthetic = vec![false; points.len()];
        BoundaryDisplay { points, synthetic }
    }
}
