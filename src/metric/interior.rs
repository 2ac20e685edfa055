use super::{BoundaryDisplay, DistanceMetric};
use crate::error::Result;
use crate::geometry::Polygon;
use crate::graph::{visibility, PathMatrices, Vertex};
use crate::math::Point2;

/// Shortest distances through the interior of a closed polyline.
///
/// Built once from the input points: the polyline is planarized, a
/// visibility graph is built over the resulting vertices and shortest paths
/// between all vertex pairs are precomputed. The metric is immutable after
/// construction, so shared references can be queried from several threads.
///
/// Construction is O(n^3 log n) in the planarized vertex count; intended
/// inputs have tens of points.
#[derive(Debug, Clone)]
pub struct InteriorDistanceMetric {
    polygon: Polygon,
    vertices: Vec<Vertex>,
    paths: PathMatrices,
}

impl InteriorDistanceMetric {
    /// Builds the metric for the closed polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are
    /// given, a coordinate is not finite, or all points coincide, and
    /// `OperationError::Unreachable` if the visibility graph is not
    /// connected (an internal invariant violation).
    pub fn build(points: &[Point2]) -> Result<Self> {
        let polygon = Polygon::new(points)?;
        let vertices = visibility::build(&polygon);
        let paths = PathMatrices::compute(&vertices)?;

        tracing::debug!(
            points = points.len(),
            vertices = vertices.len(),
            synthetic = polygon.synthetic_count(),
            visibility_edges = vertices.iter().map(|v| v.edges.len()).sum::<usize>() / 2,
            "interior distance metric built"
        );

        Ok(Self {
            polygon,
            vertices,
            paths,
        })
    }

    /// The planarized boundary.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Visibility graph vertices, indexed by vertex index.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Shortest path matrices over vertex indices.
    #[must_use]
    pub fn paths(&self) -> &PathMatrices {
        &self.paths
    }
}

impl DistanceMetric for InteriorDistanceMetric {
    fn point_count(&self) -> usize {
        self.polygon.point_count()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        let a = self.polygon.vertex_for_point(i)?;
        let b = self.polygon.vertex_for_point(j)?;
        Ok(self.paths.cost(a, b))
    }

    fn path(&self, i: usize, j: usize) -> Result<Vec<Point2>> {
        let a = self.polygon.vertex_for_point(i)?;
        let b = self.polygon.vertex_for_point(j)?;
        Ok(self
            .paths
            .path(a, b)
            .into_iter()
            .map(|v| self.vertices[v].location)
            .collect())
    }

    fn boundary_for_display(&self) -> BoundaryDisplay {
        let (points, synthetic) = self.polygon.display_points();
        BoundaryDisplay { points, synthetic }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{MetricError, OperationError};
    use crate::math::{distance, points_equalish};
    use approx::assert_relative_eq;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn c_shape() -> InteriorDistanceMetric {
        InteriorDistanceMetric::build(&points(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ]))
        .unwrap()
    }

    #[test]
    fn build_rejects_single_point() {
        let err = InteriorDistanceMetric::build(&points(&[(1.0, 2.0)])).unwrap_err();
        assert!(matches!(
            err,
            MetricError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn two_points_are_a_segment() {
        let m = InteriorDistanceMetric::build(&points(&[(0.0, 0.0), (3.0, 4.0)])).unwrap();
        assert_relative_eq!(m.distance(0, 1).unwrap(), 5.0);
        assert_eq!(m.path(0, 1).unwrap().len(), 2);
    }

    #[test]
    fn c_shape_bends_around_the_notch() {
        let m = c_shape();
        // Tips of the C: (4,0) and (4,4).
        let d = m.distance(1, 6).unwrap();
        assert!(d > 4.0, "d={d}");
        let expected = 2.0 * 10.0_f64.sqrt() + 2.0;
        assert_relative_eq!(d, expected, epsilon = 1e-9);

        let path = m.path(1, 6).unwrap();
        assert!(points_equalish(&path[0], &Point2::new(4.0, 0.0)));
        assert!(points_equalish(&path[path.len() - 1], &Point2::new(4.0, 4.0)));
        assert!(path.iter().any(|p| p.x <= 1.0));
    }

    #[test]
    fn c_shape_spine_is_straight() {
        // (0,0) and (0,4) share the closing edge.
        let m = c_shape();
        assert_relative_eq!(m.distance(0, 7).unwrap(), 4.0);
        assert_eq!(m.path(0, 7).unwrap(), points(&[(0.0, 0.0), (0.0, 4.0)]));
    }

    #[test]
    fn path_to_self_is_single_point() {
        let m = c_shape();
        assert_eq!(m.path(3, 3).unwrap(), points(&[(1.0, 1.0)]));
        assert_relative_eq!(m.distance(3, 3).unwrap(), 0.0);
    }

    #[test]
    fn path_length_matches_distance() {
        let m = c_shape();
        for i in 0..m.point_count() {
            for j in 0..m.point_count() {
                let path = m.path(i, j).unwrap();
                let length: f64 = path.windows(2).map(|w| distance(&w[0], &w[1])).sum();
                assert_relative_eq!(length, m.distance(i, j).unwrap(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn out_of_range_query_is_an_error() {
        let m = c_shape();
        assert!(matches!(
            m.distance(0, 8),
            Err(MetricError::Operation(
                OperationError::PointIndexOutOfRange { index: 8, count: 8 }
            ))
        ));
        assert!(m.path(9, 0).is_err());
    }

    #[test]
    fn bowtie_lobes_connect_through_crossing() {
        let m = InteriorDistanceMetric::build(&points(&[
            (0.0, 0.0),
            (4.0, 4.0),
            (4.0, 0.0),
            (0.0, 4.0),
        ]))
        .unwrap();
        assert_eq!(m.polygon().synthetic_count(), 1);
        assert_eq!(m.vertices().len(), 5);

        // (0,0) -> (4,0) must pass through the crossing at (2,2).
        let d = m.distance(0, 2).unwrap();
        assert_relative_eq!(d, 2.0 * 8.0_f64.sqrt(), epsilon = 1e-9);
        let path = m.path(0, 2).unwrap();
        assert_eq!(path.len(), 3);
        assert!(points_equalish(&path[1], &Point2::new(2.0, 2.0)));

        let display = m.boundary_for_display();
        assert_eq!(display.points.len(), 7);
        assert_eq!(display.synthetic.iter().filter(|&&s| s).count(), 2);
    }

    #[test]
    fn chord_grazing_reflex_vertices_is_straight() {
        // The chord (-10,0)-(6,0) touches the notch vertices (2,0) and (4,0)
        // without crossing an edge, so the distance is the straight line.
        let m = InteriorDistanceMetric::build(&points(&[
            (-10.0, -2.0),
            (6.0, -2.0),
            (6.0, 0.0),
            (6.0, 3.0),
            (5.0, 3.0),
            (4.0, 0.0),
            (3.0, -1.0),
            (2.0, 0.0),
            (1.0, 3.0),
            (-10.0, 3.0),
            (-10.0, 0.0),
        ]))
        .unwrap();
        assert_relative_eq!(m.distance(10, 2).unwrap(), 16.0, epsilon = 1e-9);
        assert_eq!(m.path(10, 2).unwrap().len(), 2);
    }

    #[test]
    fn duplicate_points_are_zero_apart() {
        let m = InteriorDistanceMetric::build(&points(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
        ]))
        .unwrap();
        assert_relative_eq!(m.distance(1, 2).unwrap(), 0.0);
        assert_relative_eq!(m.distance(0, 3).unwrap(), 8.0_f64.sqrt(), epsilon = 1e-9);
    }
}
