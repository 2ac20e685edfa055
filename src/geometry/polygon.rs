use crate::error::{OperationError, Result};
use crate::math::angle_2d::turn_angle;
use crate::math::{points_equalish, Point2, Segment2};

use super::planarize::planarize;

/// A vertex of the planarized boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonVertex {
    pub location: Point2,
    /// Index of the input point this vertex stands for; `None` for synthetic
    /// vertices created at crossings.
    pub original_index: Option<usize>,
}

impl PolygonVertex {
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.original_index.is_none()
    }
}

/// Simple (non-self-crossing) boundary derived from a closed polyline.
///
/// The boundary is a closed walk over unique vertices: consecutive entries of
/// [`Polygon::boundary`] (wrapping around) are joined by edges that meet only
/// at shared endpoints. A synthetic vertex where two input edges crossed is
/// visited once per crossing edge.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<PolygonVertex>,
    boundary: Vec<usize>,
    point_to_vertex: Vec<usize>,
    ray_origin: Point2,
}

impl Polygon {
    /// Planarizes the closed polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are
    /// given, a coordinate is not finite, or all points coincide.
    pub fn new(points: &[Point2]) -> Result<Self> {
        validate_points(points)?;

        let planarized = planarize(points);

        // One unit below the smallest coordinates, so the origin of every
        // containment ray is outside the boundary.
        let (min_x, min_y) = planarized
            .vertices
            .iter()
            .fold((f64::INFINITY, f64::INFINITY), |(mx, my), v| {
                (mx.min(v.location.x), my.min(v.location.y))
            });

        Ok(Self {
            vertices: planarized.vertices,
            boundary: planarized.boundary,
            point_to_vertex: planarized.point_to_vertex,
            ray_origin: Point2::new(min_x - 1.0, min_y - 1.0),
        })
    }

    /// Unique vertices, indexed by vertex index.
    #[must_use]
    pub fn vertices(&self) -> &[PolygonVertex] {
        &self.vertices
    }

    /// The closed boundary walk as vertex indices (last joins first).
    #[must_use]
    pub fn boundary(&self) -> &[usize] {
        &self.boundary
    }

    /// Number of input points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_to_vertex.len()
    }

    /// Number of synthetic vertices introduced by planarization.
    #[must_use]
    pub fn synthetic_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_synthetic()).count()
    }

    /// Maps an input point index to its vertex index.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::PointIndexOutOfRange` if `point` is not a
    /// valid input index.
    pub fn vertex_for_point(&self, point: usize) -> Result<usize> {
        self.point_to_vertex.get(point).copied().ok_or_else(|| {
            OperationError::PointIndexOutOfRange {
                index: point,
                count: self.point_to_vertex.len(),
            }
            .into()
        })
    }

    /// Location of a vertex by vertex index.
    #[must_use]
    pub fn location(&self, vertex: usize) -> Point2 {
        self.vertices[vertex].location
    }

    /// Iterates the boundary edges in walk order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |k| {
            Segment2::new(
                self.location(self.boundary[k]),
                self.location(self.boundary[(k + 1) % n]),
            )
        })
    }

    /// Iterates the boundary edges as vertex index pairs in walk order.
    pub fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |k| (self.boundary[k], self.boundary[(k + 1) % n]))
    }

    /// Parity test for a point against the boundary.
    ///
    /// Casts a ray from outside the boundary to `candidate` and counts the
    /// edges it meets. A hit on a boundary vertex counts for an edge only
    /// when the edge's other endpoint lies left of the ray (turn angle below
    /// 180 degrees), so a ray grazing a vertex counts 0 or 2 times and a ray
    /// passing through it counts once. Points on an edge are contained.
    #[must_use]
    pub fn contains_point(&self, candidate: &Point2) -> bool {
        // Checked up front: an edge collinear with the ray never intersects it.
        if self.edges().any(|edge| edge.contains_point(candidate)) {
            return true;
        }

        let origin = self.ray_origin;
        let ray = Segment2::new(origin, *candidate);
        let mut crossings = 0_usize;

        for edge in self.edges() {
            let Some(hit) = ray.intersection(&edge) else {
                continue;
            };

            let counted = if points_equalish(&hit, &edge.start) {
                turn_angle(candidate, &origin, &edge.end) < 180.0
            } else if points_equalish(&hit, &edge.end) {
                turn_angle(candidate, &origin, &edge.start) < 180.0
            } else {
                true
            };

            if counted {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    /// Visibility test for a chord: no boundary edge crosses it and its
    /// midpoint is contained.
    ///
    /// Touching a boundary vertex between the chord's endpoints is not a
    /// crossing, so a chord grazing two reflex vertices stays visible even
    /// where it briefly leaves the region.
    #[must_use]
    pub fn contains_segment(&self, chord: &Segment2) -> bool {
        !self.edges().any(|edge| chord.crosses(&edge)) && self.contains_point(&chord.midpoint())
    }

    /// Boundary points closed back to the first, with a parallel synthetic
    /// flag per point.
    #[must_use]
    pub fn display_points(&self) -> (Vec<Point2>, Vec<bool>) {
        let walk = self.boundary.iter().chain(self.boundary.first());
        walk.map(|&v| (self.vertices[v].location, self.vertices[v].is_synthetic()))
            .unzip()
    }
}

/// Rejects point lists no metric can be built from.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if fewer than 2 points are given,
/// a coordinate is not finite, or all points coincide.
pub fn validate_points(points: &[Point2]) -> Result<()> {
    if points.len() < 2 {
        return Err(OperationError::InvalidInput(format!(
            "at least 2 points required, got {}",
            points.len()
        ))
        .into());
    }

    if let Some(idx) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(OperationError::InvalidInput(format!(
            "point {idx} has a non-finite coordinate"
        ))
        .into());
    }

    let first = points[0];
    if points.iter().all(|p| points_equalish(p, &first)) {
        return Err(OperationError::InvalidInput("all points coincide".to_owned()).into());
    }

    Ok(())
}
