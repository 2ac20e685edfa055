use super::{points_equalish, squared_distance, Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// An immutable 2D line segment from `start` to `end`.
///
/// All intersection predicates share one formulation: the bounded
/// cross-product test of [`Segment2::intersection`]. Parallel, collinear and
/// zero-length segments (`|det| < TOLERANCE`) never intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Squared length.
    #[must_use]
    pub fn squared_length(&self) -> f64 {
        squared_distance(&self.start, &self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Bounded segment-segment intersection.
    ///
    /// Solves `self.start + t * d1 = other.start + s * d2` and accepts the hit
    /// when both `t` and `s` lie in `[0, 1]` (inclusive). The returned point is
    /// evaluated on `self`, so `a.intersection(&b)` and `b.intersection(&a)`
    /// may differ in the last bits.
    #[must_use]
    pub fn intersection(&self, other: &Segment2) -> Option<Point2> {
        let d1x = self.end.x - self.start.x;
        let d1y = self.end.y - self.start.y;
        let d2x = other.end.x - other.start.x;
        let d2y = other.end.y - other.start.y;

        let det = -d2x * d1y + d1x * d2y;
        if det.abs() < TOLERANCE {
            return None;
        }

        let ox = self.start.x - other.start.x;
        let oy = self.start.y - other.start.y;
        let s = (-d1y * ox + d1x * oy) / det;
        let t = (d2x * oy - d2y * ox) / det;

        if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
            Some(Point2::new(self.start.x + t * d1x, self.start.y + t * d1y))
        } else {
            None
        }
    }

    /// Returns `true` if the two segments share at least one point under the
    /// bounded cross-product test.
    #[must_use]
    pub fn intersects(&self, other: &Segment2) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the intersection point of two intersecting segments.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NoIntersection` if [`Segment2::intersects`]
    /// is `false` for this pair.
    pub fn find_intersection(&self, other: &Segment2) -> Result<Point2> {
        self.intersection(other)
            .ok_or_else(|| GeometryError::NoIntersection.into())
    }

    /// Returns `true` if the segments intersect at a point that is not
    /// tolerance-equal to an endpoint of either segment.
    #[must_use]
    pub fn crosses(&self, other: &Segment2) -> bool {
        match self.intersection(other) {
            Some(pt) => !self.has_endpoint(&pt) && !other.has_endpoint(&pt),
            None => false,
        }
    }

    /// Returns `true` if `pt` lies on the segment: within [`TOLERANCE`] of
    /// its supporting line and inside its bounding box grown by
    /// [`TOLERANCE`].
    #[must_use]
    pub fn contains_point(&self, pt: &Point2) -> bool {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let cross = dx * (pt.y - self.start.y) - dy * (pt.x - self.start.x);
        if cross.abs() > TOLERANCE * self.length() {
            return false;
        }

        let within =
            |v: f64, a: f64, b: f64| v >= a.min(b) - TOLERANCE && v <= a.max(b) + TOLERANCE;
        within(pt.x, self.start.x, self.end.x) && within(pt.y, self.start.y, self.end.y)
    }

    /// Returns `true` if `pt` is tolerance-equal to `start` or `end`.
    #[must_use]
    pub fn has_endpoint(&self, pt: &Point2) -> bool {
        points_equalish(pt, &self.start) || points_equalish(pt, &self.end)
    }

    /// Returns `true` if both segments have tolerance-equal endpoints, in
    /// either orientation.
    #[must_use]
    pub fn equalish(&self, other: &Segment2) -> bool {
        (points_equalish(&self.start, &other.start) && points_equalish(&self.end, &other.end))
            || (points_equalish(&self.start, &other.end)
                && points_equalish(&self.end, &other.start))
    }
}
