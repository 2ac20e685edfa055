pub mod angle_2d;
pub mod segment_2d;

pub use segment_2d::Segment2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance.
///
/// Used both as the determinant threshold of the segment intersection test
/// and as the per-coordinate threshold of [`points_equalish`].
pub const TOLERANCE: f64 = 1e-7;

/// Returns `true` if both coordinates of `a` and `b` differ by less than
/// [`TOLERANCE`].
#[must_use]
pub fn points_equalish(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn squared_distance(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    squared_distance(a, b).sqrt()
}
