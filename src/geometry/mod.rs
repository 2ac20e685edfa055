mod planarize;
pub mod polygon;

pub use polygon::{validate_points, Polygon, PolygonVertex};
