pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod metric;
pub mod report;

pub use error::{MetricError, Result};
pub use math::Point2;
pub use metric::{
    BoundaryDisplay, Diameter, DistanceMetric, InteriorDistanceMetric, TravelDistanceMetric,
};
