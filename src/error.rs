use thiserror::Error;

/// Top-level error type for interior distance computations.
#[derive(Debug, Error)]
pub enum MetricError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("segments do not intersect")]
    NoIntersection,
}

/// Errors related to building and querying a metric.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex {target} is unreachable from vertex {start}")]
    Unreachable { start: usize, target: usize },

    #[error("point index {index} is out of range for {count} points")]
    PointIndexOutOfRange { index: usize, count: usize },
}

/// Convenience type alias for results using [`MetricError`].
pub type Result<T> = std::result::Result<T, MetricError>;
