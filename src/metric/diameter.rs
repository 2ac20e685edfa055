use super::{Diameter, DistanceMetric};
use crate::error::{OperationError, Result};

/// Exhaustive farthest-pair search over input points.
///
/// Scans pairs `(p, q)` with `p < q` in ascending order and keeps the first
/// pair reaching the maximum distance; later ties do not replace it.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the metric has fewer than 2
/// points, and propagates query errors.
pub fn find_diameter<M: DistanceMetric + ?Sized>(metric: &M) -> Result<Diameter> {
    let count = metric.point_count();
    let mut best: Option<(usize, usize, f64)> = None;

    for p in 0..count {
        for q in (p + 1)..count {
            let d = metric.distance(p, q)?;
            if best.map_or(true, |(_, _, best_d)| d > best_d) {
                best = Some((p, q, d));
            }
        }
    }

    let Some((first, second, distance)) = best else {
        return Err(OperationError::InvalidInput(format!(
            "diameter needs at least 2 points, got {count}"
        ))
        .into());
    };

    tracing::debug!(first, second, distance, "diameter found");

    Ok(Diameter {
        first,
        second,
        distance,
        path: metric.path(first, second)?,
    })
}
