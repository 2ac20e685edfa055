use crate::math::{points_equalish, squared_distance, Point2, Segment2};

use super::polygon::PolygonVertex;

/// Output of planarization: unique vertices plus the closed walk over them.
#[derive(Debug, Clone)]
pub(crate) struct Planarized {
    pub vertices: Vec<PolygonVertex>,
    pub boundary: Vec<usize>,
    pub point_to_vertex: Vec<usize>,
}

/// A split point on one input edge.
#[derive(Debug, Clone, Copy)]
struct Split {
    point: Point2,
    /// Squared distance from the edge start, used for ordering.
    dist_sq: f64,
}

/// Resolves the self-intersections of a closed polyline.
///
/// Every input edge is broken at each point where another edge meets it away
/// from the edge's own endpoints. The boundary walk visits, per input edge,
/// the edge start followed by its split points in order of distance from
/// that start. Split points shared by several edges map to one synthetic
/// vertex.
pub(crate) fn planarize(points: &[Point2]) -> Planarized {
    let edges = closed_edges(points);

    let mut vertices: Vec<PolygonVertex> = Vec::with_capacity(points.len());
    let mut synthetic: Vec<usize> = Vec::new();
    let mut boundary = Vec::with_capacity(points.len());
    let mut point_to_vertex = Vec::with_capacity(points.len());

    for (edge_idx, edge) in edges.iter().enumerate() {
        let start = vertices.len();
        vertices.push(PolygonVertex {
            location: edge.start,
            original_index: Some(edge_idx),
        });
        point_to_vertex.push(start);
        boundary.push(start);

        let splits = find_splits(edge_idx, &edges);
        if !splits.is_empty() {
            tracing::trace!(edge = edge_idx, splits = splits.len(), "splitting edge");
        }

        for split in splits {
            let existing = synthetic
                .iter()
                .copied()
                .find(|&v| points_equalish(&vertices[v].location, &split.point));
            let vertex = existing.unwrap_or_else(|| {
                let v = vertices.len();
                vertices.push(PolygonVertex {
                    location: split.point,
                    original_index: None,
                });
                synthetic.push(v);
                v
            });
            boundary.push(vertex);
        }
    }

    Planarized {
        vertices,
        boundary,
        point_to_vertex,
    }
}

/// Builds the closed edge list `p[i] -> p[i + 1]`, wrapping at the end.
pub(crate) fn closed_edges(points: &[Point2]) -> Vec<Segment2> {
    let n = points.len();
    (0..n)
        .map(|i| Segment2::new(points[i], points[(i + 1) % n]))
        .collect()
}

/// Collects the ordered, deduplicated split points of edge `edge_idx`.
fn find_splits(edge_idx: usize, edges: &[Segment2]) -> Vec<Split> {
    let interloper = &edges[edge_idx];
    let mut splits = Vec::new();

    for (clipper_idx, clipper) in edges.iter().enumerate() {
        if clipper_idx == edge_idx || clipper.equalish(interloper) {
            continue;
        }

        // Evaluate on the lower-indexed edge so both edges of a crossing
        // agree on its coordinates bit for bit.
        let hit = if clipper_idx < edge_idx {
            clipper.intersection(interloper)
        } else {
            interloper.intersection(clipper)
        };
        let Some(point) = hit else { continue };

        if interloper.has_endpoint(&point) {
            continue;
        }

        splits.push(Split {
            point,
            dist_sq: squared_distance(&interloper.start, &point),
        });
    }

    splits.sort_by(|a, b| a.dist_sq.total_cmp(&b.dist_sq));
    splits.dedup_by(|later, earlier| points_equalish(&later.point, &earlier.point));
    splits
}
