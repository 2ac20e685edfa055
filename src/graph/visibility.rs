use crate::geometry::Polygon;
use crate::math::{Point2, Segment2};

/// A node of the visibility graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub index: usize,
    /// Input point index, `None` for synthetic vertices.
    pub original_index: Option<usize>,
    pub location: Point2,
    /// Indices of visible vertices, ascending.
    pub edges: Vec<usize>,
}

/// Builds the visibility graph over the polygon's vertices.
///
/// Two vertices are joined when they are neighbours on the boundary walk or
/// the chord between them lies inside the polygon. Each unordered pair is
/// tested once and stored in both directions.
///
/// Cost is O(n^3) in the vertex count: O(n^2) chords, each tested against
/// O(n) boundary edges.
#[must_use]
pub fn build(polygon: &Polygon) -> Vec<Vertex> {
    let n = polygon.vertices().len();
    let mut adjacent = vec![false; n * n];
    for (a, b) in polygon.edge_indices() {
        adjacent[a * n + b] = true;
        adjacent[b * n + a] = true;
    }

    let mut vertices: Vec<Vertex> = polygon
        .vertices()
        .iter()
        .enumerate()
        .map(|(index, v)| Vertex {
            index,
            original_index: v.original_index,
            location: v.location,
            edges: Vec::new(),
        })
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let visible = adjacent[i * n + j]
                || polygon.contains_segment(&Segment2::new(
                    vertices[i].location,
                    vertices[j].location,
                ));
            if visible {
                vertices[i].edges.push(j);
                vertices[j].edges.push(i);
            }
        }
    }

    vertices
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn graph(coords: &[(f64, f64)]) -> Vec<Vertex> {
        let points: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        build(&Polygon::new(&points).unwrap())
    }

    #[test]
    fn convex_polygon_is_complete() {
        let g = graph(&[(0.0, 0.0), (2.0, 0.0), (3.0, 2.0), (1.0, 3.0), (-1.0, 2.0)]);
        for v in &g {
            assert_eq!(v.edges.len(), 4, "vertex {} edges {:?}", v.index, v.edges);
        }
    }

    #[test]
    fn edges_are_symmetric_and_sorted() {
        let g = graph(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ]);
        for v in &g {
            assert!(v.edges.windows(2).all(|w| w[0] < w[1]));
            for &u in &v.edges {
                assert!(g[u].edges.contains(&v.index));
            }
        }
        // The two tips of the C cannot see each other.
        assert!(!g[1].edges.contains(&6));
        assert!(!g[2].edges.contains(&5));
        // Boundary neighbours always see each other.
        assert!(g[0].edges.contains(&7));
    }

    #[test]
    fn bowtie_crossing_joins_both_lobes() {
        let g = graph(&[(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)]);
        assert_eq!(g.len(), 5);
        let crossing = g.iter().find(|v| v.original_index.is_none()).unwrap();
        assert_eq!(crossing.edges.len(), 4);
        // (0,0) and (4,0) lie in different lobes.
        assert!(!g[0].edges.contains(&3));
    }
}
