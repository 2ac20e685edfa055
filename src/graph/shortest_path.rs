use nalgebra::DMatrix;

use super::heap::IndexedMinHeap;
use super::visibility::Vertex;
use crate::error::{OperationError, Result};
use crate::math::distance;

/// All-pairs shortest paths over a visibility graph.
///
/// `cost[(s, t)]` is the shortest path length from vertex `s` to vertex `t`;
/// `predecessor[(s, t)]` is the vertex before `t` on that path, `None` when
/// `t == s`.
#[derive(Debug, Clone)]
pub struct PathMatrices {
    cost: DMatrix<f64>,
    predecessor: DMatrix<Option<usize>>,
}

impl PathMatrices {
    /// Runs Dijkstra's algorithm from every vertex, with Euclidean edge
    /// weights.
    ///
    /// Each run is O((n + e) log n) with the indexed heap, O(n^3 log n) in
    /// total for a dense graph.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Unreachable` if some vertex cannot be reached
    /// from some source. The graph of a closed boundary is connected, so
    /// this signals a bug in graph construction.
    pub fn compute(vertices: &[Vertex]) -> Result<Self> {
        let n = vertices.len();
        let mut cost = DMatrix::from_element(n, n, f64::INFINITY);
        let mut predecessor = DMatrix::from_element(n, n, None);
        let mut queue = IndexedMinHeap::with_capacity(n);

        for start in 0..n {
            debug_assert!(queue.is_empty());

            cost[(start, start)] = 0.0;
            for j in 0..n {
                queue.push(j, cost[(start, j)]);
            }

            while let Some((node, dist)) = queue.pop() {
                if !dist.is_finite() {
                    return Err(OperationError::Unreachable {
                        start,
                        target: node,
                    }
                    .into());
                }

                let here = &vertices[node];
                for &neighbor in &here.edges {
                    if !queue.contains(neighbor) {
                        continue;
                    }
                    let alt = dist + distance(&here.location, &vertices[neighbor].location);
                    if alt < cost[(start, neighbor)] {
                        cost[(start, neighbor)] = alt;
                        predecessor[(start, neighbor)] = Some(node);
                        queue.decrease_priority(neighbor, alt);
                    }
                }
            }
        }

        Ok(Self { cost, predecessor })
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cost.nrows()
    }

    /// Shortest path length from `source` to `target`.
    #[must_use]
    pub fn cost(&self, source: usize, target: usize) -> f64 {
        self.cost[(source, target)]
    }

    /// Vertex preceding `target` on the shortest path from `source`.
    #[must_use]
    pub fn predecessor(&self, source: usize, target: usize) -> Option<usize> {
        self.predecessor[(source, target)]
    }

    /// Vertex sequence of the shortest path, `source` and `target` inclusive.
    #[must_use]
    pub fn path(&self, source: usize, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            let Some(prev) = self.predecessor(source, current) else {
                break;
            };
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}
