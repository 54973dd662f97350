//! Single-pair shortest path with negative edge support.
//!
//! The search runs Bellman-Ford relaxation, which tolerates negative edge
//! weights and detects negative-weight cycles; a reachable negative cycle
//! makes "shortest path" undefined and the search reports no path.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo::shortest_path, Graph};
//!
//! let graph = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//!
//! let path = shortest_path(&graph, 0, 2).unwrap();
//! assert_eq!(path.vertices(), &[0, 1, 2]);
//! assert_eq!(path.to_string(), "0->1->2");
//! ```

use std::fmt;

use crate::graph::Graph;

pub(crate) const INF: i64 = i64::MAX;

/// Minimum-weight path between two vertices, as the sequence of vertex
/// indices from source to destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    /// Vertex indices on the path, source first.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl fmt::Display for Path {
    /// Renders the vertex indices joined by `->`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{v}")?;
        }

        Ok(())
    }
}

/// Outcome of Bellman-Ford relaxation from a single source.
pub(crate) struct Relaxation {
    pub(crate) dist: Vec<i64>,
    pub(crate) pred: Vec<Option<usize>>,
    // A full round without any relaxation proves there is no reachable
    // negative cycle, so the verification pass can be skipped.
    settled: bool,
}

impl Relaxation {
    /// First edge that still relaxes after |V| - 1 rounds, if any. Such an
    /// edge proves a negative cycle reachable from the source.
    pub(crate) fn violation(&self, graph: &Graph) -> Option<(usize, usize)> {
        if self.settled {
            return None;
        }

        let n = graph.vertex_count();
        for u in 0..n {
            if self.dist[u] == INF {
                continue;
            }
            for v in 0..n {
                let weight = graph.weight(u, v);
                if weight != 0 && self.dist[u] + weight < self.dist[v] {
                    return Some((u, v));
                }
            }
        }

        None
    }
}

/// Runs |V| - 1 rounds of relaxation over all matrix cells, terminating
/// early once a full round improves nothing.
pub(crate) fn bellman_ford(graph: &Graph, source: usize) -> Relaxation {
    let n = graph.vertex_count();
    let mut dist = vec![INF; n];
    let mut pred = vec![None; n];
    dist[source] = 0;

    let mut settled = false;

    for _ in 1..n {
        let mut relaxed = false;

        for u in 0..n {
            if dist[u] == INF {
                continue;
            }
            for v in 0..n {
                let weight = graph.weight(u, v);
                if weight == 0 {
                    continue;
                }

                let next = dist[u] + weight;
                if next < dist[v] {
                    dist[v] = next;
                    pred[v] = Some(u);
                    relaxed = true;
                }
            }
        }

        // If no distance improved, subsequent rounds would not improve
        // either.
        if !relaxed {
            settled = true;
            break;
        }
    }

    Relaxation {
        dist,
        pred,
        settled,
    }
}

/// Finds the minimum-weight path from `source` to `destination`.
///
/// Returns `None` when the graph is empty, either endpoint is out of
/// range, the destination is unreachable, or a negative cycle is reachable
/// during relaxation. Out-of-range endpoints are reported as "no path"
/// rather than an error, unlike [`Graph::is_adjacent`].
pub fn shortest_path(graph: &Graph, source: usize, destination: usize) -> Option<Path> {
    let n = graph.vertex_count();
    if n == 0 || source >= n || destination >= n {
        return None;
    }

    let relaxation = bellman_ford(graph, source);

    if relaxation.violation(graph).is_some() {
        return None;
    }

    if relaxation.dist[destination] == INF {
        return None;
    }

    let mut vertices = vec![destination];
    let mut v = destination;
    while v != source {
        v = relaxation.pred[v]?;
        vertices.push(v);
    }
    vertices.reverse();

    Some(Path { vertices })
}

/// Legacy textual form: the rendered path, or `"-1"` when no defined
/// shortest path exists.
pub fn shortest_path_report(graph: &Graph, source: usize, destination: usize) -> String {
    match shortest_path(graph, source, destination) {
        Some(path) => path.to_string(),
        None => "-1".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[Vec<i64>]) -> Graph {
        Graph::from_rows(rows).unwrap()
    }

    #[test]
    fn basic_path() {
        let g = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2]);
        assert_eq!(shortest_path_report(&g, 0, 2), "0->1->2");
    }

    #[test]
    fn source_equals_destination() {
        let g = graph(&[vec![0, 1], vec![1, 0]]);

        let path = shortest_path(&g, 1, 1).unwrap();
        assert_eq!(path.vertices(), &[1]);
        assert_eq!(path.to_string(), "1");
    }

    #[test]
    fn picks_lighter_detour() {
        // Direct edge 0->2 weighs 10, the detour through 1 weighs 2.
        let g = graph(&[
            vec![0, 1, 10],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ]);

        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2]);
    }

    #[test]
    fn negative_edge_changes_route() {
        let g = graph(&[
            vec![0, 1, 4],
            vec![0, 0, -2],
            vec![0, 0, 0],
        ]);

        let path = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2]);
    }

    #[test]
    fn unreachable_destination() {
        let g = graph(&[vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);

        assert_eq!(shortest_path(&g, 0, 2), None);
        assert_eq!(shortest_path_report(&g, 0, 2), "-1");
    }

    #[test]
    fn empty_graph_and_out_of_range() {
        assert_eq!(shortest_path_report(&Graph::new(), 0, 0), "-1");

        let g = graph(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(shortest_path_report(&g, 0, 2), "-1");
        assert_eq!(shortest_path_report(&g, 7, 1), "-1");
    }

    #[test]
    fn negative_cycle_invalidates_path() {
        // Directed negative-weight 2-cycle between vertices 0 and 1.
        let g = graph(&[vec![0, -1], vec![-1, 0]]);

        assert_eq!(shortest_path(&g, 0, 1), None);
        assert_eq!(shortest_path_report(&g, 0, 1), "-1");
    }

    #[test]
    fn negative_cycle_elsewhere_still_detected() {
        // The cycle 1<->2 is reachable from the source, so no shortest
        // path is defined anywhere in its reach.
        let g = graph(&[
            vec![0, 1, 0, 5],
            vec![0, 0, -3, 0],
            vec![0, -3, 0, 0],
            vec![0, 0, 0, 0],
        ]);

        assert_eq!(shortest_path(&g, 0, 2), None);
    }
}
