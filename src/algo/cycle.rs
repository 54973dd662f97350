//! Cycle detection.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo::is_cyclic, Graph};
//!
//! let chain = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//! assert!(!is_cyclic(&chain));
//!
//! let triangle = Graph::from_rows(&[
//!     vec![0, 1, 1],
//!     vec![1, 0, 1],
//!     vec![1, 1, 0],
//! ])
//! .unwrap();
//! assert!(is_cyclic(&triangle));
//! ```

use std::fmt;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::graph::Graph;

/// A cycle found in the graph, as a closed vertex sequence whose first and
/// last index are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    vertices: Vec<usize>,
}

impl Cycle {
    /// The closed vertex sequence, first and last index equal.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl fmt::Display for Cycle {
    /// Renders the closed sequence joined by `->`, e.g. `0->1->2->0`.
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

/// Returns `true` if the graph contains a cycle.
pub fn is_cyclic(graph: &Graph) -> bool {
    find_cycle(graph).is_some()
}

/// Searches for a cycle and returns the first one found.
///
/// A depth-first search runs from every unvisited vertex with a parent
/// pointer per vertex; reaching a visited neighbor other than the current
/// vertex's immediate parent closes a cycle. Self-loops count as cycles.
/// The found cycle is also emitted at debug level as a diagnostic; the
/// return value is the whole contract.
pub fn find_cycle(graph: &Graph) -> Option<Cycle> {
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut parent = vec![None; n];

    for v in 0..n {
        if !visited.contains(v) {
            if let Some(cycle) = dfs(graph, v, &mut visited, &mut parent) {
                debug!(%cycle, "cycle detected");
                return Some(cycle);
            }
        }
    }

    None
}

fn dfs(
    graph: &Graph,
    v: usize,
    visited: &mut FixedBitSet,
    parent: &mut [Option<usize>],
) -> Option<Cycle> {
    visited.insert(v);

    for u in 0..graph.vertex_count() {
        if graph.weight(v, u) == 0 {
            continue;
        }

        if !visited.contains(u) {
            parent[u] = Some(v);
            if let Some(cycle) = dfs(graph, u, visited, parent) {
                return Some(cycle);
            }
        } else if parent[v] != Some(u) {
            return Some(close_cycle(parent, v, u));
        }
    }

    None
}

/// Builds the closed sequence `u -> ... -> v -> u` by walking parent
/// pointers from `v` back to `u`.
fn close_cycle(parent: &[Option<usize>], v: usize, u: usize) -> Cycle {
    let mut vertices = vec![u];

    let mut pv = v;
    while pv != u {
        vertices.push(pv);
        match parent[pv] {
            Some(p) => pv = p,
            // The back edge does not lead to an ancestor; report the
            // partial walk rather than looping.
            None => break,
        }
    }

    vertices.push(u);
    vertices.reverse();

    Cycle { vertices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[Vec<i64>]) -> Graph {
        Graph::from_rows(rows).unwrap()
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        assert!(!is_cyclic(&Graph::new()));
    }

    #[test]
    fn chain_has_no_cycle() {
        let g = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn triangle_has_cycle() {
        let g = graph(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);

        let cycle = find_cycle(&g).unwrap();
        assert_eq!(cycle.vertices(), &[0, 1, 2, 0]);
        assert_eq!(cycle.to_string(), "0->1->2->0");
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = graph(&[vec![0, 1], vec![1, 3]]);

        let cycle = find_cycle(&g).unwrap();
        assert_eq!(cycle.vertices(), &[1, 1]);
        assert_eq!(cycle.to_string(), "1->1");
    }

    #[test]
    fn directed_cycle() {
        let g = graph(&[vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn disconnected_component_cycle() {
        // Cycle only in the second component.
        let g = graph(&[
            vec![0, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 0, 1, 1],
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 0],
        ]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn single_undirected_edge_is_not_a_cycle() {
        let g = graph(&[vec![0, 1], vec![1, 0]]);
        assert!(!is_cyclic(&g));
    }
}
