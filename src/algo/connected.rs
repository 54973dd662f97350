//! Graph connectivity check.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo::is_connected, Graph};
//!
//! let path = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//! assert!(is_connected(&path));
//!
//! let isolated = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 0],
//!     vec![0, 0, 0],
//! ])
//! .unwrap();
//! assert!(!is_connected(&isolated));
//! ```

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

/// Returns `true` if the graph is connected.
///
/// A graph with no vertices is connected by definition. Undirected graphs
/// are checked with a single traversal from vertex 0. Directed graphs must
/// be strongly connected: the traversal is repeated from every vertex and
/// each one must reach all vertices, which costs O(V) traversals of O(V²)
/// each on the dense matrix.
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }

    if !reaches_all(graph, 0) {
        return false;
    }

    if graph.is_directed() {
        for start in 1..n {
            if !reaches_all(graph, start) {
                return false;
            }
        }
    }

    true
}

/// Depth-first reachability over the matrix rows: does `start` reach every
/// vertex?
fn reaches_all(graph: &Graph, start: usize) -> bool {
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(u) = stack.pop() {
        for v in 0..n {
            if graph.weight(u, v) != 0 && !visited.contains(v) {
                visited.insert(v);
                stack.push(v);
            }
        }
    }

    visited.count_ones(..) == n
}
