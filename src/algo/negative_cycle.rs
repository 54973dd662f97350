//! Negative-weight cycle detection.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo::negative_cycle, Graph};
//!
//! let graph = Graph::from_rows(&[
//!     vec![0, -1],
//!     vec![-1, 0],
//! ])
//! .unwrap();
//!
//! let cycle = negative_cycle(&graph).unwrap();
//! assert_eq!(cycle.to_string(), "Negative cycle: 0->1->0");
//! ```

use std::fmt;

use fixedbitset::FixedBitSet;

use crate::{algo::shortest_paths::bellman_ford, graph::Graph};

/// A cycle whose edge weights sum below zero, as a closed vertex sequence
/// whose first and last index are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    vertices: Vec<usize>,
}

impl NegativeCycle {
    /// The closed vertex sequence, first and last index equal.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}

impl fmt::Display for NegativeCycle {
    /// Renders as `Negative cycle: 0->1->0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Negative cycle: ")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{v}")?;
        }

        Ok(())
    }
}

/// Searches for a negative-weight cycle anywhere in the graph.
///
/// Bellman-Ford relaxation runs with every vertex as the source; the
/// first source whose verification pass still finds a relaxing edge
/// yields the cycle, reconstructed by walking predecessor pointers from
/// the violating edge's source vertex and rendered in forward order.
/// Returns `None` for an empty graph or when no source detects a cycle.
pub fn negative_cycle(graph: &Graph) -> Option<NegativeCycle> {
    let n = graph.vertex_count();

    for source in 0..n {
        let relaxation = bellman_ford(graph, source);
        if let Some((u, v)) = relaxation.violation(graph) {
            if u == v {
                // A negative self-loop; there is no predecessor chain to
                // walk.
                return Some(NegativeCycle { vertices: vec![u, u] });
            }
            if let Some(cycle) = reconstruct(&relaxation.pred, u) {
                return Some(cycle);
            }
        }
    }

    None
}

/// Walks predecessor pointers backwards from `start` until some vertex
/// repeats, then extracts the closed portion and reverses it into forward
/// order. The repeating vertex is `start` itself unless `start` hangs off
/// the cycle instead of lying on it.
fn reconstruct(pred: &[Option<usize>], start: usize) -> Option<NegativeCycle> {
    let mut seen = FixedBitSet::with_capacity(pred.len());
    let mut walk = vec![start];
    seen.insert(start);

    let mut v = start;
    let anchor = loop {
        let p = pred[v]?;
        walk.push(p);
        if seen.contains(p) {
            break p;
        }
        seen.insert(p);
        v = p;
    };

    // The closed cycle is the walk from the anchor's first occurrence to
    // its second, backwards; reverse it into forward order.
    let position = walk.iter().position(|&w| w == anchor)?;
    let mut vertices = walk.split_off(position);
    vertices.reverse();

    Some(NegativeCycle { vertices })
}

/// Legacy textual form: the rendered cycle, or `"No negative cycle"`.
pub fn negative_cycle_report(graph: &Graph) -> String {
    match negative_cycle(graph) {
        Some(cycle) => cycle.to_string(),
        None => "No negative cycle".to_owned(),
    }
}
