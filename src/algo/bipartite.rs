//! Bipartiteness testing and two-coloring.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo::bipartition, Graph};
//!
//! let graph = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//!
//! let partition = bipartition(&graph).unwrap();
//! assert_eq!(partition.set_a(), &[0, 2]);
//! assert_eq!(partition.set_b(), &[1]);
//! ```

use std::{collections::VecDeque, fmt};

use crate::graph::Graph;

/// Two-coloring of a bipartite graph.
///
/// Set A holds the vertices colored 1 and set B the vertices colored 0,
/// each in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
    set_a: Vec<usize>,
    set_b: Vec<usize>,
}

impl Bipartition {
    pub fn set_a(&self) -> &[usize] {
        &self.set_a
    }

    pub fn set_b(&self) -> &[usize] {
        &self.set_b
    }
}

impl fmt::Display for Bipartition {
    /// Renders as `The graph is bipartite: A={0, 2}, B={1}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_set(f: &mut fmt::Formatter<'_>, set: &[usize]) -> fmt::Result {
            for (i, v) in set.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            Ok(())
        }

        write!(f, "The graph is bipartite: A={{")?;
        write_set(f, &self.set_a)?;
        write!(f, "}}, B={{")?;
        write_set(f, &self.set_b)?;
        write!(f, "}}")
    }
}

/// Tries to split the vertices into two sets such that every edge crosses
/// between the sets.
///
/// The coloring proceeds by breadth-first traversal from every uncolored
/// vertex, scanning start vertices in ascending index order with each
/// start colored 1, so the resulting partition is deterministic. A
/// self-loop anywhere fails bipartiteness, as do two adjacent vertices of
/// the same color. Returns `None` when the graph is not bipartite.
pub fn bipartition(graph: &Graph) -> Option<Bipartition> {
    let n = graph.vertex_count();
    let mut color: Vec<Option<bool>> = vec![None; n];

    for start in 0..n {
        if color[start].is_none() && !two_color(graph, start, &mut color) {
            return None;
        }
    }

    let mut set_a = Vec::new();
    let mut set_b = Vec::new();
    for (v, c) in color.iter().enumerate() {
        if *c == Some(true) {
            set_a.push(v);
        } else {
            set_b.push(v);
        }
    }

    Some(Bipartition { set_a, set_b })
}

/// Colors the component of `start` with alternating colors, returning
/// `false` on the first conflict.
fn two_color(graph: &Graph, start: usize, color: &mut [Option<bool>]) -> bool {
    let n = graph.vertex_count();

    color[start] = Some(true);
    let mut queue = VecDeque::from([start]);

    while let Some(u) = queue.pop_front() {
        if graph.weight(u, u) != 0 {
            // Self-loop.
            return false;
        }

        let cu = color[u] == Some(true);

        for v in 0..n {
            if graph.weight(u, v) == 0 {
                continue;
            }

            match color[v] {
                None => {
                    color[v] = Some(!cu);
                    queue.push_back(v);
                }
                Some(cv) => {
                    if cv == cu {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Legacy textual form: the rendered partition, or `"0"` when the graph
/// is not bipartite.
pub fn bipartition_report(graph: &Graph) -> String {
    match bipartition(graph) {
        Some(partition) => partition.to_string(),
        None => "0".to_owned(),
    }
}
