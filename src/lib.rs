//! Dense adjacency-matrix graph library with matrix algebra and classical
//! graph algorithms.
//!
//! The central type is [`Graph`], a value type owning a square matrix of
//! `i64` edge weights where a zero entry means "no edge" and directedness
//! is derived from matrix symmetry. Graphs compose arithmetically
//! (element-wise sums and differences, scalar scaling and division, matrix
//! multiplication) and the [`algo`] module provides connectivity, shortest
//! paths with negative-edge support, cycle detection, bipartiteness
//! testing, and negative-cycle detection on top of the read interface.
//!
//! # Examples
//!
//! ```
//! use gramat::{algo, Graph};
//!
//! let graph = Graph::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//!
//! assert!(!graph.is_directed());
//! assert!(algo::is_connected(&graph));
//!
//! let path = algo::shortest_path(&graph, 0, 2).unwrap();
//! assert_eq!(path.to_string(), "0->1->2");
//!
//! let doubled = graph.checked_add(&graph).unwrap();
//! assert_eq!(doubled.to_string(), "[0, 2, 0]\n[2, 0, 2]\n[0, 2, 0]");
//! ```

pub mod algo;
pub mod core;
pub mod graph;

pub use crate::graph::Graph;
