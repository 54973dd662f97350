//! The [`Graph`] entity: a dense adjacency-matrix graph with value
//! semantics.

use std::fmt;

use crate::core::{LoadError, Matrix, VertexOutOfRangeError};

mod ops;

/// Graph over a dense adjacency matrix of `i64` edge weights.
///
/// A zero entry at `[i][j]` means there is no edge from `i` to `j`; any
/// non-zero entry, positive or negative, is an edge of that weight. A
/// non-zero diagonal entry is a self-loop. Directedness is not settable:
/// it is re-derived on every load as the negation of matrix symmetry.
///
/// A graph starts empty (0 vertices) and becomes populated through
/// [`load`](Graph::load), which replaces the whole matrix atomically, or
/// via the [`from_rows`](Graph::from_rows) constructor. Each graph owns
/// its matrix; [`Clone`] is a full value copy.
///
/// # Examples
///
/// ```
/// use gramat::Graph;
///
/// let graph = Graph::from_rows(&[vec![0, 3], vec![0, 0]]).unwrap();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert!(graph.is_directed());
/// assert!(graph.is_adjacent(0, 1).unwrap());
/// assert!(!graph.is_adjacent(1, 0).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    matrix: Matrix,
    directed: bool,
}

impl Graph {
    /// Creates an empty graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph directly from nested matrix rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, LoadError> {
        Ok(Self::from_matrix(Matrix::from_rows(rows)?))
    }

    pub(crate) fn from_matrix(matrix: Matrix) -> Self {
        let directed = !matrix.is_symmetric();
        Self { matrix, directed }
    }

    /// Replaces the graph's contents with the given matrix.
    ///
    /// The input must be non-empty and square. The replacement is atomic:
    /// on validation failure the graph is left untouched.
    pub fn load(&mut self, rows: &[Vec<i64>]) -> Result<(), LoadError> {
        let matrix = Matrix::from_rows(rows)?;
        self.replace_matrix(matrix);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.order()
    }

    /// Returns `true` if the adjacency matrix is not symmetric.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Read-only view of the adjacency matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns `true` if there is an edge from `u` to `v`.
    pub fn is_adjacent(&self, u: usize, v: usize) -> Result<bool, VertexOutOfRangeError> {
        let vertex_count = self.vertex_count();

        for index in [u, v] {
            if index >= vertex_count {
                return Err(VertexOutOfRangeError {
                    index,
                    vertex_count,
                });
            }
        }

        Ok(self.matrix.get(u, v) != 0)
    }

    /// Number of edges under the undirected counting convention: non-zero
    /// off-diagonal cells, halved.
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        let mut count = 0;

        for i in 0..n {
            for j in 0..n {
                if i != j && self.matrix.get(i, j) != 0 {
                    count += 1;
                }
            }
        }

        count / 2
    }

    pub(crate) fn weight(&self, u: usize, v: usize) -> i64 {
        self.matrix.get(u, v)
    }

    /// Swaps in a new matrix and re-derives the directedness flag.
    pub(crate) fn replace_matrix(&mut self, matrix: Matrix) {
        self.directed = !matrix.is_symmetric();
        self.matrix = matrix;
    }

    pub(crate) fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }

    pub(crate) fn rederive_directedness(&mut self) {
        self.directed = !self.matrix.is_symmetric();
    }
}

impl fmt::Display for Graph {
    /// Renders the adjacency matrix, one bracketed row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
