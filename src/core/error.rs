use thiserror::Error;

/// The error returned when a matrix fails graph validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The matrix has no rows.
    #[error("invalid graph: the matrix is empty")]
    Empty,

    /// A row length differs from the number of rows.
    #[error("invalid graph: the matrix is not square ({rows} rows, but a row of length {row_len})")]
    NotSquare {
        /// Number of rows of the rejected matrix.
        rows: usize,
        /// Length of the first row that broke squareness.
        row_len: usize,
    },
}

/// The error returned by binary graph operations when the operands have a
/// different number of vertices.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("graphs must have the same number of vertices ({lhs} != {rhs})")]
pub struct SizeMismatchError {
    pub lhs: usize,
    pub rhs: usize,
}

/// The error returned by adjacency queries when a vertex index is not in
/// the graph.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("vertex {index} is out of range (the graph has {vertex_count} vertices)")]
pub struct VertexOutOfRangeError {
    pub index: usize,
    pub vertex_count: usize,
}

/// The error returned by scalar division with a zero divisor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("division by zero")]
pub struct DivideByZeroError;
