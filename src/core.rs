//! Foundational types shared by the graph entity and the algorithms:
//! square matrix storage and the error taxonomy.

pub mod error;
pub mod matrix;

pub use error::{DivideByZeroError, LoadError, SizeMismatchError, VertexOutOfRangeError};
pub use matrix::Matrix;
