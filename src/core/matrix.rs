use std::fmt;

use super::error::LoadError;

/// Square, row-major matrix of `i64` edge weights.
///
/// A zero entry encodes "no edge". The default value has order 0, which is
/// the state of a graph before any load; [`Matrix::from_rows`] itself
/// rejects empty input, so a loaded matrix always has order at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    order: usize,
    entries: Vec<i64>,
}

impl Matrix {
    /// Creates an all-zero matrix of the given order.
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            entries: vec![0; order * order],
        }
    }

    /// Validates nested rows and packs them into row-major storage.
    ///
    /// The input must be non-empty and every row length must equal the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, LoadError> {
        if rows.is_empty() {
            return Err(LoadError::Empty);
        }

        let order = rows.len();
        let mut entries = Vec::with_capacity(order * order);

        for row in rows {
            if row.len() != order {
                return Err(LoadError::NotSquare {
                    rows: order,
                    row_len: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }

        Ok(Self { order, entries })
    }

    /// Side length of the matrix.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.order + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        self.entries[row * self.order + col] = value;
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // max(1) keeps chunks happy for the order-0 matrix, where the
        // entries are empty and the iterator yields nothing anyway.
        self.entries.chunks(self.order.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.order {
            for j in (i + 1)..self.order {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }

        true
    }

    pub(crate) fn map(&self, f: impl Fn(i64) -> i64) -> Self {
        Self {
            order: self.order,
            entries: self.entries.iter().map(|&e| f(e)).collect(),
        }
    }

    pub(crate) fn map_in_place(&mut self, f: impl Fn(i64) -> i64) {
        for e in &mut self.entries {
            *e = f(*e);
        }
    }

    /// Entrywise combination of two matrices of the same order.
    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        debug_assert_eq!(self.order, other.order);

        Self {
            order: self.order,
            entries: self
                .entries
                .iter()
                .zip(&other.entries)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    pub(crate) fn zero_diagonal(&mut self) {
        for i in 0..self.order {
            self.set(i, i, 0);
        }
    }
}

impl fmt::Display for Matrix {
    /// Renders one bracketed row per line with comma-space separated
    /// entries and no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
