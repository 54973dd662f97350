//! Arithmetic and comparison operators on [`Graph`].
//!
//! Operations that cannot fail get the corresponding `std::ops` impls;
//! operations that depend on operand sizes or divisor values are named
//! `checked_*` methods returning `Result`, with the same contracts.

use std::{
    cmp::Ordering,
    ops::{Div, Mul, MulAssign, Neg},
};

use crate::core::{DivideByZeroError, Matrix, SizeMismatchError};

use super::Graph;

impl Graph {
    fn check_same_order(&self, other: &Graph) -> Result<(), SizeMismatchError> {
        if self.vertex_count() != other.vertex_count() {
            Err(SizeMismatchError {
                lhs: self.vertex_count(),
                rhs: other.vertex_count(),
            })
        } else {
            Ok(())
        }
    }

    /// Element-wise sum of two graphs of the same order, as a new graph.
    pub fn checked_add(&self, other: &Graph) -> Result<Graph, SizeMismatchError> {
        self.check_same_order(other)?;
        Ok(Graph::from_matrix(
            self.matrix().zip_map(other.matrix(), |a, b| a + b),
        ))
    }

    /// In-place element-wise sum.
    pub fn checked_add_assign(&mut self, other: &Graph) -> Result<(), SizeMismatchError> {
        self.check_same_order(other)?;
        let matrix = self.matrix().zip_map(other.matrix(), |a, b| a + b);
        self.replace_matrix(matrix);
        Ok(())
    }

    /// Element-wise difference of two graphs of the same order, as a new
    /// graph.
    pub fn checked_sub(&self, other: &Graph) -> Result<Graph, SizeMismatchError> {
        self.check_same_order(other)?;
        Ok(Graph::from_matrix(
            self.matrix().zip_map(other.matrix(), |a, b| a - b),
        ))
    }

    /// In-place element-wise difference.
    pub fn checked_sub_assign(&mut self, other: &Graph) -> Result<(), SizeMismatchError> {
        self.check_same_order(other)?;
        let matrix = self.matrix().zip_map(other.matrix(), |a, b| a - b);
        self.replace_matrix(matrix);
        Ok(())
    }

    /// Adds 1 to every entry, then forces the diagonal back to zero so
    /// that incrementing never introduces self-loops.
    pub fn increment(&mut self) -> &mut Self {
        self.matrix_mut().map_in_place(|e| e + 1);
        self.matrix_mut().zero_diagonal();
        self.rederive_directedness();
        self
    }

    /// Post-increment form of [`increment`](Graph::increment): increments
    /// in place and returns the prior value.
    pub fn fetch_increment(&mut self) -> Graph {
        let prior = self.clone();
        self.increment();
        prior
    }

    /// Subtracts 1 from every entry, then forces the diagonal back to
    /// zero.
    pub fn decrement(&mut self) -> &mut Self {
        self.matrix_mut().map_in_place(|e| e - 1);
        self.matrix_mut().zero_diagonal();
        self.rederive_directedness();
        self
    }

    /// Post-decrement form of [`decrement`](Graph::decrement): decrements
    /// in place and returns the prior value.
    pub fn fetch_decrement(&mut self) -> Graph {
        let prior = self.clone();
        self.decrement();
        prior
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&self, factor: i64) -> Graph {
        Graph::from_matrix(self.matrix().map(|e| e * factor))
    }

    /// Divides every entry by `divisor`, truncating toward zero.
    pub fn checked_div(&self, divisor: i64) -> Result<Graph, DivideByZeroError> {
        if divisor == 0 {
            return Err(DivideByZeroError);
        }
        Ok(Graph::from_matrix(self.matrix().map(|e| e / divisor)))
    }

    /// In-place truncating division of every entry by `divisor`.
    pub fn checked_div_assign(&mut self, divisor: i64) -> Result<(), DivideByZeroError> {
        if divisor == 0 {
            return Err(DivideByZeroError);
        }
        let matrix = self.matrix().map(|e| e / divisor);
        self.replace_matrix(matrix);
        Ok(())
    }

    /// Reversed scalar division: every non-zero entry `e` becomes
    /// `dividend / e`, zero entries stay zero, and the diagonal is forced
    /// to zero regardless of its source value.
    pub fn div_from(&self, dividend: i64) -> Graph {
        let mut matrix = self
            .matrix()
            .map(|e| if e == 0 { 0 } else { dividend / e });
        matrix.zero_diagonal();
        Graph::from_matrix(matrix)
    }

    /// Matrix multiplication of two graphs of the same order.
    ///
    /// The result's diagonal is forced to zero: composition does not
    /// create self-loops in this domain model.
    pub fn checked_mul(&self, other: &Graph) -> Result<Graph, SizeMismatchError> {
        self.check_same_order(other)?;

        let n = self.vertex_count();
        let mut matrix = Matrix::zeros(n);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }

                let mut sum = 0;
                for k in 0..n {
                    sum += self.weight(i, k) * other.weight(k, j);
                }
                matrix.set(i, j, sum);
            }
        }

        Ok(Graph::from_matrix(matrix))
    }

    /// In-place matrix multiplication.
    pub fn checked_mul_assign(&mut self, other: &Graph) -> Result<(), SizeMismatchError> {
        *self = self.checked_mul(other)?;
        Ok(())
    }
}

impl Neg for &Graph {
    type Output = Graph;

    /// Negates every entry.
    fn neg(self) -> Graph {
        Graph::from_matrix(self.matrix().map(|e| -e))
    }
}

impl Neg for Graph {
    type Output = Graph;

    fn neg(self) -> Graph {
        -&self
    }
}

impl Mul<i64> for &Graph {
    type Output = Graph;

    fn mul(self, factor: i64) -> Graph {
        self.scale(factor)
    }
}

impl Mul<&Graph> for i64 {
    type Output = Graph;

    fn mul(self, graph: &Graph) -> Graph {
        graph.scale(self)
    }
}

impl MulAssign<i64> for Graph {
    fn mul_assign(&mut self, factor: i64) {
        let matrix = self.matrix().map(|e| e * factor);
        self.replace_matrix(matrix);
    }
}

impl Div<&Graph> for i64 {
    type Output = Graph;

    /// See [`Graph::div_from`].
    fn div(self, graph: &Graph) -> Graph {
        graph.div_from(self)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Graph {}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Graph {
    /// Graphs are ordered by edge count, then by vertex count, then
    /// lexicographically by row-major matrix entries. Two graphs compare
    /// equal exactly when their matrices are identical.
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge_count()
            .cmp(&other.edge_count())
            .then_with(|| self.vertex_count().cmp(&other.vertex_count()))
            .then_with(|| self.matrix().entries().cmp(other.matrix().entries()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::graph::tests::graph_rows;

    use super::*;

    fn graph(rows: &[Vec<i64>]) -> Graph {
        Graph::from_rows(rows).unwrap()
    }

    fn zero_graph(order: usize) -> Graph {
        Graph::from_matrix(Matrix::zeros(order))
    }

    #[test]
    fn add_basic() {
        let g1 = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let g2 = graph(&[vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]);

        let sum = g1.checked_add(&g2).unwrap();
        assert_eq!(sum.to_string(), "[0, 2, 1]\n[2, 0, 3]\n[1, 3, 0]");

        let doubled = g1.checked_add(&g1).unwrap();
        assert_eq!(doubled.to_string(), "[0, 2, 0]\n[2, 0, 2]\n[0, 2, 0]");
    }

    #[test]
    fn add_size_mismatch() {
        let g1 = graph(&[vec![0, 1], vec![1, 0]]);
        let g2 = graph(&[vec![0]]);

        assert_matches!(
            g1.checked_add(&g2),
            Err(SizeMismatchError { lhs: 2, rhs: 1 })
        );
    }

    #[test]
    fn add_assign_basic() {
        let mut g1 = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let g2 = graph(&[vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]);

        g1.checked_add_assign(&g2).unwrap();
        assert_eq!(g1.to_string(), "[0, 2, 1]\n[2, 0, 3]\n[1, 3, 0]");
    }

    #[test]
    fn sub_self_is_zero() {
        let g = graph(&[vec![0, 1, 2], vec![3, 0, 4], vec![5, 6, 0]]);

        let diff = g.checked_sub(&g).unwrap();
        assert_eq!(diff, zero_graph(3));
    }

    #[test]
    fn add_negation_is_zero() {
        let g = graph(&[vec![0, 1, 2], vec![3, 0, 4], vec![5, 6, 0]]);

        let sum = g.checked_add(&-&g).unwrap();
        assert_eq!(sum, zero_graph(3));
    }

    #[test]
    fn sub_size_mismatch() {
        let g1 = graph(&[vec![0, 1], vec![1, 0]]);
        let g2 = graph(&[vec![0]]);

        assert_matches!(g1.checked_sub(&g2), Err(SizeMismatchError { .. }));
        assert_matches!(
            g1.clone().checked_sub_assign(&g2),
            Err(SizeMismatchError { .. })
        );
    }

    #[test]
    fn unary_plus_is_identity_copy() {
        let g = graph(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(g.clone(), g);
    }

    #[test]
    fn negation() {
        let g = graph(&[vec![0, 1], vec![-2, 0]]);
        assert_eq!((-&g).to_string(), "[0, -1]\n[2, 0]");
    }

    #[test]
    fn increment_skips_diagonal() {
        let mut g = graph(&[vec![0, 1], vec![1, 0]]);

        g.increment();
        assert_eq!(g.to_string(), "[0, 2]\n[2, 0]");
    }

    #[test]
    fn increment_decrement_round_trip() {
        let original = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        let mut g = original.clone();
        g.increment();
        g.decrement();

        assert_eq!(g, original);
    }

    #[test]
    fn fetch_increment_returns_prior() {
        let original = graph(&[vec![0, 1], vec![1, 0]]);

        let mut g = original.clone();
        let prior = g.fetch_increment();

        assert_eq!(prior, original);
        assert_eq!(g.to_string(), "[0, 2]\n[2, 0]");
    }

    #[test]
    fn fetch_decrement_returns_prior() {
        let original = graph(&[vec![0, 2], vec![2, 0]]);

        let mut g = original.clone();
        let prior = g.fetch_decrement();

        assert_eq!(prior, original);
        assert_eq!(g.to_string(), "[0, 1]\n[1, 0]");
    }

    #[test]
    fn scalar_multiplication() {
        let g = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        let scaled = &g * 2;
        assert_eq!(scaled.to_string(), "[0, 2, 0]\n[2, 0, 2]\n[0, 2, 0]");

        assert_eq!(2 * &g, scaled);

        let mut g = g;
        g *= 2;
        assert_eq!(g, scaled);
    }

    #[test]
    fn scalar_division() {
        let g = graph(&[vec![0, 4], vec![-5, 0]]);

        let halved = g.checked_div(2).unwrap();
        // Truncation toward zero.
        assert_eq!(halved.to_string(), "[0, 2]\n[-2, 0]");
    }

    #[test]
    fn division_by_zero() {
        let mut g = graph(&[vec![0, 1], vec![1, 0]]);

        assert_matches!(g.checked_div(0), Err(DivideByZeroError));
        assert_matches!(g.checked_div_assign(0), Err(DivideByZeroError));
    }

    #[test]
    fn reversed_division_skips_zeros_and_diagonal() {
        let g = graph(&[vec![5, 2], vec![0, 4]]);

        let result = 10 / &g;
        // Diagonal forced to zero, zero entries left alone.
        assert_eq!(result.to_string(), "[0, 5]\n[0, 0]");
    }

    #[test]
    fn graph_multiplication() {
        let g1 = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let g2 = graph(&[vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]);

        let product = g1.checked_mul(&g2).unwrap();
        assert_eq!(product.to_string(), "[0, 0, 2]\n[1, 0, 1]\n[1, 0, 0]");
    }

    #[test]
    fn graph_multiplication_assign() {
        let mut g1 = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let g2 = graph(&[vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]);

        g1.checked_mul_assign(&g2).unwrap();
        assert_eq!(g1.to_string(), "[0, 0, 2]\n[1, 0, 1]\n[1, 0, 0]");
    }

    #[test]
    fn graph_multiplication_size_mismatch() {
        let g1 = graph(&[vec![0, 1], vec![1, 0]]);
        let g2 = graph(&[vec![0]]);

        assert_matches!(g1.checked_mul(&g2), Err(SizeMismatchError { .. }));
    }

    #[test]
    fn ordering_by_edge_count_first() {
        let sparse = graph(&[vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        let dense = graph(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);

        assert!(sparse < dense);
        assert!(dense > sparse);
    }

    #[test]
    fn ordering_by_vertex_count_second() {
        let small = graph(&[vec![0, 1], vec![1, 0]]);
        let large = graph(&[vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);

        assert_eq!(small.edge_count(), large.edge_count());
        assert!(small < large);
    }

    #[test]
    fn ordering_lexicographic_tie_break() {
        let lighter = graph(&[vec![0, 1], vec![1, 0]]);
        let heavier = graph(&[vec![0, 2], vec![2, 0]]);

        assert_eq!(lighter.edge_count(), heavier.edge_count());
        assert!(lighter < heavier);
    }

    #[test]
    fn equality_is_matrix_identity() {
        let g1 = graph(&[vec![0, 1], vec![1, 0]]);
        let g2 = graph(&[vec![0, 1], vec![1, 0]]);
        let g3 = graph(&[vec![0, 2], vec![2, 0]]);

        assert_eq!(g1, g2);
        assert_ne!(g1, g3);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_add_negation_is_zero(rows in graph_rows(8)) {
            let g = Graph::from_rows(&rows).unwrap();
            let sum = g.checked_add(&-&g).unwrap();

            prop_assert_eq!(sum, zero_graph(rows.len()));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_scale_div_inverse(rows in graph_rows(8), factor in prop_oneof![-5i64..=-1, 1i64..=5]) {
            let g = Graph::from_rows(&rows).unwrap();
            let there_and_back = g.scale(factor).checked_div(factor).unwrap();

            prop_assert_eq!(there_and_back, g);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_increment_decrement_round_trip(rows in graph_rows(8)) {
            let mut rows = rows;
            let n = rows.len();
            // The round trip holds only for graphs whose diagonal already
            // is zero, because increment and decrement re-zero it.
            for (i, row) in rows.iter_mut().enumerate().take(n) {
                row[i] = 0;
            }

            let original = Graph::from_rows(&rows).unwrap();
            let mut g = original.clone();
            g.increment();
            g.decrement();

            prop_assert_eq!(g, original);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_ordering_trichotomy(lhs in graph_rows(6), rhs in graph_rows(6)) {
            let a = Graph::from_rows(&lhs).unwrap();
            let b = Graph::from_rows(&rhs).unwrap();

            let outcomes = [a < b, a == b, a > b];
            prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);

            prop_assert_eq!(a <= b, !(a > b));
        }
    }
}
