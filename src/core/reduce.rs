// reduction + greedy seed matching
use crate::core::solver::AssignmentSolver;

impl AssignmentSolver {
    //subtract each row's minimum, then each column's minimum on the result.
    //afterwards every row and every column holds a zero and nothing is negative.
    pub(crate) fn reduce(&mut self) {
        for row in self.matrix.iter_mut() {
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            for v in row.iter_mut() {
                *v -= min;
            }
        }

        let n = self.size();
        for col in 0..n {
            let min = self.matrix.iter().map(|row| row[col]).fold(f64::INFINITY, f64::min);
            for row in self.matrix.iter_mut() {
                row[col] -= min;
            }
        }
    }

    /// Greedy single pass over the reduced matrix in row-major order: a zero is
    /// matched when neither its row nor its column has been claimed yet.
    ///
    /// The seed does not need to be large, only consistent.
    pub(crate) fn initial_match(&mut self) {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                if self.matrix[row][col] == 0.0
                    && self.row_assignment[row].is_none()
                    && self.col_assignment[col].is_none()
                {
                    self.row_assignment[row] = Some(col);
                    self.col_assignment[col] = Some(row);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::solver::AssignmentSolver;

    fn mk_solver(rows: &[&[f64]]) -> AssignmentSolver {
        let costs: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        AssignmentSolver::new(&costs).unwrap()
    }

    #[test]
    fn reduce_leaves_a_zero_minimum_in_every_row_and_column() {
        let mut s = mk_solver(&[
            &[9.0, 2.0, 7.0, 8.0],
            &[6.0, 4.0, 3.0, 7.0],
            &[5.0, 8.0, 1.0, 8.0],
            &[7.0, 6.0, 9.0, 4.0],
        ]);

        s.reduce();

        for row in &s.matrix {
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            assert_eq!(min, 0.0);
        }
        for col in 0..4 {
            let min = s.matrix.iter().map(|r| r[col]).fold(f64::INFINITY, f64::min);
            assert_eq!(min, 0.0);
        }
        assert!(s.matrix.iter().flatten().all(|&v| v >= 0.0));
    }

    #[test]
    fn reduce_handles_negative_and_fractional_costs() {
        let mut s = mk_solver(&[&[-3.5, 1.25, 0.0], &[2.0, -1.0, 4.5], &[0.5, 0.5, -2.25]]);

        s.reduce();

        //every column already holds a zero after the row pass
        assert_eq!(s.matrix[0], vec![0.0, 4.75, 3.5]);
        assert_eq!(s.matrix[1], vec![3.0, 0.0, 5.5]);
        assert_eq!(s.matrix[2], vec![2.75, 2.75, 0.0]);
    }

    #[test]
    fn reduce_subtracts_column_minima_after_row_minima() {
        let mut s = mk_solver(&[&[1.0, 2.0], &[3.0, 5.0]]);

        s.reduce();

        assert_eq!(s.matrix, vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn reduce_does_not_touch_original_costs() {
        let mut s = mk_solver(&[&[4.0, 1.0], &[2.0, 7.0]]);
        s.reduce();
        assert_eq!(s.costs(), &[vec![4.0, 1.0], vec![2.0, 7.0]]);
    }

    #[test]
    fn initial_match_is_greedy_row_major() {
        let mut s = mk_solver(&[&[0.0, 0.0, 5.0], &[0.0, 3.0, 0.0], &[0.0, 1.0, 2.0]]);

        s.initial_match();

        assert_eq!(s.row_assignment, vec![Some(0), Some(2), None]);
        assert_eq!(s.col_assignment, vec![Some(0), None, Some(1)]);
        assert_eq!(s.matched_count(), 2);
    }

    #[test]
    fn initial_match_keeps_row_and_column_assignments_consistent() {
        let mut s = mk_solver(&[
            &[0.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 2.0, 0.0],
            &[3.0, 0.0, 0.0, 0.0],
            &[0.0, 4.0, 0.0, 0.0],
        ]);

        s.initial_match();

        for (row, col) in s.row_assignment.iter().enumerate() {
            if let Some(col) = *col {
                assert_eq!(s.col_assignment[col], Some(row));
                assert_eq!(s.matrix[row][col], 0.0);
            }
        }
    }
}
