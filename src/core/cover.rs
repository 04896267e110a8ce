// covering, uncovered zero search, matrix adjustment
use log::trace;

use crate::core::solver::AssignmentSolver;
use crate::core::types::Pair;

impl AssignmentSolver {
    //cover exactly the matched columns; rows are left as they are
    pub(crate) fn cover_matched_columns(&mut self) {
        for (covered, row) in self.col_covered.iter_mut().zip(&self.col_assignment) {
            *covered = row.is_some();
        }
    }

    pub(crate) fn all_columns_covered(&self) -> bool {
        self.col_covered.iter().all(|&c| c)
    }

    /// Scan uncovered rows (row-major) for a zero in an uncovered column.
    ///
    /// The first hit is recorded as that row's pending zero and returned.
    pub(crate) fn find_uncovered_zero(&mut self) -> Option<Pair> {
        let n = self.size();
        for row in 0..n {
            if self.row_covered[row] {
                continue;
            }
            for col in 0..n {
                if !self.col_covered[col] && self.matrix[row][col] == 0.0 {
                    self.pending_zero[row] = Some(col);
                    return Some((row, col));
                }
            }
        }
        None
    }

    //smallest value whose row and column are both uncovered
    pub(crate) fn min_uncovered(&self) -> f64 {
        let mut min = f64::INFINITY;
        for (row, values) in self.matrix.iter().enumerate() {
            if self.row_covered[row] {
                continue;
            }
            for (col, &v) in values.iter().enumerate() {
                if !self.col_covered[col] && v < min {
                    min = v;
                }
            }
        }
        min
    }

    /// Subtract the uncovered minimum from every doubly-uncovered cell and add
    /// it to every doubly-covered cell. Singly-covered cells are untouched.
    ///
    /// No-op when an uncovered zero already exists.
    pub(crate) fn adjust(&mut self) {
        let min = self.min_uncovered();
        //infinite only when nothing is uncovered, which the main loop never reaches
        if !(min > 0.0 && min.is_finite()) {
            return;
        }
        trace!("adjusting uncovered region by {min}");

        for (row, values) in self.matrix.iter_mut().enumerate() {
            let row_covered = self.row_covered[row];
            for (col, v) in values.iter_mut().enumerate() {
                match (row_covered, self.col_covered[col]) {
                    (true, true) => *v += min,
                    (false, false) => *v -= min,
                    _ => {}
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
    fn cover_matched_columns_marks_only_matched() {
        let mut s = mk_solver(&[&[0.0, 1.0, 1.0], &[1.0, 1.0, 0.0], &[1.0, 1.0, 0.0]]);
        s.initial_match();

        s.cover_matched_columns();

        assert_eq!(s.col_covered, vec![true, false, true]);
        assert_eq!(s.row_covered, vec![false, false, false]);
        assert!(!s.all_columns_covered());
    }

    #[test]
    fn find_uncovered_zero_skips_covered_lines_and_records_pending() {
        let mut s = mk_solver(&[&[0.0, 0.0, 1.0], &[1.0, 1.0, 1.0], &[1.0, 0.0, 0.0]]);
        s.col_covered[0] = true;
        s.row_covered[0] = true;

        let zero = s.find_uncovered_zero();

        assert_eq!(zero, Some((2, 1)));
        assert_eq!(s.pending_zero, vec![None, None, Some(1)]);
    }

    #[test]
    fn find_uncovered_zero_returns_none_when_region_has_no_zero() {
        let mut s = mk_solver(&[&[0.0, 2.0], &[3.0, 0.0]]);
        s.col_covered = vec![true, true];

        assert_eq!(s.find_uncovered_zero(), None);
        assert!(s.pending_zero.iter().all(|p| p.is_none()));
    }

    #[test]
    fn adjust_moves_minimum_between_uncovered_and_doubly_covered_cells() {
        let mut s = mk_solver(&[&[0.0, 4.0, 6.0], &[2.0, 3.0, 5.0], &[0.0, 7.0, 2.0]]);
        s.row_covered = vec![true, false, false];
        s.col_covered = vec![true, false, false];

        s.adjust();

        //row 0 x col 0 doubly covered, rows 1..2 x cols 1..2 uncovered (min 2)
        assert_eq!(s.matrix[0], vec![2.0, 4.0, 6.0]);
        assert_eq!(s.matrix[1], vec![2.0, 1.0, 3.0]);
        assert_eq!(s.matrix[2], vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn adjust_is_noop_when_uncovered_zero_exists() {
        let mut s = mk_solver(&[&[0.0, 4.0], &[2.0, 0.0]]);
        s.row_covered = vec![true, false];
        s.col_covered = vec![true, false];
        let before = s.matrix.clone();

        s.adjust();

        assert_eq!(s.matrix, before);
    }

    #[test]
    fn adjust_keeps_entries_non_negative() {
        let mut s = mk_solver(&[&[0.0, 1.5, 2.25], &[0.75, 0.5, 3.0], &[0.0, 9.0, 0.25]]);
        s.col_covered = vec![true, false, false];

        s.adjust();

        assert!(s.matrix.iter().flatten().all(|&v| v >= 0.0));
        assert!(s.find_uncovered_zero().is_some());
    }
}
