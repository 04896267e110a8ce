// assignment solver state + main loop
/*
Phases, in order:

    reduce              row minima then column minima subtracted

    initial_match       greedy zero matching, row-major

    cover_matched       every matched column covered

    loop until every column is covered:
        find an uncovered zero (adjusting until one appears)
        unmatched row  -> augment along the alternating chain, re-cover
        matched row    -> cover the row, uncover its column, adjust
*/
use log::{debug, trace};

use crate::core::error::InvalidInputError;
use crate::core::types::{ColId, Link, Pair, RowId};

/// Kuhn-Munkres solver over a private copy of a square cost matrix.
///
/// All bookkeeping lives here and is thrown away when `solve` returns, so a
/// solver answers exactly one problem.
#[derive(Debug, Clone)]
pub struct AssignmentSolver {
    //caller's costs, untouched (used for reporting)
    pub(crate) costs: Vec<Vec<f64>>,
    //working copy, reduced and adjusted in place
    pub(crate) matrix: Vec<Vec<f64>>,

    pub(crate) row_assignment: Vec<Option<ColId>>,
    pub(crate) col_assignment: Vec<Option<RowId>>,
    pub(crate) row_covered: Vec<bool>,
    pub(crate) col_covered: Vec<bool>,
    pub(crate) pending_zero: Vec<Option<ColId>>,

    //reused across augmentations
    pub(crate) chain: Vec<Link>,
}

impl AssignmentSolver {
    //validates the shape eagerly, nothing is copied on failure
    pub fn new(costs: &[Vec<f64>]) -> Result<Self, InvalidInputError> {
        let n = costs.len();
        if n == 0 {
            return Err(InvalidInputError::Empty);
        }

        for (row, values) in costs.iter().enumerate() {
            if values.len() != n {
                return Err(InvalidInputError::NotSquare { row, expected: n, found: values.len() });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInputError::NonFinite { row, col });
            }

            //reduced entries are bounded by a small multiple of the row spread
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if !((max - min) * (2 * n) as f64).is_finite() {
                return Err(InvalidInputError::Overflow { row });
            }
        }

        let costs = costs.to_vec();
        let matrix = costs.clone();

        Ok(Self {
            costs,
            matrix,
            row_assignment: vec![None; n],
            col_assignment: vec![None; n],
            row_covered: vec![false; n],
            col_covered: vec![false; n],
            pending_zero: vec![None; n],
            chain: Vec::with_capacity(2 * n),
        })
    }

    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    pub fn costs(&self) -> &[Vec<f64>] {
        &self.costs
    }

    /// Find a minimum-cost perfect matching.
    ///
    /// Returns one `(row, column)` pair per row, ordered by row. Every column
    /// appears exactly once.
    pub fn solve(mut self) -> Vec<Pair> {
        let n = self.size();
        debug!("solving {n}x{n} assignment problem");

        self.reduce();
        self.initial_match();
        debug!("initial match covers {} of {n} rows", self.matched_count());
        self.cover_matched_columns();

        while !self.all_columns_covered() {
            let (row, col) = self.next_uncovered_zero();

            match self.row_assignment[row] {
                None => {
                    self.augment(row, col);
                    self.cover_matched_columns();
                }
                Some(matched_col) => {
                    trace!("zero ({row}, {col}) shares row with match, covering row {row}");
                    self.row_covered[row] = true;
                    self.col_covered[matched_col] = false;
                    self.adjust();
                }
            }
        }

        let pairs = self.extract_pairs();
        debug!("solved {n}x{n} problem, total cost {}", total_cost(&self.costs, &pairs));
        pairs
    }

    //keeps adjusting until the uncovered region holds a zero
    fn next_uncovered_zero(&mut self) -> Pair {
        loop {
            if let Some(zero) = self.find_uncovered_zero() {
                return zero;
            }
            self.adjust();
        }
    }

    pub(crate) fn matched_count(&self) -> usize {
        self.col_assignment.iter().filter(|r| r.is_some()).count()
    }

    fn extract_pairs(&self) -> Vec<Pair> {
        let mut pairs: Vec<Pair> = self
            .col_assignment
            .iter()
            .enumerate()
            .filter_map(|(col, row)| row.map(|row| (row, col)))
            .collect();
        //every column covered <=> every column matched
        debug_assert_eq!(pairs.len(), self.size());
        pairs.sort_unstable();
        pairs
    }
}

/// Sum of `costs[row][col]` over the given pairs.
///
/// # Panics
///
/// Panics if a pair indexes outside `costs`.
pub fn total_cost(costs: &[Vec<f64>], pairs: &[Pair]) -> f64 {
    pairs.iter().map(|&(row, col)| costs[row][col]).sum()
}

/// Build a solver for `costs` and run it.
pub fn solve_matrix(costs: &[Vec<f64>]) -> Result<Vec<Pair>, InvalidInputError> {
    Ok(AssignmentSolver::new(costs)?.solve())
}
