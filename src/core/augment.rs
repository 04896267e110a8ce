// augmenting chain
use log::trace;

use crate::core::solver::AssignmentSolver;
use crate::core::types::{ColId, Link, RowId};

impl AssignmentSolver {
    /// Grow the matching by one along the alternating chain that starts at the
    /// pending zero `(row, col)` of an unmatched row.
    ///
    /// Chain shape: pending `(r0, c0)`, matched `(r1, c0)`, pending `(r1, c1)`,
    /// matched `(r2, c1)`, ... ending on a pending zero whose column is unmatched.
    /// Flipping it drops every matched link and adopts every pending one.
    ///
    /// Pending zeros and all covers are cleared afterwards.
    pub(crate) fn augment(&mut self, row: RowId, col: ColId) {
        self.build_chain(row, col);
        trace!("augmenting along chain of {} links", self.chain.len());

        //drop matched links first so adopted links never get overwritten
        for &link in &self.chain {
            if let Link::Matched(r, c) = link {
                if self.col_assignment[c] == Some(r) {
                    self.col_assignment[c] = None;
                }
                if self.row_assignment[r] == Some(c) {
                    self.row_assignment[r] = None;
                }
            }
        }
        for &link in &self.chain {
            if let Link::Pending(r, c) = link {
                self.row_assignment[r] = Some(c);
                self.col_assignment[c] = Some(r);
            }
        }

        self.pending_zero.fill(None);
        self.row_covered.fill(false);
        self.col_covered.fill(false);
    }

    //iterative walk, the buffer is reused between augmentations
    fn build_chain(&mut self, row: RowId, col: ColId) {
        self.chain.clear();
        self.chain.push(Link::Pending(row, col));

        let mut col = col;
        while let Some(matched_row) = self.col_assignment[col] {
            self.chain.push(Link::Matched(matched_row, col));

            match self.pending_zero[matched_row] {
                Some(next_col) => {
                    self.chain.push(Link::Pending(matched_row, next_col));
                    col = next_col;
                }
                None => break,
            }
        }
    }
}
