use thiserror::Error;

/// Rejected cost matrix. Raised by `AssignmentSolver::new` before any
/// computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("cost matrix is empty")]
    Empty,

    #[error("cost matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    //NaN or infinity would break the exact zero tests
    #[error("cost at ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    //spread of the row is too wide for reduction and adjustment to stay finite
    #[error("costs in row {row} span too wide a range to reduce without overflow")]
    Overflow { row: usize },
}
