pub mod core;
pub mod problem;

pub use crate::core::error::InvalidInputError;
pub use crate::core::solver::{solve_matrix, total_cost, AssignmentSolver};
pub use crate::core::types::Assignment;
pub use crate::problem::{AssignmentProblem, MatchingReport, ProblemError};
