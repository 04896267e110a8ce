/*
Inputs:

    problem.toon (optional name + square cost matrix)

Outputs:

    MatchingReport (assignments + total cost on the original costs), TOON encoded
*/
pub mod file;

use thiserror::Error;

use crate::core::error::InvalidInputError;

pub use file::{AssignmentProblem, MatchingReport};

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed TOON: {0}")]
    Toon(String),

    #[error("invalid cost matrix: {0}")]
    InvalidInput(#[from] InvalidInputError),
}
