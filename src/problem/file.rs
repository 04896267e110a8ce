// TOON problem files + reports
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::solver::{total_cost, AssignmentSolver};
use crate::core::types::Assignment;
use crate::problem::ProblemError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    //costs[row][col], row-major
    pub costs: Vec<Vec<f64>>,
}

/// Outcome of solving an `AssignmentProblem`, one assignment per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub assignments: Vec<Assignment>,
    pub total_cost: f64,
}

impl AssignmentProblem {
    pub fn new(costs: Vec<Vec<f64>>) -> Self {
        Self { name: None, costs }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_toon_str(text: &str) -> Result<Self, ProblemError> {
        toon_format::decode_default(text).map_err(|e| ProblemError::Toon(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!("loaded problem file {}", path.display());
        Self::from_toon_str(&text)
    }

    pub fn to_toon(&self) -> Result<String, ProblemError> {
        toon_format::encode_default(self).map_err(|e| ProblemError::Toon(e.to_string()))
    }

    //shape is checked here, before any solving
    pub fn solver(&self) -> Result<AssignmentSolver, ProblemError> {
        Ok(AssignmentSolver::new(&self.costs)?)
    }

    pub fn solve(&self) -> Result<MatchingReport, ProblemError> {
        let pairs = self.solver()?.solve();
        let total_cost = total_cost(&self.costs, &pairs);

        Ok(MatchingReport {
            name: self.name.clone(),
            assignments: pairs.into_iter().map(Assignment::from).collect(),
            total_cost,
        })
    }
}

impl MatchingReport {
    pub fn to_toon(&self) -> Result<String, ProblemError> {
        toon_format::encode_default(self).map_err(|e| ProblemError::Toon(e.to_string()))
    }

    pub fn from_toon_str(text: &str) -> Result<Self, ProblemError> {
        toon_format::decode_default(text).map_err(|e| ProblemError::Toon(e.to_string()))
    }

    //column matched to `row`, if the report covers it
    pub fn col_for_row(&self, row: usize) -> Option<usize> {
        self.assignments.iter().find(|a| a.row == row).map(|a| a.col)
    }
}
