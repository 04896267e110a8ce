use serde::{Deserialize, Serialize};

pub type RowId = usize;
pub type ColId = usize;

//the (row, column) pair handed back by the solver
pub type Pair = (RowId, ColId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub row: RowId,
    pub col: ColId,
}

impl Assignment {
    pub fn new(row: RowId, col: ColId) -> Self {
        Self { row, col }
    }
}

impl From<Pair> for Assignment {
    fn from((row, col): Pair) -> Self {
        Self { row, col }
    }
}

/// One link of an augmenting chain.
///
/// `Pending` links become part of the matching when the chain is flipped,
/// `Matched` links are dropped from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Pending(RowId, ColId),
    Matched(RowId, ColId),
}
