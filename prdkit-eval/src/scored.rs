use crate::evaluation::Evaluation;
use prdkit_prd::Prd;
use serde::Serialize;

/// A PRD together with the evaluation of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPrd {
    prd: Prd,
    evaluation: Evaluation,
}

impl ScoredPrd {
    pub fn new(prd: Prd, evaluation: Evaluation) -> Self {
        Self { prd, evaluation }
    }

    pub fn prd(&self) -> &Prd {
        &self.prd
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn into_parts(self) -> (Prd, Evaluation) {
        (self.prd, self.evaluation)
    }
}
