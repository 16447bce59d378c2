use crate::{RowEngine, RowProblem};

pub struct RowEngineBuilder<P: RowProblem> {
    problem: P,
    limit: Option<f64>,
}

impl<P: RowProblem> RowEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            limit: None,
        }
    }
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_optional_limit(mut self, limit: Option<f64>) -> Self {
        self.limit = limit;
        self
    }
    pub fn build(self) -> RowEngine<P> {
        match self.limit {
            Some(limit) => RowEngine::with_limit(self.problem, limit),
            None => RowEngine::new(self.problem),
        }
    }
}
