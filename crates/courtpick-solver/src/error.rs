use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    /// No assignment satisfies every constraint. No partial roster is produced.
    #[error("no roster satisfies every constraint: {reason}")]
    Infeasible { reason: String },

    #[error("invalid selector input: {0}")]
    InvalidInput(String),

    #[error("solver failed: {0}")]
    Solver(String),
}

impl SolveError {
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SolveError::Infeasible { .. })
    }
}
