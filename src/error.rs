//! Crate error type.

use crate::models::Pid;
use crate::validation::ValidationError;

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the simulator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The request failed validation; nothing was simulated.
    #[error("invalid simulation input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// Metrics were requested for an empty process set.
    #[error("no processes to measure")]
    EmptyProcessSet,

    /// Metrics were requested for a process the run never finished.
    #[error("process {pid} has not completed")]
    IncompleteRun {
        /// The unfinished process.
        pid: Pid,
    },

    /// An algorithm tag could not be parsed.
    #[error("unknown scheduling algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl Error {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Invalid(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
