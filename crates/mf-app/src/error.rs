//! Error types for the mf-app service layer.

use std::path::PathBuf;

use mf_core::MfError;

/// Application error type wrapping errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network file {path}: {source}")]
    Load {
        path: PathBuf,
        source: mf_project::ProjectError,
    },

    #[error("Solver error: {0}")]
    Solver(#[from] mf_solver::SolverError),

    #[error("Report error: {0}")]
    Report(#[from] mf_project::ProjectError),
}

/// Result type for mf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Collapse into the shared core error, when the failure came from the core.
    pub fn core(&self) -> Option<MfError> {
        match self {
            AppError::Solver(e) => Some(e.clone().into()),
            AppError::Load { .. } | AppError::Report(_) => None,
        }
    }
}
