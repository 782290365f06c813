//! Shared application service layer for vcflow.
//!
//! Loading a network file, checking it and running the solver pipeline,
//! kept out of the CLI so other frontends can reuse it.

pub mod error;
pub mod network_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use network_service::{
    NetworkSummary, SolveOptions, SolveResponse, load_network, solve_file, solve_network,
    summarize,
};
