//! mf-core: stable foundation for vcflow.
//!
//! Contains:
//! - capacity (integer capacity type + dense capacity matrix)
//! - ids (compact ids for original nodes and split-graph vertices)
//! - error (shared error types)
//! - timing (per-stage wall-clock measurements)

pub mod capacity;
pub mod error;
pub mod ids;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use capacity::*;
pub use error::{MfError, MfResult};
pub use ids::*;
