//! Network loading and solving.

use std::path::Path;

use mf_project::{FlowReportDef, NetworkDef};
use mf_solver::FlowSolution;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Knobs for turning a solution into a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Keep edges that carry no flow in the report.
    pub include_idle_edges: bool,
    /// Attach stage timings and augmentation count.
    pub include_timing: bool,
}

/// Summary of a network for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub source: String,
    pub sink: String,
    /// Labels of `(from, to)` pairs that appear more than once.
    pub duplicate_edges: Vec<String>,
    /// Labels of edges from a node to itself.
    pub self_loops: Vec<String>,
}

/// Solution together with its serializable report.
#[derive(Debug, Clone)]
pub struct SolveResponse {
    pub solution: FlowSolution,
    pub report: FlowReportDef,
    pub summary: NetworkSummary,
}

/// Load and validate a network file (JSON or YAML by extension).
pub fn load_network(path: &Path) -> AppResult<NetworkDef> {
    mf_project::load(path).map_err(|source| AppError::Load {
        path: path.to_path_buf(),
        source,
    })
}

pub fn summarize(def: &NetworkDef) -> NetworkSummary {
    let network = def.to_network();
    NetworkSummary {
        node_count: def.nodes.len(),
        edge_count: def.edges.len(),
        source: def.source.clone(),
        sink: def.sink.clone(),
        duplicate_edges: network.duplicate_edges(),
        self_loops: network.self_loops(),
    }
}

/// Solve an already loaded network.
pub fn solve_network(def: &NetworkDef, options: SolveOptions) -> AppResult<SolveResponse> {
    let summary = summarize(def);
    for label in &summary.duplicate_edges {
        warn!(
            edge = %label,
            "edge listed more than once; only the last capacity is used"
        );
    }
    for label in &summary.self_loops {
        warn!(
            edge = %label,
            "self loop shares the node's internal edge; its reported flow is the negated node flow"
        );
    }

    let network = def.to_network();
    let solution = mf_solver::solve(&network)?;
    info!(
        total_flow = solution.total_flow(),
        augmentations = solution.augmentations,
        "solved"
    );

    let mut report = FlowReportDef::from_report(&solution.report);
    if !options.include_idle_edges {
        report.retain_used_edges();
    }
    if options.include_timing {
        report.augmentations = Some(solution.augmentations);
        report.timing = Some(solution.timing);
    }

    Ok(SolveResponse {
        solution,
        report,
        summary,
    })
}

/// Load a network file and solve it.
pub fn solve_file(path: &Path, options: SolveOptions) -> AppResult<SolveResponse> {
    let def = load_network(path)?;
    solve_network(&def, options)
}
