//! One-shot pipeline: split vertices, solve, attribute.

use mf_core::Capacity;
use mf_core::timing::{SolveTiming, Timer};
use mf_graph::{FlowNetwork, SplitGraph, split_vertices};
use tracing::{debug, info_span};

use crate::attribute::{FlowReport, attribute_flow};
use crate::edmonds_karp::edmonds_karp;
use crate::error::SolverResult;
use crate::residual::ResidualGraph;

/// Everything produced by one solve request.
#[derive(Debug, Clone)]
pub struct FlowSolution {
    pub report: FlowReport,
    /// The reduced network that was solved.
    pub split: SplitGraph,
    /// Final residual capacities of `split.matrix`.
    pub residual: ResidualGraph,
    pub augmentations: usize,
    pub timing: SolveTiming,
}

impl FlowSolution {
    pub fn total_flow(&self) -> Capacity {
        self.report.total_flow
    }
}

/// Compute the maximum flow of a node- and edge-capacitated network.
///
/// Either the full solution is returned or the first error encountered.
pub fn solve(network: &FlowNetwork) -> SolverResult<FlowSolution> {
    let span = info_span!(
        "solve",
        nodes = network.nodes.len(),
        edges = network.edges.len()
    );
    let _enter = span.enter();

    let mut timing = SolveTiming::default();

    let timer = Timer::start("transform");
    let split = split_vertices(network)?;
    timing.transform_time_s = finish(timer);

    let timer = Timer::start("solve");
    let flow = edmonds_karp(&split.matrix, split.source, split.sink)?;
    timing.solve_time_s = finish(timer);

    let timer = Timer::start("attribute");
    let report = attribute_flow(network, flow.value, &flow.residual, &split.index)?;
    timing.attribute_time_s = finish(timer);

    Ok(FlowSolution {
        report,
        split,
        residual: flow.residual,
        augmentations: flow.augmentations,
        timing,
    })
}

fn finish(timer: Timer) -> f64 {
    let stage = timer.label();
    let elapsed_s = timer.stop();
    debug!(stage, elapsed_s, "stage finished");
    elapsed_s
}
