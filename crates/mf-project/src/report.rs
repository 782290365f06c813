//! Serializable flow report.
//!
//! Output shape: the total, then node name -> usage and `"from->to"` -> usage.
//! Repeated edge labels collapse into one entry holding the last occurrence.

use indexmap::IndexMap;
use mf_core::Capacity;
use mf_core::timing::SolveTiming;
use mf_solver::FlowReport;
use serde::{Deserialize, Serialize};

use crate::ProjectResult;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowUsage {
    pub flow_used: Capacity,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowReportDef {
    pub total_flow: Capacity,
    pub nodes: IndexMap<String, FlowUsage>,
    pub edges: IndexMap<String, FlowUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub augmentations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<SolveTiming>,
}

impl FlowReportDef {
    pub fn from_report(report: &FlowReport) -> Self {
        let nodes = report
            .nodes
            .iter()
            .map(|n| {
                let usage = FlowUsage {
                    flow_used: n.flow_used,
                    capacity: n.capacity,
                };
                (n.name.clone(), usage)
            })
            .collect();
        let edges = report
            .edges
            .iter()
            .map(|e| {
                let usage = FlowUsage {
                    flow_used: e.flow_used,
                    capacity: e.capacity,
                };
                (e.label(), usage)
            })
            .collect();

        Self {
            total_flow: report.total_flow,
            nodes,
            edges,
            augmentations: None,
            timing: None,
        }
    }

    /// Drop edges that carry no flow.
    pub fn retain_used_edges(&mut self) {
        self.edges.retain(|_, usage| usage.flow_used > 0);
    }

    pub fn to_json_string(&self) -> ProjectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml_string(&self) -> ProjectResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
