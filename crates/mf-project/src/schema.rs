//! Network file schema.
//!
//! ```json
//! {
//!   "nodes": {"s": 100, "a": 5, "t": 100},
//!   "edges": [["s", "a", 10], {"from": "a", "to": "t", "capacity": 25}],
//!   "source": "s",
//!   "sink": "t"
//! }
//! ```

use indexmap::IndexMap;
use mf_core::Capacity;
use mf_graph::{Edge, FlowNetwork, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    /// Node name -> capacity, in file order.
    pub nodes: IndexMap<String, Capacity>,
    pub edges: Vec<EdgeDef>,
    pub source: String,
    pub sink: String,
}

/// An edge, written either as `[from, to, capacity]` or as a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EdgeDef {
    Triple(String, String, Capacity),
    Record {
        from: String,
        to: String,
        capacity: Capacity,
    },
}

impl EdgeDef {
    pub fn from(&self) -> &str {
        match self {
            EdgeDef::Triple(from, _, _) | EdgeDef::Record { from, .. } => from,
        }
    }

    pub fn to(&self) -> &str {
        match self {
            EdgeDef::Triple(_, to, _) | EdgeDef::Record { to, .. } => to,
        }
    }

    pub fn capacity(&self) -> Capacity {
        match self {
            EdgeDef::Triple(_, _, capacity) | EdgeDef::Record { capacity, .. } => *capacity,
        }
    }
}

impl NetworkDef {
    /// Convert to the in-memory network, preserving node and edge order.
    pub fn to_network(&self) -> FlowNetwork {
        FlowNetwork {
            nodes: self
                .nodes
                .iter()
                .map(|(name, &capacity)| Node::new(name.clone(), capacity))
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| Edge::new(e.from(), e.to(), e.capacity()))
                .collect(),
            source: self.source.clone(),
            sink: self.sink.clone(),
        }
    }

    /// Build a file definition from an in-memory network; edges use the triple form.
    ///
    /// Repeated node names collapse onto the first position with the last capacity.
    pub fn from_network(network: &FlowNetwork) -> Self {
        Self {
            nodes: network
                .nodes
                .iter()
                .map(|n| (n.name.clone(), n.capacity))
                .collect(),
            edges: network
                .edges
                .iter()
                .map(|e| EdgeDef::Triple(e.from.clone(), e.to.clone(), e.capacity))
                .collect(),
            source: network.source.clone(),
            sink: network.sink.clone(),
        }
    }
}
