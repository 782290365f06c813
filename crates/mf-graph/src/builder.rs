//! Incremental network builder.

use mf_core::{Capacity, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, FlowNetwork, Node};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_edge` to build up the network, pick the terminals
/// with `set_source`/`set_sink`, then call `build()` to validate it.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    source: Option<String>,
    sink: Option<String>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return the index it will have in the split graph layout.
    pub fn add_node(&mut self, name: impl Into<String>, capacity: Capacity) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node::new(name, capacity));
        id
    }

    /// Add a directed edge between two named nodes.
    ///
    /// Endpoints are resolved at `build()`, so edges may be added before their nodes.
    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        capacity: Capacity,
    ) -> &mut Self {
        self.edges.push(Edge::new(from, to, capacity));
        self
    }

    pub fn set_source(&mut self, name: impl Into<String>) -> &mut Self {
        self.source = Some(name.into());
        self
    }

    pub fn set_sink(&mut self, name: impl Into<String>) -> &mut Self {
        self.sink = Some(name.into());
        self
    }

    /// Validate and return the network.
    pub fn build(self) -> GraphResult<FlowNetwork> {
        let source = self
            .source
            .ok_or(GraphError::MissingTerminal { role: "source" })?;
        let sink = self.sink.ok_or(GraphError::MissingTerminal { role: "sink" })?;

        let network = FlowNetwork {
            nodes: self.nodes,
            edges: self.edges,
            source,
            sink,
        };
        validate::validate_network(&network)?;
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let s = builder.add_node("s", 10);
        let t = builder.add_node("t", 10);
        builder.add_edge("s", "t", 4);

        assert_eq!(s.index(), 0);
        assert_eq!(t.index(), 1);
        assert_eq!(builder.nodes.len(), 2);
        assert_eq!(builder.edges.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = NetworkBuilder::new();
        builder.add_node("s", 10);
        builder.add_node("t", 10);
        builder.add_edge("s", "t", 4).set_source("s").set_sink("t");

        let network = builder.build().unwrap();
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.edges, vec![Edge::new("s", "t", 4)]);
        assert_eq!(network.source, "s");
        assert_eq!(network.sink, "t");
    }

    #[test]
    fn builder_requires_terminals() {
        let mut builder = NetworkBuilder::new();
        builder.add_node("s", 1);
        builder.set_sink("s");
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::MissingTerminal { role: "source" }
        );
    }

    #[test]
    fn builder_rejects_dangling_edge() {
        let mut builder = NetworkBuilder::new();
        builder.add_node("s", 1);
        builder.add_node("t", 1);
        builder.add_edge("s", "x", 1).set_source("s").set_sink("t");
        assert!(matches!(
            builder.build(),
            Err(GraphError::UnknownNode { ref name, .. }) if name == "x"
        ));
    }
}
