//! Core network data structures.

use std::collections::HashMap;

use mf_core::Capacity;

/// A node of the original network with its own throughput limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub capacity: Capacity,
}

impl Node {
    pub fn new(name: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// A directed, capacitated edge between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }

    /// Display label, `"from->to"`.
    pub fn label(&self) -> String {
        edge_label(&self.from, &self.to)
    }
}

pub fn edge_label(from: &str, to: &str) -> String {
    format!("{from}->{to}")
}

/// A network whose capacity constraints apply to both nodes and edges.
///
/// This is plain data: nothing stops a caller from assembling an inconsistent
/// network by hand. Reference errors surface when the network is reduced by
/// [`crate::split_vertices`], or earlier if it was assembled through
/// [`crate::NetworkBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowNetwork {
    /// Nodes in insertion order; the order fixes every node's index.
    pub nodes: Vec<Node>,
    /// Edges in input order. Later duplicates of a `(from, to)` pair win.
    pub edges: Vec<Edge>,
    pub source: String,
    pub sink: String,
}

impl FlowNetwork {
    pub fn new(source: impl Into<String>, sink: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            source: source.into(),
            sink: sink.into(),
        }
    }

    /// Get a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Labels of `(from, to)` pairs that occur more than once, in order of first appearance.
    ///
    /// Only the last occurrence of such a pair reaches the solver, so the
    /// attributed flow of the earlier ones is measured against a capacity that
    /// was never in the solved matrix.
    pub fn duplicate_edges(&self) -> Vec<String> {
        let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
        for edge in &self.edges {
            *counts
                .entry((edge.from.as_str(), edge.to.as_str()))
                .or_default() += 1;
        }

        let mut labels = Vec::new();
        for edge in &self.edges {
            let key = (edge.from.as_str(), edge.to.as_str());
            if counts.get(&key).copied().unwrap_or(0) > 1 {
                // Report each pair once
                counts.remove(&key);
                labels.push(edge.label());
            }
        }
        labels
    }

    /// Labels of edges that start and end at the same node, in input order.
    ///
    /// A self loop `u -> u` lands on `out(u) -> in(u)`, the reverse slot of
    /// the node's internal edge, so its attributed flow is the negated flow
    /// through `u` rather than a flow of its own.
    pub fn self_loops(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for edge in self.edges.iter().filter(|e| e.from == e.to) {
            let label = edge.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_label_format() {
        let edge = Edge::new("a", "b", 3);
        assert_eq!(edge.label(), "a->b");
    }

    #[test]
    fn node_lookup_by_name() {
        let mut network = FlowNetwork::new("s", "t");
        network.nodes.push(Node::new("s", 10));
        network.nodes.push(Node::new("t", 4));
        assert_eq!(network.node("t").map(|n| n.capacity), Some(4));
        assert!(network.node("x").is_none());
    }

    #[test]
    fn duplicate_edges_reported_once_in_first_order() {
        let mut network = FlowNetwork::new("s", "t");
        network.edges = vec![
            Edge::new("a", "b", 1),
            Edge::new("s", "a", 5),
            Edge::new("a", "b", 2),
            Edge::new("s", "a", 20),
            Edge::new("a", "b", 3),
            Edge::new("b", "a", 3),
        ];
        assert_eq!(network.duplicate_edges(), vec!["a->b", "s->a"]);
    }

    #[test]
    fn self_loops_listed_once() {
        let mut network = FlowNetwork::new("s", "t");
        network.edges = vec![
            Edge::new("s", "a", 1),
            Edge::new("a", "a", 2),
            Edge::new("t", "t", 1),
            Edge::new("a", "a", 4),
        ];
        assert_eq!(network.self_loops(), vec!["a->a", "t->t"]);
        assert!(network.duplicate_edges().contains(&"a->a".to_string()));
    }
}
