//! Mapping solved residual capacities back onto the original network.

use mf_core::{Capacity, in_vertex, out_vertex};
use mf_graph::graph::edge_label;
use mf_graph::{FlowNetwork, IndexMap};

use crate::error::SolverResult;
use crate::residual::ResidualGraph;

/// Flow carried through one original node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFlow {
    pub name: String,
    pub flow_used: Capacity,
    pub capacity: Capacity,
}

/// Flow carried by one original edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFlow {
    pub from: String,
    pub to: String,
    pub flow_used: Capacity,
    pub capacity: Capacity,
}

impl EdgeFlow {
    pub fn label(&self) -> String {
        edge_label(&self.from, &self.to)
    }
}

/// Per-node and per-edge flow, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport {
    pub total_flow: Capacity,
    pub nodes: Vec<NodeFlow>,
    pub edges: Vec<EdgeFlow>,
}

impl FlowReport {
    pub fn node(&self, name: &str) -> Option<&NodeFlow> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// The last edge with this endpoint pair, i.e. the one the solver saw.
    pub fn edge(&self, from: &str, to: &str) -> Option<&EdgeFlow> {
        self.edges.iter().rev().find(|e| e.from == from && e.to == to)
    }

    /// Edges that carry flow.
    pub fn used_edges(&self) -> impl Iterator<Item = &EdgeFlow> {
        self.edges.iter().filter(|e| e.flow_used > 0)
    }
}

/// Compute the flow used on every original node and edge.
///
/// Node flow is read from the internal `in -> out` edge, edge flow from
/// `out(from) -> in(to)`. `index` must be the map the residual was laid out
/// with. For a repeated `(from, to)` pair every occurrence reads the same
/// matrix entry, so earlier occurrences report flow against a capacity the
/// solver never saw; that value is passed through as is. A self loop `u -> u`
/// shares its entry with the reverse of `u`'s internal edge and reports the
/// negated node flow.
pub fn attribute_flow(
    network: &FlowNetwork,
    total_flow: Capacity,
    residual: &ResidualGraph,
    index: &IndexMap,
) -> SolverResult<FlowReport> {
    let mut nodes = Vec::with_capacity(network.nodes.len());
    for node in &network.nodes {
        let id = index.require(&node.name, "attribution")?;
        let remaining = residual.residual(in_vertex(id), out_vertex(id));
        nodes.push(NodeFlow {
            name: node.name.clone(),
            flow_used: node.capacity - remaining,
            capacity: node.capacity,
        });
    }

    let mut edges = Vec::with_capacity(network.edges.len());
    for edge in &network.edges {
        let u = index.require(&edge.from, "attribution")?;
        let v = index.require(&edge.to, "attribution")?;
        let remaining = residual.residual(out_vertex(u), in_vertex(v));
        edges.push(EdgeFlow {
            from: edge.from.clone(),
            to: edge.to.clone(),
            flow_used: edge.capacity - remaining,
            capacity: edge.capacity,
        });
    }

    Ok(FlowReport {
        total_flow,
        nodes,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edmonds_karp::edmonds_karp;
    use mf_graph::{Edge, Node, split_vertices};

    fn network(edges: Vec<Edge>) -> FlowNetwork {
        let mut n = FlowNetwork::new("s", "t");
        n.nodes = vec![Node::new("s", 100), Node::new("a", 5), Node::new("t", 100)];
        n.edges = edges;
        n
    }

    fn report(n: &FlowNetwork) -> FlowReport {
        let split = split_vertices(n).unwrap();
        let flow = edmonds_karp(&split.matrix, split.source, split.sink).unwrap();
        attribute_flow(n, flow.value, &flow.residual, &split.index).unwrap()
    }

    #[test]
    fn node_capacity_limits_flow() {
        let r = report(&network(vec![Edge::new("s", "a", 10), Edge::new("a", "t", 25)]));

        assert_eq!(r.total_flow, 5);
        assert_eq!(r.node("a").map(|n| n.flow_used), Some(5));
        assert_eq!(r.edge("s", "a").map(|e| e.flow_used), Some(5));
        assert_eq!(r.edge("a", "t").map(|e| e.flow_used), Some(5));
        // Flow starts at out(source) and stops at in(sink)
        assert_eq!(r.node("s").map(|n| n.flow_used), Some(0));
        assert_eq!(r.node("t").map(|n| n.flow_used), Some(0));
    }

    #[test]
    fn duplicate_edge_reports_raw_difference() {
        let mut n = network(vec![
            Edge::new("s", "a", 3),
            Edge::new("s", "a", 20),
            Edge::new("a", "t", 25),
        ]);
        n.nodes[1].capacity = 10;
        let r = report(&n);

        assert_eq!(r.total_flow, 10);
        // Both occurrences read the same residual entry (20 - 10 = 10 left)
        assert_eq!(r.edges[0].flow_used, 3 - 10);
        assert_eq!(r.edges[1].flow_used, 10);
        assert_eq!(r.edge("s", "a").map(|e| e.capacity), Some(20));
    }

    #[test]
    fn self_loop_reports_negated_node_flow() {
        let mut n = network(vec![
            Edge::new("s", "a", 10),
            Edge::new("a", "a", 3),
            Edge::new("a", "t", 10),
        ]);
        n.nodes[0].capacity = 10;
        n.nodes[2].capacity = 10;
        let r = report(&n);

        assert_eq!(r.total_flow, 5);
        assert_eq!(r.node("a").map(|n| n.flow_used), Some(5));
        assert_eq!(r.edge("a", "t").map(|e| e.flow_used), Some(5));
        // 3 - (3 + 5): the loop slot also holds the reverse of a's internal edge
        assert_eq!(r.edge("a", "a").map(|e| e.flow_used), Some(-5));
        assert!(r.used_edges().all(|e| e.from != e.to));
    }

    #[test]
    fn used_edges_skips_idle_edges() {
        let r = report(&network(vec![
            Edge::new("s", "a", 10),
            Edge::new("a", "t", 25),
            Edge::new("t", "s", 4),
        ]));
        let labels: Vec<String> = r.used_edges().map(EdgeFlow::label).collect();
        assert_eq!(labels, vec!["s->a", "a->t"]);
    }

    #[test]
    fn mismatched_index_is_an_error() {
        let n = network(vec![]);
        let other = IndexMap::from_nodes(&[Node::new("s", 1)]).unwrap();
        let residual = ResidualGraph::from_capacity(&mf_core::zero_matrix(2));
        assert!(attribute_flow(&n, 0, &residual, &other).is_err());
    }
}
