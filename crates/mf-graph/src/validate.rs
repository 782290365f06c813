//! Network validation logic.

use mf_core::Capacity;

use crate::error::{GraphError, GraphResult};
use crate::graph::FlowNetwork;
use crate::indexing::IndexMap;

fn check_capacity(value: Capacity, what: impl FnOnce() -> String) -> GraphResult<()> {
    if value < 0 {
        return Err(GraphError::NegativeCapacity {
            what: what(),
            value,
        });
    }
    Ok(())
}

/// Check that every node and edge capacity is non-negative.
pub(crate) fn validate_capacities(network: &FlowNetwork) -> GraphResult<()> {
    for node in &network.nodes {
        check_capacity(node.capacity, || format!("node '{}'", node.name))?;
    }
    for edge in &network.edges {
        check_capacity(edge.capacity, || format!("edge '{}'", edge.label()))?;
    }
    Ok(())
}

/// Check that source, sink and every edge endpoint resolve in `index`.
pub(crate) fn validate_references(network: &FlowNetwork, index: &IndexMap) -> GraphResult<()> {
    index.require(&network.source, "source")?;
    index.require(&network.sink, "sink")?;
    for edge in &network.edges {
        index.require(&edge.from, format!("edge '{}'", edge.label()))?;
        index.require(&edge.to, format!("edge '{}'", edge.label()))?;
    }
    Ok(())
}

/// Full structural validation: unique names, capacities, references.
pub(crate) fn validate_network(network: &FlowNetwork) -> GraphResult<IndexMap> {
    let index = IndexMap::from_nodes(&network.nodes)?;
    validate_capacities(network)?;
    validate_references(network, &index)?;
    Ok(index)
}
