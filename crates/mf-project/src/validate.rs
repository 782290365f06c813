//! Network file validation.

use std::collections::HashSet;

use crate::schema::NetworkDef;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn non_negative(field: impl FnOnce() -> String, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::InvalidValue {
            field: field(),
            value: value.to_string(),
            reason: "capacity must be non-negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    let node_ids: HashSet<&str> = network.nodes.keys().map(String::as_str).collect();

    for (name, &capacity) in &network.nodes {
        non_negative(|| format!("nodes.{name}"), capacity)?;
    }

    for (role, id) in [("source", &network.source), ("sink", &network.sink)] {
        if !node_ids.contains(id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: id.clone(),
                context: role.to_string(),
            });
        }
    }

    for (i, edge) in network.edges.iter().enumerate() {
        for id in [edge.from(), edge.to()] {
            if !node_ids.contains(id) {
                return Err(ValidationError::MissingReference {
                    id: id.to_string(),
                    context: format!("edges[{i}]"),
                });
            }
        }
        non_negative(|| format!("edges[{i}].capacity"), edge.capacity())?;
    }

    Ok(())
}
