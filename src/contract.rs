//! JSON Schema contract for the graph handed to the renderer.
//!
//! The schema lives in `schema/portal_graph.schema.json` and is embedded at
//! compile time so binaries validate against the same copy the tests use.

use crate::graph::Graph;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

pub const GRAPH_SCHEMA_SOURCE: &str = include_str!("../schema/portal_graph.schema.json");

/// Compiled graph schema.
pub struct GraphContract {
    compiled: JSONSchema,
}

impl GraphContract {
    pub fn load() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(GRAPH_SCHEMA_SOURCE).context("parsing embedded graph schema")?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling embedded graph schema: {err}"))?;
        Ok(Self { compiled })
    }

    /// Check a graph document, reporting every violation at once.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("graph failed contract validation:\n{details}");
        }
        Ok(())
    }
}

pub fn validate_graph(graph: &Graph) -> Result<()> {
    let value = serde_json::to_value(graph).context("serializing graph")?;
    GraphContract::load()?.validate(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::graph::build_graph;
    use serde_json::json;

    #[test]
    fn built_graphs_satisfy_contract() {
        let catalog = Catalog::from_value(&json!({
            "domains": [{"id": "sales"}],
            "capabilities": [
                {"id": "lead-capture", "domain": "sales"},
                {"id": "billing", "domain": "finance"}
            ]
        }));
        validate_graph(&build_graph(&catalog)).expect("graph matches schema");
        validate_graph(&Graph::default()).expect("empty graph matches schema");
    }

    #[test]
    fn rejects_unknown_node_type() {
        let contract = GraphContract::load().unwrap();
        let bad = json!({
            "nodes": [{
                "id": "x",
                "type": "service",
                "position": {"x": 0, "y": 0},
                "data": {"label": "x"}
            }],
            "edges": []
        });
        let err = contract.validate(&bad).expect_err("unknown type should fail");
        assert!(err.to_string().contains("contract validation"));
    }

    #[test]
    fn rejects_missing_edges() {
        let contract = GraphContract::load().unwrap();
        assert!(contract.validate(&json!({"nodes": []})).is_err());
    }
}
