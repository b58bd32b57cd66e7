//! Catalog to node/edge transform.
//!
//! The builder is pure: it reads the catalog, allocates a fresh graph, and
//! never looks at ambient state. It does not cross-check capability owners
//! against the domain list; a dangling owner still produces an edge whose
//! source names no node. Use [`crate::audit::audit_catalog`] to surface those.

use crate::catalog::Catalog;
use crate::graph::model::{Edge, Graph, Node, NodeKind};

/// Build the renderable graph for a catalog.
///
/// Output order is a contract: domain nodes in input order, then capability
/// nodes in input order, then one edge per owned capability in input order.
pub fn build_graph(catalog: &Catalog) -> Graph {
    let mut nodes = Vec::with_capacity(catalog.domains.len() + catalog.capabilities.len());
    nodes.extend(
        catalog
            .domains
            .iter()
            .map(|domain| Node::at_origin(domain.id.as_str(), NodeKind::Domain)),
    );
    nodes.extend(
        catalog
            .capabilities
            .iter()
            .map(|cap| Node::at_origin(cap.id.as_str(), NodeKind::Capability)),
    );

    // Capabilities without an owner have nothing to link to.
    let edges = catalog
        .capabilities
        .iter()
        .filter_map(|cap| {
            let domain = cap.domain.as_ref()?;
            Some(Edge {
                id: format!("{}-{}", cap.id, domain),
                source: domain.0.clone(),
                target: cap.id.0.clone(),
            })
        })
        .collect();

    Graph { nodes, edges }
}
