//! Shared library for the architecture portal tooling.
//!
//! The crate turns the published product catalog into the node/edge graph the
//! portal's visualization widget renders. The transform is pure and fail-soft:
//! partial or malformed upstream JSON yields a smaller graph, never an error.
//! Around it sit the aggregate portal document loader, an opt-in catalog
//! audit, the graph's JSON Schema contract, and the configuration and logging
//! used by the helper binaries.

use serde_json::Value;

pub mod audit;
pub mod catalog;
pub mod config;
pub mod contract;
pub mod graph;
pub mod logging;
pub mod portal;

pub use audit::{CatalogFinding, audit_catalog};
pub use catalog::{
    Capability, CapabilityId, Catalog, Domain, DomainId, catalog_from_document,
    load_catalog_from_path,
};
pub use contract::{GraphContract, validate_graph};
pub use graph::{Edge, Graph, Node, NodeData, NodeKind, Position, build_graph};
pub use portal::{PortalDocument, PortalSection, load_portal_dir};

/// Build a graph straight from a bare catalog or an aggregate document.
pub fn graph_from_document(value: &Value) -> Graph {
    build_graph(&catalog_from_document(value))
}
