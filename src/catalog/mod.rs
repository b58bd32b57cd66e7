//! Product catalog wiring.
//!
//! This module wraps the published `catalog.json` artifact so the graph
//! builder and audit pass share one tolerant view of domains and capabilities.

pub mod identity;
pub mod model;

pub use identity::{CapabilityId, DomainId};
pub use model::{Capability, Catalog, Domain, catalog_from_document, load_catalog_from_path};
