//! Catalog document types as published under `catalog.json`.
//!
//! Upstream data is not validated beyond optional-field access. Every field
//! the graph needs is modeled as an `Option` or a defaulted collection so that
//! partial documents degrade to a smaller catalog instead of failing to load.

use crate::catalog::identity::{CapabilityId, DomainId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Product catalog: domains plus the capabilities they own.
pub struct Catalog {
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level grouping entity; becomes one graph node.
pub struct Domain {
    pub id: DomainId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Leaf entity owned by one domain; becomes a node plus an edge to its domain.
pub struct Capability {
    pub id: CapabilityId,
    /// Owning domain. Not checked against `Catalog::domains`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Catalog {
    /// Build a catalog from arbitrary JSON without ever failing.
    ///
    /// Missing or non-array collections are empty. Entries that are not
    /// objects or lack a string `id` are skipped; a capability whose `domain`
    /// is not a string keeps its node but loses its owner.
    pub fn from_value(value: &Value) -> Self {
        Self {
            domains: entries(value, "domains")
                .filter_map(Domain::from_value)
                .collect(),
            capabilities: entries(value, "capabilities")
                .filter_map(Capability::from_value)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.capabilities.is_empty()
    }
}

impl Domain {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: DomainId(id.into()),
            name: None,
        }
    }

    fn from_value(entry: &Value) -> Option<Self> {
        Some(Self {
            id: DomainId(string_field(entry, "id")?),
            name: string_field(entry, "name"),
        })
    }
}

impl Capability {
    pub fn new(id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: CapabilityId(id.into()),
            domain: Some(DomainId(domain.into())),
            name: None,
        }
    }

    fn from_value(entry: &Value) -> Option<Self> {
        Some(Self {
            id: CapabilityId(string_field(entry, "id")?),
            domain: string_field(entry, "domain").map(DomainId),
            name: string_field(entry, "name"),
        })
    }
}

fn entries<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value.get(key).and_then(Value::as_array).into_iter().flatten()
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Pick the catalog out of either a bare catalog or an aggregate document.
///
/// Aggregates carry the catalog under `catalog` next to the other portal
/// sections; a document with its own `domains`/`capabilities` is taken as-is.
pub fn catalog_from_document(value: &Value) -> Catalog {
    let is_bare = value.get("domains").is_some() || value.get("capabilities").is_some();
    match value.get("catalog") {
        Some(nested) if !is_bare => Catalog::from_value(nested),
        _ => Catalog::from_value(value),
    }
}

/// Read a catalog (bare or aggregate) from disk.
///
/// Only unreadable files and invalid JSON are errors; the document shape is
/// handled by [`Catalog::from_value`].
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog_from_document(&value))
}
