//! Opt-in data-quality checks for catalog documents.
//!
//! The graph builder tolerates bad references silently; this pass reports
//! them so tooling can warn about dangling edges or colliding node ids before
//! a renderer draws an incomplete graph. Findings are collected rather than
//! short-circuited so one run surfaces every issue.

use crate::catalog::{CapabilityId, Catalog, DomainId};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogFinding {
    /// Capability names an owner that is not in `domains`.
    DanglingDomainReference {
        capability: CapabilityId,
        domain: DomainId,
    },
    /// Capability has no usable `domain` field at all.
    MissingDomainReference { capability: CapabilityId },
    /// Same id used twice across domains and capabilities.
    DuplicateNodeId { id: String },
}

impl fmt::Display for CatalogFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFinding::DanglingDomainReference { capability, domain } => write!(
                f,
                "capability '{capability}' references unknown domain '{domain}'"
            ),
            CatalogFinding::MissingDomainReference { capability } => {
                write!(f, "capability '{capability}' is missing a domain")
            }
            CatalogFinding::DuplicateNodeId { id } => write!(f, "duplicate node id '{id}'"),
        }
    }
}

pub fn audit_catalog(catalog: &Catalog) -> Vec<CatalogFinding> {
    let mut findings = Vec::new();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut reported: BTreeSet<&str> = BTreeSet::new();
    let node_ids = catalog
        .domains
        .iter()
        .map(|domain| domain.id.as_str())
        .chain(catalog.capabilities.iter().map(|cap| cap.id.as_str()));
    for id in node_ids {
        // Report each collision once even if the id repeats many times.
        if !seen.insert(id) && reported.insert(id) {
            findings.push(CatalogFinding::DuplicateNodeId { id: id.to_string() });
        }
    }

    let domain_ids: BTreeSet<&DomainId> = catalog.domains.iter().map(|d| &d.id).collect();
    for cap in &catalog.capabilities {
        match &cap.domain {
            Some(domain) if !domain_ids.contains(domain) => {
                findings.push(CatalogFinding::DanglingDomainReference {
                    capability: cap.id.clone(),
                    domain: domain.clone(),
                });
            }
            Some(_) => {}
            None => findings.push(CatalogFinding::MissingDomainReference {
                capability: cap.id.clone(),
            }),
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Capability, Domain};
    use serde_json::json;

    #[test]
    fn clean_catalog_has_no_findings() {
        let catalog = Catalog {
            domains: vec![Domain::new("sales")],
            capabilities: vec![Capability::new("lead-capture", "sales")],
        };
        assert!(audit_catalog(&catalog).is_empty());
    }

    #[test]
    fn reports_dangling_and_missing_domains() {
        let catalog = Catalog::from_value(&json!({
            "domains": [{"id": "sales"}],
            "capabilities": [
                {"id": "billing", "domain": "finance"},
                {"id": "floating"}
            ]
        }));
        let findings = audit_catalog(&catalog);
        assert_eq!(
            findings,
            vec![
                CatalogFinding::DanglingDomainReference {
                    capability: CapabilityId::from("billing"),
                    domain: DomainId::from("finance"),
                },
                CatalogFinding::MissingDomainReference {
                    capability: CapabilityId::from("floating"),
                },
            ]
        );
        assert_eq!(
            findings[0].to_string(),
            "capability 'billing' references unknown domain 'finance'"
        );
    }

    #[test]
    fn duplicate_ids_across_kinds_reported_once() {
        let catalog = Catalog {
            domains: vec![Domain::new("sales"), Domain::new("sales")],
            capabilities: vec![Capability::new("sales", "sales")],
        };
        let findings = audit_catalog(&catalog);
        assert_eq!(
            findings,
            vec![CatalogFinding::DuplicateNodeId {
                id: "sales".to_string()
            }]
        );
    }

    #[test]
    fn findings_serialize_with_kind_tag() {
        let finding = CatalogFinding::MissingDomainReference {
            capability: CapabilityId::from("floating"),
        };
        assert_eq!(
            serde_json::to_value(&finding).unwrap(),
            json!({"kind": "missing_domain_reference", "capability": "floating"})
        );
    }
}
