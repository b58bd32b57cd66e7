use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a top-level domain in the product catalog.
///
/// Domain ids double as graph node ids, so they share a namespace with
/// capability ids once the graph is built.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(pub String);

/// Stable identifier for an individual capability entry.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(pub String);

impl DomainId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CapabilityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DomainId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for CapabilityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_strings() {
        let domain = DomainId::from("sales");
        assert_eq!(serde_json::to_string(&domain).unwrap(), "\"sales\"");
        let parsed: DomainId = serde_json::from_str("\"sales\"").unwrap();
        assert_eq!(parsed, domain);

        let cap = CapabilityId::from("lead-capture");
        assert_eq!(serde_json::to_string(&cap).unwrap(), "\"lead-capture\"");
        assert_eq!(cap.to_string(), "lead-capture");
    }
}
