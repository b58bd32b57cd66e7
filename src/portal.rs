//! Aggregate portal document assembled from published JSON artifacts.
//!
//! The portal publishes six artifacts side by side. Only the catalog has a
//! shape this crate understands; the other sections are carried as opaque
//! JSON for whatever presentation layer consumes them. Loading is fail-soft
//! per section: a missing or broken artifact leaves that section absent and
//! is logged, it never fails the whole document.

use crate::catalog::{Catalog, catalog_from_document};
use anyhow::{Result, bail};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PortalSection {
    Catalog,
    Runtime,
    Roadmap,
    Ownership,
    Heatmap,
    Compiled,
}

impl PortalSection {
    pub const ALL: [PortalSection; 6] = [
        PortalSection::Catalog,
        PortalSection::Runtime,
        PortalSection::Roadmap,
        PortalSection::Ownership,
        PortalSection::Heatmap,
        PortalSection::Compiled,
    ];

    /// Key used for this section in the aggregate document.
    pub fn key(self) -> &'static str {
        match self {
            PortalSection::Catalog => "catalog",
            PortalSection::Runtime => "runtime",
            PortalSection::Roadmap => "roadmap",
            PortalSection::Ownership => "ownership",
            PortalSection::Heatmap => "heatmap",
            PortalSection::Compiled => "compiled",
        }
    }

    /// Artifact name on the static origin.
    pub fn file_name(self) -> &'static str {
        match self {
            PortalSection::Catalog => "catalog.json",
            PortalSection::Runtime => "runtime.json",
            PortalSection::Roadmap => "roadmap.json",
            PortalSection::Ownership => "ownership.json",
            PortalSection::Heatmap => "heatmap.json",
            PortalSection::Compiled => "compiled.json",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortalDocument {
    pub catalog: Option<Value>,
    pub runtime: Option<Value>,
    pub roadmap: Option<Value>,
    pub ownership: Option<Value>,
    pub heatmap: Option<Value>,
    pub compiled: Option<Value>,
}

impl PortalDocument {
    /// Read the aggregate `{catalog, runtime, ...}` form. `null` counts as absent.
    pub fn from_value(value: &Value) -> Self {
        let mut doc = Self::default();
        for section in PortalSection::ALL {
            let entry = value.get(section.key()).filter(|v| !v.is_null()).cloned();
            doc.set(section, entry);
        }
        doc
    }

    pub fn section(&self, section: PortalSection) -> Option<&Value> {
        match section {
            PortalSection::Catalog => self.catalog.as_ref(),
            PortalSection::Runtime => self.runtime.as_ref(),
            PortalSection::Roadmap => self.roadmap.as_ref(),
            PortalSection::Ownership => self.ownership.as_ref(),
            PortalSection::Heatmap => self.heatmap.as_ref(),
            PortalSection::Compiled => self.compiled.as_ref(),
        }
    }

    pub fn set(&mut self, section: PortalSection, value: Option<Value>) {
        let slot = match section {
            PortalSection::Catalog => &mut self.catalog,
            PortalSection::Runtime => &mut self.runtime,
            PortalSection::Roadmap => &mut self.roadmap,
            PortalSection::Ownership => &mut self.ownership,
            PortalSection::Heatmap => &mut self.heatmap,
            PortalSection::Compiled => &mut self.compiled,
        };
        *slot = value;
    }

    /// Sections that loaded, in fixed section order.
    pub fn present_sections(&self) -> Vec<PortalSection> {
        PortalSection::ALL
            .into_iter()
            .filter(|section| self.section(*section).is_some())
            .collect()
    }

    /// Typed catalog view; empty when the section is absent.
    pub fn catalog(&self) -> Catalog {
        self.catalog
            .as_ref()
            .map(catalog_from_document)
            .unwrap_or_default()
    }

    /// Back to the aggregate form, omitting absent sections.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for section in PortalSection::ALL {
            if let Some(value) = self.section(section) {
                map.insert(section.key().to_string(), value.clone());
            }
        }
        Value::Object(map)
    }
}

/// Load every published artifact found under `dir`.
///
/// Only a missing directory is an error.
pub fn load_portal_dir(dir: &Path) -> Result<PortalDocument> {
    if !dir.is_dir() {
        bail!("portal data directory not found: {}", dir.display());
    }

    let mut doc = PortalDocument::default();
    for section in PortalSection::ALL {
        let path = dir.join(section.file_name());
        if !path.is_file() {
            warn!(section = section.key(), path = %path.display(), "portal artifact missing");
            continue;
        }
        let parsed = fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|data| serde_json::from_str::<Value>(&data).map_err(|err| err.to_string()));
        match parsed {
            Ok(value) => {
                debug!(section = section.key(), path = %path.display(), "loaded portal artifact");
                doc.set(section, Some(value));
            }
            Err(error) => {
                warn!(section = section.key(), path = %path.display(), %error, "portal artifact unreadable");
            }
        }
    }
    Ok(doc)
}
