//! Serialized bundles of domain list assets
//!
//! The packaging layer ships domain lists inside opaque bundles; this
//! module covers the data side of that contract: a JSON-serialized set of
//! named [`DomainList`] assets, and lookup of the first (or a named)
//! asset. File and asset-bundle I/O stays with the surrounding layer,
//! which hands fully materialized text in and out.

use serde::{Deserialize, Serialize};

use super::list::DomainList;
use crate::error::{DomainCryptError, Result};

/// An ordered set of named [`DomainList`] assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bundle {
    assets: Vec<DomainList>,
}

impl Bundle {
    /// Build a bundle from already-constructed assets.
    pub fn new(assets: Vec<DomainList>) -> Self {
        Self { assets }
    }

    /// Parse a bundle from its JSON form. Malformed input is a format
    /// error, matching a bundle blob that is not a domain list container.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the bundle to JSON for the packaging layer to store.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// All assets, in bundle order.
    pub fn assets(&self) -> &[DomainList] {
        &self.assets
    }

    /// Find a domain list asset.
    ///
    /// With `name` given, returns the first asset with that exact name;
    /// with `None`, the first asset in the bundle. Fails with a not-found
    /// error when no asset matches.
    pub fn find(&self, name: Option<&str>) -> Result<&DomainList> {
        let found = match name {
            Some(wanted) => self.assets.iter().find(|list| list.name() == wanted),
            None => self.assets.first(),
        };
        found.ok_or_else(|| match name {
            Some(wanted) => DomainCryptError::NotFound(format!(
                "no domain list named {:?} in bundle",
                wanted
            )),
            None => DomainCryptError::NotFound("bundle contains no domain lists".to_string()),
        })
    }
}
