//! Collection Records
//!
//! Entries of the orderable admin collections. Collection-specific fields
//! (a unit's short name, a storage type's capacity, ...) live in
//! `attributes` and are flattened into the JSON representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{DomainError, Entity};

/// Collections that support rearranging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    SimTypes,
    StorageTypes,
    Units,
    VendorCategories,
    FooterWidgets,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::SimTypes,
        CollectionKind::StorageTypes,
        CollectionKind::Units,
        CollectionKind::VendorCategories,
        CollectionKind::FooterWidgets,
    ];

    /// URL segment and stored discriminator
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::SimTypes => "sim-types",
            CollectionKind::StorageTypes => "storage-types",
            CollectionKind::Units => "units",
            CollectionKind::VendorCategories => "vendor-categories",
            CollectionKind::FooterWidgets => "footer-widgets",
        }
    }

    pub fn parse(slug: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == slug)
            .ok_or_else(|| DomainError::NotFound(format!("Unknown collection '{}'", slug)))
    }
}

/// One stored entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Zero-based rank within the collection
    pub position: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity for Record {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// Body of `POST /api/{collection}`
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecord {
    pub name: String,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

impl NewRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()));
        }
        // Reserved keys would clash with the flattened fields
        for key in ["_id", "name", "position", "isActive"] {
            if self.attributes.contains_key(key) {
                return Err(DomainError::InvalidInput(format!("'{}' cannot be set as an attribute", key)));
            }
        }
        Ok(())
    }
}
