//! The electronics reference catalog.
//!
//! A catalog is loaded once from a static `{ "items": [...] }` document and is
//! immutable afterwards. Items have no identifier beyond their position.

pub mod loader;

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

pub use loader::{DATA_PATH, DataSource, load_catalog};

/// One entry of the electronics reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: ItemLinks,
}

/// External references of an item. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<String>,
}

/// Shape of the static data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub items: Vec<Item>,
}

/// Immutable snapshot of the loaded items, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Parse a catalog from the raw document text.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self::new(document.items))
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
