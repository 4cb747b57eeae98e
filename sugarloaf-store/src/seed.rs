use serde::Deserialize;
use std::fs;
use std::path::Path;
use sugarloaf_catalog::{Category, Product};
use crate::StoreError;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Reference data the catalog store is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSeed {
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CatalogSeed {
    /// The storefront's shipped catalog: eight desserts, five categories.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
