use std::collections::HashMap;
use tracing::{debug, warn};
use sugarloaf_catalog::{Category, Product};
use sugarloaf_core::repository::{validate_catalog, validate_categories, CatalogRepository};
use crate::app_config::CatalogConfig;
use crate::seed::CatalogSeed;
use crate::StoreError;

/// Immutable in-memory catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl InMemoryCatalogRepository {
    pub fn new(products: Vec<Product>, mut categories: Vec<Category>) -> Result<Self, StoreError> {
        validate_catalog(&products)?;

        if !categories.first().is_some_and(Category::is_sentinel) {
            warn!("category list has no leading \"all\" entry, prepending one");
            categories.retain(|c| !c.is_sentinel());
            categories.insert(0, Category::all_sentinel());
        }
        validate_categories(&categories)?;

        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();

        debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            by_id,
        })
    }

    pub fn from_seed(seed: CatalogSeed) -> Result<Self, StoreError> {
        Self::new(seed.products, seed.categories)
    }

    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_seed(CatalogSeed::builtin()?)
    }

    /// External seed file when configured, otherwise the built-in catalog.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, StoreError> {
        match &config.seed_path {
            Some(path) => {
                debug!(path = %path, "loading catalog seed file");
                Self::from_seed(CatalogSeed::from_file(path)?)
            }
            None => Self::builtin(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn list_products(&self) -> &[Product] {
        &self.products
    }

    fn get_product(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    fn list_categories(&self) -> &[Category] {
        &self.categories
    }
}
