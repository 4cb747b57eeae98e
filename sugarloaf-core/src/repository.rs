use std::collections::HashSet;
use sugarloaf_catalog::{Category, CategoryFilter, CatalogQuery, Product, QueryOutcome};
use crate::{CoreError, CoreResult};

/// Read-only access to the product catalog.
///
/// Implementations are built once and never mutated, so every method borrows.
pub trait CatalogRepository: Send + Sync {
    /// All products in declaration order.
    fn list_products(&self) -> &[Product];

    /// Exact-id lookup. `None` when no product carries `id`.
    fn get_product(&self, id: &str) -> Option<&Product>;

    /// Browsable categories, starting with the `all` sentinel.
    fn list_categories(&self) -> &[Category];

    fn category_name(&self, filter: &CategoryFilter) -> &str {
        filter.display_name(self.list_categories())
    }

    fn query(&self, query: &CatalogQuery) -> QueryOutcome<'_> {
        query.run(self.list_products())
    }
}

/// Check catalog invariants: every product valid, ids unique.
pub fn validate_catalog(products: &[Product]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        product.validate()?;
        if !seen.insert(product.id.as_str()) {
            return Err(CoreError::DuplicateProduct(product.id.clone()));
        }
    }
    Ok(())
}

/// Check that `categories` starts with the `all` sentinel and has unique ids.
pub fn validate_categories(categories: &[Category]) -> CoreResult<()> {
    match categories.first() {
        Some(first) if first.is_sentinel() => {}
        _ => {
            return Err(CoreError::ValidationError(
                "category list must start with the \"all\" sentinel".to_string(),
            ))
        }
    }
    let mut seen = HashSet::with_capacity(categories.len());
    for category in categories {
        if !seen.insert(category.id.as_str()) {
            return Err(CoreError::ValidationError(format!(
                "duplicate category id: {}",
                category.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugarloaf_catalog::{Money, ProductCategory};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Treat {}", id),
            description: String::new(),
            price: Money::from_cents(100),
            image: String::new(),
            category: ProductCategory::Candies,
            rating: 4.0,
            in_stock: true,
            ingredients: None,
            customizations: None,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(validate_catalog(&[product("1"), product("2")]).is_ok());
        assert!(matches!(
            validate_catalog(&[product("1"), product("1")]),
            Err(CoreError::DuplicateProduct(id)) if id == "1"
        ));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut bad = product("1");
        bad.rating = -1.0;
        assert!(matches!(validate_catalog(&[bad]), Err(CoreError::InvalidProduct(_))));
    }

    #[test]
    fn test_categories_need_sentinel_first() {
        let cakes = Category::new("cakes", "Cakes", "🎂");
        assert!(validate_categories(&[Category::all_sentinel(), cakes.clone()]).is_ok());
        assert!(validate_categories(&[cakes.clone(), Category::all_sentinel()]).is_err());
        assert!(validate_categories(&[]).is_err());
        assert!(validate_categories(&[Category::all_sentinel(), cakes.clone(), cakes]).is_err());
    }
}
