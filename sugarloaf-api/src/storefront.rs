use serde::Serialize;
use tracing::{debug, info};
use sugarloaf_catalog::{
    CategoryFilter, Category, LineTotal, PricingConfig, PricingEngine, Product, SortKey,
};
use sugarloaf_core::repository::CatalogRepository;
use sugarloaf_core::search::{CatalogSearchRequest, CatalogSearchResult, ProductSummary};
use sugarloaf_store::app_config::{Config, StorefrontConfig};
use sugarloaf_store::InMemoryCatalogRepository;
use crate::error::{StorefrontError, StorefrontResult};
use crate::selection::{ProductSelection, SugarLevel};

/// Everything the product detail page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub price_display: String,
    pub category_name: String,
    pub stock_label: &'static str,
    pub ingredients: Option<String>,
    pub topping_surcharge: String,
}

/// What "Add to Cart" records. Nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub size: Option<String>,
    pub sugar_level: Option<SugarLevel>,
    pub toppings: Vec<String>,
    pub line: LineTotal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Read-side facade the presentation layer calls into.
pub struct Storefront<R: CatalogRepository> {
    repository: R,
    pricing: PricingEngine,
    config: StorefrontConfig,
}

impl Storefront<InMemoryCatalogRepository> {
    pub fn from_config(config: &Config) -> StorefrontResult<Self> {
        let repository = InMemoryCatalogRepository::from_config(&config.catalog)?;
        Ok(Self::new(repository, config.pricing.clone(), config.storefront.clone()))
    }
}

impl<R: CatalogRepository> Storefront<R> {
    pub fn new(repository: R, pricing: PricingConfig, config: StorefrontConfig) -> Self {
        Self {
            repository,
            pricing: PricingEngine::new(pricing),
            config,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn categories(&self) -> &[Category] {
        self.repository.list_categories()
    }

    pub fn sort_options(&self) -> Vec<SortOption> {
        SortKey::OPTIONS
            .iter()
            .map(|key| SortOption {
                value: key.as_str(),
                label: key.label(),
            })
            .collect()
    }

    /// Landing page picks: the first products in catalog order.
    pub fn featured(&self) -> Vec<ProductSummary> {
        self.repository
            .list_products()
            .iter()
            .take(self.config.featured_count)
            .map(ProductSummary::from)
            .collect()
    }

    /// Listing page query. An empty sort falls back to the configured default.
    pub fn search(&self, request: &CatalogSearchRequest) -> CatalogSearchResult {
        let mut query = request.to_query();
        if request.sort.is_empty() {
            query.sort = SortKey::parse(&self.config.default_sort);
        }

        let outcome = self.repository.query(&query);
        debug!(
            search = %query.search_term,
            category = %query.category,
            "{}",
            outcome.summary()
        );
        CatalogSearchResult::from_outcome(&outcome, &query, self.categories())
    }

    pub fn product(&self, id: &str) -> StorefrontResult<&Product> {
        self.repository
            .get_product(id)
            .ok_or_else(|| StorefrontError::NotFound(id.to_string()))
    }

    pub fn product_detail(&self, id: &str) -> StorefrontResult<ProductDetailView> {
        let product = self.product(id)?;
        let category_name = self
            .repository
            .category_name(&CategoryFilter::Exact(product.category))
            .to_string();

        Ok(ProductDetailView {
            product: product.clone(),
            price_display: product.price.to_string(),
            category_name,
            stock_label: if product.in_stock { "In Stock" } else { "Out of Stock" },
            ingredients: product.ingredients.as_ref().map(|i| i.join(", ")),
            topping_surcharge: format!("+{} each", self.pricing.topping_surcharge()),
        })
    }

    pub fn start_selection(&self, id: &str) -> StorefrontResult<ProductSelection> {
        Ok(ProductSelection::for_product(self.product(id)?))
    }

    /// Current total for the detail page's "Add to Cart" button.
    pub fn quote(&self, selection: &ProductSelection) -> StorefrontResult<LineTotal> {
        let product = self.product(&selection.product_id)?;
        Ok(self.pricing.line_total(product, selection.quantity, &selection.toppings)?)
    }

    pub fn add_to_cart(&self, selection: &ProductSelection) -> StorefrontResult<CartLine> {
        let product = self.product(&selection.product_id)?;
        if !product.in_stock {
            return Err(StorefrontError::OutOfStock(product.name.clone()));
        }
        let line = self.pricing.line_total(product, selection.quantity, &selection.toppings)?;

        info!(
            product_id = %product.id,
            quantity = %line.quantity,
            total = %line.total,
            "Added to cart: {}",
            product.name
        );

        Ok(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            size: selection.size.clone(),
            sugar_level: selection.sugar_level,
            toppings: selection.toppings.iter().map(str::to_string).collect(),
            line,
        })
    }

    /// There is no cart behind the badge.
    pub fn cart_badge_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront<InMemoryCatalogRepository> {
        Storefront::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_featured_is_first_four() {
        let ids: Vec<String> = storefront().featured().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_sort_uses_configured_default() {
        let shop = Storefront::new(
            InMemoryCatalogRepository::builtin().unwrap(),
            PricingConfig::default(),
            StorefrontConfig {
                featured_count: 4,
                default_sort: "price-low".to_string(),
            },
        );
        let result = shop.search(&CatalogSearchRequest::new("", "all", ""));
        assert_eq!(result.products[0].name, "Cotton Candy Clouds");
        assert_eq!(result.sort_label, "Price: Low to High");
    }

    #[test]
    fn test_detail_view() {
        let view = storefront().product_detail("1").unwrap();
        assert_eq!(view.price_display, "$8.99");
        assert_eq!(view.category_name, "Ice Cream");
        assert_eq!(view.stock_label, "In Stock");
        assert_eq!(view.topping_surcharge, "+$0.50 each");
        assert_eq!(
            view.ingredients.as_deref(),
            Some("Fresh cream, Strawberries, Vanilla, Sugar, Mint")
        );
    }

    #[test]
    fn test_sort_options_in_menu_order() {
        let labels: Vec<&str> = storefront().sort_options().iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["Name A-Z", "Price: Low to High", "Price: High to Low", "Highest Rated"]
        );
    }

    #[test]
    fn test_cart_badge_is_always_zero() {
        let shop = storefront();
        let selection = shop.start_selection("3").unwrap();
        shop.add_to_cart(&selection).unwrap();
        assert_eq!(shop.cart_badge_count(), 0);
    }
}
