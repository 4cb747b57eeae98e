use serde::{Deserialize, Serialize};
use sugarloaf_catalog::{
    ActiveFilter, CatalogQuery, Category, CategoryFilter, Money, Product, ProductCategory,
    QueryOutcome, SortKey, ALL_CATEGORIES_ID,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSearchRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_category() -> String { ALL_CATEGORIES_ID.to_string() }
fn default_sort() -> String { SortKey::default().as_str().to_string() }

impl Default for CatalogSearchRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            sort: default_sort(),
        }
    }
}

impl CatalogSearchRequest {
    pub fn new(search: impl Into<String>, category: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
            sort: sort.into(),
        }
    }

    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            search_term: self.search.clone(),
            category: CategoryFilter::parse(&self.category),
            sort: SortKey::parse(&self.sort),
        }
    }
}

/// Card-level view of a product in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub price_display: String,
    pub image: String,
    pub category: ProductCategory,
    pub rating: f32,
    pub in_stock: bool,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            price_display: product.price.to_string(),
            image: product.image.clone(),
            category: product.category,
            rating: product.rating,
            in_stock: product.in_stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogSearchResult {
    pub products: Vec<ProductSummary>,
    pub showing: usize,
    pub total: usize,
    pub category_name: String,
    pub sort_label: String,
    pub active_filters: Vec<ActiveFilter>,
}

impl CatalogSearchResult {
    pub fn from_outcome(outcome: &QueryOutcome<'_>, query: &CatalogQuery, categories: &[Category]) -> Self {
        Self {
            products: outcome.products.iter().map(|p| ProductSummary::from(*p)).collect(),
            showing: outcome.showing(),
            total: outcome.total,
            category_name: query.category.display_name(categories).to_string(),
            sort_label: query.sort.label().to_string(),
            active_filters: query.active_filters(categories),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserialization() {
        let json = r#"
            {
                "search": "straw",
                "sort": "price-high"
            }
        "#;
        let request: CatalogSearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(request.category, "all");

        let query = request.to_query();
        assert_eq!(query.search_term, "straw");
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.sort, SortKey::PriceHigh);
    }

    #[test]
    fn test_empty_request_defaults() {
        let request: CatalogSearchRequest = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(request.to_query(), CatalogQuery::default());
    }

    #[test]
    fn test_result_serializes_filters() {
        let product = Product {
            id: "2".to_string(),
            name: "Rainbow Velvet Cake".to_string(),
            description: "Multi-layered rainbow cake".to_string(),
            price: Money::from_cents(2499),
            image: String::new(),
            category: ProductCategory::Cakes,
            rating: 4.9,
            in_stock: true,
            ingredients: None,
            customizations: None,
        };
        let catalog = vec![product];
        let categories = vec![Category::all_sentinel(), Category::new("cakes", "Cakes", "🎂")];
        let query = CatalogSearchRequest::new("", "cakes", "price-low").to_query();
        let outcome = query.run(&catalog);

        let result = CatalogSearchResult::from_outcome(&outcome, &query, &categories);
        assert_eq!(result.showing, 1);
        assert_eq!(result.category_name, "Cakes");
        assert_eq!(result.sort_label, "Price: Low to High");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["products"][0]["price_display"], "$24.99");
        assert_eq!(json["products"][0]["category"], "cakes");
        assert_eq!(json["active_filters"][0]["kind"], "category");
    }
}
