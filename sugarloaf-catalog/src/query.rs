//! Catalog query engine: free-text search, category filter and sort over a
//! read-only product slice.
//!
//! Queries are pure. The caller's slice is never reordered; results borrow
//! from it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use crate::category::{Category, CategoryFilter};
use crate::product::Product;

/// Result ordering selected by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
    /// Unrecognized key: filtered order is kept as-is.
    Unsorted,
}

impl SortKey {
    /// Keys offered in the sort menu, in menu order.
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => SortKey::Name,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Unsorted => "unsorted",
        }
    }

    /// Menu label. Unsorted falls back to the default key's label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name | SortKey::Unsorted => "Name A-Z",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive primary order; lowercase sorts before uppercase on ties.
///
/// Accents are not folded: lowercased code points are compared, so
/// "Éclair" sorts after "Zest" rather than among the e's.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| b.cmp(a))
}

/// Search, filter and sort criteria for one listing render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn new(search_term: impl Into<String>, category: impl Into<CategoryFilter>, sort: impl Into<SortKey>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
            sort: sort.into(),
        }
    }

    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.category.matches(product)
    }

    /// Run the query over `catalog`, preserving declaration order among ties.
    pub fn run<'a>(&self, catalog: &'a [Product]) -> QueryOutcome<'a> {
        let mut products: Vec<&'a Product> = catalog
            .iter()
            .filter(|p| self.matches_search(p))
            .filter(|p| self.category.matches(p))
            .collect();

        // sort_by is stable
        products.sort_by(|a, b| self.sort.compare(a, b));

        tracing::debug!(
            search = %self.search_term,
            category = %self.category,
            sort = %self.sort,
            showing = products.len(),
            total = catalog.len(),
            "catalog query"
        );

        QueryOutcome {
            products,
            total: catalog.len(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_all()
    }

    /// Badges describing the non-default criteria, category first.
    pub fn active_filters(&self, categories: &[Category]) -> Vec<ActiveFilter> {
        let mut filters = Vec::new();
        if !self.category.is_all() {
            filters.push(ActiveFilter::Category {
                id: self.category.id().to_string(),
                name: self.category.display_name(categories).to_string(),
            });
        }
        if !self.search_term.is_empty() {
            filters.push(ActiveFilter::Search {
                term: self.search_term.clone(),
            });
        }
        filters
    }
}

/// Ordered matches plus the counts shown above the grid.
#[derive(Debug, Clone)]
pub struct QueryOutcome<'a> {
    pub products: Vec<&'a Product>,
    pub total: usize,
}

impl<'a> QueryOutcome<'a> {
    pub fn showing(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }

    /// "Showing X of Y products"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.showing(), self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActiveFilter {
    Category { id: String, name: String },
    Search { term: String },
}

impl ActiveFilter {
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Category { name, .. } => name.clone(),
            ActiveFilter::Search { term } => format!("Search: \"{}\"", term),
        }
    }
}
