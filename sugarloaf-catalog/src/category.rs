use serde::{Deserialize, Serialize};
use std::fmt;
use crate::product::{Product, ProductCategory};

/// Id of the sentinel entry meaning "no category constraint".
pub const ALL_CATEGORIES_ID: &str = "all";

/// Display label used when a filter does not resolve to a listed category.
pub const ALL_CATEGORIES_NAME: &str = "All Products";

/// A browsable category entry, including the `all` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn all_sentinel() -> Self {
        Self::new(ALL_CATEGORIES_ID, ALL_CATEGORIES_NAME, "🍯")
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == ALL_CATEGORIES_ID
    }
}

/// Category constraint applied by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(ProductCategory),
    /// An id no product can carry; matches nothing.
    Unknown(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES_ID {
            return CategoryFilter::All;
        }
        match raw.parse::<ProductCategory>() {
            Ok(category) => CategoryFilter::Exact(category),
            Err(_) => CategoryFilter::Unknown(raw.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_ID,
            CategoryFilter::Exact(category) => category.as_str(),
            CategoryFilter::Unknown(raw) => raw,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(category) => product.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    /// Display label from `categories`, falling back to "All Products".
    pub fn display_name<'a>(&self, categories: &'a [Category]) -> &'a str {
        categories
            .iter()
            .find(|c| c.id == self.id())
            .map(|c| c.name.as_str())
            .unwrap_or(ALL_CATEGORIES_NAME)
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("cakes"),
            CategoryFilter::Exact(ProductCategory::Cakes)
        );
        assert_eq!(
            CategoryFilter::parse("Cakes"),
            CategoryFilter::Unknown("Cakes".to_string())
        );
    }

    #[test]
    fn test_display_name_falls_back() {
        let categories = vec![
            Category::all_sentinel(),
            Category::new("cakes", "Cakes", "🎂"),
        ];
        assert_eq!(CategoryFilter::parse("cakes").display_name(&categories), "Cakes");
        assert_eq!(CategoryFilter::parse("cookies").display_name(&categories), "All Products");
        assert_eq!(CategoryFilter::parse("pies").display_name(&categories), "All Products");
    }
}
