use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::money::Money;

/// Product categories in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    IceCream,
    Cakes,
    Candies,
    Cookies,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::IceCream,
        ProductCategory::Cakes,
        ProductCategory::Candies,
        ProductCategory::Cookies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::IceCream => "ice-cream",
            ProductCategory::Cakes => "cakes",
            ProductCategory::Candies => "candies",
            ProductCategory::Cookies => "cookies",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

/// Optional customization facets. An absent facet means the product does not offer it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customizations {
    #[serde(default)]
    pub sugar_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toppings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

impl Customizations {
    pub fn offers_topping(&self, topping: &str) -> bool {
        self.toppings
            .as_deref()
            .is_some_and(|toppings| toppings.iter().any(|t| t == topping))
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes
            .as_deref()
            .is_some_and(|sizes| sizes.iter().any(|s| s == size))
    }
}

/// Core product structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub image: String,
    pub category: ProductCategory,
    pub rating: f32,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,
}

impl Product {
    pub const MAX_RATING: f32 = 5.0;

    /// Check the record invariants the store relies on.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::Invalid("product id is empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::Invalid(format!("product {} has no name", self.id)));
        }
        if !(0.0..=Self::MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    pub fn toppings(&self) -> &[String] {
        self.customizations
            .as_ref()
            .and_then(|c| c.toppings.as_deref())
            .unwrap_or(&[])
    }

    pub fn sizes(&self) -> &[String] {
        self.customizations
            .as_ref()
            .and_then(|c| c.sizes.as_deref())
            .unwrap_or(&[])
    }

    pub fn offers_sugar_level(&self) -> bool {
        self.customizations.as_ref().is_some_and(|c| c.sugar_level)
    }

    pub fn offers_topping(&self, topping: &str) -> bool {
        self.customizations
            .as_ref()
            .is_some_and(|c| c.offers_topping(topping))
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.customizations.as_ref().is_some_and(|c| c.offers_size(size))
    }
}

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Rating {rating} out of range for product {id}")]
    RatingOutOfRange {
        id: String,
        rating: f32,
    },

    #[error("Invalid product: {0}")]
    Invalid(String),
}
