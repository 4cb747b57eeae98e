use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use sugarloaf_catalog::{Product, Quantity, ToppingSelection};
use crate::error::{StorefrontError, StorefrontResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SugarLevel {
    Light,
    #[default]
    Regular,
    Extra,
}

impl SugarLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SugarLevel::Light => "light",
            SugarLevel::Regular => "regular",
            SugarLevel::Extra => "extra",
        }
    }
}

impl fmt::Display for SugarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SugarLevel {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(SugarLevel::Light),
            "regular" => Ok(SugarLevel::Regular),
            "extra" => Ok(SugarLevel::Extra),
            other => Err(StorefrontError::InvalidSelection(format!("unknown sugar level: {}", other))),
        }
    }
}

/// Choices made on a product detail page.
///
/// Size and sugar level are informational; only quantity and toppings feed the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSelection {
    pub product_id: String,
    pub quantity: Quantity,
    pub size: Option<String>,
    pub sugar_level: Option<SugarLevel>,
    pub toppings: ToppingSelection,
}

impl ProductSelection {
    /// Initial state: one unit, no size, regular sugar when the product offers it.
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            quantity: Quantity::MIN,
            size: None,
            sugar_level: product.offers_sugar_level().then_some(SugarLevel::Regular),
            toppings: ToppingSelection::new(),
        }
    }

    pub fn increment(&mut self) -> Quantity {
        self.adjust_quantity(1)
    }

    pub fn decrement(&mut self) -> Quantity {
        self.adjust_quantity(-1)
    }

    pub fn adjust_quantity(&mut self, delta: i64) -> Quantity {
        self.quantity = self.quantity.adjust(delta);
        self.quantity
    }

    pub fn set_quantity(&mut self, requested: i64) -> Quantity {
        self.quantity = Quantity::new(requested);
        self.quantity
    }

    /// Returns whether the topping is selected after the toggle.
    pub fn toggle_topping(&mut self, topping: &str) -> bool {
        self.toppings.toggle(topping)
    }

    pub fn select_size(&mut self, product: &Product, size: &str) -> StorefrontResult<()> {
        self.check_product(product)?;
        if !product.offers_size(size) {
            return Err(StorefrontError::InvalidSelection(format!(
                "size {:?} is not offered for {}",
                size, product.name
            )));
        }
        self.size = Some(size.to_string());
        Ok(())
    }

    pub fn set_sugar_level(&mut self, product: &Product, level: SugarLevel) -> StorefrontResult<()> {
        self.check_product(product)?;
        if !product.offers_sugar_level() {
            return Err(StorefrontError::InvalidSelection(format!(
                "{} has no sugar level choice",
                product.name
            )));
        }
        self.sugar_level = Some(level);
        Ok(())
    }

    fn check_product(&self, product: &Product) -> StorefrontResult<()> {
        if product.id != self.product_id {
            return Err(StorefrontError::InvalidSelection(format!(
                "selection is for product {}, not {}",
                self.product_id, product.id
            )));
        }
        Ok(())
    }
}
