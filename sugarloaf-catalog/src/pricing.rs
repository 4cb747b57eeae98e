use serde::{Deserialize, Serialize};
use std::fmt;
use crate::money::Money;
use crate::product::Product;

/// Purchase quantity, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);

    /// Build from any requested value, clamping to `[1, u32::MAX]`.
    pub fn new(requested: i64) -> Self {
        Self(requested.clamp(1, u32::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Step by `delta` (the detail page's -/+ buttons), clamping at one.
    pub fn adjust(self, delta: i64) -> Self {
        Self::new((self.0 as i64).saturating_add(delta))
    }

    pub fn can_decrement(self) -> bool {
        self.0 > 1
    }
}

impl From<i64> for Quantity {
    fn from(requested: i64) -> Self {
        Self::new(requested)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selected toppings, kept in selection order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ToppingSelection(Vec<String>);

impl ToppingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the topping if absent. Returns false when it was already selected.
    pub fn insert(&mut self, topping: impl Into<String>) -> bool {
        let topping = topping.into();
        if self.contains(&topping) {
            return false;
        }
        self.0.push(topping);
        true
    }

    /// Flip selection of `topping`. Returns whether it is now selected.
    pub fn toggle(&mut self, topping: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|t| t == topping) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(topping.to_string());
            true
        }
    }

    pub fn contains(&self, topping: &str) -> bool {
        self.0.iter().any(|t| t == topping)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ToppingSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = ToppingSelection::new();
        for topping in iter {
            selection.insert(topping);
        }
        selection
    }
}

impl From<Vec<String>> for ToppingSelection {
    fn from(toppings: Vec<String>) -> Self {
        toppings.into_iter().collect()
    }
}

impl From<ToppingSelection> for Vec<String> {
    fn from(selection: ToppingSelection) -> Self {
        selection.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat charge per selected topping (in cents)
    #[serde(default = "default_topping_surcharge_cents")]
    pub topping_surcharge_cents: u64,

    /// Reject toppings the product does not list
    #[serde(default)]
    pub reject_unknown_toppings: bool,
}

fn default_topping_surcharge_cents() -> u64 { 50 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            topping_surcharge_cents: default_topping_surcharge_cents(),
            reject_unknown_toppings: false,
        }
    }
}

/// Breakdown of one product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTotal {
    pub unit_price: Money,
    pub quantity: Quantity,
    pub topping_count: usize,
    pub surcharge: Money,
    pub total: Money,
}

impl fmt::Display for LineTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)
    }
}

/// Line total calculator
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn topping_surcharge(&self) -> Money {
        Money::from_cents(self.config.topping_surcharge_cents)
    }

    /// `price * quantity + toppings * surcharge`. Sizes and sugar level never affect price.
    pub fn line_total(
        &self,
        product: &Product,
        quantity: Quantity,
        toppings: &ToppingSelection,
    ) -> Result<LineTotal, PricingError> {
        if self.config.reject_unknown_toppings {
            if let Some(unknown) = toppings.iter().find(|t| !product.offers_topping(t)) {
                return Err(PricingError::UnknownTopping {
                    product_id: product.id.clone(),
                    topping: unknown.to_string(),
                });
            }
        }

        let surcharge = self.topping_surcharge() * toppings.len() as u64;
        let total = product.price * quantity.get() as u64 + surcharge;

        Ok(LineTotal {
            unit_price: product.price,
            quantity,
            topping_count: toppings.len(),
            surcharge,
            total,
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Topping {topping:?} is not offered for product {product_id}")]
    UnknownTopping {
        product_id: String,
        topping: String,
    },
}
