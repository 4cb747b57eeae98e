pub mod money;
pub mod product;
pub mod category;
pub mod query;
pub mod pricing;

pub use money::Money;
pub use product::{Customizations, Product, ProductCategory, ProductError};
pub use category::{Category, CategoryFilter, ALL_CATEGORIES_ID, ALL_CATEGORIES_NAME};
pub use query::{ActiveFilter, CatalogQuery, QueryOutcome, SortKey};
pub use pricing::{LineTotal, PricingConfig, PricingEngine, PricingError, Quantity, ToppingSelection};
