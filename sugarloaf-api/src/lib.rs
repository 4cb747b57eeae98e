//! Storefront facade over the dessert catalog: listing, detail page,
//! selection state and the (non-persisting) add-to-cart action.

pub mod error;
pub mod selection;
pub mod storefront;

pub use error::{StorefrontError, StorefrontResult};
pub use selection::{ProductSelection, SugarLevel};
pub use storefront::{CartLine, ProductDetailView, SortOption, Storefront};
