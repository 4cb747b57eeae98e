use sugarloaf_catalog::PricingError;
use sugarloaf_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl StorefrontError {
    /// Whether the presentation layer should render its "not found" state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::NotFound(_))
    }
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
