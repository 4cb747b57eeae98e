pub mod search;
pub mod repository;

use sugarloaf_catalog::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),
    #[error(transparent)]
    InvalidProduct(#[from] ProductError),
}

pub type CoreResult<T> = Result<T, CoreError>;
