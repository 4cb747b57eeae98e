pub mod app_config;
pub mod catalog_repo;
pub mod seed;

pub use catalog_repo::InMemoryCatalogRepository;
pub use seed::CatalogSeed;

use sugarloaf_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read catalog seed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Load layered configuration and build the catalog it points at.
pub fn bootstrap() -> Result<(app_config::Config, InMemoryCatalogRepository), StoreError> {
    let config = app_config::Config::load()?;
    let repository = InMemoryCatalogRepository::from_config(&config.catalog)?;
    Ok((config, repository))
}
