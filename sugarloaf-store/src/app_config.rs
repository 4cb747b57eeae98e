use serde::Deserialize;
use std::env;
use sugarloaf_catalog::PricingConfig;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON seed replacing the built-in catalog
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_featured_count() -> usize { 4 }
fn default_sort() -> String { "name".to_string() }

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
            default_sort: default_sort(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "sugarloaf_api=debug,sugarloaf_store=info,sugarloaf_catalog=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SUGARLOAF_PRICING__TOPPING_SURCHARGE_CENTS=75`
            .add_source(config::Environment::with_prefix("SUGARLOAF").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a TOML document on its own, without files or environment.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.catalog.seed_path.is_none());
        assert_eq!(config.pricing.topping_surcharge_cents, 50);
        assert!(!config.pricing.reject_unknown_toppings);
        assert_eq!(config.storefront.featured_count, 4);
        assert_eq!(config.storefront.default_sort, "name");
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = Config::from_toml(
            r#"
            [catalog]
            seed_path = "seed.json"

            [pricing]
            topping_surcharge_cents = 75
            reject_unknown_toppings = true

            [storefront]
            featured_count = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.seed_path.as_deref(), Some("seed.json"));
        assert_eq!(config.pricing.topping_surcharge_cents, 75);
        assert!(config.pricing.reject_unknown_toppings);
        assert_eq!(config.storefront.featured_count, 2);
        assert_eq!(config.storefront.default_sort, "name");
    }
}
