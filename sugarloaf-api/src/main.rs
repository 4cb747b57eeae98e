use sugarloaf_api::Storefront;
use sugarloaf_core::search::CatalogSearchRequest;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (config, repository) = sugarloaf_store::bootstrap()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storefront = Storefront::new(repository, config.pricing.clone(), config.storefront.clone());
    tracing::info!(
        products = storefront.repository().len(),
        "Storefront ready"
    );

    // sugarloaf [search] [category] [sort]
    let mut args = std::env::args().skip(1);
    let request = CatalogSearchRequest::new(
        args.next().unwrap_or_default(),
        args.next().unwrap_or_else(|| "all".to_string()),
        args.next().unwrap_or_default(),
    );

    let result = storefront.search(&request);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
