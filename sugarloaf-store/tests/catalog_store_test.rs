use std::fs;
use sugarloaf_core::repository::CatalogRepository;
use sugarloaf_store::app_config::CatalogConfig;
use sugarloaf_store::{InMemoryCatalogRepository, StoreError};

fn write_seed(name: &str, json: &str) -> String {
    let path = std::env::temp_dir().join(format!("sugarloaf-{}-{}.json", name, std::process::id()));
    fs::write(&path, json).expect("Failed to write seed");
    path.display().to_string()
}

#[test]
fn test_builtin_catalog_store() {
    let repo = InMemoryCatalogRepository::from_config(&CatalogConfig::default()).unwrap();

    assert_eq!(repo.list_products().len(), 8);
    assert_eq!(repo.get_product("2").unwrap().name, "Rainbow Velvet Cake");
    assert!(repo.get_product("42").is_none());

    let names: Vec<&str> = repo.list_categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["All Products", "Ice Cream", "Cakes", "Candies", "Cookies"]);
}

#[test]
fn test_seed_file_replaces_builtin() {
    let path = write_seed(
        "custom",
        r#"{
            "products": [
                {
                    "id": "fudge-1",
                    "name": "Sea Salt Fudge",
                    "description": "Dense and buttery",
                    "price": 650,
                    "category": "candies",
                    "rating": 4.2,
                    "inStock": true
                }
            ]
        }"#,
    );
    let config = CatalogConfig { seed_path: Some(path.clone()) };
    let repo = InMemoryCatalogRepository::from_config(&config).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(repo.list_products().len(), 1);
    assert_eq!(repo.get_product("fudge-1").unwrap().name, "Sea Salt Fudge");
    // no categories in the file: only the sentinel remains
    assert_eq!(repo.list_categories().len(), 1);
    assert!(repo.list_categories()[0].is_sentinel());
}

#[test]
fn test_seed_file_with_bad_rating_is_rejected() {
    let path = write_seed(
        "bad-rating",
        r#"{
            "products": [
                {
                    "id": "x",
                    "name": "Overrated Tart",
                    "description": "",
                    "price": 100,
                    "category": "cakes",
                    "rating": 7.5,
                    "inStock": true
                }
            ]
        }"#,
    );
    let config = CatalogConfig { seed_path: Some(path.clone()) };
    let result = InMemoryCatalogRepository::from_config(&config);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(StoreError::Catalog(_))));
}

#[test]
fn test_category_name_lookup() {
    let repo = InMemoryCatalogRepository::builtin().unwrap();
    assert_eq!(repo.category_name(&"cookies".into()), "Cookies");
    assert_eq!(repo.category_name(&"all".into()), "All Products");
    assert_eq!(repo.category_name(&"pies".into()), "All Products");
}

#[test]
fn test_bootstrap_without_config_files_uses_builtin_catalog() {
    // integration tests run from the crate directory, which has no config/
    let (config, repo) = sugarloaf_store::bootstrap().unwrap();
    assert_eq!(config.storefront.featured_count, 4);
    assert_eq!(config.pricing.topping_surcharge_cents, 50);
    assert_eq!(repo.list_products().len(), 8);
}
