use std::io::Write;
use std::sync::Arc;

use shop_catalog::domain::catalog::FilterCatalog;
use shop_catalog::domain::price::CustomPriceRange;
use shop_catalog::domain::types::PageNumber;
use shop_catalog::repository::errors::RepositoryError;
use shop_catalog::repository::{InMemoryCatalog, ProductQuery, ProductReader};

mod common;

fn write_products(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_products_from_json_file() {
    let file = write_products(
        r#"[
            {"id": 1, "name": "Acme Book", "price": 150, "options": ["brand.acme", "os.linux"]},
            {"id": 2, "name": "Dell XPS", "price": 1200, "rating": 4.5, "options": ["brand.dell"]}
        ]"#,
    );

    let catalog =
        InMemoryCatalog::from_json_file(file.path(), Arc::new(FilterCatalog::default())).unwrap();

    assert_eq!(catalog.len(), 2);
    let page = catalog
        .get_results(&ProductQuery::new(PageNumber::FIRST, 24))
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].rating, 0.0);
    assert_eq!(page.items[1].rating, 4.5);
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    let result = InMemoryCatalog::from_json_file(
        dir.path().join("missing.json"),
        Arc::new(FilterCatalog::default()),
    );

    assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
}

#[test]
fn test_invalid_json_is_malformed() {
    let file = write_products("{not json");

    let result = InMemoryCatalog::from_json_file(file.path(), Arc::new(FilterCatalog::default()));

    assert!(matches!(result, Err(RepositoryError::Malformed(_))));
}

#[test]
fn test_filters_combine_across_categories() {
    let catalog = InMemoryCatalog::new(
        vec![
            common::product(1, 150, &["brand.acme", "os.linux", "ram.8gb"]),
            common::product(2, 450, &["brand.acme", "os.windows", "ram.16gb"]),
            common::product(3, 480, &["brand.dell", "os.linux", "ram.16gb"]),
            common::product(4, 1500, &["brand.apple", "os.macos", "ram.16gb"]),
        ],
        Arc::new(FilterCatalog::default()),
    );
    let filters = ["brand.acme", "brand.dell", "ram.16gb", "price.200to500"]
        .iter()
        .map(|key| key.to_string())
        .collect();

    let page = catalog
        .get_results(&ProductQuery::new(PageNumber::FIRST, 24).filters(filters))
        .unwrap();

    let ids: Vec<u32> = page.items.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let narrowed = catalog
        .get_results(
            &ProductQuery::new(PageNumber::FIRST, 24)
                .custom_price(Some(CustomPriceRange::new(460, 2000))),
        )
        .unwrap();
    let ids: Vec<u32> = narrowed.items.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![3, 4]);
}
