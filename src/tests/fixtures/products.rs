// Product fixtures.
//
// catalog.json mirrors the storefront API: each record carries the product as
// served by `products/{id}` and the amount served by `stock/{id}`.

use crate::modules::cart::core::product::{Product, ProductId};
use serde::Deserialize;
use serde_json::json;

const CATALOG_JSON: &str = include_str!("json/catalog.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub product: Product,
    pub stock: u32,
}

pub fn load_catalog_records() -> Vec<CatalogRecord> {
    serde_json::from_str(CATALOG_JSON).unwrap()
}

pub fn make_product(id: u64) -> Product {
    make_product_with_title(id, &format!("Product {id}"))
}

pub fn make_product_with_title(id: u64, title: &str) -> Product {
    let fields = json!({
        "title": title,
        "price": 179.9,
        "image": format!("https://cdn.example.com/{id}.jpg"),
    });
    Product {
        id: ProductId(id),
        fields: serde_json::from_value(fields).unwrap(),
    }
}

#[cfg(test)]
mod cart_product_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_catalog_fixture() {
        let records = load_catalog_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].product.id, ProductId(1));
        assert_eq!(records[0].stock, 3);
    }
}
