//! Catalog document loading.
//!
//! Parses the JSON catalog document and assembles categories and products
//! through the public domain constructors. This is the one place in the
//! workspace that touches the filesystem.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use lavka_catalog::{CatalogCounters, Category, Product, ProductRecord};
use lavka_core::DomainError;

/// One category record of the catalog document. No other fields are read.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub description: String,
    pub products: Vec<ProductRecord>,
}

/// Loader failure: IO, malformed document, or a domain validation error.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read catalog document")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog document")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse a catalog document and build its categories.
///
/// All-or-nothing: any invalid record aborts the whole load.
pub fn load_catalog_from_str(
    json: &str,
    counters: &Rc<CatalogCounters>,
) -> Result<Vec<Category>, LoaderError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;

    let mut categories = Vec::with_capacity(records.len());
    for record in records {
        let mut products = Vec::with_capacity(record.products.len());
        for product in record.products {
            products.push(
                Product::new(
                    product.name,
                    product.description,
                    product.price,
                    product.quantity,
                )?
                .into_shared(),
            );
        }
        tracing::debug!(
            category = %record.name,
            products = products.len(),
            "assembled category"
        );
        categories.push(Category::new(
            record.name,
            record.description,
            products,
            Rc::clone(counters),
        ));
    }
    Ok(categories)
}

/// Read and parse a catalog document from disk.
pub fn load_catalog_from_path(
    path: impl AsRef<Path>,
    counters: &Rc<CatalogCounters>,
) -> Result<Vec<Category>, LoaderError> {
    let json = fs::read_to_string(path)?;
    load_catalog_from_str(&json, counters)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "Электроника",
            "description": "Устройства",
            "products": [
                {"name": "Ноутбук", "description": "Игровой", "price": 99990.0, "quantity": 3},
                {"name": "Наушники", "description": "Беспроводные", "price": 5490.5, "quantity": 12}
            ]
        },
        {
            "name": "Книги",
            "description": "Печатные издания",
            "products": [
                {"name": "Книга", "description": "Роман", "price": 300.0, "quantity": 5}
            ]
        }
    ]"#;

    #[test]
    fn loads_categories_and_products_in_document_order() {
        let counters = CatalogCounters::new();
        let categories = load_catalog_from_str(SAMPLE, &counters).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name(), "Электроника");
        assert_eq!(categories[1].name(), "Книги");
        assert_eq!(categories[0].len(), 2);

        let first = categories[0].iter().next().unwrap();
        assert_eq!(first.borrow().name(), "Ноутбук");
        assert_eq!(first.borrow().price(), 99990.0);
        assert_eq!(first.borrow().quantity(), 3);
    }

    #[test]
    fn counters_reflect_the_loaded_document() {
        let counters = CatalogCounters::new();
        let _categories = load_catalog_from_str(SAMPLE, &counters).unwrap();

        assert_eq!(counters.category_count(), 2);
        assert_eq!(counters.product_count(), 3);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let counters = CatalogCounters::new();
        match load_catalog_from_str("[{\"name\": ", &counters).unwrap_err() {
            LoaderError::Parse(_) => {}
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn domain_validation_aborts_the_load() {
        let json = r#"[
            {
                "name": "Пустые",
                "description": "Нулевые остатки",
                "products": [
                    {"name": "Нулевой", "description": "Без остатков", "price": 10.0, "quantity": 0}
                ]
            }
        ]"#;
        let counters = CatalogCounters::new();
        match load_catalog_from_str(json, &counters).unwrap_err() {
            LoaderError::Domain(DomainError::Validation(_)) => {}
            other => panic!("Expected Domain validation error, got {other:?}"),
        }
        // Nothing was registered.
        assert_eq!(counters.category_count(), 0);
        assert_eq!(counters.product_count(), 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let counters = CatalogCounters::new();
        match load_catalog_from_path("no-such-catalog.json", &counters).unwrap_err() {
            LoaderError::Io(_) => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
