//! Demo entry point: load a catalog document and print it.

use std::env;

use anyhow::Context;

use lavka_catalog::{format_price, CatalogCounters};
use lavka_loader::load_catalog_from_path;

fn main() -> anyhow::Result<()> {
    lavka_observability::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "products.json".to_string());

    let counters = CatalogCounters::new();
    let categories = load_catalog_from_path(&path, &counters)
        .with_context(|| format!("failed to load catalog from {path}"))?;

    for category in &categories {
        println!();
        println!("Категория: {}", category.name());
        println!("Описание: {}", category.description());
        for product in category {
            let product = product.borrow();
            println!(
                "  - {} ({} руб., {} шт.)",
                product.name(),
                format_price(product.price()),
                product.quantity()
            );
        }
    }

    println!();
    println!("Общее количество категорий: {}", counters.category_count());
    println!("Общее количество товаров: {}", counters.product_count());

    Ok(())
}
