//! Categories: owned, ordered product collections with shared counters.

use std::cell::Cell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use lavka_core::CategoryId;

use crate::product::ProductHandle;

/// Process-wide aggregate counters.
///
/// Created once by the process entry point and shared (`Rc`) with every
/// [`Category`]. The values only grow during normal operation; [`reset`]
/// is an explicit administrative operation and the single exception.
///
/// [`reset`]: CatalogCounters::reset
#[derive(Debug, Default)]
pub struct CatalogCounters {
    category_count: Cell<u64>,
    product_count: Cell<u64>,
}

impl CatalogCounters {
    /// Fresh zeroed counters, ready to share.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of categories constructed so far.
    pub fn category_count(&self) -> u64 {
        self.category_count.get()
    }

    /// Cumulative number of products added across all categories.
    pub fn product_count(&self) -> u64 {
        self.product_count.get()
    }

    /// Administrative reset back to zero.
    pub fn reset(&self) {
        self.category_count.set(0);
        self.product_count.set(0);
    }

    fn record_category(&self, products: u64) {
        self.category_count.set(self.category_count.get() + 1);
        self.product_count.set(self.product_count.get() + products);
    }

    fn record_product(&self) {
        self.product_count.set(self.product_count.get() + 1);
    }
}

/// Named grouping of products with aggregate metadata.
///
/// The category owns its membership: products may be aliased elsewhere, but
/// only the category adds to or reorders the sequence. Insertion order is
/// preserved.
#[derive(Debug)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    products: Vec<ProductHandle>,
    counters: Rc<CatalogCounters>,
}

impl Category {
    /// Create a category over `products`, bumping the shared counters by one
    /// category and `products.len()` products.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<ProductHandle>,
        counters: Rc<CatalogCounters>,
    ) -> Self {
        counters.record_category(products.len() as u64);
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            products,
            counters,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a product to the membership.
    pub fn add_product(&mut self, product: ProductHandle) {
        self.products.push(product);
        self.counters.record_product();
    }

    /// Number of distinct products in the category.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Newline-joined render of every contained product.
    pub fn products_overview(&self) -> String {
        self.products
            .iter()
            .map(|p| p.borrow().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sum of the stock quantities of the contained products.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| p.borrow().quantity()).sum()
    }

    /// Arithmetic mean of the contained unit prices, `0.0` for an empty
    /// category.
    pub fn middle_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.products.iter().map(|p| p.borrow().price()).sum();
        sum / self.products.len() as f64
    }

    /// Fresh, independent cursor over the contained products in insertion
    /// order. Every call restarts from the beginning.
    pub fn iter(&self) -> ProductIter<'_> {
        ProductIter {
            products: &self.products,
            position: 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}

/// Forward cursor over a category's products.
///
/// One-shot: once exhausted it keeps yielding `None`. Ask [`Category::iter`]
/// for a new cursor to start over.
#[derive(Debug, Clone)]
pub struct ProductIter<'a> {
    products: &'a [ProductHandle],
    position: usize,
}

impl Iterator for ProductIter<'_> {
    type Item = ProductHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.products.get(self.position)?;
        self.position += 1;
        Some(Rc::clone(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.products.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductIter<'_> {}

impl FusedIterator for ProductIter<'_> {}

impl<'a> IntoIterator for &'a Category {
    type Item = ProductHandle;
    type IntoIter = ProductIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
