//! Catalog domain module.
//!
//! Business rules for products and categories, implemented as a directly
//! mutated object graph (no IO, no HTTP, no storage). The graph is
//! single-threaded by construction: shared state lives behind `Rc`/`Cell`,
//! so nothing here is `Send`.

pub mod category;
pub mod pricing;
pub mod product;

pub use category::{CatalogCounters, Category, ProductIter};
pub use pricing::{format_price, ApproveAll, ConfirmationProvider, DenyAll};
pub use product::{Product, ProductDetails, ProductHandle, ProductKind, ProductRecord};
