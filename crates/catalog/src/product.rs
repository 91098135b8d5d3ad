use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use lavka_core::{DomainError, DomainResult, ProductId};

use crate::pricing::{format_price, ConfirmationProvider, DenyAll};

/// Concrete kind of a product; gates the combine operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Base,
    Smartphone,
    LawnGrass,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ProductKind::Base => "base",
            ProductKind::Smartphone => "smartphone",
            ProductKind::LawnGrass => "lawn_grass",
        };
        f.write_str(kind)
    }
}

/// Kind-specific descriptive fields.
///
/// A closed set: variants add data, never behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetails {
    Base,
    Smartphone {
        efficiency: f64,
        model: String,
        memory: u64,
        color: String,
    },
    LawnGrass {
        country: String,
        germination_period: String,
        color: String,
    },
}

impl ProductDetails {
    /// Variant tag used to gate [`Product::combine`].
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductDetails::Base => ProductKind::Base,
            ProductDetails::Smartphone { .. } => ProductKind::Smartphone,
            ProductDetails::LawnGrass { .. } => ProductKind::LawnGrass,
        }
    }
}

/// Shared handle to a product.
///
/// The loader, a `Category` and any number of orders may alias the same
/// product; stock changes are visible through every handle. `Rc` (not `Arc`):
/// the catalog's resource model is single-threaded.
pub type ProductHandle = Rc<RefCell<Product>>;

/// Input record for a product: the unit of the catalog document format and
/// of the merge-aware [`Product::new_product`] factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u64,
}

/// A single catalog item. Owns its validation and price-change policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    quantity: u64,
    details: ProductDetails,
}

impl Product {
    /// Create a base product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u64,
    ) -> DomainResult<Self> {
        Self::with_details(name, description, price, quantity, ProductDetails::Base)
    }

    /// Create a smartphone.
    #[allow(clippy::too_many_arguments)]
    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u64,
        efficiency: f64,
        model: impl Into<String>,
        memory: u64,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_details(
            name,
            description,
            price,
            quantity,
            ProductDetails::Smartphone {
                efficiency,
                model: model.into(),
                memory,
                color: color.into(),
            },
        )
    }

    /// Create a lawn grass product.
    #[allow(clippy::too_many_arguments)]
    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u64,
        country: impl Into<String>,
        germination_period: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_details(
            name,
            description,
            price,
            quantity,
            ProductDetails::LawnGrass {
                country: country.into(),
                germination_period: germination_period.into(),
                color: color.into(),
            },
        )
    }

    /// Create a product of any kind; every constructor funnels through here.
    pub fn with_details(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u64,
        details: ProductDetails,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "a product with zero quantity cannot be added",
            ));
        }
        if price <= 0.0 || price.is_nan() {
            return Err(DomainError::validation("price must be positive"));
        }
        Ok(Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            details,
        })
    }

    /// Wrap into a shared handle.
    pub fn into_shared(self) -> ProductHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Variant tag of this product.
    pub fn kind(&self) -> ProductKind {
        self.details.kind()
    }

    /// Guarded price setter.
    ///
    /// Non-positive values are ignored. A decrease must be approved by the
    /// supplied confirmer. Rejections are policy denials, not errors: the
    /// price stays unchanged and a warning is emitted.
    pub fn set_price(&mut self, new_price: f64, confirmer: &dyn ConfirmationProvider) {
        if new_price <= 0.0 || new_price.is_nan() {
            tracing::warn!(
                product = %self.name,
                proposed = new_price,
                "ignoring non-positive price, keeping current price"
            );
            return;
        }
        if new_price < self.price && !confirmer.approve_decrease(self.price, new_price) {
            tracing::warn!(
                product = %self.name,
                current = self.price,
                proposed = new_price,
                "price decrease was not confirmed, keeping current price"
            );
            return;
        }
        self.price = new_price;
    }

    /// Remove `quantity` units from stock. All-or-nothing: on failure the
    /// stock is untouched.
    pub fn withdraw(&mut self, quantity: u64) -> DomainResult<()> {
        if quantity > self.quantity {
            return Err(DomainError::insufficient_stock(quantity, self.quantity));
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Total shelf value of `self` and `other`: `price * quantity` summed
    /// over both. Only products of the same concrete kind can be combined.
    pub fn combine(&self, other: &Product) -> DomainResult<f64> {
        if self.kind() != other.kind() {
            return Err(DomainError::kind_mismatch(
                self.kind().to_string(),
                other.kind().to_string(),
            ));
        }
        Ok(self.price * self.quantity as f64 + other.price * other.quantity as f64)
    }

    /// Merge-aware factory.
    ///
    /// When `existing` holds a product with the same name, the record is
    /// merged into it in place: quantities are summed and the price is
    /// raised to the higher of the two. Otherwise a fresh base product is
    /// constructed. Returns the affected handle either way.
    pub fn new_product(
        record: ProductRecord,
        existing: &[ProductHandle],
    ) -> DomainResult<ProductHandle> {
        if record.quantity == 0 {
            return Err(DomainError::validation(
                "a product with zero quantity cannot be added",
            ));
        }
        if let Some(handle) = existing.iter().find(|h| h.borrow().name == record.name) {
            let mut product = handle.borrow_mut();
            product.quantity += record.quantity;
            // max() means the guarded setter never sees a decrease.
            let raised = product.price.max(record.price);
            product.set_price(raised, &DenyAll);
            tracing::debug!(
                product = %product.name,
                quantity = product.quantity,
                price = product.price,
                "merged incoming record into existing product"
            );
            return Ok(Rc::clone(handle));
        }
        Ok(Product::new(record.name, record.description, record.price, record.quantity)?
            .into_shared())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} руб. Остаток: {} шт.",
            self.name,
            format_price(self.price),
            self.quantity
        )
    }
}
