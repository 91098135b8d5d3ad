use std::fmt;

use chrono::{DateTime, Utc};

use lavka_catalog::{format_price, ProductHandle};
use lavka_core::{DomainError, DomainResult, OrderId};

/// A placed order: one product, a requested quantity, and the total price
/// captured at placement time.
///
/// Immutable after construction. The stock decrement on the referenced
/// product has already happened by the time `new` returns; the product stays
/// shared, not owned.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    name: String,
    description: String,
    product: ProductHandle,
    quantity: u64,
    total_price: f64,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Place an order for `quantity` units of `product`.
    ///
    /// Fails without touching the product when the quantity is zero or
    /// exceeds the available stock.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        product: ProductHandle,
        quantity: u64,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("order quantity must be positive"));
        }

        let total_price = {
            let mut item = product.borrow_mut();
            item.withdraw(quantity)?;
            item.price() * quantity as f64
        };

        let order = Self {
            id: OrderId::new(),
            name: name.into(),
            description: description.into(),
            product,
            quantity,
            total_price,
            placed_at: Utc::now(),
        };
        tracing::debug!(
            order = %order.name,
            product = %order.product.borrow().name(),
            quantity,
            total = total_price,
            "order placed"
        );
        Ok(order)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The ordered product (shared with the catalog).
    pub fn product(&self) -> &ProductHandle {
        &self.product
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Total price snapshot taken at placement time; later price changes on
    /// the product do not affect it.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Заказ: {} — {} x {} = {} руб.",
            self.name,
            self.product.borrow().name(),
            self.quantity,
            format_price(self.total_price)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lavka_catalog::{ApproveAll, Product};
    use std::rc::Rc;

    #[test]
    fn placement_computes_total_and_decrements_stock() {
        let product = Product::new("Мышка", "Беспроводная", 500.0, 10)
            .unwrap()
            .into_shared();
        let order = Order::new(
            "Заказ на мышку",
            "Покупка одной мышки",
            Rc::clone(&product),
            1,
        )
        .unwrap();

        assert_eq!(order.name(), "Заказ на мышку");
        assert_eq!(order.description(), "Покупка одной мышки");
        assert_eq!(order.quantity(), 1);
        assert_eq!(order.total_price(), 500.0);
        assert_eq!(product.borrow().quantity(), 9);
        assert_eq!(
            order.to_string(),
            "Заказ: Заказ на мышку — Мышка x 1 = 500.0 руб."
        );
    }

    #[test]
    fn exceeding_stock_fails_and_leaves_stock_untouched() {
        let product = Product::new("Монитор", "4K", 15000.0, 2).unwrap().into_shared();

        match Order::new("Слишком много", "Пытаемся купить 3", Rc::clone(&product), 3)
            .unwrap_err()
        {
            DomainError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("Expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(product.borrow().quantity(), 2);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let product = Product::new("Кресло", "Офисное", 1500.0, 1).unwrap().into_shared();

        match Order::new("Ошибка заказа", "Ноль товара", Rc::clone(&product), 0).unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(product.borrow().quantity(), 1);
    }

    #[test]
    fn successive_orders_share_the_same_stock() {
        let product = Product::new("Флешка", "64GB", 700.0, 10).unwrap().into_shared();

        let first = Order::new("Первый", "Оптом", Rc::clone(&product), 3).unwrap();
        let second = Order::new("Второй", "Оптом", Rc::clone(&product), 4).unwrap();
        assert_eq!(first.total_price(), 2100.0);
        assert_eq!(second.total_price(), 2800.0);
        assert_eq!(product.borrow().quantity(), 3);

        assert!(Order::new("Третий", "Оптом", Rc::clone(&product), 5).is_err());
        assert_eq!(product.borrow().quantity(), 3);
    }

    #[test]
    fn total_price_is_a_snapshot() {
        let product = Product::new("Колонка", "Bluetooth", 2000.0, 5).unwrap().into_shared();
        let order = Order::new("Снимок", "Цена на момент заказа", Rc::clone(&product), 2).unwrap();
        assert_eq!(order.total_price(), 4000.0);

        product.borrow_mut().set_price(2500.0, &ApproveAll);
        assert_eq!(order.total_price(), 4000.0);
    }
}
