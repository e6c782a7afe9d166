//! # Order Book
//!
//! Owns the menu and every order placed during the process lifetime.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  OrderBook                                                  │
//! │  ├── catalog: MenuCatalog       (lookups delegate here)     │
//! │  ├── ids:     OrderIdSequence   (1, 2, 3, ... never reused) │
//! │  └── orders:  Vec<Order>        (insertion order)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::catalog::MenuCatalog;
use crate::error::{CoreError, CoreResult};
use crate::order::{Order, OrderIdSequence};
use crate::types::{Customer, MenuItem, OrderId};

#[derive(Debug, Clone)]
pub struct OrderBook {
    catalog: MenuCatalog,
    ids: OrderIdSequence,
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(catalog: MenuCatalog) -> Self {
        OrderBook {
            catalog,
            ids: OrderIdSequence::new(),
            orders: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Labels to offer in the item-selection step.
    pub fn menu_labels(&self) -> Vec<String> {
        self.catalog.display_labels()
    }

    pub fn find_menu_item(&self, label: &str) -> Option<&MenuItem> {
        self.catalog.find_by_display_label(label)
    }

    /// Creates a pending order, records it, and hands it back for
    /// confirmation.
    pub fn create_order(
        &mut self,
        customer: Customer,
        items: Vec<MenuItem>,
        payment_details: Option<String>,
    ) -> &mut Order {
        let order = Order::create(&mut self.ids, customer, items, payment_details);
        info!(
            order_id = %order.id(),
            items = order.items().len(),
            total = %order.calculate_total_price(),
            "order created"
        );

        self.orders.push(order);
        let last = self.orders.len() - 1;
        &mut self.orders[last]
    }

    /// All orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    pub fn cancel_order(&mut self, id: OrderId) -> CoreResult<&Order> {
        let order = self.order_mut(id).ok_or(CoreError::OrderNotFound(id))?;
        order.cancel()?;
        info!(order_id = %id, "order cancelled");
        Ok(&*order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderStatus;

    fn book() -> OrderBook {
        OrderBook::new(MenuCatalog::seeded(&[("Pasta Carbonara", 1299), ("Kheer", 799)]).unwrap())
    }

    fn customer() -> Customer {
        Customer::new("Sana", "sana@example.com", "03331112222")
    }

    #[test]
    fn test_ids_strictly_increase_by_one() {
        let mut book = book();
        let ids: Vec<u64> = (0..5)
            .map(|_| book.create_order(customer(), Vec::new(), None).id().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_independent_books_do_not_share_ids() {
        let mut first = book();
        let mut second = book();

        first.create_order(customer(), Vec::new(), None);
        first.create_order(customer(), Vec::new(), None);
        let id = second.create_order(customer(), Vec::new(), None).id();

        assert_eq!(id, OrderId::new(1));
    }

    #[test]
    fn test_create_order_records_in_insertion_order() {
        let mut book = book();
        let kheer = book.find_menu_item("Kheer - Rs 799").unwrap().clone();

        book.create_order(customer(), vec![kheer.clone()], None);
        book.create_order(customer(), vec![kheer.clone(), kheer], Some("EasyPaisa - 0300".into()));

        let orders = book.orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].items().len(), 1);
        assert_eq!(orders[1].items().len(), 2);
        assert_eq!(orders[1].payment_details(), Some("EasyPaisa - 0300"));
    }

    #[test]
    fn test_confirm_through_returned_reference() {
        let mut book = book();
        let id = {
            let order = book.create_order(customer(), Vec::new(), None);
            order.confirm_order();
            order.id()
        };
        assert_eq!(book.order(id).unwrap().status(), OrderStatus::Confirmed);
    }

    #[test]
    fn test_cancel_order() {
        let mut book = book();
        let id = book.create_order(customer(), Vec::new(), None).id();

        assert_eq!(book.cancel_order(id).unwrap().status(), OrderStatus::Cancelled);
        assert!(matches!(
            book.cancel_order(OrderId::new(42)),
            Err(CoreError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_menu_lookup_delegates_to_catalog() {
        let book = book();
        assert_eq!(book.menu_labels().len(), 2);
        assert!(book.find_menu_item("Pasta Carbonara - Rs 1299").is_some());
        assert!(book.find_menu_item("Pizza - Rs 999").is_none());
    }
}
