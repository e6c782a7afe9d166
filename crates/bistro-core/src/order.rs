//! # Order
//!
//! One customer's order: the selected units, the customer, a status and the
//! stored payment description.
//!
//! ## Quantity Model
//! ```text
//! Pasta Carbonara × 2, Kheer × 1
//!      │
//!      ▼
//! items = [Pasta Carbonara, Pasta Carbonara, Kheer]   (one entry per unit)
//!      │
//!      ▼
//! calculate_total_price() = 1299 + 1299 + 799 = Rs 3397
//! ```
//!
//! The total is always derived from `items`; it is never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Customer, MenuItem, OrderId, OrderStatus};

// =============================================================================
// Order Id Sequence
// =============================================================================

/// Monotonic order-number source.
///
/// Starts at 1 and never hands out the same value twice. Each
/// [`crate::OrderBook`] owns one, so independent books do not share numbers.
#[derive(Debug, Clone)]
pub struct OrderIdSequence {
    next: u64,
}

impl OrderIdSequence {
    pub const fn new() -> Self {
        OrderIdSequence { next: 1 }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`Self::next_id`] will return.
    pub fn peek(&self) -> OrderId {
        OrderId::new(self.next)
    }
}

impl Default for OrderIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<MenuItem>,
    customer: Customer,
    status: OrderStatus,
    payment_details: Option<String>,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending order with the next id from `ids`.
    ///
    /// The caller keeps the returned order; appending it to a list of
    /// placed orders is [`crate::OrderBook::create_order`]'s job.
    pub fn create(
        ids: &mut OrderIdSequence,
        customer: Customer,
        items: Vec<MenuItem>,
        payment_details: Option<String>,
    ) -> Self {
        Order {
            id: ids.next_id(),
            items,
            customer,
            status: OrderStatus::Pending,
            payment_details,
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment_details(&self) -> Option<&str> {
        self.payment_details.as_deref()
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Appends one unit. Only pending orders accept items.
    pub fn add_item(&mut self, item: MenuItem) -> CoreResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(CoreError::InvalidOrderStatus {
                order_id: self.id,
                status: self.status,
                operation: "add items",
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Sum of per-unit prices; zero for an empty order.
    pub fn calculate_total_price(&self) -> Money {
        items_total(&self.items)
    }

    /// Marks the order confirmed.
    ///
    /// Permissive: confirming twice, or confirming a cancelled order, just
    /// sets the status again.
    pub fn confirm_order(&mut self) {
        if self.status != OrderStatus::Pending {
            tracing::debug!(order_id = %self.id, status = %self.status, "re-confirming order");
        }
        self.status = OrderStatus::Confirmed;
    }

    /// Cancels a pending or confirmed order.
    pub fn cancel(&mut self) -> CoreResult<()> {
        if self.status == OrderStatus::Cancelled {
            return Err(CoreError::InvalidOrderStatus {
                order_id: self.id,
                status: self.status,
                operation: "cancel",
            });
        }

        self.status = OrderStatus::Cancelled;
        Ok(())
    }

    /// Multi-line summary: customer block, one line per unit, total.
    pub fn format_order_details(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Order {} ({})", self.id, self.status);
        let _ = writeln!(out, "Placed: {}", self.placed_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out);
        let _ = writeln!(out, "Customer");
        let _ = writeln!(out, "  Name:  {}", self.customer.name());
        let _ = writeln!(out, "  Email: {}", self.customer.email());
        let _ = writeln!(out, "  Phone: {}", self.customer.phone());
        let _ = writeln!(out);
        let _ = writeln!(out, "Items");
        for item in &self.items {
            let _ = writeln!(out, "  {}", item.display_label());
        }
        if let Some(payment) = &self.payment_details {
            let _ = writeln!(out);
            let _ = writeln!(out, "Payment: {payment}");
        }
        let _ = writeln!(out);
        let _ = write!(out, "Total Price: {}", self.calculate_total_price());

        out
    }
}

/// Sum of per-unit prices for a list of selected items.
///
/// The single place totals are computed: the running summary, the amount a
/// customer must pay and `Order::calculate_total_price` all go through here.
pub fn items_total(items: &[MenuItem]) -> Money {
    items.iter().map(|item| item.price).sum()
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_order_details())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: i64) -> MenuItem {
        MenuItem::new(name, "", Money::from_rupees(price), "Main Course").unwrap()
    }

    fn customer() -> Customer {
        Customer::new("Bilal", "bilal@example.com", "03217654321")
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let mut ids = OrderIdSequence::new();
        assert_eq!(ids.peek(), OrderId::new(1));
        assert_eq!(ids.next_id(), OrderId::new(1));
        assert_eq!(ids.next_id(), OrderId::new(2));
        assert_eq!(ids.peek(), OrderId::new(3));
    }

    #[test]
    fn test_create_is_pending() {
        let mut ids = OrderIdSequence::new();
        let order = Order::create(&mut ids, customer(), vec![item("Kheer", 799)], None);
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.payment_details(), None);
    }

    #[test]
    fn test_total_of_empty_order_is_zero() {
        let mut ids = OrderIdSequence::new();
        let order = Order::create(&mut ids, customer(), Vec::new(), None);
        assert!(order.calculate_total_price().is_zero());
    }

    #[test]
    fn test_total_sums_every_unit() {
        let mut ids = OrderIdSequence::new();
        let pasta = item("Pasta Carbonara", 1299);
        let kheer = item("Kheer", 799);
        let order = Order::create(
            &mut ids,
            customer(),
            vec![pasta.clone(), pasta, kheer],
            None,
        );
        assert_eq!(order.calculate_total_price(), Money::from_rupees(3397));
    }

    #[test]
    fn test_order_total_matches_items_total() {
        let mut ids = OrderIdSequence::new();
        let items = vec![item("Chai", 150), item("Kheer", 799), item("Chai", 150)];
        let order = Order::create(&mut ids, customer(), items.clone(), None);
        assert_eq!(items_total(&items), Money::from_rupees(1099));
        assert_eq!(order.calculate_total_price(), items_total(&items));
    }

    #[test]
    fn test_add_item_only_while_pending() {
        let mut ids = OrderIdSequence::new();
        let mut order = Order::create(&mut ids, customer(), Vec::new(), None);

        order.add_item(item("Chai", 150)).unwrap();
        order.add_item(item("Chai", 150)).unwrap();
        assert_eq!(order.calculate_total_price().rupees(), 300);

        order.confirm_order();
        let err = order.add_item(item("Chai", 150)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidOrderStatus { .. }));
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn test_confirm_is_permissive() {
        let mut ids = OrderIdSequence::new();
        let mut order = Order::create(&mut ids, customer(), Vec::new(), None);
        order.confirm_order();
        order.confirm_order();
        assert_eq!(order.status(), OrderStatus::Confirmed);
    }

    #[test]
    fn test_cancel_after_confirm() {
        let mut ids = OrderIdSequence::new();
        let mut order = Order::create(&mut ids, customer(), Vec::new(), None);
        order.confirm_order();
        order.cancel().unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(order.cancel().is_err());
    }

    #[test]
    fn test_format_lists_each_unit() {
        let mut ids = OrderIdSequence::new();
        let pasta = item("Pasta Carbonara", 1299);
        let order = Order::create(
            &mut ids,
            customer(),
            vec![pasta.clone(), pasta, item("Kheer", 799)],
            Some("Cash on Delivery".to_string()),
        );

        let details = order.format_order_details();
        assert_eq!(details.matches("Pasta Carbonara - Rs 1299").count(), 2);
        assert!(details.contains("Kheer - Rs 799"));
        assert!(details.contains("Name:  Bilal"));
        assert!(details.contains("Payment: Cash on Delivery"));
        assert!(details.ends_with("Total Price: Rs 3397"));
        assert_eq!(order.to_string(), details);
    }
}
