//! Text blocks shown during a session. Amounts use `Money`'s `Rs <n>` form.

use std::fmt::Write as _;

use bistro_core::{items_total, MenuItem, Order};

const RULE: &str = "────────────────────────────────────────";

pub fn welcome(restaurant_name: &str) -> String {
    format!("{RULE}\n  Welcome to {restaurant_name}\n{RULE}")
}

/// Items accumulated so far, one line per unit, and their total.
pub fn summary(items: &[MenuItem]) -> String {
    let mut out = String::from("Your order so far:\n");
    for item in items {
        let _ = writeln!(out, "  • {}", item.display_label());
    }
    let _ = write!(out, "Total: {}", items_total(items));
    out
}

pub fn order_placed(order: &Order) -> String {
    format!("{RULE}\n{}\n{RULE}", order.format_order_details())
}

pub fn cancellation_notice(order: &Order) -> String {
    format!(
        "Order {} has been cancelled. We hope to serve you again soon.",
        order.id()
    )
}

pub fn farewell(restaurant_name: &str) -> String {
    format!("Thank you for ordering from {restaurant_name}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::Money;

    #[test]
    fn test_summary_lists_units_and_total() {
        let chai = MenuItem::new("Chai", "", Money::from_rupees(150), "Drinks").unwrap();
        let text = summary(&[chai.clone(), chai]);
        assert_eq!(
            text,
            "Your order so far:\n  • Chai - Rs 150\n  • Chai - Rs 150\nTotal: Rs 300"
        );
    }

    #[test]
    fn test_summary_of_nothing() {
        assert!(summary(&[]).ends_with("Total: Rs 0"));
    }
}
