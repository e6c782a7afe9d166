//! # Domain Types
//!
//! Core domain types used throughout Bistro.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    Customer     │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (unique)  │   │  name           │   │  Pending        │       │
//! │  │  description    │   │  email          │   │  Confirmed      │       │
//! │  │  price (Money)  │   │  phone          │   │  Cancelled      │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  available      │                                                    │
//! │  └─────────────────┘   OrderId: #1, #2, ... (assigned by OrderBook)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price};

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on the menu.
///
/// Items are immutable once the catalog is seeded. An order keeps its own
/// copy of every unit it contains, so the order total never depends on the
/// catalog after the item was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Optional longer text; empty for seeded items.
    pub description: String,

    /// Per-unit price in whole rupees.
    pub price: Money,

    /// Menu section, e.g. "Main Course".
    pub category: String,

    /// Unavailable items stay in the catalog but are never offered.
    pub available: bool,
}

impl MenuItem {
    /// Creates an available menu item after validating name and price.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{Money, MenuItem};
    ///
    /// let kheer = MenuItem::new("Kheer", "", Money::from_rupees(799), "Dessert").unwrap();
    /// assert!(kheer.available);
    /// assert!(MenuItem::new("", "", Money::from_rupees(1), "Dessert").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(MenuItem {
            name: name.trim().to_string(),
            description: description.into(),
            price,
            category: category.into(),
            available: true,
        })
    }

    /// Marks the item as not orderable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// The human-facing label shown in the selection list.
    ///
    /// ```rust
    /// use bistro_core::{Money, MenuItem};
    ///
    /// let item = MenuItem::new("Kheer", "", Money::from_rupees(799), "Dessert").unwrap();
    /// assert_eq!(item.display_label(), "Kheer - Rs 799");
    /// ```
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.price)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Contact details collected once per ordering session.
///
/// No format checks are applied; whatever the customer types is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    email: String,
    phone: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle of a placed order.
///
/// ```text
/// Pending ──confirm()──► Confirmed ──cancel()──► Cancelled
///    └──────────────────cancel()────────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Items can still be appended.
    #[default]
    Pending,
    /// Customer confirmed and chose a payment method.
    Confirmed,
    /// Order was cancelled after creation.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Order Id
// =============================================================================

/// Sequential order number, starting at 1 within an [`crate::OrderBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderId(value)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
