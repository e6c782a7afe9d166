//! # bistro-core: Pure Ordering Logic for Bistro
//!
//! This crate holds the order-construction and pricing model for a single
//! restaurant. It has zero I/O: prompting, rendering, and configuration
//! loading all live in the `bistro-cli` app.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Bistro Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cli (InteractionDriver)                    │   │
//! │  │   Customer ──► Select Item ──► Quantity ──► Confirm ──► Pay     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   order   │  │order_book │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Order   │  │ OrderBook │  │  payment  │  │   │
//! │  │   │  labels   │  │  totals   │  │  order ids│  │  quantity │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-rupee `Money` type rendered as `Rs <n>`
//! - [`types`] - MenuItem, Customer, OrderStatus, OrderId
//! - [`catalog`] - The fixed menu and label resolution
//! - [`order`] - Order lifecycle and totals
//! - [`order_book`] - Placed orders and id assignment
//! - [`payment`] - Payment methods and stored payment descriptions
//! - [`validation`] - Input validators used by the prompts
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{Customer, MenuCatalog, OrderBook};
//!
//! let catalog = MenuCatalog::seeded(&[("Pasta Carbonara", 1299), ("Kheer", 799)]).unwrap();
//! let mut book = OrderBook::new(catalog);
//!
//! let pasta = book.find_menu_item("Pasta Carbonara - Rs 1299").unwrap().clone();
//! let customer = Customer::new("Ayesha", "ayesha@example.com", "03001234567");
//!
//! let order = book.create_order(customer, vec![pasta.clone(), pasta], None);
//! assert_eq!(order.calculate_total_price().rupees(), 2598);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod order_book;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{MenuCatalog, MenuEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{items_total, Order, OrderIdSequence};
pub use order_book::OrderBook;
pub use payment::{PaymentDetails, PaymentMethod};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category assigned to items added through [`MenuCatalog::seed`].
pub const DEFAULT_CATEGORY: &str = "Main Course";

/// Maximum quantity accepted for a single selection.
///
/// ## Business Reason
/// Quantity is modeled as repeated item entries, so a typo like `10000`
/// would push ten thousand entries into the order.
pub const MAX_ITEM_QUANTITY: u32 = 999;
