//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog and order lifecycle failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bistro-cli errors (app)                                               │
//! │  └── CliError         - I/O, closed input, configuration               │
//! │                                                                         │
//! │  ValidationError never leaves a prompt: the session re-asks instead.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::{OrderId, OrderStatus};

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and order lifecycle errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu item with the same name is already in the catalog.
    #[error("Menu item '{name}' already exists")]
    DuplicateItem { name: String },

    /// No placed order carries this id.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Order is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Adding items to a confirmed or cancelled order
    /// - Cancelling an order that is already cancelled
    #[error("Order {order_id} is {status}, cannot {operation}")]
    InvalidOrderStatus {
        order_id: OrderId,
        status: OrderStatus,
        operation: &'static str,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` text is what a customer sees before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be a positive whole number.
    #[error("{field} must be a positive whole number")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (wrong digit count, stray characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value does not equal the amount it has to match.
    #[error("{field} must be exactly {expected}")]
    Mismatch { field: String, expected: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidOrderStatus {
            order_id: OrderId::new(3),
            status: OrderStatus::Confirmed,
            operation: "add items",
        };
        assert_eq!(err.to_string(), "Order #3 is confirmed, cannot add items");

        let err = CoreError::DuplicateItem {
            name: "Kheer".to_string(),
        };
        assert_eq!(err.to_string(), "Menu item 'Kheer' already exists");
    }

    #[test]
    fn test_every_core_error_renders() {
        let errors = [
            CoreError::DuplicateItem {
                name: "Kheer".to_string(),
            },
            CoreError::OrderNotFound(OrderId::new(9)),
            CoreError::InvalidOrderStatus {
                order_id: OrderId::new(1),
                status: OrderStatus::Cancelled,
                operation: "cancel",
            },
            CoreError::Validation(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }),
        ];

        for err in &errors {
            let expected = match err {
                CoreError::DuplicateItem { .. } => "already exists",
                CoreError::OrderNotFound(_) => "Order not found: #9",
                CoreError::InvalidOrderStatus { .. } => "cannot cancel",
                CoreError::Validation(_) => "quantity must be a positive whole number",
            };
            assert!(err.to_string().contains(expected), "{err}");
        }
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Mismatch {
            field: "amount to pay".to_string(),
            expected: "Rs 3397".to_string(),
        };
        assert_eq!(err.to_string(), "amount to pay must be exactly Rs 3397");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
