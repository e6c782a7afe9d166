//! # Validation Module
//!
//! Input validators for the ordering session.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validators Run                               │
//! │                                                                         │
//! │  Prompt (apps/cli)                                                     │
//! │  ├── reads one line                                                    │
//! │  └── THIS MODULE: checks it                                            │
//! │           │                                                             │
//! │           ├── Ok  → value flows into the order                         │
//! │           └── Err → message shown, same question asked again           │
//! │                                                                         │
//! │  No retry limit. A rejected answer never aborts the session.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::{parse_quantity, validate_bank_account};
//!
//! assert_eq!(parse_quantity("2").unwrap(), 2);
//! assert!(parse_quantity("0").is_err());
//! assert!(validate_bank_account("1234567890123").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Digits in a bank account number.
pub const BANK_ACCOUNT_DIGITS: usize = 13;

/// Digits in a credit card number.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Digits in a card PIN.
pub const PIN_DIGITS: usize = 4;

/// Highest accepted menu price, in rupees.
pub const MAX_ITEM_PRICE: i64 = 10_000_000;

// =============================================================================
// Menu Validators
// =============================================================================

/// Validates a menu item name: must not be blank.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
/// - Must not exceed [`MAX_ITEM_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.rupees() > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Quantity
// =============================================================================

/// Parses the quantity typed for a selected item.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a whole number (`3.5`, `abc` rejected)
/// - Must be positive (`0`, `-1` rejected)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
///
/// ## Example
/// ```rust
/// use bistro_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
/// assert!(parse_quantity("3.5").is_err());
/// assert!(parse_quantity("-1").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let input = input.trim();

    let qty: i64 = input.parse().map_err(|_| ValidationError::MustBePositive {
        field: "quantity".to_string(),
    })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > i64::from(MAX_ITEM_QUANTITY) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    // Bounded above, so the narrowing cannot truncate.
    Ok(qty as u32)
}

// =============================================================================
// Payment Identifiers
// =============================================================================

fn validate_exact_digits(input: &str, field: &str, digits: usize) -> ValidationResult<String> {
    let value = input.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() != digits || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be exactly {digits} digits"),
        });
    }

    Ok(value.to_string())
}

/// Validates a bank account number: exactly 13 digits.
///
/// Returns the trimmed account number.
pub fn validate_bank_account(input: &str) -> ValidationResult<String> {
    validate_exact_digits(input, "bank account number", BANK_ACCOUNT_DIGITS)
}

/// Validates a credit card number: exactly 16 digits, no spaces.
pub fn validate_card_number(input: &str) -> ValidationResult<String> {
    validate_exact_digits(input, "card number", CARD_NUMBER_DIGITS)
}

/// Validates a card PIN: exactly 4 digits.
pub fn validate_pin(input: &str) -> ValidationResult<()> {
    validate_exact_digits(input, "PIN", PIN_DIGITS).map(|_| ())
}

/// Validates an EasyPaisa account id: one or more digits, nothing else.
pub fn validate_easypaisa_account(input: &str) -> ValidationResult<String> {
    let value = input.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "EasyPaisa account".to_string(),
        });
    }

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "EasyPaisa account".to_string(),
            reason: "must contain digits only".to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Amount To Pay
// =============================================================================

/// Validates the amount a customer enters against the order total.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be written exactly as the total's integer, with no sign or padding
/// - Must equal `total` exactly: no change, no partial payment
///
/// ## Example
/// ```rust
/// use bistro_core::money::Money;
/// use bistro_core::validation::validate_amount_to_pay;
///
/// let total = Money::from_rupees(3397);
/// assert!(validate_amount_to_pay("3397", total).is_ok());
/// assert!(validate_amount_to_pay("3398", total).is_err());
/// ```
pub fn validate_amount_to_pay(input: &str, total: Money) -> ValidationResult<Money> {
    let mismatch = || ValidationError::Mismatch {
        field: "amount to pay".to_string(),
        expected: total.to_string(),
    };

    // Only the canonical digits of the total match: "+3397" and "03397" do not.
    if input.trim() != total.rupees().to_string() {
        return Err(mismatch());
    }

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================
