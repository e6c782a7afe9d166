//! # Payment
//!
//! The payment methods a customer can choose after confirming, and the
//! description stored on the order.
//!
//! ## Fields per Method
//! ```text
//! ┌──────────────────┬────────────────────────────────┐
//! │ Method           │ Collected                      │
//! ├──────────────────┼────────────────────────────────┤
//! │ Cash on Delivery │ nothing                        │
//! │ Bank Account     │ 13-digit account number        │
//! │ Credit Card      │ 16-digit number, 4-digit PIN   │
//! │ EasyPaisa        │ digits-only account id         │
//! └──────────────────┴────────────────────────────────┘
//! ```
//!
//! Every method then asks for the amount to pay, which must equal the
//! order total exactly.
//!
//! The PIN is checked and then dropped; it never reaches [`PaymentDetails`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    BankAccount,
    CreditCard,
    EasyPaisa,
}

impl PaymentMethod {
    /// Every method, in the order they are offered.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CashOnDelivery,
        PaymentMethod::BankAccount,
        PaymentMethod::CreditCard,
        PaymentMethod::EasyPaisa,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::BankAccount => "Bank Account",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::EasyPaisa => "EasyPaisa",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.label() == label)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated payment identifiers for a chosen method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    CashOnDelivery,
    BankAccount { account_number: String },
    CreditCard { card_number: String },
    EasyPaisa { account: String },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::CashOnDelivery => PaymentMethod::CashOnDelivery,
            PaymentDetails::BankAccount { .. } => PaymentMethod::BankAccount,
            PaymentDetails::CreditCard { .. } => PaymentMethod::CreditCard,
            PaymentDetails::EasyPaisa { .. } => PaymentMethod::EasyPaisa,
        }
    }

    /// The string kept in `Order::payment_details`.
    ///
    /// Card numbers are masked down to their last four digits.
    ///
    /// ```rust
    /// use bistro_core::PaymentDetails;
    ///
    /// assert_eq!(PaymentDetails::CashOnDelivery.description(), "Cash on Delivery");
    ///
    /// let card = PaymentDetails::CreditCard { card_number: "4111111111111234".into() };
    /// assert_eq!(card.description(), "Credit Card - ************1234");
    /// ```
    pub fn description(&self) -> String {
        match self {
            PaymentDetails::CashOnDelivery => self.method().label().to_string(),
            PaymentDetails::BankAccount { account_number } => {
                format!("{} - {}", self.method(), account_number)
            }
            PaymentDetails::CreditCard { card_number } => {
                format!("{} - {}", self.method(), mask_card_number(card_number))
            }
            PaymentDetails::EasyPaisa { account } => format!("{} - {}", self.method(), account),
        }
    }
}

fn mask_card_number(card_number: &str) -> String {
    // Card numbers are validated ASCII digits, so byte offsets are char offsets.
    let hidden = card_number.len().saturating_sub(4);
    format!("{}{}", "*".repeat(hidden), &card_number[hidden..])
}

// =============================================================================
// Unit Tests
// =============================================================================
