//! # Ordering Session
//!
//! One customer's walk from contact details to a placed order.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CollectCustomer                                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  SelectItem ◄──────────────┐◄────────────────────────────┐             │
//! │        │ (unknown item:     │                             │             │
//! │        │  ask again)        │ yes                         │             │
//! │        ▼                    │                             │             │
//! │  EnterQuantity ──► ContinueOrCheckout                     │             │
//! │                             │ no                          │             │
//! │                             ▼                             │             │
//! │                          Summary                          │             │
//! │                             │                             │             │
//! │                             ▼                             │ Update      │
//! │                        ConfirmOrder ──no──► end (declined)│ Order       │
//! │                             │ yes                         │             │
//! │                             ▼                             │             │
//! │                          Payment                          │             │
//! │                             │                             │             │
//! │                             ▼                             │             │
//! │                          Finalize ──► PostOrderManagement ┘             │
//! │                                          │          │                   │
//! │                                   Cancel Order      No                  │
//! │                                          ▼          ▼                   │
//! │                                         end        end                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Kept Behaviors
//! - "Cancel Order" prints a notice only; the placed order stays confirmed.
//! - "Update Order" goes back to SelectItem with the same item accumulator,
//!   so the next order placed contains the earlier items as well.

use tracing::{debug, info, info_span};
use uuid::Uuid;

use bistro_core::validation::{
    parse_quantity, validate_amount_to_pay, validate_bank_account, validate_card_number,
    validate_easypaisa_account, validate_pin, ValidationResult,
};
use bistro_core::{
    items_total, CoreError, Customer, MenuItem, Money, OrderBook, OrderId, PaymentDetails,
    PaymentMethod,
};

use crate::driver::InteractionDriver;
use crate::error::CliResult;
use crate::prompt::{ask_confirm, ask_until_valid, Prompt};
use crate::render;

/// Choices offered once an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrderAction {
    CancelOrder,
    UpdateOrder,
    No,
}

impl PostOrderAction {
    pub const ALL: [PostOrderAction; 3] = [
        PostOrderAction::CancelOrder,
        PostOrderAction::UpdateOrder,
        PostOrderAction::No,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            PostOrderAction::CancelOrder => "Cancel Order",
            PostOrderAction::UpdateOrder => "Update Order",
            PostOrderAction::No => "No",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Customer answered no at ConfirmOrder.
    Declined,
    /// Customer chose "No" after placing an order.
    Finished,
    /// Customer chose "Cancel Order" after placing an order.
    CancelRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Orders placed during the session, in order.
    pub placed: Vec<OrderId>,
    pub ended: SessionEnd,
}

pub struct Session<'a, D> {
    book: &'a mut OrderBook,
    driver: D,
    restaurant_name: String,
    items: Vec<MenuItem>,
}

impl<'a, D: InteractionDriver> Session<'a, D> {
    pub fn new(book: &'a mut OrderBook, driver: D, restaurant_name: impl Into<String>) -> Self {
        Session {
            book,
            driver,
            restaurant_name: restaurant_name.into(),
            items: Vec::new(),
        }
    }

    /// Every unit selected so far, across updates.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_parts(self) -> (D, Vec<MenuItem>) {
        (self.driver, self.items)
    }

    /// Runs the session to its end.
    ///
    /// Returns `CliError::InputClosed` if the input runs out first; orders
    /// placed before that point remain in the book.
    pub fn run(&mut self) -> CliResult<SessionReport> {
        let span = info_span!("session", session_id = %Uuid::new_v4());
        let _guard = span.enter();

        self.driver.show(&render::welcome(&self.restaurant_name))?;
        let customer = self.collect_customer()?;
        info!(customer = customer.name(), "session started");

        let mut placed = Vec::new();
        loop {
            self.select_items()?;
            self.driver.show(&render::summary(&self.items))?;

            let confirmed =
                ask_confirm(&mut self.driver, &Prompt::confirm("Confirm your order?", true))?;
            if !confirmed {
                info!(units = self.items.len(), "order declined");
                self.driver.show(&render::farewell(&self.restaurant_name))?;
                return Ok(SessionReport {
                    placed,
                    ended: SessionEnd::Declined,
                });
            }

            let total = items_total(&self.items);
            let payment = self.collect_payment(total)?;
            let order_id = self.finalize(customer.clone(), &payment)?;
            placed.push(order_id);

            match self.post_order_management()? {
                PostOrderAction::CancelOrder => {
                    self.request_cancellation(order_id)?;
                    return Ok(SessionReport {
                        placed,
                        ended: SessionEnd::CancelRequested,
                    });
                }
                PostOrderAction::UpdateOrder => {
                    info!(order_id = %order_id, "updating order");
                }
                PostOrderAction::No => {
                    self.driver.show(&render::farewell(&self.restaurant_name))?;
                    return Ok(SessionReport {
                        placed,
                        ended: SessionEnd::Finished,
                    });
                }
            }
        }
    }

    // =========================================================================
    // Steps
    // =========================================================================

    fn collect_customer(&mut self) -> CliResult<Customer> {
        let name = ask_until_valid(&mut self.driver, &Prompt::text("Enter your name"))?;
        let email = ask_until_valid(&mut self.driver, &Prompt::text("Enter your email"))?;
        let phone = ask_until_valid(&mut self.driver, &Prompt::text("Enter your phone number"))?;
        Ok(Customer::new(name, email, phone))
    }

    /// SelectItem, EnterQuantity and ContinueOrCheckout until the customer
    /// stops adding items.
    fn select_items(&mut self) -> CliResult<()> {
        loop {
            let item = self.select_item()?;
            let quantity = self.enter_quantity()?;

            debug!(item = %item.name, quantity, "item added");
            self.items
                .extend(std::iter::repeat(item).take(quantity as usize));

            let more = ask_confirm(
                &mut self.driver,
                &Prompt::confirm("Would you like to add another item?", false),
            )?;
            if !more {
                return Ok(());
            }
        }
    }

    fn select_item(&mut self) -> CliResult<MenuItem> {
        let prompt = Prompt::list("Select an item from the menu", self.book.menu_labels());

        loop {
            let label = ask_until_valid(&mut self.driver, &prompt)?;
            match self.book.find_menu_item(&label) {
                Some(item) => return Ok(item.clone()),
                None => {
                    debug!(%label, "selection did not match a menu item");
                    self.driver
                        .show(&format!("  ✗ '{label}' is not on the menu"))?;
                }
            }
        }
    }

    fn enter_quantity(&mut self) -> CliResult<u32> {
        let prompt =
            Prompt::text("How many would you like?").with_validator(|s| parse_quantity(s).map(|_| ()));
        let answer = ask_until_valid(&mut self.driver, &prompt)?;
        Ok(parse_quantity(&answer).map_err(CoreError::from)?)
    }

    fn collect_payment(&mut self, total: Money) -> CliResult<PaymentDetails> {
        let labels = PaymentMethod::ALL
            .iter()
            .map(|method| method.label().to_string())
            .collect();
        let prompt = Prompt::list("Choose a payment method", labels);

        let method = loop {
            let answer = ask_until_valid(&mut self.driver, &prompt)?;
            match PaymentMethod::from_label(&answer) {
                Some(method) => break method,
                None => self
                    .driver
                    .show(&format!("  ✗ '{answer}' is not a payment method"))?,
            }
        };

        let details = match method {
            PaymentMethod::CashOnDelivery => PaymentDetails::CashOnDelivery,
            PaymentMethod::BankAccount => PaymentDetails::BankAccount {
                account_number: self.ask_identifier(
                    "Enter your 13-digit bank account number",
                    validate_bank_account,
                )?,
            },
            PaymentMethod::CreditCard => {
                let card_number =
                    self.ask_identifier("Enter your 16-digit card number", validate_card_number)?;
                let pin = Prompt::masked("Enter your 4-digit PIN").with_validator(validate_pin);
                ask_until_valid(&mut self.driver, &pin)?;
                PaymentDetails::CreditCard { card_number }
            }
            PaymentMethod::EasyPaisa => PaymentDetails::EasyPaisa {
                account: self.ask_identifier(
                    "Enter your EasyPaisa account number",
                    validate_easypaisa_account,
                )?,
            },
        };

        let prompt = Prompt::text(format!("Enter the amount to pay ({total})"))
            .with_validator(move |s| validate_amount_to_pay(s, total).map(|_| ()));
        ask_until_valid(&mut self.driver, &prompt)?;

        info!(method = %method, total = %total, "payment collected");
        Ok(details)
    }

    fn ask_identifier(
        &mut self,
        message: &str,
        validate: fn(&str) -> ValidationResult<String>,
    ) -> CliResult<String> {
        let prompt = Prompt::text(message).with_validator(move |s| validate(s).map(|_| ()));
        let answer = ask_until_valid(&mut self.driver, &prompt)?;
        Ok(validate(&answer).map_err(CoreError::from)?)
    }

    /// Records the order, confirms it and shows the details.
    fn finalize(&mut self, customer: Customer, payment: &PaymentDetails) -> CliResult<OrderId> {
        let order = self
            .book
            .create_order(customer, self.items.clone(), Some(payment.description()));
        order.confirm_order();

        info!(
            order_id = %order.id(),
            total = %order.calculate_total_price(),
            payment = %payment.method(),
            "order confirmed"
        );
        if let Ok(snapshot) = serde_json::to_string(&*order) {
            debug!(%snapshot, "order snapshot");
        }

        let id = order.id();
        let details = render::order_placed(order);
        self.driver.show(&details)?;
        Ok(id)
    }

    fn post_order_management(&mut self) -> CliResult<PostOrderAction> {
        let labels = PostOrderAction::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect();
        let prompt = Prompt::list("Would you like to make changes to your order?", labels);

        loop {
            let answer = ask_until_valid(&mut self.driver, &prompt)?;
            match PostOrderAction::from_label(&answer) {
                Some(action) => return Ok(action),
                None => self
                    .driver
                    .show(&format!("  ✗ '{answer}' is not one of the options"))?,
            }
        }
    }

    /// Prints the cancellation notice. The order keeps its confirmed status.
    fn request_cancellation(&mut self, order_id: OrderId) -> CliResult<()> {
        let order = self
            .book
            .order(order_id)
            .ok_or(CoreError::OrderNotFound(order_id))?;

        info!(
            order_id = %order_id,
            status = %order.status(),
            "cancellation requested, order status left unchanged"
        );
        let notice = render::cancellation_notice(order);
        self.driver.show(&notice)?;
        Ok(())
    }
}
