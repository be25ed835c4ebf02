//! Multi-step checkout flow and derived order pricing.
//!
//! The flow is linear - Address, then Payment, then Confirmation - with no
//! skipping. Advancing validates the current step's required fields;
//! going back is unconditional. Placing the order is simulated: it clears
//! the cart and returns a receipt, with no backend involved.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use velvet_fig_core::Price;

use crate::models::CartLine;
use crate::state::Store;

/// Orders at or below this subtotal pay the flat shipping surcharge.
const FREE_SHIPPING_OVER: Price = Price::new(Decimal::from_parts(5000, 0, 0, false, 2));

/// Flat shipping surcharge for small orders.
const SHIPPING_SURCHARGE: Price = Price::new(Decimal::from_parts(699, 0, 0, false, 2));

/// Flat sales tax rate, no jurisdiction logic.
const TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// The three checkout steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckoutStep {
    Address,
    Payment,
    Confirmation,
}

/// How the customer intends to pay.
///
/// Only `CreditCard` carries fields that get validated; the alternate
/// methods are redirect-style and bypass field validation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "creditCard")]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    #[serde(rename = "upi")]
    Upi,
}

/// Shipping address fields. All required except `phone`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; never blocks the flow.
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Pre-filled, so it never blocks the flow either.
    pub country: String,
}

/// Credit card fields, validated only when the method is `CreditCard`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub save_payment: bool,
}

/// Checkout validation and sequencing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Required fields for the current step are blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// `place_order` was called before reaching the confirmation step.
    #[error("order can only be placed from the confirmation step")]
    NotAtConfirmation,

    /// `place_order` was called with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Derived order pricing, computed from the cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderTotals {
    /// Derive shipping, tax, and total from a subtotal.
    ///
    /// Shipping is free only strictly above the threshold: a subtotal of
    /// exactly 50.00 still pays the surcharge.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_OVER {
            Price::ZERO
        } else {
            SHIPPING_SURCHARGE
        };
        let tax = Price::new(subtotal.amount() * TAX_RATE);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Current totals for a store's cart.
    #[must_use]
    pub fn for_store(store: &Store) -> Self {
        Self::from_subtotal(store.total_price())
    }
}

/// Receipt for a simulated order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartLine>,
    pub totals: OrderTotals,
    pub address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

/// The checkout flow state machine.
#[derive(Debug, Clone)]
pub struct Checkout {
    step: CheckoutStep,
    pub address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub card: CardDetails,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkout {
    /// Start a checkout at the address step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Address,
            address: ShippingAddress {
                country: "United States".to_string(),
                ..ShippingAddress::default()
            },
            payment_method: PaymentMethod::default(),
            card: CardDetails::default(),
        }
    }

    /// The step the flow is currently on.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Validate the current step and advance to the next one.
    ///
    /// At the confirmation step this is a no-op. Otherwise returns the new
    /// step, or [`CheckoutError::MissingFields`] naming the blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingFields`] when required fields for
    /// the current step are blank.
    pub fn next_step(&mut self) -> Result<CheckoutStep, CheckoutError> {
        match self.step {
            CheckoutStep::Address => {
                self.validate_address()?;
                self.step = CheckoutStep::Payment;
            }
            CheckoutStep::Payment => {
                self.validate_payment()?;
                self.step = CheckoutStep::Confirmation;
            }
            CheckoutStep::Confirmation => {}
        }
        Ok(self.step)
    }

    /// Step backward. Unconditional; saturates at the address step.
    pub fn previous_step(&mut self) {
        self.step = match self.step {
            CheckoutStep::Address | CheckoutStep::Payment => CheckoutStep::Address,
            CheckoutStep::Confirmation => CheckoutStep::Payment,
        };
    }

    /// Place the order: clear the cart and return a simulated receipt.
    ///
    /// Only legal at the confirmation step and with a non-empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotAtConfirmation`] off the confirmation
    /// step and [`CheckoutError::EmptyCart`] for an empty cart.
    pub fn place_order(&self, store: &mut Store) -> Result<OrderConfirmation, CheckoutError> {
        if self.step != CheckoutStep::Confirmation {
            return Err(CheckoutError::NotAtConfirmation);
        }
        if store.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            items: store.cart().to_vec(),
            totals: OrderTotals::for_store(store),
            address: self.address.clone(),
            payment_method: self.payment_method,
        };
        store.clear_cart();

        tracing::info!(order_id = %confirmation.order_id, total = %confirmation.totals.total, "order placed");
        Ok(confirmation)
    }

    fn validate_address(&self) -> Result<(), CheckoutError> {
        let required: [(&'static str, &str); 7] = [
            ("first_name", &self.address.first_name),
            ("last_name", &self.address.last_name),
            ("email", &self.address.email),
            ("address", &self.address.address),
            ("city", &self.address.city),
            ("state", &self.address.state),
            ("zip_code", &self.address.zip_code),
        ];
        require_filled(&required)
    }

    fn validate_payment(&self) -> Result<(), CheckoutError> {
        if self.payment_method != PaymentMethod::CreditCard {
            return Ok(());
        }
        let required: [(&'static str, &str); 4] = [
            ("card_name", &self.card.card_name),
            ("card_number", &self.card.card_number),
            ("expiry_date", &self.card.expiry_date),
            ("cvv", &self.card.cvv),
        ];
        require_filled(&required)
    }
}

fn require_filled(fields: &[(&'static str, &str)]) -> Result<(), CheckoutError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckoutError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::persist::MemoryStore;
    use velvet_fig_core::ProductId;

    fn filled_address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            address: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            zip_code: "E1 6AN".to_string(),
            country: "United Kingdom".to_string(),
        }
    }

    fn filled_card() -> CardDetails {
        CardDetails {
            card_name: "Ada Lovelace".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/30".to_string(),
            cvv: "123".to_string(),
            save_payment: false,
        }
    }

    fn store_with_cart() -> Store {
        let mut store = Store::new(
            Catalog::with_sample_products(),
            Box::new(MemoryStore::new()),
        );
        let jacket = store
            .catalog()
            .get(ProductId::new(1))
            .expect("sample product")
            .clone();
        store.add_to_cart(&jacket, 1, None, None);
        store
    }

    #[test]
    fn test_shipping_free_strictly_over_threshold() {
        let at_threshold = OrderTotals::from_subtotal(Price::from_cents(5000));
        assert_eq!(at_threshold.shipping, Price::from_cents(699));

        let over_threshold = OrderTotals::from_subtotal(Price::from_cents(5001));
        assert_eq!(over_threshold.shipping, Price::ZERO);
    }

    #[test]
    fn test_totals_composition() {
        // subtotal 100.00 -> free shipping, tax 7.00, total 107.00
        let totals = OrderTotals::from_subtotal(Price::from_cents(10000));
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.tax, Price::from_cents(700));
        assert_eq!(totals.total, Price::from_cents(10700));
    }

    #[test]
    fn test_small_order_pays_surcharge() {
        // subtotal 10.00 -> shipping 6.99, tax 0.70, total 17.69
        let totals = OrderTotals::from_subtotal(Price::from_cents(1000));
        assert_eq!(totals.shipping, Price::from_cents(699));
        assert_eq!(totals.tax, Price::from_cents(70));
        assert_eq!(totals.total, Price::from_cents(1769));
    }

    #[test]
    fn test_zero_subtotal() {
        let totals = OrderTotals::from_subtotal(Price::ZERO);
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping, Price::from_cents(699));
        assert_eq!(totals.tax, Price::ZERO);
    }

    #[test]
    fn test_address_step_requires_fields() {
        let mut checkout = Checkout::new();
        let err = checkout.next_step().expect_err("blank address");
        match err {
            CheckoutError::MissingFields(fields) => {
                assert!(fields.contains(&"first_name"));
                assert!(fields.contains(&"zip_code"));
                // phone is never required
                assert!(!fields.contains(&"phone"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(checkout.step(), CheckoutStep::Address);
    }

    #[test]
    fn test_address_step_advances_when_filled() {
        let mut checkout = Checkout::new();
        checkout.address = filled_address();
        assert_eq!(checkout.next_step().expect("advance"), CheckoutStep::Payment);
    }

    #[test]
    fn test_credit_card_requires_card_fields() {
        let mut checkout = Checkout::new();
        checkout.address = filled_address();
        checkout.next_step().expect("to payment");

        let err = checkout.next_step().expect_err("blank card");
        assert!(matches!(err, CheckoutError::MissingFields(_)));
        assert_eq!(checkout.step(), CheckoutStep::Payment);

        checkout.card = filled_card();
        assert_eq!(
            checkout.next_step().expect("advance"),
            CheckoutStep::Confirmation
        );
    }

    #[test]
    fn test_alternate_payment_methods_bypass_validation() {
        for method in [PaymentMethod::PayPal, PaymentMethod::Upi] {
            let mut checkout = Checkout::new();
            checkout.address = filled_address();
            checkout.next_step().expect("to payment");
            checkout.payment_method = method;
            assert_eq!(
                checkout.next_step().expect("advance without card fields"),
                CheckoutStep::Confirmation
            );
        }
    }

    #[test]
    fn test_backward_is_unconditional_and_saturates() {
        let mut checkout = Checkout::new();
        checkout.previous_step();
        assert_eq!(checkout.step(), CheckoutStep::Address);

        checkout.address = filled_address();
        checkout.next_step().expect("to payment");
        checkout.previous_step();
        assert_eq!(checkout.step(), CheckoutStep::Address);
    }

    #[test]
    fn test_next_at_confirmation_is_noop() {
        let mut checkout = Checkout::new();
        checkout.address = filled_address();
        checkout.payment_method = PaymentMethod::PayPal;
        checkout.next_step().expect("to payment");
        checkout.next_step().expect("to confirmation");
        assert_eq!(
            checkout.next_step().expect("noop"),
            CheckoutStep::Confirmation
        );
    }

    #[test]
    fn test_place_order_requires_confirmation_step() {
        let mut store = store_with_cart();
        let checkout = Checkout::new();
        assert_eq!(
            checkout.place_order(&mut store).expect_err("too early"),
            CheckoutError::NotAtConfirmation
        );
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_place_order_clears_cart_and_returns_receipt() {
        let mut store = store_with_cart();
        let mut checkout = Checkout::new();
        checkout.address = filled_address();
        checkout.card = filled_card();
        checkout.next_step().expect("to payment");
        checkout.next_step().expect("to confirmation");

        let receipt = checkout.place_order(&mut store).expect("order placed");
        assert!(store.cart().is_empty());
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.totals.subtotal, Price::from_cents(8999));
        // 89.99 subtotal -> free shipping, 6.2993 tax
        assert_eq!(receipt.totals.shipping, Price::ZERO);
        assert_eq!(receipt.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_place_order_empty_cart_rejected() {
        let mut store = Store::new(
            Catalog::with_sample_products(),
            Box::new(MemoryStore::new()),
        );
        let mut checkout = Checkout::new();
        checkout.address = filled_address();
        checkout.payment_method = PaymentMethod::Upi;
        checkout.next_step().expect("to payment");
        checkout.next_step().expect("to confirmation");

        assert_eq!(
            checkout.place_order(&mut store).expect_err("empty cart"),
            CheckoutError::EmptyCart
        );
    }
}
