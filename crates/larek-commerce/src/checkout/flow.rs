//! Checkout flow state machine.

use crate::basket::Basket;
use crate::checkout::{ContactsForm, OrderConfirmation, OrderDraft, PaymentForm, PaymentMethod};
use crate::price::Price;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Steps in the checkout flow, in strict order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// No checkout dialog open.
    #[default]
    Browsing,
    /// Basket dialog open.
    BasketOpen,
    /// Payment method and address dialog open.
    PaymentOpen,
    /// Email and phone dialog open.
    ContactsOpen,
    /// Order sent, waiting for the server.
    Submitting,
    /// Order accepted; success dialog open.
    Success,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "browsing",
            CheckoutStep::BasketOpen => "basket",
            CheckoutStep::PaymentOpen => "payment",
            CheckoutStep::ContactsOpen => "contacts",
            CheckoutStep::Submitting => "submitting",
            CheckoutStep::Success => "success",
        }
    }

    /// Name of the dialog on screen at this step. The contacts dialog stays
    /// up while the order is in flight.
    pub fn dialog(&self) -> Option<&'static str> {
        match self {
            CheckoutStep::Browsing => None,
            CheckoutStep::BasketOpen => Some("basket"),
            CheckoutStep::PaymentOpen => Some("payment"),
            CheckoutStep::ContactsOpen | CheckoutStep::Submitting => Some("contacts"),
            CheckoutStep::Success => Some("success"),
        }
    }
}

/// Checkout flow state.
///
/// Form values survive closing a dialog; they are only reset after an order
/// is accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    payment: PaymentForm,
    contacts: ContactsForm,
    /// Amount charged for the last accepted order.
    charged: Option<Price>,
    /// Reason the last submission failed, until the next attempt.
    last_failure: Option<String>,
}

impl CheckoutFlow {
    /// Create a flow in the browsing state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn payment(&self) -> &PaymentForm {
        &self.payment
    }

    pub fn contacts(&self) -> &ContactsForm {
        &self.contacts
    }

    /// Amount shown on the success dialog.
    pub fn charged(&self) -> Option<Price> {
        self.charged
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.step == CheckoutStep::Submitting
    }

    /// Whether the basket dialog's "place order" control is enabled.
    pub fn can_place_order(basket: &Basket) -> bool {
        !basket.is_empty()
    }

    /// Open the basket dialog.
    pub fn open_basket(&mut self) -> Result<(), CommerceError> {
        self.expect_step(
            &[CheckoutStep::Browsing, CheckoutStep::BasketOpen],
            CheckoutStep::BasketOpen,
        )?;
        self.move_to(CheckoutStep::BasketOpen);
        Ok(())
    }

    /// Leave the basket for the payment step.
    pub fn place_order(&mut self, basket: &Basket) -> Result<(), CommerceError> {
        self.expect_step(&[CheckoutStep::BasketOpen], CheckoutStep::PaymentOpen)?;
        if !Self::can_place_order(basket) {
            return Err(CommerceError::CheckoutIncomplete("basket items".to_string()));
        }
        self.move_to(CheckoutStep::PaymentOpen);
        Ok(())
    }

    /// Select a payment method on the payment step.
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<bool, CommerceError> {
        self.expect_editing(CheckoutStep::PaymentOpen)?;
        Ok(self.payment.select_method(method))
    }

    /// Update the address on the payment step.
    pub fn enter_address(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.expect_editing(CheckoutStep::PaymentOpen)?;
        self.payment.set_address(value);
        Ok(())
    }

    /// Leave the payment step for the contacts step.
    pub fn continue_to_contacts(&mut self) -> Result<(), CommerceError> {
        self.expect_step(&[CheckoutStep::PaymentOpen], CheckoutStep::ContactsOpen)?;
        if !self.payment.can_continue() {
            return Err(CommerceError::CheckoutIncomplete(
                self.payment.missing().join(", "),
            ));
        }
        self.move_to(CheckoutStep::ContactsOpen);
        Ok(())
    }

    /// Update the email on the contacts step.
    pub fn enter_email(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.expect_editing(CheckoutStep::ContactsOpen)?;
        self.contacts.set_email(value);
        Ok(())
    }

    /// Update the phone on the contacts step.
    pub fn enter_phone(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.expect_editing(CheckoutStep::ContactsOpen)?;
        self.contacts.set_phone(value);
        Ok(())
    }

    /// Start submitting: check every input, assemble the payload and enter
    /// the submitting state.
    ///
    /// Refuses while a previous submission is still in flight.
    pub fn begin_submit(&mut self, basket: &Basket) -> Result<OrderDraft, CommerceError> {
        if self.is_submitting() {
            return Err(CommerceError::SubmissionInFlight);
        }
        self.expect_step(&[CheckoutStep::ContactsOpen], CheckoutStep::Submitting)?;

        let mut missing = Vec::new();
        if basket.is_empty() {
            missing.push("basket items");
        }
        missing.extend(self.payment.missing());
        missing.extend(self.contacts.missing());
        let Some(method) = self.payment.method().filter(|_| missing.is_empty()) else {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        };

        let draft = OrderDraft::assemble(
            basket,
            method,
            self.payment.address().value(),
            self.contacts.email().value(),
            self.contacts.phone().value(),
        );

        self.last_failure = None;
        self.move_to(CheckoutStep::Submitting);
        Ok(draft)
    }

    /// The server accepted the order: clear the basket, reset the forms and
    /// show the success dialog.
    pub fn complete_submit(
        &mut self,
        basket: &mut Basket,
        confirmation: &OrderConfirmation,
    ) -> Result<(), CommerceError> {
        self.expect_step(&[CheckoutStep::Submitting], CheckoutStep::Success)?;

        let charged = basket.total();
        if let Some(server_total) = confirmation.total.filter(|t| *t != charged) {
            warn!(%server_total, %charged, "order total differs from basket total");
        }
        info!(order_id = ?confirmation.id, %charged, "order accepted");

        self.charged = Some(charged);
        basket.clear();
        self.payment.reset();
        self.contacts.reset();
        self.move_to(CheckoutStep::Success);
        Ok(())
    }

    /// The submission failed: stay on the contacts step with every input
    /// intact so the customer can retry.
    pub fn fail_submit(&mut self, reason: impl Into<String>) -> Result<(), CommerceError> {
        self.expect_step(&[CheckoutStep::Submitting], CheckoutStep::ContactsOpen)?;
        self.last_failure = Some(reason.into());
        self.move_to(CheckoutStep::ContactsOpen);
        Ok(())
    }

    /// Dismiss the success dialog and go back to the catalog.
    pub fn dismiss_success(&mut self) -> Result<(), CommerceError> {
        self.expect_step(&[CheckoutStep::Success], CheckoutStep::Browsing)?;
        self.charged = None;
        self.move_to(CheckoutStep::Browsing);
        Ok(())
    }

    /// Close whatever dialog is open without clearing form values.
    pub fn close(&mut self) -> Result<(), CommerceError> {
        match self.step {
            CheckoutStep::Browsing => Ok(()),
            CheckoutStep::Submitting => Err(self.invalid(CheckoutStep::Browsing)),
            CheckoutStep::Success => self.dismiss_success(),
            CheckoutStep::BasketOpen | CheckoutStep::PaymentOpen | CheckoutStep::ContactsOpen => {
                self.move_to(CheckoutStep::Browsing);
                Ok(())
            }
        }
    }

    fn expect_step(&self, allowed: &[CheckoutStep], to: CheckoutStep) -> Result<(), CommerceError> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(self.invalid(to))
        }
    }

    fn expect_editing(&self, step: CheckoutStep) -> Result<(), CommerceError> {
        self.expect_step(&[step], step)
    }

    fn invalid(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }

    fn move_to(&mut self, step: CheckoutStep) {
        debug!(from = self.step.as_str(), to = step.as_str(), "checkout step");
        self.step = step;
    }
}
