//! Checkout step dialogs.
//!
//! [`CheckoutDialogs`] mirrors [`CheckoutFlow`]: after every transition it
//! opens the dialog for the current step and closes the rest. Dismissing
//! clicks go through [`CheckoutFlow::close`], so a dialog never closes while
//! the flow still considers it open.

use crate::basket::Basket;
use crate::checkout::{CheckoutFlow, PaymentMethod};
use crate::view::{BasketListView, ClickTarget, Modal, SuccessView};
use crate::CommerceError;

/// Payment method and delivery address dialog.
#[derive(Debug, Clone)]
pub struct PaymentView {
    modal: Modal,
}

impl PaymentView {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("payment"),
        }
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The highlighted payment button, if any.
    pub fn selected(&self, flow: &CheckoutFlow) -> Option<PaymentMethod> {
        flow.payment().method()
    }

    pub fn address_error(&self, flow: &CheckoutFlow) -> Option<&'static str> {
        flow.payment().address().error()
    }

    pub fn next_enabled(&self, flow: &CheckoutFlow) -> bool {
        flow.payment().can_continue()
    }
}

impl Default for PaymentView {
    fn default() -> Self {
        Self::new()
    }
}

/// Email and phone dialog.
#[derive(Debug, Clone)]
pub struct ContactsView {
    modal: Modal,
}

impl ContactsView {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("contacts"),
        }
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn email_error(&self, flow: &CheckoutFlow) -> Option<&'static str> {
        flow.contacts().email().error()
    }

    pub fn phone_error(&self, flow: &CheckoutFlow) -> Option<&'static str> {
        flow.contacts().phone().error()
    }

    /// Disabled while an order is in flight.
    pub fn pay_enabled(&self, flow: &CheckoutFlow) -> bool {
        flow.contacts().can_submit() && !flow.is_submitting()
    }

    /// Why the last attempt failed, shown until the next one.
    pub fn failure<'a>(&self, flow: &'a CheckoutFlow) -> Option<&'a str> {
        flow.last_failure()
    }
}

impl Default for ContactsView {
    fn default() -> Self {
        Self::new()
    }
}

/// The four checkout dialogs, driven by one [`CheckoutFlow`].
#[derive(Debug, Clone)]
pub struct CheckoutDialogs {
    basket: BasketListView,
    payment: PaymentView,
    contacts: ContactsView,
    success: SuccessView,
}

impl CheckoutDialogs {
    pub fn new(basket: &Basket) -> Self {
        Self {
            basket: BasketListView::new(basket),
            payment: PaymentView::new(),
            contacts: ContactsView::new(),
            success: SuccessView::new(),
        }
    }

    pub fn basket(&self) -> &BasketListView {
        &self.basket
    }

    pub fn payment(&self) -> &PaymentView {
        &self.payment
    }

    pub fn contacts(&self) -> &ContactsView {
        &self.contacts
    }

    pub fn success(&self) -> &SuccessView {
        &self.success
    }

    /// Open the dialog for the flow's current step and close the others.
    pub fn sync(&mut self, flow: &CheckoutFlow) {
        let active = flow.step().dialog();
        if active == Some("success") {
            self.success.show(flow.charged().unwrap_or_default());
        }
        for modal in self.modals_mut() {
            match (Some(modal.name()) == active, modal.is_open()) {
                (true, false) => modal.open(),
                (false, true) => modal.close(),
                _ => {}
            }
        }
    }

    /// The dialog on screen, if any.
    pub fn active(&self) -> Option<&Modal> {
        [
            self.basket.modal(),
            self.payment.modal(),
            self.contacts.modal(),
            self.success.modal(),
        ]
        .into_iter()
        .find(|modal| modal.is_open())
    }

    /// Route a click on the open dialog through the flow.
    ///
    /// Returns whether a dialog closed. Fails, leaving the dialog open, when
    /// the flow refuses to close (an order is in flight).
    pub fn handle_click(
        &mut self,
        flow: &mut CheckoutFlow,
        target: ClickTarget,
    ) -> Result<bool, CommerceError> {
        if !self.active().is_some_and(|modal| modal.dismisses(target)) {
            return Ok(false);
        }
        flow.close()?;
        self.sync(flow);
        Ok(true)
    }

    fn modals_mut(&mut self) -> [&mut Modal; 4] {
        [
            self.basket.modal_mut(),
            &mut self.payment.modal,
            &mut self.contacts.modal,
            self.success.modal_mut(),
        ]
    }
}
