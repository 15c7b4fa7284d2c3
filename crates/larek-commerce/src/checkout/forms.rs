//! Step forms: payment/address and contacts.

use crate::checkout::validation::{Field, FieldState};
use crate::checkout::PaymentMethod;

/// Payment method and delivery address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    method: Option<PaymentMethod>,
    address: FieldState,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self {
            method: None,
            address: FieldState::new(Field::Address),
        }
    }

    /// Select a payment method. Selecting the current one is a no-op.
    ///
    /// Returns whether the selection changed.
    pub fn select_method(&mut self, method: PaymentMethod) -> bool {
        if self.method == Some(method) {
            return false;
        }
        self.method = Some(method);
        true
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address.set(value);
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn address(&self) -> &FieldState {
        &self.address
    }

    /// Whether the "next" control is enabled.
    pub fn can_continue(&self) -> bool {
        self.method.is_some() && self.address.is_valid()
    }

    /// What still blocks the step.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.method.is_none() {
            missing.push("payment method");
        }
        if !self.address.is_valid() {
            missing.push(Field::Address.as_str());
        }
        missing
    }

    pub fn reset(&mut self) {
        self.method = None;
        self.address.reset();
    }
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Customer email and phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsForm {
    email: FieldState,
    phone: FieldState,
}

impl ContactsForm {
    pub fn new() -> Self {
        Self {
            email: FieldState::new(Field::Email),
            phone: FieldState::new(Field::Phone),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set(value);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone.set(value);
    }

    pub fn email(&self) -> &FieldState {
        &self.email
    }

    pub fn phone(&self) -> &FieldState {
        &self.phone
    }

    /// Whether the "pay" control is enabled.
    pub fn can_submit(&self) -> bool {
        self.email.is_valid() && self.phone.is_valid()
    }

    pub fn missing(&self) -> Vec<&'static str> {
        [&self.email, &self.phone]
            .into_iter()
            .filter(|f| !f.is_valid())
            .map(|f| f.field().as_str())
            .collect()
    }

    pub fn reset(&mut self) {
        self.email.reset();
        self.phone.reset();
    }
}

impl Default for ContactsForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_form_needs_method_and_address() {
        let mut form = PaymentForm::new();
        assert!(!form.can_continue());
        assert_eq!(form.missing(), vec!["payment method", "address"]);

        form.set_address("Kazan, Baumana 5");
        assert!(!form.can_continue());

        assert!(form.select_method(PaymentMethod::Online));
        assert!(form.can_continue());

        form.set_address("  ");
        assert!(!form.can_continue());
        assert_eq!(form.address().error(), Some(Field::Address.required_message()));
    }

    #[test]
    fn test_reselecting_method_is_noop() {
        let mut form = PaymentForm::new();
        assert!(form.select_method(PaymentMethod::OnDelivery));
        assert!(!form.select_method(PaymentMethod::OnDelivery));
        assert!(form.select_method(PaymentMethod::Online));
        assert_eq!(form.method(), Some(PaymentMethod::Online));
    }

    #[test]
    fn test_contacts_form_requires_both_fields() {
        let mut form = ContactsForm::new();
        form.set_email("buyer@example.com");
        assert!(!form.can_submit());
        assert_eq!(form.missing(), vec!["phone"]);

        form.set_phone("12");
        assert!(!form.can_submit());
        assert_eq!(form.phone().error(), Some(Field::Phone.mismatch_message()));

        form.set_phone("+7 900 123 45 67");
        assert!(form.can_submit());
        assert!(form.missing().is_empty());
    }

    #[test]
    fn test_reset_clears_values() {
        let mut form = ContactsForm::new();
        form.set_email("buyer@example.com");
        form.set_phone("+79001234567");
        form.reset();

        assert_eq!(form, ContactsForm::new());
    }
}
