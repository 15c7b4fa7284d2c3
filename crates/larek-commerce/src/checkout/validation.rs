//! Input validation for checkout forms.
//!
//! Every field is checked on every change: an empty value is reported as
//! missing, a value of the wrong shape as malformed. Validation never fails
//! hard; it only fills one error slot per field.

/// A text input on one of the checkout steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Message shown when the field is empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Address => "Необходимо указать адрес",
            Field::Email => "Необходимо указать email",
            Field::Phone => "Необходимо указать телефон",
        }
    }

    /// Message shown when the value has the wrong shape.
    pub fn mismatch_message(&self) -> &'static str {
        match self {
            Field::Address => "Некорректный адрес",
            Field::Email => "Некорректный email, пример: name@example.com",
            Field::Phone => "Некорректный телефон, пример: +7 900 123-45-67",
        }
    }

    /// Validate a raw input value for this field.
    pub fn validate(&self, raw: &str) -> Validity {
        let value = raw.trim();
        if value.is_empty() {
            return Validity::Missing;
        }

        let well_formed = match self {
            Field::Address => true,
            Field::Email => is_valid_email(value),
            Field::Phone => is_valid_phone(value),
        };

        if well_formed {
            Validity::Valid
        } else {
            Validity::Malformed
        }
    }
}

/// Result of validating one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Missing,
    Malformed,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        *self == Validity::Valid
    }
}

/// Current value and validation state of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    field: Field,
    value: String,
    validity: Validity,
    touched: bool,
}

impl FieldState {
    /// An untouched, empty input.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            validity: Validity::Missing,
            touched: false,
        }
    }

    /// Replace the value and revalidate.
    pub fn set(&mut self, value: impl Into<String>) -> Validity {
        self.value = value.into();
        self.validity = self.field.validate(&self.value);
        self.touched = true;
        self.validity
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// The value with surrounding whitespace removed.
    pub fn value(&self) -> &str {
        self.value.trim()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Inline error message; empty until the user has typed something.
    pub fn error(&self) -> Option<&'static str> {
        if !self.touched {
            return None;
        }
        match self.validity {
            Validity::Valid => None,
            Validity::Missing => Some(self.field.required_message()),
            Validity::Malformed => Some(self.field.mismatch_message()),
        }
    }

    /// Back to the untouched, empty state.
    pub fn reset(&mut self) {
        *self = Self::new(self.field);
    }
}

/// Check an email address the way an `<input type="email">` does.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}

/// Check a phone number: an optional leading `+`, then 10 to 15 digits
/// optionally separated by spaces, dashes or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits_part = phone.strip_prefix('+').unwrap_or(phone);
    if !digits_part
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return false;
    }

    let digits = digits_part.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(Field::Email.validate(""), Validity::Missing);
        assert_eq!(Field::Phone.validate("   "), Validity::Missing);
        assert_eq!(Field::Address.validate("\t"), Validity::Missing);
    }

    #[test]
    fn test_address_only_requires_content() {
        assert_eq!(
            Field::Address.validate("Москва, ул. Ленина, 1"),
            Validity::Valid
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.ru"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example..com"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+79001234567"));
        assert!(is_valid_phone("+7 (900) 123-45-67"));
        assert!(is_valid_phone("89001234567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+7 900 abc 45 67"));
        assert!(!is_valid_phone("++79001234567"));
    }

    #[test]
    fn test_field_state_error_slot() {
        let mut email = FieldState::new(Field::Email);
        assert_eq!(email.error(), None);
        assert!(!email.is_valid());

        email.set("");
        assert_eq!(email.error(), Some("Необходимо указать email"));

        email.set("not-an-email");
        assert_eq!(email.error(), Some(Field::Email.mismatch_message()));

        email.set("  buyer@example.com ");
        assert_eq!(email.error(), None);
        assert_eq!(email.value(), "buyer@example.com");
    }

    #[test]
    fn test_field_state_reset() {
        let mut phone = FieldState::new(Field::Phone);
        phone.set("+79001234567");
        phone.reset();

        assert_eq!(phone, FieldState::new(Field::Phone));
    }
}
