//! Checkout module.
//!
//! Contains the step state machine, step forms, input validation and the
//! order payload.

mod flow;
mod forms;
mod order;
pub mod validation;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use forms::{ContactsForm, PaymentForm};
pub use order::{OrderConfirmation, OrderDraft, PaymentMethod};
pub use validation::{Field, FieldState, Validity};
